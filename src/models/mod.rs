pub mod activity;
pub mod bucket;
pub mod day_group;
pub mod day_summary;
