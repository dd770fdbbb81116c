pub mod aggregate;
pub mod calendar;
pub mod ledger;
pub mod logic;
pub mod parser;
pub mod report;
