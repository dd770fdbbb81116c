// src/export/model.rs

use crate::core::report::{DayRow, Report};
use crate::utils::date::format_date;
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Flat, serializable day row (JSON output).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub day: usize,
    pub date: String,
    pub no_record: bool,
    pub walk_duration: String,
    pub walk_distance: f64,
    pub bicycle_duration: String,
    pub bicycle_distance: f64,
    pub active_duration: String,
    pub active_distance: f64,
    pub drive_duration: String,
    pub drive_distance: f64,
    pub passenger_duration: String,
    pub passenger_distance: f64,
    pub passive_duration: String,
    pub passive_distance: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    pub activity_days: usize,
    pub days: Vec<DayExport>,
}

impl From<&DayRow> for DayExport {
    fn from(d: &DayRow) -> Self {
        Self {
            day: d.day,
            date: format_date(d.date),
            no_record: d.no_record,
            walk_duration: format_minutes(d.walk.minutes),
            walk_distance: d.walk.distance,
            bicycle_duration: format_minutes(d.bicycle.minutes),
            bicycle_distance: d.bicycle.distance,
            active_duration: format_minutes(d.active.minutes),
            active_distance: d.active.distance,
            drive_duration: format_minutes(d.drive.minutes),
            drive_distance: d.drive.distance,
            passenger_duration: format_minutes(d.passenger.minutes),
            passenger_distance: d.passenger.distance,
            passive_duration: format_minutes(d.passive.minutes),
            passive_distance: d.passive.distance,
        }
    }
}

impl From<&Report> for ReportExport {
    fn from(r: &Report) -> Self {
        Self {
            activity_days: r.activity_days,
            days: r.days.iter().map(DayExport::from).collect(),
        }
    }
}

/// Convert a day into a row of strings (CSV / terminal table).
pub(crate) fn day_to_row(d: &DayRow) -> Vec<String> {
    d.cells().iter().map(|c| c.to_text()).collect()
}
