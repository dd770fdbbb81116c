//! Typed daily report table.

use crate::core::aggregate::aggregate;
use crate::core::calendar::CalendarDay;
use crate::models::day_summary::Totals;
use crate::utils::date::format_date;
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

/// Label of the preamble row holding the number of days with records.
pub const ACTIVITY_DAYS_LABEL: &str = "Aktivitätstage";

/// Marker written for days without any record.
pub const NO_RECORD_MARKER: &str = "X";

pub const HEADERS: [&str; 15] = [
    "Tag",
    "Datum",
    "Ohne Aufzeichnung",
    "Gehen_Dauer",
    "Gehen_Distanz",
    "Radfahren_Dauer",
    "Radfahren_Distanz",
    "Summe_Dauer_AT",
    "Summe_Distanz_ AT",
    "Fahren_Dauer",
    "Fahren_Distanz",
    "Mitfahren_Dauer",
    "Mitfahren_Distanz",
    "Summe_Dauer_PT",
    "Summe_Distanz_ PT",
];

/// Column widths of the spreadsheet output.
pub const COLUMN_WIDTHS: [f64; 15] = [
    12.0, 12.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0,
];

/// A single typed output value.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
    Decimal(f64),
}

impl ReportCell {
    pub fn to_text(&self) -> String {
        match self {
            ReportCell::Integer(n) => n.to_string(),
            ReportCell::Date(d) => format_date(*d),
            ReportCell::Text(s) => s.clone(),
            ReportCell::Decimal(f) => f.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: usize,
    pub date: NaiveDate,
    pub no_record: bool,
    pub walk: Totals,
    pub bicycle: Totals,
    pub active: Totals,
    pub drive: Totals,
    pub passenger: Totals,
    pub passive: Totals,
    pub unclassified: usize,
}

impl DayRow {
    pub fn from_day(day: &CalendarDay<'_>) -> Self {
        let agg = aggregate(day.group);

        Self {
            day: day.index,
            date: day.date,
            no_record: !agg.has_activity,
            walk: agg.walk,
            bicycle: agg.bicycle,
            active: agg.active(),
            drive: agg.drive,
            passenger: agg.passenger,
            passive: agg.passive(),
            unclassified: agg.unclassified,
        }
    }

    /// The 15 cells in column order.
    pub fn cells(&self) -> Vec<ReportCell> {
        let mut cells = vec![
            ReportCell::Integer(self.day as i64),
            ReportCell::Date(self.date),
            ReportCell::Text(if self.no_record {
                NO_RECORD_MARKER.to_string()
            } else {
                String::new()
            }),
        ];

        for t in [
            self.walk,
            self.bicycle,
            self.active,
            self.drive,
            self.passenger,
            self.passive,
        ] {
            cells.push(ReportCell::Text(format_minutes(t.minutes)));
            cells.push(ReportCell::Decimal(t.distance));
        }

        cells
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Days that had at least one record.
    pub activity_days: usize,
    pub days: Vec<DayRow>,
}

impl Report {
    pub fn build<'a>(walk: impl IntoIterator<Item = CalendarDay<'a>>) -> Self {
        let days: Vec<DayRow> = walk.into_iter().map(|d| DayRow::from_day(&d)).collect();
        let activity_days = days.iter().filter(|d| !d.no_record).count();

        Self {
            activity_days,
            days,
        }
    }

    pub fn unclassified(&self) -> usize {
        self.days.iter().map(|d| d.unclassified).sum()
    }
}
