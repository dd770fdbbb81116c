use crate::utils::excel_date::{naive_datetime_to_excel_serial, serial_to_datetime};
use crate::utils::time::parse_iso_duration_seconds;
use calamine::Data;
use chrono::NaiveDateTime;

/// A loosely typed input cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial (days since 1899-12-30).
    DateTime(f64),
}

pub type RawRow = Vec<Cell>;

impl Cell {
    /// Empty, blank text, zero and `false` count as "no value".
    pub fn is_falsy(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => *n == 0.0 || n.is_nan(),
            Cell::Bool(b) => !b,
            Cell::DateTime(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// String coercion; `None` only for empty cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::DateTime(serial) => Some(
                serial_to_datetime(*serial)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| serial.to_string()),
            ),
        }
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) => iso_to_serial(s)
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Text(s.clone())),
            // ODS time cells: "PT00H15M00S"
            Data::DurationIso(s) => parse_iso_duration_seconds(s)
                .map(|secs| Cell::DateTime(secs / 86_400.0))
                .unwrap_or_else(|| Cell::Text(s.clone())),
            // #N/A, #VALUE! and friends carry no usable value
            Data::Error(_) => Cell::Empty,
        }
    }
}

fn iso_to_serial(s: &str) -> Option<f64> {
    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];
    for fmt in formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive_datetime_to_excel_serial(&dt));
        }
    }
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| naive_datetime_to_excel_serial(&dt))
}
