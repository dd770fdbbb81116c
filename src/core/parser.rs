//! Row → Activity decoding.

use crate::config::Columns;
use crate::errors::{AppError, AppResult};
use crate::import::Cell;
use crate::models::activity::Activity;
use crate::utils::excel_date::{parse_datetime_text, serial_to_date, serial_to_minutes};
use crate::utils::time::parse_clock_minutes;
use chrono::NaiveDate;

static EMPTY: Cell = Cell::Empty;

/// A data row decoded into its calendar date and activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub date: NaiveDate,
    pub activity: Activity,
    /// `false` when the duration cell could not be decoded and 0 was used.
    pub duration_decoded: bool,
}

/// Decode one data row. `row_no` is 1-based and only used in error messages.
///
/// Returns `Ok(None)` when the date cell is empty or falsy.
pub fn parse_row(row: &[Cell], row_no: usize, cols: &Columns) -> AppResult<Option<ParsedRow>> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY);

    let Some(date) = parse_date(cell(cols.date), row_no)? else {
        return Ok(None);
    };

    let duration = parse_duration(cell(cols.duration));

    let activity = Activity {
        mode: parse_mode(cell(cols.mode)),
        duration: duration.unwrap_or(0),
        distance: parse_distance(cell(cols.distance)),
    };

    Ok(Some(ParsedRow {
        date,
        activity,
        duration_decoded: duration.is_some(),
    }))
}

/// Calendar date of a date cell, time of day stripped.
pub fn parse_date(cell: &Cell, row_no: usize) -> AppResult<Option<NaiveDate>> {
    if cell.is_falsy() {
        return Ok(None);
    }

    let decoded = match cell {
        Cell::DateTime(serial) | Cell::Number(serial) => serial_to_date(*serial),
        Cell::Text(s) => parse_datetime_text(s).map(|dt| dt.date()),
        _ => None,
    };

    decoded.map(Some).ok_or_else(|| AppError::InvalidDate {
        row: row_no,
        value: cell.as_text().unwrap_or_default(),
    })
}

pub fn parse_mode(cell: &Cell) -> Option<String> {
    cell.as_text()
}

/// Whole minutes between the instant stored in the cell and 1899-12-30.
///
/// Spreadsheets store time-of-day values as fractional days from that epoch,
/// so a cell showing `0:15` holds the serial `15 / 1440`.
pub fn parse_duration(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::DateTime(serial) | Cell::Number(serial) => serial_to_minutes(*serial),
        Cell::Text(s) => parse_clock_minutes(s),
        _ => None,
    }
}

/// Decimal distance; `,` is accepted as decimal separator. Empty or
/// unparsable cells yield 0.
pub fn parse_distance(cell: &Cell) -> f64 {
    if let Cell::Number(n) = cell {
        return *n;
    }

    cell.as_text()
        .map(|s| s.replacen(',', ".", 1))
        .and_then(|s| {
            let t = s.trim();
            if t.is_empty() {
                Some(0.0)
            } else {
                t.parse::<f64>().ok()
            }
        })
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
