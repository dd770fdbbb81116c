//! Conversions between Excel serial numbers and chrono values.
//!
//! A serial counts days since 1899-12-30 00:00; the fractional part is the
//! time of day. Time-only cells therefore decode to instants on the epoch day.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const MS_PER_DAY: f64 = 86_400_000.0;

pub fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Serial → instant, rounded to the millisecond.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let ms = (serial * MS_PER_DAY).round();
    if ms.abs() > i64::MAX as f64 {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(ms as i64)?;
    excel_epoch().checked_add_signed(delta)
}

/// Serial → calendar date (time of day dropped).
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    serial_to_datetime(serial).map(|dt| dt.date())
}

/// Whole minutes between the instant encoded by `serial` and the epoch.
pub fn serial_to_minutes(serial: f64) -> Option<i64> {
    serial_to_datetime(serial).map(|dt| (dt - excel_epoch()).num_minutes())
}

pub fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let duration = *dt - excel_epoch();

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

pub fn date_to_excel_serial(d: NaiveDate) -> f64 {
    (d - excel_epoch().date()).num_days() as f64
}

/// Interpret a text cell as a date or date-time.
pub fn parse_datetime_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let d_formats = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

    for fmt in d_formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
