use chrono::NaiveDate;

/// Output date format (`dd.mm.yyyy`).
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

pub fn format_date(d: NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

