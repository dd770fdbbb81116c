// src/export/json_csv.rs

use crate::core::report::{ACTIVITY_DAYS_LABEL, HEADERS, Report};
use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportExport, day_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ReportExport::from(report))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: preamble, blank line, header, one record per day.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file =
        File::create(path).map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(&file);

    let count = report.activity_days.to_string();

    wtr.write_record([ACTIVITY_DAYS_LABEL, count.as_str()])
        .map_err(csv_error)?;
    // a record without fields; csv would quote a single empty field
    wtr.flush()?;
    (&file).write_all(b"\n")?;
    wtr.write_record(HEADERS).map_err(csv_error)?;

    for day in &report.days {
        wtr.write_record(day_to_row(day)).map_err(csv_error)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}
