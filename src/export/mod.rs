// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use fs_utils::{check_report_target, check_report_target_with};
pub use model::{DayExport, ReportExport};

use crate::core::report::Report;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared "export completed" message for all writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Extension of the derived output file. Xlsx keeps an OOXML input
    /// extension (`xlsx`/`xlsm`), everything else uses its own.
    pub fn output_extension(&self, input: &Path) -> String {
        if *self == ExportFormat::Xlsx
            && let Some(ext) = input.extension().map(|e| e.to_string_lossy().to_string())
            && matches!(ext.to_lowercase().as_str(), "xlsx" | "xlsm")
        {
            return ext;
        }
        self.as_str().to_string()
    }
}

/// Write `report` to `path` in the requested format.
pub fn write_report(report: &Report, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(report, path),
        ExportFormat::Csv => json_csv::export_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
    }
}
