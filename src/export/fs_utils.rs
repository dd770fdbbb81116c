// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that the report target may be written, asking on stdin before an
/// existing file is replaced.
pub fn check_report_target(path: &Path, format: ExportFormat, force: bool) -> AppResult<()> {
    let stdin = io::stdin();
    check_report_target_with(path, format, force, &mut stdin.lock())
}

/// Same as [`check_report_target`], reading the answer from `answers`.
pub fn check_report_target_with<R: BufRead>(
    path: &Path,
    format: ExportFormat,
    force: bool,
    answers: &mut R,
) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "report target is a directory: {}",
            path.display()
        )));
    }

    if force || !path.exists() {
        return Ok(());
    }

    print!(
        "{} report '{}' already exists. Overwrite? [y/N]: ",
        format.as_str().to_uppercase(),
        path.display()
    );
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Replacing {}", path.display()));
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "Export cancelled: {} left unchanged",
            path.display()
        ))),
    }
}
