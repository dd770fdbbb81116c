// src/export/xlsx.rs

use crate::core::report::{
    ACTIVITY_DAYS_LABEL, COLUMN_WIDTHS, HEADERS, Report, ReportCell,
};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::excel_date::date_to_excel_serial;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

/// Row of the first day; rows 0-2 hold preamble, blank line and header.
const FIRST_DATA_ROW: u32 = 3;

/// Export XLSX: preamble, blank row, header, one row per day.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Preamble
    // ---------------------------
    worksheet.write(0, 0, ACTIVITY_DAYS_LABEL)?;
    worksheet.write(0, 1, report.activity_days as f64)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(2, col as u16, *header, &header_format)?;
    }

    // ---------------------------
    // Day rows
    // ---------------------------
    let right = Format::new().set_align(FormatAlign::Right);
    let date_fmt = Format::new()
        .set_num_format("dd.mm.yyyy")
        .set_align(FormatAlign::Right);

    for (i, day) in report.days.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;

        for (col, cell) in day.cells().iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, &right, &date_fmt)?;
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ReportCell,
    right: &Format,
    date_fmt: &Format,
) -> AppResult<()> {
    match cell {
        ReportCell::Integer(n) => {
            worksheet.write_with_format(row, col, *n as f64, right)?;
        }
        ReportCell::Decimal(f) => {
            worksheet.write_with_format(row, col, *f, right)?;
        }
        ReportCell::Date(d) => {
            worksheet.write_with_format(row, col, date_to_excel_serial(*d), date_fmt)?;
        }
        ReportCell::Text(s) if s.is_empty() => {
            worksheet.write_blank(row, col, right)?;
        }
        ReportCell::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), right)?;
        }
    }
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
