use crate::errors::{AppError, AppResult};
use crate::import::cell::{Cell, RawRow};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// Read every row of `sheet` (or the first worksheet) from a spreadsheet file.
///
/// Rows and columns keep their absolute positions: leading empty rows and
/// columns that the reader trims are padded back with `Cell::Empty`.
pub fn read_rows(path: &Path, sheet: Option<&str>) -> AppResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;

    let name = match sheet {
        Some(s) => s.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::Spreadsheet("workbook has no worksheets".to_string()))?,
    };

    let range = workbook.worksheet_range(&name)?;
    Ok(range_to_rows(&range))
}

fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let (first_row, first_col) = match range.start() {
        Some(pos) => pos,
        None => return Vec::new(),
    };

    let mut rows: Vec<RawRow> = (0..first_row).map(|_| Vec::new()).collect();

    for data_row in range.rows() {
        let mut row: RawRow = (0..first_col).map(|_| Cell::Empty).collect();
        row.extend(data_row.iter().map(Cell::from));
        rows.push(row);
    }

    rows
}
