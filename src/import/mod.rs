//! Spreadsheet input: decode worksheet rows into loosely typed cells.

mod cell;
mod xlsx;

pub use cell::{Cell, RawRow};
pub use xlsx::read_rows;
