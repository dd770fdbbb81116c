//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input file missing")]
    MissingInput,

    // ---------------------------
    // Spreadsheet input
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Invalid date in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No activity rows found in input")]
    EmptyLedger,

    #[error("Calendar range error: last date {last} precedes first date {first}")]
    InvalidRange { first: String, last: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Spreadsheet(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
