use crate::core::calendar::RangeMode;
use crate::export::ExportFormat;
use clap::Parser;

/// Command-line interface definition for travelsum
#[derive(Parser, Debug)]
#[command(
    name = "travelsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize a travel-activity spreadsheet into per-day walk/bicycle/drive/passenger totals",
    long_about = None
)]
pub struct Cli {
    /// Input spreadsheet (xlsx, xlsm, xls, xlsb, ods)
    pub input: Option<String>,

    /// Output file path (default: <input-dir>/<input-name>-result.<ext>)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// How the first and last calendar day are chosen (overrides the config file)
    ///
    /// - insertion     → first and last date as they appear in the input
    /// - chronological → earliest and latest date
    #[arg(long = "range-mode", value_enum, value_name = "MODE")]
    pub range_mode: Option<RangeMode>,

    /// Worksheet to read (default: the first one)
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Use a custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Also print the daily table on the terminal
    #[arg(long)]
    pub print: bool,

    /// Overwrite output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Only print errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
