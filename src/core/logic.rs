use crate::config::Config;
use crate::core::calendar::{RangeMode, walk};
use crate::core::ledger::ingest;
use crate::core::report::{HEADERS, Report};
use crate::errors::AppResult;
use crate::export::{ExportFormat, check_report_target, write_report};
use crate::import::{RawRow, read_rows};
use crate::ui::messages::{header, info, warning};
use crate::utils::path::derive_output_path;
use crate::utils::table::{Column, Table};
use std::path::{Path, PathBuf};

/// One summarize run, as requested on the command line.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub force: bool,
    pub print: bool,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// Read the input, aggregate it day by day and write the report.
    /// Returns the path of the written file.
    pub fn run(req: &SummaryRequest, cfg: &Config) -> AppResult<PathBuf> {
        let out = Self::output_path(req, cfg);
        check_report_target(&out, req.format, req.force)?;

        info(format!("Reading activities: {}", req.input.display()));
        let rows = read_rows(&req.input, cfg.sheet.as_deref())?;

        let report = Self::summarize(&rows, cfg)?;

        if req.print {
            header("Daily summary");
            println!("{}", render_table(&report));
        }

        write_report(&report, req.format, &out)?;
        Ok(out)
    }

    /// Ingest raw rows and build the daily report.
    pub fn summarize(rows: &[RawRow], cfg: &Config) -> AppResult<Report> {
        let (ledger, stats) = ingest(rows, cfg)?;

        info(format!(
            "{} activities on {} distinct days ({} rows without date skipped)",
            stats.activities,
            ledger.len(),
            stats.rows_skipped
        ));

        if !stats.undecoded_durations.is_empty() {
            warning(format!(
                "Duration could not be decoded in rows {:?}; counted as 0:00",
                stats.undecoded_durations
            ));
        }

        let days = walk(&ledger, cfg.calendar_range)?;
        let report = Report::build(days);

        if cfg.calendar_range == RangeMode::Insertion
            && (ledger.first_date() != ledger.min_date() || ledger.last_date() != ledger.max_date())
        {
            warning("Input rows are not in date order; some days fall outside the walked range (try --range-mode chronological)");
        }

        info(format!(
            "{} calendar days walked, {} with activity",
            report.days.len(),
            report.activity_days
        ));

        let unclassified = report.unclassified();
        if unclassified > 0 {
            warning(format!(
                "{unclassified} activities with an unknown mode were left out of all sums"
            ));
        }

        Ok(report)
    }

    fn output_path(req: &SummaryRequest, cfg: &Config) -> PathBuf {
        req.output
            .clone()
            .unwrap_or_else(|| Self::default_output(&req.input, req.format, cfg))
    }

    /// Derived report path for `input`.
    pub fn default_output(input: &Path, format: ExportFormat, cfg: &Config) -> PathBuf {
        derive_output_path(input, &cfg.output_suffix, Some(&format.output_extension(input)))
    }
}

fn render_table(report: &Report) -> String {
    let columns = HEADERS.iter().map(|h| Column::new(h, 6)).collect();
    let mut table = Table::new(columns);

    for day in &report.days {
        table.add_row(day.cells().iter().map(|c| c.to_text()).collect());
    }

    table.render()
}
