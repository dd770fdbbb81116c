use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::{SummaryLogic, SummaryRequest};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let input = cli.input.as_deref().ok_or(AppError::MissingInput)?;

    let req = SummaryRequest {
        input: expand_tilde(input),
        output: cli.output.as_deref().map(expand_tilde),
        format: cli.format,
        force: cli.force,
        print: cli.print,
    };

    let out = SummaryLogic::run(&req, cfg)?;
    success(format!("Summary written to {}", out.display()));
    Ok(())
}
