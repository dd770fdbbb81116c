//! travelsum library root.
//! Exposes the CLI parser, the high-level run() function and the
//! import → core → export pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.print_config {
        return cli::commands::config::handle(cfg);
    }
    cli::commands::summarize::handle(cli, cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // a missing input must not be masked by a broken config file
    if cli.input.is_none() && !cli.print_config {
        return Err(errors::AppError::MissingInput);
    }

    let mut cfg = Config::load(cli.config.as_deref())?;

    // command-line overrides
    if let Some(mode) = cli.range_mode {
        cfg.calendar_range = mode;
    }
    if let Some(sheet) = &cli.sheet {
        cfg.sheet = Some(sheet.clone());
    }

    dispatch(&cli, &cfg)
}
