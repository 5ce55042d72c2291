//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `har_js_diff` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use har_js_diff::config::{DEFAULT_LOG_FILENAME, DEFAULT_SUMMARY_FILENAME};
use har_js_diff::initialization::init_logger_with;
use har_js_diff::report::print_banner;
use har_js_diff::{exit_code, run_diff, Config, LogFormat, LogLevel};

/// Report new and changed JavaScript between two HAR captures of a page.
#[derive(Debug, Parser)]
#[command(name = "har_js_diff", version)]
struct Cli {
    /// Baseline HAR capture (reference state)
    baseline: PathBuf,

    /// HAR capture to check for drift against the baseline
    comparison: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Append-only detailed log
    #[arg(long, default_value = DEFAULT_LOG_FILENAME)]
    log_file: PathBuf,

    /// Append-only one-line-per-run summary log
    #[arg(long, default_value = DEFAULT_SUMMARY_FILENAME)]
    summary_file: PathBuf,

    /// Do not write the log files
    #[arg(long)]
    no_log_files: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            baseline: cli.baseline,
            comparison: cli.comparison,
            log_level: cli.log_level,
            log_format: cli.log_format,
            log_file: cli.log_file,
            summary_file: cli.summary_file,
            no_log_files: cli.no_log_files,
        }
    }
}

fn main() -> Result<()> {
    let config: Config = Cli::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    print_banner();

    let result = run_diff(config);
    match &result {
        Ok(report) => log::debug!(
            "Compared {} baseline and {} new JS files for {}",
            report.baseline_assets,
            report.comparison_assets,
            report.page_title
        ),
        Err(e) => eprintln!("har_js_diff error: {:#}", e),
    }
    process::exit(exit_code(&result));
}
