//! Configuration types.
//!
//! This module defines the library configuration and the log option enums that
//! the CLI parses into.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_LOG_FILENAME, DEFAULT_SUMMARY_FILENAME};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use har_js_diff::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     baseline: PathBuf::from("before.har"),
///     comparison: PathBuf::from("after.har"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Capture treated as the reference state
    pub baseline: PathBuf,

    /// Later capture checked for drift against the baseline
    pub comparison: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Append-only detailed log
    pub log_file: PathBuf,

    /// Append-only one-line-per-run summary log
    pub summary_file: PathBuf,

    /// Skip writing both log files
    pub no_log_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseline: PathBuf::from("baseline.har"),
            comparison: PathBuf::from("comparison.har"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            log_file: PathBuf::from(DEFAULT_LOG_FILENAME),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILENAME),
            no_log_files: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default_log_files() {
        let config = Config::default();
        assert_eq!(config.log_file, PathBuf::from("harparse_log.txt"));
        assert_eq!(config.summary_file, PathBuf::from("harparse_summary.txt"));
        assert!(!config.no_log_files);
        assert!(matches!(config.log_format, LogFormat::Plain));
    }
}
