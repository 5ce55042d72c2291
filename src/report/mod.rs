//! Reporting of a comparison run.
//!
//! This module provides:
//! - [`RunContext`]: per-run timestamp and buffered log lines, passed explicitly
//! - Console output of the comparison (with colour)
//! - Anomaly logging and per-kind totals
//! - Appending the detailed and summary log files

mod console;
mod context;
mod files;

// Re-export public API
pub use console::{log_anomalies, print_banner, print_report, write_report, ReportParams};
pub use context::RunContext;
pub use files::write_logs;
