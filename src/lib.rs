//! har_js_diff library: JavaScript drift detection between two HAR captures
//!
//! The library loads two HTTP Archive captures of the same page, extracts the
//! JavaScript resources of each, and reports which scripts are new or have
//! different content in the later capture.
//!
//! # Example
//!
//! ```no_run
//! use har_js_diff::{Config, run_diff};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     baseline: PathBuf::from("before.har"),
//!     comparison: PathBuf::from("after.har"),
//!     no_log_files: true,
//!     ..Default::default()
//! };
//!
//! let report = run_diff(config)?;
//! println!("{} new, {} changed",
//!          report.diff.new.len(), report.diff.changed.len());
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks are public for callers that already hold parsed
//! captures: [`capture::parse_capture`], [`extract::extract_snapshot`] and
//! [`diff::diff_snapshots`].

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod capture;
pub mod config;
#[allow(missing_docs)]
pub mod diff;
#[allow(missing_docs)]
pub mod error_handling;
#[allow(missing_docs)]
pub mod extract;
pub mod initialization;
pub mod normalize;
#[allow(missing_docs)]
pub mod report;

// Re-export public API
pub use capture::{parse_capture, read_capture_file, HarDocument};
pub use config::{Config, LogFormat, LogLevel};
pub use diff::{diff_snapshots, DiffResult, FingerprintChange};
pub use error_handling::CaptureError;
pub use extract::{extract_snapshot, AssetRecord, Snapshot};
pub use run::{exit_code, run_diff, DiffReport};

// Internal run module (sequences parse, extract, diff and report)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::capture::read_capture_file;
    use crate::config::Config;
    use crate::diff::{diff_snapshots, DiffResult};
    use crate::extract::extract_snapshot;
    use crate::report::{log_anomalies, print_report, write_logs, ReportParams, RunContext};

    /// Results of a comparison run.
    #[derive(Debug, Clone)]
    pub struct DiffReport {
        /// Title of the baseline capture's page
        pub page_title: String,
        /// JavaScript assets found in the baseline capture
        pub baseline_assets: usize,
        /// JavaScript assets found in the comparison capture
        pub comparison_assets: usize,
        /// New and changed assets
        pub diff: DiffResult,
    }

    impl DiffReport {
        /// True if the comparison capture has new or changed scripts.
        pub fn has_changes(&self) -> bool {
            self.diff.has_changes()
        }
    }

    /// Process exit status for the outcome of a run.
    ///
    /// Differences are reported, not signalled: any completed run exits 0,
    /// and a run that failed (unreadable or malformed capture, unwritable
    /// logs) exits 1.
    pub fn exit_code(result: &Result<DiffReport>) -> i32 {
        match result {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }

    /// Runs one comparison with the provided configuration.
    ///
    /// Reads both captures, extracts their JavaScript assets, diffs them,
    /// prints the report and appends the log files (unless
    /// `config.no_log_files` is set). Finding differences is not an error.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Either capture cannot be read or is not a valid HAR document
    /// - The report cannot be written to stdout
    /// - A log file cannot be appended to
    pub fn run_diff(config: Config) -> Result<DiffReport> {
        let mut ctx = RunContext::new();

        info!("Reading baseline HAR {}", config.baseline.display());
        let baseline_doc = read_capture_file(&config.baseline).with_context(|| {
            format!(
                "Failed to load baseline capture {}",
                config.baseline.display()
            )
        })?;
        info!("Reading new HAR {}", config.comparison.display());
        let comparison_doc = read_capture_file(&config.comparison).with_context(|| {
            format!(
                "Failed to load comparison capture {}",
                config.comparison.display()
            )
        })?;

        let baseline = extract_snapshot(&baseline_doc);
        let comparison = extract_snapshot(&comparison_doc);
        for (label, snapshot) in [("Baseline", &baseline), ("New", &comparison)] {
            match snapshot.origin.as_deref() {
                Some(origin) => info!("{} page origin is {}", label, origin),
                None => info!(
                    "{} page title has no https origin; treating all scripts as external",
                    label
                ),
            }
            for record in snapshot.assets.values() {
                debug!(
                    "{} JavaScript asset found: {} (size: {} hash: {})",
                    label, record.canonical_url, record.size, record.fingerprint
                );
            }
            log_anomalies(&mut ctx, label, snapshot);
        }

        info!("Comparing HARs");
        let diff = diff_snapshots(&baseline, &comparison);

        print_report(
            &mut ctx,
            &ReportParams {
                baseline_path: &config.baseline,
                comparison_path: &config.comparison,
                baseline: &baseline,
                comparison: &comparison,
                diff: &diff,
            },
        )
        .context("Failed to print report")?;

        if !config.no_log_files {
            write_logs(&ctx, &config.log_file, &config.summary_file)
                .context("Failed to write run logs")?;
        }

        Ok(DiffReport {
            page_title: baseline.page.title.clone(),
            baseline_assets: baseline.len(),
            comparison_assets: comparison.len(),
            diff,
        })
    }
}
