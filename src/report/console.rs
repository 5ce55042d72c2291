//! Console output of a comparison run.

use std::io::{self, Write};
use std::path::Path;

use colored::*;
use log::{info, warn};
use strum::IntoEnumIterator;

use super::context::RunContext;
use crate::diff::DiffResult;
use crate::error_handling::{AnomalyStats, AnomalyType};
use crate::extract::Snapshot;

/// Everything one report needs besides the run context.
pub struct ReportParams<'a> {
    pub baseline_path: &'a Path,
    pub comparison_path: &'a Path,
    pub baseline: &'a Snapshot,
    pub comparison: &'a Snapshot,
    pub diff: &'a DiffResult,
}

/// Prints the tool banner.
pub fn print_banner() {
    println!();
    println!("**************************************");
    println!("\tJavaScript Change Check");
    println!("\tVer: {}", env!("CARGO_PKG_VERSION"));
    println!("**************************************");
    println!();
}

fn write_capture_section<W: Write>(
    out: &mut W,
    ctx: &mut RunContext,
    heading: &str,
    path: &Path,
    snapshot: &Snapshot,
) -> io::Result<()> {
    writeln!(out, "{heading} filename: {}", path.display())?;
    writeln!(out, "\tPage title:\t{}", snapshot.page.title)?;
    writeln!(out, "\tHAR creation:\t{}", snapshot.page.started_date_time)?;
    writeln!(out, "\tJS Files Found:\t{}", snapshot.len())?;
    ctx.log(format!("{heading} page title: {}", snapshot.page.title));
    ctx.log(format!("\tHAR creation:\t{}", snapshot.page.started_date_time));
    ctx.log(format!("\tJS Files Found:\t{}", snapshot.len()));
    Ok(())
}

fn write_url<W: Write>(out: &mut W, url: &str, comparison: &Snapshot) -> io::Result<()> {
    match comparison.get(url).map(|r| r.referer.as_str()) {
        Some(referer) if !referer.is_empty() => writeln!(out, "\t{url} [Referer:{referer}]"),
        _ => writeln!(out, "\t{url}"),
    }
}

/// Writes the comparison report to `out` and records it in the run context.
///
/// The summary line of the context is set to
/// `title, baseline, comparison, no changes|CHANGES`.
pub fn write_report<W: Write>(
    out: &mut W,
    ctx: &mut RunContext,
    params: &ReportParams<'_>,
) -> io::Result<()> {
    ctx.log(format!("Baseline HAR: {}", params.baseline_path.display()));
    ctx.log(format!("New HAR: {}", params.comparison_path.display()));

    write_capture_section(out, ctx, "Baseline", params.baseline_path, params.baseline)?;
    write_capture_section(out, ctx, "New", params.comparison_path, params.comparison)?;
    writeln!(out)?;

    let diff = params.diff;
    let verdict = if diff.has_changes() {
        writeln!(out, "{} Warning - changes found!", "\u{2573}".red())?;
        ctx.log("Warning - changes found!");
        "CHANGES"
    } else {
        writeln!(out, "{} All clear - no changes found", "\u{221A}".green())?;
        ctx.log("All clear - no changes found");
        "no changes"
    };
    ctx.set_summary(format!(
        "{}, {}, {}, {}",
        params.baseline.page.title,
        params.baseline_path.display(),
        params.comparison_path.display(),
        verdict
    ));
    writeln!(out)?;

    if diff.new.is_empty() {
        writeln!(out, "No new JS files found")?;
        ctx.log("No new JS files found");
    } else {
        writeln!(out, "{} new JavaScript files found", diff.new.len())?;
        ctx.log(format!("{} new JavaScript files found", diff.new.len()));
        for url in &diff.new {
            write_url(out, url, params.comparison)?;
            ctx.log(url);
        }
    }

    if diff.changed.is_empty() {
        writeln!(out, "No changes in JS found")?;
        ctx.log("No changes in JS found");
    } else {
        writeln!(out, "{} changed JavaScript files found", diff.changed.len())?;
        ctx.log(format!("{} changed JavaScript files found", diff.changed.len()));
        for (url, change) in &diff.changed {
            write_url(out, url, params.comparison)?;
            ctx.log(format!(
                "{url} baseline hash: {}, new hash: {}",
                change.baseline, change.compare
            ));
        }
    }

    Ok(())
}

/// Prints the comparison report to stdout.
pub fn print_report(ctx: &mut RunContext, params: &ReportParams<'_>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, ctx, params)
}

/// Logs each extraction anomaly of a snapshot and then the per-kind totals.
pub fn log_anomalies(ctx: &mut RunContext, label: &str, snapshot: &Snapshot) {
    for anomaly in &snapshot.anomalies {
        match anomaly.kind {
            AnomalyType::MissingBodyText => {
                warn!("Anomaly ignored: no text content in {}", anomaly.url);
                ctx.log(format!("Anomaly ignored ({label}): no text content in {}", anomaly.url));
            }
        }
    }
    print_anomaly_statistics(label, &snapshot.anomaly_stats());
}

fn print_anomaly_statistics(label: &str, stats: &AnomalyStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }
    info!("{} anomaly counts ({} total):", label, total);
    for anomaly_type in AnomalyType::iter() {
        let count = stats.get_count(anomaly_type);
        if count > 0 {
            info!("   {}: {}", anomaly_type.as_str(), count);
        }
    }
}
