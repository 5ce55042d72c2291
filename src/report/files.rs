//! Append-only run log files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;

use super::context::RunContext;
use crate::error_handling::ReportError;

fn append_lines<'a>(
    path: &Path,
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    for line in lines {
        writeln!(file, "{line}").map_err(io_err)?;
    }
    Ok(())
}

/// Appends the run's detailed lines and its summary line to the log files.
///
/// Files are created if missing; existing content is never truncated.
///
/// # Errors
///
/// Returns `ReportError::Io` naming the file that could not be written.
pub fn write_logs(ctx: &RunContext, detailed: &Path, summary: &Path) -> Result<(), ReportError> {
    append_lines(detailed, ctx.lines().iter().map(String::as_str))?;
    debug!(
        "Appended {} lines to {}",
        ctx.lines().len(),
        detailed.display()
    );
    let summary_line = ctx.summary_line();
    append_lines(summary, [summary_line.as_str()])?;
    Ok(())
}
