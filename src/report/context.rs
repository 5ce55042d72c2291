//! Per-run reporting state.

use chrono::Local;

use crate::config::RUN_TIMESTAMP_FORMAT;

/// State shared by every reporting call of one run.
///
/// Built once when the run starts, so every log line of the run carries the same
/// timestamp and lines from different runs can be told apart in the
/// append-only files.
#[derive(Debug, Clone)]
pub struct RunContext {
    timestamp: String,
    lines: Vec<String>,
    summary: String,
}

impl RunContext {
    /// Starts a run stamped with the current local time.
    pub fn new() -> Self {
        Self::with_timestamp(Local::now().format(RUN_TIMESTAMP_FORMAT).to_string())
    }

    /// Starts a run with a fixed timestamp prefix.
    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            lines: Vec::new(),
            summary: String::new(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Buffers a detailed log line, prefixed with the run timestamp.
    pub fn log(&mut self, line: impl AsRef<str>) {
        self.lines.push(format!("{}{}", self.timestamp, line.as_ref()));
    }

    /// Detailed log lines buffered so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    /// The run's summary log line, prefixed with the run timestamp.
    pub fn summary_line(&self) -> String {
        format!("{}{}", self.timestamp, self.summary)
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_prefixes_timestamp() {
        let mut ctx = RunContext::with_timestamp("[01 May 2020, 10:00] ");
        ctx.log("Baseline HAR: a.har");
        ctx.log("New HAR: b.har");
        assert_eq!(
            ctx.lines(),
            &[
                "[01 May 2020, 10:00] Baseline HAR: a.har".to_string(),
                "[01 May 2020, 10:00] New HAR: b.har".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_line() {
        let mut ctx = RunContext::with_timestamp("[01 May 2020, 10:00] ");
        ctx.set_summary("title, a.har, b.har, no changes");
        assert_eq!(
            ctx.summary_line(),
            "[01 May 2020, 10:00] title, a.har, b.har, no changes"
        );
    }

    #[test]
    fn test_new_timestamp_shape() {
        let ctx = RunContext::new();
        assert!(ctx.timestamp().starts_with('['));
        assert!(ctx.timestamp().ends_with("] "));
        assert!(ctx.lines().is_empty());
    }
}
