use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A capture could not be turned into a capture document.
///
/// Fatal for the run: without both documents there is nothing to compare.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The capture file could not be read.
    #[error("failed to read capture file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The capture bytes are not UTF-8.
    #[error("capture is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The capture is not JSON, or does not follow the HAR layout.
    #[error("capture is not a valid HAR document: {0}")]
    Json(#[from] serde_json::Error),

    /// `log.pages` is empty, so there is no page title or start time.
    #[error("capture has no pages in log.pages")]
    NoPages,
}

/// Error types for writing the run logs.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A log file could not be opened or appended to.
    #[error("failed to write log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Substitutions the extractor makes instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum AnomalyType {
    /// JavaScript response without body text; the placeholder was hashed.
    MissingBodyText,
}

impl AnomalyType {
    /// Returns a human-readable string representation of the anomaly type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::MissingBodyText => "Missing body text",
        }
    }
}

impl std::fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
