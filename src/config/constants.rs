//! Configuration constants.
//!
//! This module defines the fixed strings used by URL normalization and asset
//! extraction, plus the default locations of the run logs.

/// Replaces the query string of every resource and referer URL.
///
/// Two URLs that differ only after the `?` compare equal once redacted, while
/// the marker keeps the redaction visible when reading reports.
pub const QUERY_STRING_MARKER: &str = "[qstring redacted]";

/// Stand-in for the digits of a version path segment on internal URLs.
///
/// `/version12/` becomes `/version9999999999/` and `/v3/` becomes
/// `/v9999999999/`.
pub const VERSION_SENTINEL: &str = "9999999999";

/// Body text substituted when a JavaScript response carries no `text` field.
///
/// Fixed so that fingerprints of body-less resources are identical across runs.
pub const MISSING_BODY_PLACEHOLDER: &str = "ADDED TEXT TO ANOMALY";

/// Default path of the append-only detailed log.
pub const DEFAULT_LOG_FILENAME: &str = "harparse_log.txt";

/// Default path of the append-only one-line-per-run summary log.
pub const DEFAULT_SUMMARY_FILENAME: &str = "harparse_summary.txt";

/// `strftime` pattern of the per-run timestamp prefix (includes trailing space).
pub const RUN_TIMESTAMP_FORMAT: &str = "[%d %b %Y, %H:%M] ";

/// Response header whose value identifies JavaScript resources.
pub const CONTENT_TYPE_HEADER: &str = "content-type";

/// Request header recorded as the asset's referer.
pub const REFERER_HEADER: &str = "referer";

/// Substring of the content type that marks a response as JavaScript.
pub const JAVASCRIPT_MARKER: &str = "javascript";
