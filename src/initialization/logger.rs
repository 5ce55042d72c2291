//! Logger initialization.
//!
//! Plain lines look like `⚠ har_js_diff::report [WARN] Anomaly ignored: ...`:
//! a level glyph, the target and the coloured level. JSON lines carry the
//! same fields plus a millisecond timestamp, one object per line.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Glyph shown in front of plain log lines. Extraction anomalies are
/// logged at `Warn` and get the caution sign.
fn level_glyph(level: Level) -> &'static str {
    match level {
        Level::Error => "\u{2573}",
        Level::Warn => "\u{26A0}",
        Level::Info => "\u{2022}",
        Level::Debug => "\u{00B7}",
        Level::Trace => "\u{2026}",
    }
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}

/// Renders one plain log line (without the trailing newline).
fn format_plain(level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {} [{}] {}",
        level_glyph(level),
        target.cyan(),
        colored_level(level),
        message
    )
}

/// Renders one JSON log line (without the trailing newline).
fn format_json(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it, so `--log-level`
/// always wins for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-asset sizes and hashes
/// har_js_diff before.har after.har --log-level debug
///
/// # JSON lines for log shippers
/// har_js_diff before.har after.har --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("har_js_diff", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    format_json(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    format_plain(record.level(), record.target(), &record.args().to_string())
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_has_glyph_target_and_level() {
        let line = format_plain(
            Level::Warn,
            "har_js_diff::report",
            "Anomaly ignored: no text content in https://t/tag.js",
        );
        assert!(line.starts_with("\u{26A0} "));
        assert!(line.contains("har_js_diff::report"));
        assert!(line.contains("WARN"));
        assert!(line.ends_with("] Anomaly ignored: no text content in https://t/tag.js"));
    }

    #[test]
    fn test_level_glyphs_are_distinct() {
        let glyphs = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ]
        .map(level_glyph);
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_format_json_is_one_object() {
        let line = format_json(
            1_588_327_200_000,
            Level::Info,
            "har_js_diff",
            "Page origin is \"https://shop.example.com\"",
        );
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_588_327_200_000_i64);
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "har_js_diff");
        assert_eq!(value["msg"], "Page origin is \"https://shop.example.com\"");
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        let _ = env_logger::try_init();

        let second = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
