//! Error handling and anomaly statistics.
//!
//! This module provides:
//! - Error type definitions for capture parsing, logger setup and log writing
//! - Anomaly kinds recorded while extracting assets
//! - Per-kind anomaly counters used by the reporter
//!
//! Errors stop the run. Anomalies are substitutions the extractor made to keep
//! going (such as a placeholder body) and are only reported.

mod stats;
mod types;

// Re-export public API
pub use stats::AnomalyStats;
pub use types::{AnomalyType, CaptureError, InitializationError, ReportError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_anomaly_stats_initialization() {
        let stats = AnomalyStats::new();
        for anomaly_type in AnomalyType::iter() {
            assert_eq!(stats.get_count(anomaly_type), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_anomaly_stats_increment() {
        let mut stats = AnomalyStats::new();
        stats.increment(AnomalyType::MissingBodyText);
        stats.increment(AnomalyType::MissingBodyText);
        assert_eq!(stats.get_count(AnomalyType::MissingBodyText), 2);
        assert_eq!(stats.total(), 2);
    }
}
