//! Anomaly statistics tracking.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::AnomalyType;

/// Per-kind anomaly counters.
///
/// All kinds are initialized to zero on creation so that reporting can iterate
/// every kind without special-casing absent entries. Runs are single-threaded,
/// so plain counters are enough.
#[derive(Debug, Clone)]
pub struct AnomalyStats {
    counts: HashMap<AnomalyType, usize>,
}

impl AnomalyStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for anomaly_type in AnomalyType::iter() {
            counts.insert(anomaly_type, 0);
        }
        AnomalyStats { counts }
    }

    /// Increment the counter for one anomaly kind.
    pub fn increment(&mut self, anomaly_type: AnomalyType) {
        *self.counts.entry(anomaly_type).or_insert(0) += 1;
    }

    /// Get the count for an anomaly kind.
    pub fn get_count(&self, anomaly_type: AnomalyType) -> usize {
        self.counts.get(&anomaly_type).copied().unwrap_or(0)
    }

    /// Get total count across all anomaly kinds.
    pub fn total(&self) -> usize {
        AnomalyType::iter().map(|a| self.get_count(a)).sum()
    }
}

impl Default for AnomalyStats {
    fn default() -> Self {
        Self::new()
    }
}
