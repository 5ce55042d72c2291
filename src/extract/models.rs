//! Data structures produced by asset extraction.

use std::collections::BTreeMap;

use crate::capture::PageMetadata;
use crate::error_handling::{AnomalyStats, AnomalyType};

/// One JavaScript resource found in a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// Normalized resource URL, the key of the record in its snapshot
    pub canonical_url: String,
    /// Declared body size from the capture (`-1` when the browser did not know)
    pub size: i64,
    /// Lowercase hex content digest
    pub fingerprint: String,
    /// Query-redacted referer, or empty when the request carried none
    pub referer: String,
}

/// Something the extractor substituted rather than failing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub kind: AnomalyType,
    /// Canonical URL of the affected resource
    pub url: String,
}

/// The JavaScript assets of one capture plus its page metadata.
///
/// Canonical URLs are unique; the map is ordered so reports are stable.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub page: PageMetadata,
    /// Origin detected from the page title, if any
    pub origin: Option<String>,
    pub assets: BTreeMap<String, AssetRecord>,
    /// Substitutions made during extraction, in entry order
    pub anomalies: Vec<Anomaly>,
}

impl Snapshot {
    /// Number of distinct JavaScript assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, canonical_url: &str) -> Option<&AssetRecord> {
        self.assets.get(canonical_url)
    }

    /// Anomaly counts per kind.
    pub fn anomaly_stats(&self) -> AnomalyStats {
        let mut stats = AnomalyStats::new();
        for anomaly in &self.anomalies {
            stats.increment(anomaly.kind);
        }
        stats
    }
}
