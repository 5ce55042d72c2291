//! Snapshot comparison.
//!
//! [`diff_snapshots`] reports what is new or different in a comparison
//! snapshot relative to a baseline. It is one-directional: assets that only
//! exist in the baseline (removed scripts) are not reported.

use std::collections::{BTreeMap, BTreeSet};

use crate::extract::Snapshot;

/// Baseline and comparison fingerprints of a changed asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintChange {
    pub baseline: String,
    pub compare: String,
}

/// Outcome of comparing two snapshots.
///
/// Unchanged assets appear in neither collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Canonical URLs present only in the comparison snapshot
    pub new: BTreeSet<String>,
    /// Canonical URLs present in both with different fingerprints
    pub changed: BTreeMap<String, FingerprintChange>,
}

impl DiffResult {
    /// True if anything is new or changed.
    pub fn has_changes(&self) -> bool {
        !self.new.is_empty() || !self.changed.is_empty()
    }
}

/// Compares `comparison` against `baseline`.
pub fn diff_snapshots(baseline: &Snapshot, comparison: &Snapshot) -> DiffResult {
    let mut result = DiffResult::default();

    for (url, record) in &comparison.assets {
        match baseline.assets.get(url) {
            None => {
                result.new.insert(url.clone());
            }
            Some(base) if base.fingerprint != record.fingerprint => {
                result.changed.insert(
                    url.clone(),
                    FingerprintChange {
                        baseline: base.fingerprint.clone(),
                        compare: record.fingerprint.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }

    result
}
