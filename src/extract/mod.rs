//! JavaScript asset extraction.
//!
//! Walks the entries of a capture document, keeps the ones served with a
//! JavaScript content type, and builds a [`Snapshot`] keyed by canonical URL.
//! Extraction is pure: it never fails and never logs. Substitutions such as a
//! placeholder body are recorded as anomalies on the snapshot for the reporter.

mod models;

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::capture::{header_values, Entry, HarDocument};
use crate::config::{
    CONTENT_TYPE_HEADER, JAVASCRIPT_MARKER, MISSING_BODY_PLACEHOLDER, REFERER_HEADER,
};
use crate::error_handling::AnomalyType;
use crate::normalize::{normalize_referer, normalize_resource_url, page_origin};

pub use models::{Anomaly, AssetRecord, Snapshot};

/// Content fingerprint: lowercase hex SHA-256 of the UTF-8 text.
///
/// Used for change detection only.
pub fn fingerprint(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Returns true if any `content-type` response header mentions `javascript`.
pub fn is_javascript(entry: &Entry) -> bool {
    header_values(&entry.response.headers, CONTENT_TYPE_HEADER)
        .any(|value| value.to_ascii_lowercase().contains(JAVASCRIPT_MARKER))
}

/// Referer of the request, query-redacted, or empty if there is none.
///
/// With repeated referer headers the last one wins.
fn referer_of(entry: &Entry) -> String {
    header_values(&entry.request.headers, REFERER_HEADER)
        .last()
        .map(normalize_referer)
        .unwrap_or_default()
}

/// Builds the snapshot of one capture document.
///
/// Entries that normalize to the same canonical URL overwrite each other; the
/// last one in capture order wins.
pub fn extract_snapshot(doc: &HarDocument) -> Snapshot {
    let origin = page_origin(&doc.page.title);
    let mut assets = BTreeMap::new();
    let mut anomalies = Vec::new();

    for entry in doc.entries.iter().filter(|e| is_javascript(e)) {
        let canonical_url = normalize_resource_url(&entry.request.url, origin.as_deref());

        let body = match entry.response.content.text.as_deref() {
            Some(text) => text,
            None => {
                anomalies.push(Anomaly {
                    kind: AnomalyType::MissingBodyText,
                    url: canonical_url.clone(),
                });
                MISSING_BODY_PLACEHOLDER
            }
        };

        let record = AssetRecord {
            canonical_url: canonical_url.clone(),
            size: entry.response.content.size,
            fingerprint: fingerprint(body),
            referer: referer_of(entry),
        };
        assets.insert(canonical_url, record);
    }

    Snapshot {
        page: doc.page.clone(),
        origin,
        assets,
        anomalies,
    }
}
