//! URL normalization.
//!
//! Maps raw resource and referer URLs to canonical comparison keys so that
//! volatile parts (query strings, deployment version directories) do not show
//! up as changes between two captures.
//!
//! Resource URLs go through two steps:
//! 1. Query string redaction, applied to every URL.
//! 2. Version segment rewriting, applied only to URLs internal to the page's
//!    origin. The origin is guessed from the page title by [`page_origin`].
//!
//! Referers only go through step 1.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{QUERY_STRING_MARKER, VERSION_SENTINEL};

/// Scheme and host at the start of a page title, e.g. `https://shop.example.com`.
static ORIGIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https://[^/?#\s]+)").expect("origin pattern is a valid regex")
});

/// A whole path segment of the form `version<digits>` or `v<digits>`.
static VERSION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(version|v)[0-9]+$").expect("version segment pattern is a valid regex")
});

/// Characters that may follow the origin in an internal URL.
const ORIGIN_BOUNDARY: &[char] = &['/', ':', '?', '#', '['];

/// Replaces everything from the first `?` with [`QUERY_STRING_MARKER`].
///
/// URLs that differ only in their query string become equal; URLs that differ
/// before the `?` stay different.
pub fn redact_query(url: &str) -> String {
    match url.find('?') {
        Some(idx) => format!("{}{}", &url[..idx], QUERY_STRING_MARKER),
        None => url.to_string(),
    }
}

/// Extracts the page origin (scheme and host) from a page title.
///
/// Browsers usually record the page URL as the HAR page title. This is a
/// heuristic: titles that do not start with an `https://` URL yield `None`,
/// and every resource of that capture is then treated as external.
pub fn page_origin(title: &str) -> Option<String> {
    ORIGIN_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns true if `url` belongs to `origin`.
///
/// The URL must start with the origin (ASCII case-insensitive) and the origin
/// must end on a host boundary, so `https://example.com.evil.net/` is not
/// internal to `https://example.com`.
pub fn is_internal(url: &str, origin: &str) -> bool {
    let Some(prefix) = url.get(..origin.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(origin) {
        return false;
    }
    match url[origin.len()..].chars().next() {
        None => true,
        Some(c) => ORIGIN_BOUNDARY.contains(&c),
    }
}

/// Rewrites `/version<digits>/` and `/v<digits>/` path segments to the
/// sentinel version.
///
/// Only the path is touched; a host named `v1` is left alone. Segments must be
/// followed by another `/`, so a trailing `v2` file name is kept.
pub fn rewrite_version_segments(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let Some(path_offset) = url[authority_start..].find('/') else {
        return url.to_string();
    };
    let path_start = authority_start + path_offset;

    let segments: Vec<&str> = url[path_start..].split('/').collect();
    let last = segments.len() - 1;
    let rewritten: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last {
                return (*segment).to_string();
            }
            match VERSION_SEGMENT.captures(segment) {
                Some(caps) => format!("{}{}", &caps[1], VERSION_SENTINEL),
                None => (*segment).to_string(),
            }
        })
        .collect();

    format!("{}{}", &url[..path_start], rewritten.join("/"))
}

/// Canonical comparison key for a resource URL.
///
/// Always redacts the query string; rewrites version segments only when an
/// origin is known and the URL is internal to it.
pub fn normalize_resource_url(url: &str, origin: Option<&str>) -> String {
    let redacted = redact_query(url);
    match origin {
        Some(origin) if is_internal(&redacted, origin) => rewrite_version_segments(&redacted),
        _ => redacted,
    }
}

/// Canonical form of a referer: query string redaction only.
pub fn normalize_referer(url: &str) -> String {
    redact_query(url)
}
