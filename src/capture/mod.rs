//! Capture document parsing.
//!
//! Turns the text of a HAR file into a [`HarDocument`]: the first page's
//! metadata plus the ordered entries. This is the only place capture input is
//! validated; everything downstream works on the typed document.

mod models;

use std::path::Path;

use log::debug;

use crate::error_handling::CaptureError;
use models::HarFile;

pub use models::{header_values, Content, Entry, Header, PageMetadata, Request, Response};

/// Parsed form of one capture file. Immutable once built.
#[derive(Debug, Clone)]
pub struct HarDocument {
    /// Metadata of the first page in `log.pages`
    pub page: PageMetadata,
    /// Entries in capture order
    pub entries: Vec<Entry>,
}

/// Parses HAR text into a capture document.
///
/// # Errors
///
/// Returns `CaptureError::Json` if the text is not JSON or does not follow the
/// HAR layout, and `CaptureError::NoPages` if `log.pages` is empty.
pub fn parse_capture(text: &str) -> Result<HarDocument, CaptureError> {
    let har: HarFile = serde_json::from_str(text)?;
    let mut pages = har.log.pages.into_iter();
    let page = pages.next().ok_or(CaptureError::NoPages)?;
    debug!(
        "Parsed capture '{}' with {} entries",
        page.title,
        har.log.entries.len()
    );
    Ok(HarDocument {
        page,
        entries: har.log.entries,
    })
}

/// Parses raw HAR bytes, which must be UTF-8.
pub fn parse_capture_bytes(bytes: &[u8]) -> Result<HarDocument, CaptureError> {
    let text = std::str::from_utf8(bytes)?;
    parse_capture(text)
}

/// Reads and parses a capture file.
///
/// # Errors
///
/// Returns `CaptureError::Io` if the file cannot be read, otherwise any error
/// from [`parse_capture_bytes`].
pub fn read_capture_file(path: &Path) -> Result<HarDocument, CaptureError> {
    let bytes = std::fs::read(path).map_err(|source| CaptureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_capture_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "log": {
            "pages": [
                {"title": "https://shop.example.com/", "startedDateTime": "2020-05-01T10:00:00.000Z"},
                {"title": "second page", "startedDateTime": "2020-05-01T10:05:00.000Z"}
            ],
            "entries": [
                {
                    "request": {"url": "https://shop.example.com/app.js", "headers": []},
                    "response": {
                        "headers": [{"name": "Content-Type", "value": "application/javascript"}],
                        "content": {"size": 12, "text": "console.log(1)"}
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_capture_uses_first_page() {
        let doc = parse_capture(MINIMAL).unwrap();
        assert_eq!(doc.page.title, "https://shop.example.com/");
        assert_eq!(doc.page.started_date_time, "2020-05-01T10:00:00.000Z");
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].response.content.size, 12);
    }

    #[test]
    fn test_parse_capture_rejects_invalid_json() {
        let err = parse_capture("{\"log\": ").unwrap_err();
        assert!(matches!(err, CaptureError::Json(_)));
    }

    #[test]
    fn test_parse_capture_rejects_missing_log() {
        let err = parse_capture("{\"version\": 1}").unwrap_err();
        assert!(matches!(err, CaptureError::Json(_)));
    }

    #[test]
    fn test_parse_capture_rejects_empty_pages() {
        let err = parse_capture(r#"{"log": {"pages": [], "entries": []}}"#).unwrap_err();
        assert!(matches!(err, CaptureError::NoPages));
    }

    #[test]
    fn test_parse_capture_entries_default_to_empty() {
        let doc = parse_capture(
            r#"{"log": {"pages": [{"title": "t", "startedDateTime": "s"}]}}"#,
        )
        .unwrap();
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_parse_capture_bytes_rejects_non_utf8() {
        let err = parse_capture_bytes(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap_err();
        assert!(matches!(err, CaptureError::Encoding(_)));
    }

    #[test]
    fn test_read_capture_file_missing() {
        let err = read_capture_file(Path::new("/nonexistent/capture.har")).unwrap_err();
        assert!(matches!(err, CaptureError::Io { .. }));
    }
}
