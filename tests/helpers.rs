// Shared test helpers for building HAR captures.
//
// Captures are assembled with serde_json so tests exercise the same parsing
// path as real files.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// A single entry of a test capture.
#[derive(Clone)]
pub struct TestEntry {
    pub url: String,
    pub content_type: Option<String>,
    pub text: Option<String>,
    pub size: i64,
    pub referer: Option<String>,
}

/// JavaScript entry with a body.
pub fn js(url: &str, text: &str) -> TestEntry {
    TestEntry {
        url: url.to_string(),
        content_type: Some("application/javascript".to_string()),
        text: Some(text.to_string()),
        size: text.len() as i64,
        referer: None,
    }
}

/// JavaScript entry without `content.text`.
#[allow(dead_code)] // Used by other test files
pub fn js_without_body(url: &str) -> TestEntry {
    TestEntry {
        url: url.to_string(),
        content_type: Some("text/javascript".to_string()),
        text: None,
        size: -1,
        referer: None,
    }
}

/// Non-JavaScript entry.
#[allow(dead_code)] // Used by other test files
pub fn other(url: &str, content_type: &str, text: &str) -> TestEntry {
    TestEntry {
        url: url.to_string(),
        content_type: Some(content_type.to_string()),
        text: Some(text.to_string()),
        size: text.len() as i64,
        referer: None,
    }
}

impl TestEntry {
    #[allow(dead_code)] // Used by other test files
    pub fn with_referer(mut self, referer: &str) -> Self {
        self.referer = Some(referer.to_string());
        self
    }

    fn to_json(&self) -> Value {
        let request_headers: Vec<Value> = self
            .referer
            .iter()
            .map(|r| json!({"name": "Referer", "value": r}))
            .collect();
        let response_headers: Vec<Value> = self
            .content_type
            .iter()
            .map(|ct| json!({"name": "Content-Type", "value": ct}))
            .collect();
        let mut content = json!({"size": self.size, "mimeType": "x"});
        if let Some(text) = &self.text {
            content["text"] = json!(text);
        }
        json!({
            "startedDateTime": "2020-05-01T10:00:01.000Z",
            "request": {"method": "GET", "url": self.url, "headers": request_headers},
            "response": {"status": 200, "headers": response_headers, "content": content}
        })
    }
}

/// Serializes a capture with the given page title and entries.
pub fn har_json(title: &str, started: &str, entries: &[TestEntry]) -> String {
    let entries: Vec<Value> = entries.iter().map(TestEntry::to_json).collect();
    json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "WebInspector", "version": "537.36"},
            "pages": [{"id": "page_1", "title": title, "startedDateTime": started}],
            "entries": entries
        }
    })
    .to_string()
}

/// Writes a capture file into `dir` and returns its path.
#[allow(dead_code)] // Used by other test files
pub fn write_har(dir: &Path, name: &str, title: &str, entries: &[TestEntry]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, har_json(title, "2020-05-01T10:00:00.000Z", entries))
        .expect("Failed to write test capture");
    path
}
