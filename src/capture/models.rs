//! Data structures for HAR capture documents.
//!
//! Only the fields the asset extractor consumes are modelled; everything else in
//! a HAR file is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Top-level HAR envelope: `{"log": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct HarFile {
    pub(crate) log: HarLog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct HarLog {
    #[serde(default)]
    pub(crate) pages: Vec<PageMetadata>,
    #[serde(default)]
    pub(crate) entries: Vec<Entry>,
}

/// Page title and capture start time, taken from the first page of the capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title; browsers usually record the page URL here
    pub title: String,
    /// ISO 8601 start of the capture, kept verbatim
    #[serde(rename = "startedDateTime")]
    pub started_date_time: String,
}

/// One request/response pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub request: Request,
    pub response: Response,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub content: Content,
}

/// Response body as recorded by the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Declared body size in bytes; HAR uses `-1` when unknown
    #[serde(default)]
    pub size: i64,
    /// Body text; absent when the browser did not keep the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A `{name, value}` header pair, in capture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    /// Header names compare ASCII case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Values of every header called `name`, in capture order.
pub fn header_values<'a>(headers: &'a [Header], name: &'a str) -> impl Iterator<Item = &'a str> {
    headers
        .iter()
        .filter(move |h| h.is_named(name))
        .map(|h| h.value.as_str())
}
