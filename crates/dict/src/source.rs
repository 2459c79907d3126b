// ABOUTME: Page sources: the seam between lookups and the network.
// ABOUTME: HttpSource fetches over HTTP with status, size and charset handling; tests plug in their own source.

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::error::LookupError;

/// Maximum accepted page size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Something that can turn an entry URL into page markup.
///
/// Errors are attributed to the URL; the client re-attributes them to the
/// requested word.
pub trait PageSource {
    fn fetch_page(&self, url: &Url) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Fetches pages with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    headers: HashMap<String, String>,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, headers: HashMap<String, String>) -> Self {
        Self { client, headers }
    }
}

impl PageSource for HttpSource {
    async fn fetch_page(&self, url: &Url) -> Result<String, LookupError> {
        let op = "Fetch";
        let mut request = self.client.get(url.clone());
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        debug!(%url, "fetching entry page");
        let response = request.send().await.map_err(|e| request_error(url, op, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::fetch(
                url.as_str(),
                op,
                Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
            ));
        }

        if let Some(len) = response.content_length() {
            if len as usize > MAX_CONTENT_LENGTH {
                return Err(LookupError::fetch(
                    url.as_str(),
                    op,
                    Some(anyhow::anyhow!("content too large")),
                ));
            }
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());

        let body: Bytes = response
            .bytes()
            .await
            .map_err(|e| request_error(url, op, e))?;
        if body.len() > MAX_CONTENT_LENGTH {
            return Err(LookupError::fetch(
                url.as_str(),
                op,
                Some(anyhow::anyhow!("content too large")),
            ));
        }

        debug!(%url, bytes = body.len(), "fetched entry page");
        Ok(decode_body(&body, content_type.as_deref()))
    }
}

fn request_error(url: &Url, op: &str, e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::timeout(url.as_str(), op, Some(e.into()))
    } else if e.is_decode() {
        LookupError::decode(url.as_str(), op, Some(e.into()))
    } else {
        LookupError::fetch(url.as_str(), op, Some(e.into()))
    }
}

/// Decode body bytes using the charset from the content type, or by detection.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset parameter from a Content-Type header value.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        if let Some(charset) = part.trim().strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// An in-memory page source keyed by URL.
///
/// Unknown URLs fail like an HTTP 404 would.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl PageSource for StaticSource {
    async fn fetch_page(&self, url: &Url) -> Result<String, LookupError> {
        self.pages.get(url.as_str()).cloned().ok_or_else(|| {
            LookupError::fetch(
                url.as_str(),
                "Fetch",
                Some(anyhow::anyhow!("HTTP status 404")),
            )
        })
    }
}
