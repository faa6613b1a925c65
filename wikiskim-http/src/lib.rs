//! Minimal HTTP client for the MediaWiki Action API.
//!
//! - Anchors every request to a configured base URL
//! - Per-request query params and timeout via [`RequestOpts`]
//! - Decodes JSON bodies into typed values
//! - Structured `tracing` events for request start, response, and errors
//!
//! There is deliberately no retry machinery: the pipeline this client serves
//! is strictly sequential and surfaces every transport failure to the caller
//! on first occurrence.
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), wikiskim_http::HttpError> {
//! let client = wikiskim_http::HttpClient::new("https://en.wikipedia.org")?;
//! let got: serde_json::Value = client
//!     .get_json("w/api.php", wikiskim_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Per-request tuning knobs.
///
/// ```
/// use wikiskim_http::RequestOpts;
/// use std::borrow::Cow;
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(30)),
///     query: Some(vec![("action", Cow::Borrowed("query"))]),
/// };
/// assert_eq!(opts.timeout.unwrap().as_secs(), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub query: Option<Vec<(&'a str, Cow<'a, str>)>>, // e.g. [("srsearch", "term".into())]
}

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use wikiskim_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://en.wikipedia.org")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// GET JSON with per-request options (query/timeout).
    pub async fn get_json<T>(&self, path: &str, opts: RequestOpts<'_>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let mut rb = self.inner.get(url.clone()).timeout(timeout);
        if let Some(q) = &opts.query {
            let pairs: Vec<(&str, &str)> = q.iter().map(|(k, v)| (*k, v.as_ref())).collect();
            rb = rb.query(&pairs);
        }

        tracing::debug!(
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            query = ?opts.query,
            timeout_ms = timeout.as_millis() as u64,
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb
            .send()
            .await
            .map_err(|err| {
                let message = err.to_string();
                tracing::warn!(message = %message, "http.network_error.send");
                HttpError::Network(message)
            })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(message = %message, "http.network_error.body");
            HttpError::Network(message)
        })?;
        let dur_ms = t0.elapsed().as_millis() as u64;

        tracing::debug!(
            %status,
            duration_ms = dur_ms,
            body_len = bytes.len(),
            "http.response"
        );

        let snippet = snip_body(&bytes);
        tracing::trace!(body_snippet = %snippet, "http.response.body_snippet");

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            tracing::warn!(%status, message = %message, body_snippet = %snippet, "http.error");
            return Err(HttpError::Api { status, message });
        }

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(
                serde_line = %e.line(),
                serde_col = %e.column(),
                serde_err = %e.to_string(),
                body_snippet = %snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// MediaWiki wraps failures as `{"error":{"code":"...","info":"..."}}`; fall
/// back to a generic `{"message"/"error"}` shape, then a raw snippet.
fn extract_error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct MwEnv {
        error: MwDetail,
    }
    #[derive(Deserialize)]
    struct MwDetail {
        #[serde(default)]
        code: String,
        #[serde(default)]
        info: String,
    }

    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(env) = serde_json::from_slice::<MwEnv>(body) {
        if !env.error.info.is_empty() {
            return format!("{}: {}", env.error.code, env.error.info);
        }
        if !env.error.code.is_empty() {
            return env.error.code;
        }
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}
