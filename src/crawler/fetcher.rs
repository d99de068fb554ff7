//! HTTP fetcher
//!
//! One GET per call, a hard per-request timeout, and no retries. Failures
//! are classified so callers can log them; none of them are fatal to the
//! crawl, and a page that fails simply contributes no links.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a single page fetch produced no HTML
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("unsupported content type: {0}")]
    UnsupportedContent(String),
}

/// Builds the HTTP client shared by every worker
///
/// The client-level timeout covers each whole request including the body
/// download; cancellation of the calling task cancels the request with it.
///
/// # Arguments
///
/// * `max_connections` - Pool size per host; with a crawl concentrated on a
///   handful of hosts this bounds the sockets the run keeps open
/// * `fetch_timeout` - Per-request timeout
pub fn build_http_client(
    max_connections: usize,
    fetch_timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let user_agent = format!("linkharvest/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(fetch_timeout)
        .connect_timeout(fetch_timeout)
        .pool_max_idle_per_host(max_connections)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns its body as text
///
/// Non-2xx statuses, non-HTML content types, transport failures, and
/// timeouts all come back as a classified [`FetchError`]. The body of a
/// non-HTML response is never downloaded past the headers check.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    // A missing Content-Type header counts as HTML
    if let Some(content_type) = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
    {
        if !is_html_like(content_type) {
            return Err(FetchError::UnsupportedContent(content_type.to_string()));
        }
    }

    response.text().await.map_err(classify)
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Network("connection failed".to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

fn is_html_like(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml")
}
