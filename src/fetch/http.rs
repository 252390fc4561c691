// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - A Fetcher trait: the one-method interface the crawl engine depends on
// - HttpFetcher: the real implementation backed by reqwest
// - FetchError: categorizes the ways a fetch can fail (bad status, timeout,
//   connection trouble, everything else)
//
// The crawler is strictly sequential, so there is no concurrency here:
// one GET at a time, each with a User-Agent header and a 10 second timeout.
//
// Rust concepts:
// - async/await: For network I/O
// - Enums: To represent different failure modes
// - Traits with async methods: Stable since Rust 1.75
// =============================================================================

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client};

// Represents the ways fetching a URL can fail
//
// Every variant is recoverable: the crawl engine treats a failed fetch as
// "this page had no links" and moves on to the next frontier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status code
    Status(u16),
    /// The request timed out
    Timeout,
    /// Could not connect (DNS failure, refused connection, host down)
    Connect,
    /// Anything else (TLS trouble, invalid response body, ...)
    Other(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP {}", code),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Connect => write!(f, "connection failed"),
            FetchError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FetchError {}

// The interface the crawl engine sees
//
// get() returns the response body on success. A non-2xx response is an
// error here (FetchError::Status), because the crawler never wants the
// body of an error page.
pub trait Fetcher {
    /// Fetches `url` with the given User-Agent header and returns the body.
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError>;
}

// The production fetcher, backed by a reqwest Client
//
// The Client is created once and reused for every request so we get
// connection pooling for free.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a 10 second per-request timeout.
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError> {
        // Send the GET request with our User-Agent header
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(categorize_error)?;

        // A response arrived - but only 2xx counts as success
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        // Download the body (this can still fail mid-transfer)
        response.text().await.map_err(categorize_error)
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Connection refused
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect
    } else {
        FetchError::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is a 404 an Err but a slow server a different Err?
//    - Status(u16) means the HTTP conversation worked, the server just
//      said no
//    - Timeout/Connect mean the conversation never completed
//    - The crawl engine treats both the same way (skip the page), but the
//      warning it prints tells the user which one happened
//
// 2. What is async fn in a trait?
//    - Since Rust 1.75 traits can declare async methods directly
//    - The engine is generic over Fetcher (static dispatch), so no boxing
//      or helper crates are needed
//
// 3. Why return String and not the whole response?
//    - The engine only ever needs the HTML body
//    - Keeping the trait surface tiny makes the test stub tiny too
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP 500");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(FetchError::Connect.to_string(), "connection failed");
        assert_eq!(
            FetchError::Other("boom".to_string()).to_string(),
            "boom"
        );
    }

    #[test]
    fn test_http_fetcher_builds() {
        // Client construction should never fail with our settings
        assert!(HttpFetcher::new().is_ok());
    }
}
