// src/error.rs
// =============================================================================
// Error types shared by the crawler, the sitemap writer, and the web server.
//
// Two families:
// - SitemapError: things that stop a request (bad seed URL, nothing to write,
//   unwritable output directory). These propagate to the caller.
// - FetchError: things that go wrong while fetching ONE page. These never
//   propagate past the link extractor; the crawl logs them and moves on.
// =============================================================================

use std::io;
use thiserror::Error;

/// Errors that abort a crawl request or a sitemap write
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The seed URL could not be parsed at all
    #[error("Invalid URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The seed URL parsed, but is not http:// or https://
    #[error("Invalid URL format: '{0}' must start with http:// or https://")]
    UnsupportedScheme(String),

    /// The seed URL has no host to scope the crawl to
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// The HTTP client for the crawl couldn't be set up
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// generate_xml_sitemap was called before anything was crawled
    #[error("No URLs to include in sitemap; crawl the website first")]
    NoUrls,

    /// The output file name would escape the output directory
    #[error("Invalid sitemap file name: '{0}'")]
    InvalidFilename(String),

    /// The XML writer failed
    #[error("Failed to serialize sitemap: {0}")]
    Xml(String),

    /// Creating the directory or writing the file failed
    #[error("Failed to write sitemap: {0}")]
    Io(#[from] io::Error),
}

/// Why a single page produced no links
///
/// Every variant is handled the same way by the crawl (page stays visited,
/// contributes zero links); the split only exists so logs say what happened.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("failed to read body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Sorts a reqwest error into one of our buckets
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            FetchError::Body(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(error.to_string())
        }
    }
}

pub type Result<T, E = SitemapError> = std::result::Result<T, E>;
