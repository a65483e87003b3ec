// src/crawl/seed.rs
// =============================================================================
// The seed URL: where the crawl starts and what counts as "the same site".
//
// A page is in scope when its authority (host + port) matches the seed's.
// http:// and https:// versions of the same host are both in scope, just like
// a browser treats them as the same website for navigation purposes.
// =============================================================================

use crate::error::{Result, SitemapError};
use std::fmt;
use url::Url;

/// A validated crawl starting point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    url: Url,
}

impl Seed {
    /// Parses and validates a seed URL
    ///
    /// Rejects anything that isn't an absolute http(s) URL with a host.
    /// This is the only place a crawl can fail; once we have a Seed, the
    /// crawl always runs to completion.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|source| SitemapError::InvalidSeed {
            url: raw.to_string(),
            source,
        })?;

        if !is_http(&url) {
            return Err(SitemapError::UnsupportedScheme(raw.to_string()));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(SitemapError::MissingHost(raw.to_string()));
        }

        Ok(Seed { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The seed in the same string form that visited URLs use
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns true if `candidate` is an http(s) URL on the seed's site
    pub fn in_scope(&self, candidate: &Url) -> bool {
        is_http(candidate) && authority(candidate) == authority(&self.url)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

// Host plus explicit port. The url crate drops a port that matches the
// scheme default, so "example.com:80" over http compares equal to
// "example.com" while "example.com:8080" does not.
fn authority(url: &Url) -> (Option<&str>, Option<u16>) {
    (url.host_str(), url.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_trailing_slash() {
        let seed = Seed::parse("http://example.com").unwrap();
        assert_eq!(seed.as_str(), "http://example.com/");
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(matches!(
            Seed::parse("ftp://example.com/"),
            Err(SitemapError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Seed::parse("mailto:someone@example.com"),
            Err(SitemapError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Seed::parse("not a url"),
            Err(SitemapError::InvalidSeed { .. })
        ));
        assert!(Seed::parse("").is_err());
    }

    #[test]
    fn test_scope_matches_host_and_port() {
        let seed = Seed::parse("https://example.com/start").unwrap();

        let same = Url::parse("https://example.com/about").unwrap();
        let other_scheme = Url::parse("http://example.com/about").unwrap();
        let other_host = Url::parse("https://other.com/about").unwrap();
        let subdomain = Url::parse("https://blog.example.com/").unwrap();
        let other_port = Url::parse("https://example.com:8443/").unwrap();
        let mail = Url::parse("mailto:me@example.com").unwrap();

        assert!(seed.in_scope(&same));
        assert!(!seed.in_scope(&other_host));
        assert!(!seed.in_scope(&subdomain));
        assert!(!seed.in_scope(&other_port));
        assert!(!seed.in_scope(&mail));
        assert!(seed.in_scope(&other_scheme));
    }

    #[test]
    fn test_explicit_default_port_is_same_site() {
        let seed = Seed::parse("http://example.com/").unwrap();
        let explicit = Url::parse("http://example.com:80/x").unwrap();
        assert!(seed.in_scope(&explicit));
    }
}
