// src/config.rs
// =============================================================================
// Crawl settings.
//
// Settings come from three layers, lowest priority first:
// 1. Built-in defaults (100 pages, 10 second timeout, ./sitemaps/sitemap.xml)
// 2. An optional JSON config file (--config crawl.json)
// 3. Command-line flags
//
// Example config file (every field is optional):
//   {
//     "max_pages": 250,
//     "timeout_secs": 5,
//     "output_dir": "out",
//     "filename": "site.xml"
//   }
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MAX_PAGES: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "sitemaps";
pub const DEFAULT_FILENAME: &str = "sitemap.xml";
pub const DEFAULT_USER_AGENT: &str = concat!("sitemap-crawler/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlConfig {
    /// Stop after this many pages have been visited
    pub max_pages: usize,
    /// Per-request timeout; one slow page never stalls the crawl for longer
    pub timeout_secs: u64,
    /// Sent with every request
    pub user_agent: String,
    /// Where sitemaps are written (created if missing)
    pub output_dir: PathBuf,
    /// Sitemap file name inside output_dir
    pub filename: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl CrawlConfig {
    /// Loads a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads the config file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The request timeout; zero would make every fetch fail, so it's at least 1s
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// An HTTP client with this config's timeout and user agent
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .user_agent(self.user_agent.as_str())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.output_dir, PathBuf::from("sitemaps"));
        assert_eq!(config.filename, "sitemap.xml");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_pages": 7, "output_dir": "out" }}"#).unwrap();

        let config = CrawlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.filename, DEFAULT_FILENAME);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_page": 7 }}"#).unwrap();

        assert!(CrawlConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(CrawlConfig::load(Some(Path::new("/definitely/not/here.json"))).is_err());
        assert_eq!(CrawlConfig::load(None).unwrap(), CrawlConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = CrawlConfig {
            timeout_secs: 0,
            ..CrawlConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
