// src/sitemap/mod.rs
// =============================================================================
// This module produces the sitemap file.
//
// - xml.rs: pure serialization (URLs + date -> XML text)
// - writer.rs: puts that text on disk safely and returns the path
// =============================================================================

mod writer;
mod xml;

use chrono::NaiveDate;

pub use writer::{generate_xml_sitemap, write_sitemap};
pub use xml::{entries, serialize};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_COMMENT: &str = "This is an XML sitemap for the website.";

/// Every page gets the same weight; we have no basis to rank them
pub const DEFAULT_PRIORITY: f32 = 0.5;

/// One <url> block in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    /// The day the sitemap was generated; we don't know when pages changed
    pub lastmod: NaiveDate,
    pub priority: f32,
}

impl SitemapEntry {
    /// W3C date form, YYYY-MM-DD
    pub fn lastmod_string(&self) -> String {
        self.lastmod.format("%Y-%m-%d").to_string()
    }

    pub fn priority_string(&self) -> String {
        format!("{:.1}", self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_formatting() {
        let entry = SitemapEntry {
            loc: "https://example.com/".into(),
            lastmod: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            priority: DEFAULT_PRIORITY,
        };
        assert_eq!(entry.lastmod_string(), "2024-01-09");
        assert_eq!(entry.priority_string(), "0.5");
    }
}
