// src/generator.rs
// =============================================================================
// SitemapGenerator: the crawl-then-write workflow in one object.
//
// Usage:
//   let mut generator = SitemapGenerator::new("https://example.com/", config)?;
//   generator.crawl_website(100).await;
//   let path = generator.generate_xml_sitemap("sitemap.xml")?;
//
// The seed is validated in new(), so a generator that exists can always
// crawl. Each crawl_website() call starts from scratch and replaces the
// previous result; nothing carries over between runs.
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::{CrawlReport, Crawler, Seed, VisitedSet};
use crate::error::Result;
use crate::extract::HttpExtractor;
use crate::sitemap;
use std::path::{Path, PathBuf};

pub struct SitemapGenerator {
    seed: Seed,
    output_dir: PathBuf,
    crawler: Crawler<HttpExtractor>,
    last_report: Option<CrawlReport>,
}

impl SitemapGenerator {
    /// Validates the seed URL and prepares an HTTP crawler for it
    pub fn new(base_url: &str, config: &CrawlConfig) -> Result<Self> {
        let seed = Seed::parse(base_url)?;
        let extractor = HttpExtractor::new(seed.clone(), config)?;
        Ok(Self::with_extractor(seed, config.output_dir.clone(), extractor))
    }

    /// Like new(), but with a ready-made extractor (shared client, etc.)
    pub fn with_extractor(seed: Seed, output_dir: PathBuf, extractor: HttpExtractor) -> Self {
        SitemapGenerator {
            seed,
            output_dir,
            crawler: Crawler::new(extractor),
            last_report: None,
        }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Where `generate_xml_sitemap` writes
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Crawls up to `max_pages` pages and remembers what was visited
    pub async fn crawl_website(&mut self, max_pages: usize) -> &CrawlReport {
        let report = self.crawler.crawl(&self.seed, max_pages).await;
        self.last_report.insert(report)
    }

    /// Pages visited by the last crawl (empty before the first one)
    pub fn visited(&self) -> VisitedSet {
        self.last_report
            .as_ref()
            .map(|report| report.visited.clone())
            .unwrap_or_default()
    }

    /// Writes the sitemap for the last crawl into the output directory
    ///
    /// Fails with SitemapError::NoUrls if nothing has been crawled.
    pub fn generate_xml_sitemap(&self, filename: &str) -> Result<PathBuf> {
        let empty = VisitedSet::new();
        let visited = self
            .last_report
            .as_ref()
            .map_or(&empty, |report| &report.visited);

        sitemap::generate_xml_sitemap(visited, &self.output_dir, filename)
    }
}
