// src/lib.rs
// =============================================================================
// sitemap-crawler: crawl a website from a seed URL and write an XML sitemap.
//
// Modules:
// - crawl: frontier + visited set, breadth-first crawl to a page budget
// - extract: fetch a page and pull out its same-site links
// - sitemap: serialize URLs to sitemaps.org XML and write the file
// - generator: crawl-then-write in one object
// - server: the web form front-end
// - config, error, logging: the plumbing
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod generator;
pub mod logging;
pub mod server;
pub mod sitemap;

pub use config::CrawlConfig;
pub use crawl::{crawl_website, crawl_with_config, CrawlReport, CrawlState, Crawler, Seed, VisitedSet};
pub use error::{FetchError, SitemapError};
pub use extract::{Extraction, HttpExtractor, LinkExtractor};
pub use generator::SitemapGenerator;
pub use sitemap::{generate_xml_sitemap, serialize, SitemapEntry};
