// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-site restriction (doesn't wander off to external sites)
// - Page budget: stops after N pages
// - Failed pages are recorded as visited and skipped, never retried
// =============================================================================

mod controller;
mod queue;
mod seed;

pub use controller::{crawl_website, crawl_with_config, Crawler};
pub use queue::{CrawlReport, CrawlState, VisitedSet};
pub use seed::Seed;
