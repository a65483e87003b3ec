// src/crawl/controller.rs
// =============================================================================
// Drives a breadth-first crawl from a seed URL up to a page budget.
//
// The loop:
//   while the frontier has pages and the budget isn't spent:
//     claim the next page (it now counts as visited)
//     ask the link extractor for its links
//     append the new same-site links to the frontier
//
// One page is fetched at a time, so with a deterministic site the visit order
// is the same on every run. A page that fails just contributes zero links.
// =============================================================================

use super::queue::{CrawlReport, CrawlState, VisitedSet};
use super::Seed;
use crate::config::CrawlConfig;
use crate::error::Result;
use crate::extract::{HttpExtractor, LinkExtractor};
use tracing::{info, info_span, Instrument};

/// Runs crawls with a given link extractor
#[derive(Debug, Clone)]
pub struct Crawler<E> {
    extractor: E,
}

impl<E: LinkExtractor> Crawler<E> {
    pub fn new(extractor: E) -> Self {
        Crawler { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Crawls from `seed` until the frontier empties or `budget` pages are visited
    ///
    /// Never fails: per-page problems are logged by the extractor and the
    /// page still counts as visited.
    pub async fn crawl(&self, seed: &Seed, budget: usize) -> CrawlReport {
        let span = info_span!("crawl", seed = %seed, budget);

        async move {
            let mut state = CrawlState::new(seed, budget);

            while let Some(url) = state.next_url() {
                info!(url = %url, visited = state.visited_count(), "crawling");

                let outcome = self.extractor.extract(&url).await;
                if outcome.is_failure() {
                    state.record_failure();
                }

                state.enqueue(outcome.into_links());
            }

            let report = state.finish();
            info!(
                pages = report.visited.len(),
                failures = report.failures,
                unexplored = report.unexplored,
                "crawling complete"
            );
            report
        }
        .instrument(span)
        .await
    }
}

// Crawls a website over HTTP with the given settings
//
// Parameters:
//   seed_url: where to start; must be an absolute http(s) URL
//   config: timeout, user agent, and max_pages (the budget)
//
// Returns: the crawl report, or an error if the seed URL is invalid
pub async fn crawl_with_config(seed_url: &str, config: &CrawlConfig) -> Result<CrawlReport> {
    let seed = Seed::parse(seed_url)?;
    let extractor = HttpExtractor::new(seed.clone(), config)?;

    Ok(Crawler::new(extractor).crawl(&seed, config.max_pages).await)
}

/// Crawls a website with default settings and returns the visited pages
///
/// The only error is a bad seed URL; failed pages just aren't followed.
pub async fn crawl_website(seed_url: &str, max_pages: usize) -> Result<VisitedSet> {
    let config = CrawlConfig {
        max_pages,
        ..CrawlConfig::default()
    };

    let report = crawl_with_config(seed_url, &config).await?;
    Ok(report.into_visited())
}
