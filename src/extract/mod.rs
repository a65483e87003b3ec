// src/extract/mod.rs
// =============================================================================
// The link extractor: given a page URL, fetch it and report which same-site
// pages it links to.
//
// Instead of throwing when a page can't be fetched, an extractor returns an
// Extraction that is either "here are the links" or "this page failed and
// here's why". The crawl controller looks at the outcome and always keeps
// going.
//
// The LinkExtractor trait is the seam between the crawl loop and the network:
// the real crawler uses HttpExtractor, tests plug in a scripted site.
// =============================================================================

mod html;
mod http;

use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

pub use html::extract_page_links;
pub use http::HttpExtractor;

/// What fetching one page produced
#[derive(Debug)]
pub enum Extraction {
    /// The page was fetched; these are its in-scope links
    Links(Vec<Url>),
    /// The page couldn't be fetched; it contributes no links
    Failed(FetchError),
}

impl Extraction {
    /// Collapses a failure into "no links", which is how the crawl treats it
    pub fn into_links(self) -> Vec<Url> {
        match self {
            Extraction::Links(links) => links,
            Extraction::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }
}

/// Anything that can turn a page URL into a list of outbound links
#[async_trait]
pub trait LinkExtractor: Send + Sync {
    async fn extract(&self, url: &Url) -> Extraction;
}
