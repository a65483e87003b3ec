// src/extract/http.rs
// =============================================================================
// The real link extractor: fetches pages over HTTP(S) with reqwest.
//
// Failure handling:
// - Timeout, DNS/connection trouble, non-2xx status, unreadable body all end
//   up as Extraction::Failed with a FetchError saying which one it was
// - We log the failure here and hand it back; nothing is retried
// - A 404 and a timeout are treated the same way: zero links, keep crawling
// =============================================================================

use super::{extract_page_links, Extraction, LinkExtractor};
use crate::config::CrawlConfig;
use crate::crawl::Seed;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Fetches pages with a shared reqwest client and parses them for links
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: Client,
    seed: Seed,
}

impl HttpExtractor {
    /// Builds an extractor for one crawl
    ///
    /// The client is created once and reused for every page, so connections
    /// to the site get pooled.
    pub fn new(seed: Seed, config: &CrawlConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;
        Ok(HttpExtractor { client, seed })
    }

    /// Uses an existing client (handy when several crawls share one)
    pub fn with_client(seed: Seed, client: Client) -> Self {
        HttpExtractor { client, seed }
    }
}

#[async_trait]
impl LinkExtractor for HttpExtractor {
    async fn extract(&self, url: &Url) -> Extraction {
        match fetch_page(&self.client, url).await {
            Ok(html) => {
                // Resolve against the URL we asked for, even if it redirected
                // elsewhere (example.com -> www.example.com would otherwise
                // put every relative link off-site)
                let links = extract_page_links(&html, url, &self.seed);
                debug!(url = %url, links = links.len(), "extracted links");
                Extraction::Links(links)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch page");
                Extraction::Failed(e)
            }
        }
    }
}

// Fetches a web page and returns its body
async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.text().await.map_err(FetchError::from_reqwest)
}
