// src/extract/html.rs
// =============================================================================
// Pulls same-site links out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is forgiving about broken markup (it's built on html5ever)
//
// The `url` crate resolves relative links exactly the way a browser does:
//   page = "https://example.com/docs/intro"
//   "setup"            -> https://example.com/docs/setup
//   "../about"         -> https://example.com/about
//   "//example.com/x"  -> https://example.com/x  (protocol-relative)
//   "/faq?q=1#top"     -> https://example.com/faq?q=1#top
// =============================================================================

use crate::crawl::Seed;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Every element that carries a navigable href
const LINK_SELECTOR: &str = "a[href], area[href]";

// Extracts in-scope links from HTML content
//
// Parameters:
//   html: the page body
//   page_url: where the page lives (relative links resolve against it)
//   seed: the crawl's starting point, which decides what "same site" means
//
// Returns: absolute URLs in document order, each at most once
pub fn extract_page_links(html: &str, page_url: &Url, seed: &Seed) -> Vec<Url> {
    let document = Html::parse_document(html);

    // The selector is a constant, so failing to parse it is a programmer error
    let selector = Selector::parse(LINK_SELECTOR).expect("link selector is valid CSS");

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve_link(page_url, href) else {
            continue;
        };

        if !seed.in_scope(&absolute) {
            continue;
        }

        if seen.insert(absolute.as_str().to_string()) {
            links.push(absolute);
        }
    }

    links
}

// Resolves a link (possibly relative) to an absolute URL
//
// Bare fragments and script/mail/phone pseudo-links never point at another
// page, so they're skipped before we even try to join them.
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if ["mailto:", "tel:", "javascript:", "data:"]
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return None;
    }

    base.join(href).ok()
}
