// src/crawl/queue.rs
// =============================================================================
// The per-crawl state: the frontier (pages waiting to be fetched) and the
// visited set (pages already claimed).
//
// How it works:
// 1. Start with the seed URL in the frontier
// 2. next_url() pops the head of the frontier and marks it visited
// 3. enqueue() appends newly discovered same-site links to the tail
// 4. Stop when the frontier is empty or the page budget is used up
//
// Invariants kept by this type:
// - A URL is never in the frontier and the visited set at the same time
// - A URL is appended to the frontier at most once per crawl
// - The visited set never grows past the budget
//
// Every crawl builds a fresh CrawlState and throws it away at the end, so two
// crawls running side by side never see each other's URLs.
// =============================================================================

use super::Seed;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet, VecDeque};
use url::Url;

/// URLs a crawl fetched, kept sorted so the sitemap comes out the same every run
pub type VisitedSet = BTreeSet<String>;

/// Frontier + visited set for one crawl
#[derive(Debug)]
pub struct CrawlState {
    seed: Seed,
    budget: usize,
    frontier: VecDeque<Url>,
    // Mirror of `frontier` for O(1) "already scheduled?" checks
    queued: HashSet<String>,
    visited: VisitedSet,
    visit_order: Vec<String>,
    failures: usize,
}

impl CrawlState {
    pub fn new(seed: &Seed, budget: usize) -> Self {
        let start = seed.url().clone();

        let mut queued = HashSet::new();
        queued.insert(start.as_str().to_string());

        CrawlState {
            seed: seed.clone(),
            budget,
            frontier: VecDeque::from([start]),
            queued,
            visited: VisitedSet::new(),
            visit_order: Vec::new(),
            failures: 0,
        }
    }

    /// Claims the next page to fetch
    ///
    /// The page counts against the budget as soon as it's claimed, whether
    /// the fetch later works or not. Returns None once the budget is spent or
    /// there's nothing left to crawl.
    pub fn next_url(&mut self) -> Option<Url> {
        while self.visited.len() < self.budget {
            let url = self.frontier.pop_front()?;
            let key = url.as_str().to_string();
            self.queued.remove(&key);

            if self.visited.contains(&key) {
                continue;
            }

            self.visited.insert(key.clone());
            self.visit_order.push(key);
            return Some(url);
        }

        None
    }

    /// Appends discovered links to the frontier
    ///
    /// Links that are off-site, already visited, or already waiting are
    /// dropped. Returns how many were actually added.
    pub fn enqueue<I>(&mut self, links: I) -> usize
    where
        I: IntoIterator<Item = Url>,
    {
        let mut added = 0;

        for link in links {
            if !self.seed.in_scope(&link) {
                continue;
            }

            let key = link.as_str();
            if self.visited.contains(key) || self.queued.contains(key) {
                continue;
            }

            self.queued.insert(key.to_string());
            self.frontier.push_back(link);
            added += 1;
        }

        added
    }

    /// Records that the last claimed page yielded nothing because it failed
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_count(&self) -> usize {
        self.frontier.len()
    }

    /// Ends the crawl; whatever is still in the frontier is discarded
    pub fn finish(self) -> CrawlReport {
        CrawlReport {
            seed: self.seed.to_string(),
            visited: self.visited,
            visit_order: self.visit_order,
            failures: self.failures,
            unexplored: self.frontier.len(),
        }
    }
}

/// What a finished crawl produced
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    /// Every page claimed, sorted
    pub visited: VisitedSet,
    /// The same pages in the order they were fetched (breadth-first)
    pub visit_order: Vec<String>,
    /// How many of the visited pages failed to fetch
    pub failures: usize,
    /// Links still waiting when the budget ran out
    pub unexplored: usize,
}

impl CrawlReport {
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}
