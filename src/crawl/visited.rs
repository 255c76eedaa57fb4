// src/crawl/visited.rs
// =============================================================================
// The set of page URLs the crawl has already claimed.
//
// Entries are absolute, normalized URL strings and are never removed.
// `mark` is a single test-and-insert, so a URL is claimed exactly once.
// =============================================================================

use std::collections::HashSet;
use url::Url;

/// Page URLs seen during one crawl
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited. Returns false if it already was.
    pub fn mark(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_owned())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
