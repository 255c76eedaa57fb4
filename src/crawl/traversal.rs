// src/crawl/traversal.rs
// =============================================================================
// This module implements the crawl itself: depth-first, one request at a time.
//
// How it works:
// 1. Start with the seed URL on a stack at depth 0
// 2. Pop a task; skip it if its URL was already visited, otherwise mark it
// 3. Stop there if the task is deeper than the configured maximum
// 4. Fetch the page, download every image it references
// 5. If recursion is on and we are not at the maximum depth yet, push the
//    page's same-domain links at depth + 1
// 6. Repeat until the stack is empty
//
// Links are pushed in reverse so they pop in document order. That gives the
// same visiting order as calling crawl() recursively for each link.
//
// Marking happens before the depth check on purpose: a URL that was too
// deep once stays visited and is never fetched through another path.
// =============================================================================

use tracing::{debug, info, warn};
use url::Url;

use super::visited::VisitedSet;
use crate::config::CrawlConfig;
use crate::extract::{extract_images, extract_links};
use crate::fetch::Fetcher;
use crate::report::CrawlReport;
use crate::store::ImageSink;

/// A page waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: Url,
    /// Number of link hops from the seed
    pub depth: usize,
}

/// How a single visit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The URL was claimed before, nothing happened
    AlreadyVisited,
    /// Marked visited, but deeper than max_depth so never fetched
    DepthExceeded,
    /// The page could not be fetched, no images and no children
    FetchFailed,
    /// Images processed, links not followed
    Leaf,
    /// Images processed and this many links queued
    Expanded(usize),
}

/// Drives one crawl from a seed URL
///
/// The crawler owns the visited set, so use one Crawler per crawl.
pub struct Crawler<F, S> {
    fetcher: F,
    sink: S,
    config: CrawlConfig,
    visited: VisitedSet,
    report: CrawlReport,
}

impl<F: Fetcher, S: ImageSink> Crawler<F, S> {
    pub fn new(fetcher: F, sink: S, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            sink,
            config,
            visited: VisitedSet::new(),
            report: CrawlReport::default(),
        }
    }

    /// Crawls from `seed` until there is nothing left within the depth limit
    pub async fn run(&mut self, mut seed: Url) -> &CrawlReport {
        // Extracted links carry no fragment, the seed must match them
        seed.set_fragment(None);

        let mut stack = vec![CrawlTask {
            url: seed,
            depth: 0,
        }];

        while let Some(task) = stack.pop() {
            let (_, children) = self.visit(&task).await;

            // Reverse so the first link in the document is popped first
            stack.extend(children.into_iter().rev());
        }

        info!(
            pages = self.visited.len(),
            images = self.report.images_saved,
            "Crawl finished"
        );

        &self.report
    }

    /// Visits one page and returns the tasks for the links it leads to
    pub async fn visit(&mut self, task: &CrawlTask) -> (VisitOutcome, Vec<CrawlTask>) {
        if !self.visited.mark(&task.url) {
            debug!("Already visited: {}", task.url);
            self.report.duplicates_skipped += 1;
            return (VisitOutcome::AlreadyVisited, Vec::new());
        }

        if task.depth > self.config.max_depth {
            debug!("Too deep: {} (Depth: {})", task.url, task.depth);
            self.report.pages_skipped_depth += 1;
            return (VisitOutcome::DepthExceeded, Vec::new());
        }

        info!("Crawling: {} (Depth: {})", task.url, task.depth);

        let body = match self.fetcher.fetch(&task.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch: {} ({})", task.url, e);
                self.report.pages_failed += 1;
                return (VisitOutcome::FetchFailed, Vec::new());
            }
        };
        self.report.pages_crawled += 1;

        // Pages that are not valid UTF-8 still get parsed, bad bytes become U+FFFD
        let html = String::from_utf8_lossy(&body).into_owned();

        for image_url in extract_images(&html, task.url.as_str()) {
            self.download_image(&image_url).await;
        }

        if !self.config.recursive || task.depth >= self.config.max_depth {
            return (VisitOutcome::Leaf, Vec::new());
        }

        let children: Vec<CrawlTask> = extract_links(&html, task.url.as_str())
            .into_iter()
            .map(|url| CrawlTask {
                url,
                depth: task.depth + 1,
            })
            .collect();

        (VisitOutcome::Expanded(children.len()), children)
    }

    // Fetches one image and hands it to the sink; failures are only logged
    async fn download_image(&mut self, url: &Url) {
        info!("Downloading: {}", url);

        let bytes = match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to download: {} ({})", url, e);
                self.report.images_failed += 1;
                return;
            }
        };

        match self.sink.save(url, &bytes).await {
            Ok(path) => {
                info!("Saved to: {}", path.display());
                self.report.images_saved += 1;
            }
            Err(e) => {
                warn!("Failed to save: {}", e);
                self.report.images_unsaved += 1;
            }
        }
    }
}
