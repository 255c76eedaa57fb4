// src/crawl/mod.rs
// =============================================================================
// This module handles the traversal of a website.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Same-domain restriction for followed links (images may live anywhere)
// - Configurable depth limit, recursion can be switched off entirely
// - Every page URL is visited at most once per run
//
// Rust concepts:
// - Generics: The crawler works with any Fetcher and ImageSink
// - Collections: HashSet for visited URLs, Vec as a stack of tasks
// =============================================================================

mod traversal;
mod visited;

pub use traversal::Crawler;
