// src/config.rs
// =============================================================================
// Run configuration and the fixed constants of the crawler.
//
// CrawlConfig is built once from the command line and never changes while
// the crawl runs. The traversal controller only reads it.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default maximum depth when `-l` is not given
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default output directory when `-p` is not given
pub const DEFAULT_SAVE_PATH: &str = "./data/";

/// Timeout applied to every single HTTP request (pages and images)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Client agent string sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; Spider/1.0)";

/// More redirects than this count as a fetch failure
pub const MAX_REDIRECTS: usize = 10;

/// Image extensions we download (compared lowercased, without the dot)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Settings for one crawl
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Follow same-domain links
    pub recursive: bool,
    /// Deepest level that is still fetched (the seed is depth 0)
    pub max_depth: usize,
    /// Directory the images are written to
    pub save_path: PathBuf,
}

/// Everything the command line hands over to the crawler
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    pub crawl: CrawlConfig,
    pub seed_url: String,
    pub json: bool,
}

/// Creates the output directory (and its parents) if it is missing.
pub fn prepare_save_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
