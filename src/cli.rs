// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The flags mirror the classic spider tool:
//   spider [-r] [-l N] [-p PATH] URL
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: The URL is optional at the parser level so we can
//   print our own usage message and exit with code 1
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{CrawlConfig, ParsedConfig, DEFAULT_MAX_DEPTH, DEFAULT_SAVE_PATH};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "spider",
    version = "0.1.0",
    about = "Extract the images of a website, optionally following its links",
    long_about = "spider downloads every .jpg, .jpeg, .png, .gif and .bmp image referenced by a page. \
                  With -r it also follows same-domain links up to the depth given with -l."
)]
pub struct Cli {
    /// URL of the page to start crawling from
    pub url: Option<String>,

    /// Recursively download images from linked pages on the same domain
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Maximum depth level of the recursive download
    #[arg(short = 'l', long = "level", default_value_t = DEFAULT_MAX_DEPTH)]
    pub level: usize,

    /// Directory where downloaded files will be saved
    #[arg(short = 'p', long = "path", default_value = DEFAULT_SAVE_PATH)]
    pub path: PathBuf,

    /// Print the crawl summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Turns the raw arguments into the configuration the crawler runs with.
    ///
    /// Returns None when no seed URL was given.
    pub fn into_parsed(self) -> Option<ParsedConfig> {
        let seed_url = self.url?;

        Some(ParsedConfig {
            crawl: CrawlConfig {
                recursive: self.recursive,
                max_depth: self.level,
                save_path: self.path,
            },
            seed_url,
            json: self.json,
        })
    }
}

/// Usage text printed when the seed URL is missing.
pub const USAGE: &str = "\
Usage: spider [-r] [-l N] [-p PATH] URL
  -r               : recursively downloads images
  -r -l [N]        : indicates the maximum depth level (default: 5)
  -p [PATH]        : indicates the path where files will be saved (default: ./data/)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["spider", "https://example.com"]);
        let parsed = cli.into_parsed().unwrap();

        assert_eq!(parsed.seed_url, "https://example.com");
        assert!(!parsed.crawl.recursive);
        assert_eq!(parsed.crawl.max_depth, 5);
        assert_eq!(parsed.crawl.save_path, PathBuf::from("./data/"));
        assert!(!parsed.json);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["spider", "-r", "-l", "2", "-p", "/tmp/out", "https://example.com"]);
        let parsed = cli.into_parsed().unwrap();

        assert!(parsed.crawl.recursive);
        assert_eq!(parsed.crawl.max_depth, 2);
        assert_eq!(parsed.crawl.save_path, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_missing_url() {
        let cli = Cli::parse_from(["spider", "-r"]);
        assert!(cli.into_parsed().is_none());
    }
}
