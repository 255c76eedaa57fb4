// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging
// 2. Parse command-line arguments using clap
// 3. Create the output directory
// 4. Crawl from the seed URL, downloading images as we go
// 5. Print a summary and "Done."
//
// Exit codes: 0 once a crawl has run (even if some fetches or saves failed),
// 1 when no usable seed URL was given or setup failed.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - run settings and constants
mod crawl;    // src/crawl/ - traversal controller
mod error;    // src/error.rs - error types
mod extract;  // src/extract/ - image and link extraction
mod fetch;    // src/fetch/ - HTTP retrieval
mod report;   // src/report.rs - crawl summary
mod store;    // src/store/ - writing images to disk

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use cli::{Cli, USAGE};
use config::ParsedConfig;
use crawl::Crawler;
use fetch::HttpFetcher;
use store::DiskWriter;

#[tokio::main]
async fn main() {
    init_logging();

    let Some(parsed) = Cli::parse().into_parsed() else {
        eprintln!("Error: URL is required.");
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    if let Err(e) = run(parsed).await {
        eprintln!("Error: {:#}", e);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    println!("Done.");
}

// Log lines go to stderr so `--json` output on stdout stays clean.
// RUST_LOG=debug also shows skipped duplicates and too-deep pages.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(parsed: ParsedConfig) -> Result<()> {
    let ParsedConfig {
        crawl: config,
        seed_url,
        json,
    } = parsed;

    let seed = Url::parse(&seed_url).map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;
    if !matches!(seed.scheme(), "http" | "https") {
        return Err(anyhow!("URL must start with http:// or https://: {}", seed_url));
    }

    config::prepare_save_dir(&config.save_path).with_context(|| {
        format!(
            "could not create output directory {}",
            config.save_path.display()
        )
    })?;

    let fetcher = HttpFetcher::new()?;
    let writer = DiskWriter::new(config.save_path.clone());

    let mut crawler = Crawler::new(fetcher, writer, config);
    let report = crawler.run(seed).await;

    report::print_report(report, json)?;
    Ok(())
}
