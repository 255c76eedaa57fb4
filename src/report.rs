// src/report.rs
// =============================================================================
// Running tally of what a crawl did, printed once the crawl is over.
//
// The report is purely informational: the process exits with 0 after a
// crawl no matter how many fetches or saves failed.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

/// Counters collected by the traversal controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    /// Pages fetched successfully
    pub pages_crawled: usize,
    /// Pages whose fetch failed
    pub pages_failed: usize,
    /// Pages marked visited but not fetched because they were too deep
    pub pages_skipped_depth: usize,
    /// Tasks dropped because their URL was already visited
    pub duplicates_skipped: usize,
    /// Images written to disk
    pub images_saved: usize,
    /// Images whose download failed
    pub images_failed: usize,
    /// Images downloaded but not written
    pub images_unsaved: usize,
}

/// Prints the report either as a table or JSON
pub fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

// Prints the report as a human-readable table in the terminal
fn print_table(report: &CrawlReport) {
    let rows = [
        ("Pages crawled", report.pages_crawled),
        ("Pages failed", report.pages_failed),
        ("Pages beyond depth", report.pages_skipped_depth),
        ("Duplicate visits", report.duplicates_skipped),
        ("Images saved", report.images_saved),
        ("Downloads failed", report.images_failed),
        ("Saves failed", report.images_unsaved),
    ];

    println!();
    println!("{:<25} {:>10}", "EVENT", "COUNT");
    println!("{}", "=".repeat(36));
    for (label, count) in rows {
        println!("{:<25} {:>10}", label, count);
    }
    println!();
}
