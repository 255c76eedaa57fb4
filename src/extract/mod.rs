// src/extract/mod.rs
// =============================================================================
// This module finds what a page points to.
//
// Submodules:
// - resolve: Turns a relative src/href into an absolute URL
// - html: Extracts image URLs and same-domain link URLs from a page
// =============================================================================

mod html;
mod resolve;

pub use html::{extract_images, extract_links};
