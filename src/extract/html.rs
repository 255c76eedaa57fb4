// src/extract/html.rs
// =============================================================================
// This module pulls image and link URLs out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Every reference goes through our own resolver and is then parsed with the
// `url` crate, which normalizes it ("../" segments, host case, ...). A
// reference that fails either step is dropped without an error.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use super::resolve::resolve;
use crate::config::IMAGE_EXTENSIONS;
use crate::error::ResolveError;

// Both selectors are constants and known to be valid
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").expect("img selector is valid"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Extracts the images of a page that have a supported extension
///
/// Parameters:
///   html: the page content
///   base_url: the URL the page was fetched from
///
/// Returns: absolute image URLs in document order, without duplicates
pub fn extract_images(html: &str, base_url: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for element in document.select(&IMG_SELECTOR) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };

        let Ok(image_url) = to_absolute(src, base_url) else {
            continue;
        };

        if has_image_extension(&image_url) && seen.insert(image_url.to_string()) {
            images.push(image_url);
        }
    }

    images
}

/// Extracts the links of a page that point to the same host
///
/// Anchors ("#top") and javascript: links are skipped before resolving.
/// The host comparison is plain string equality: no subdomain matching,
/// and the scheme is not compared.
pub fn extract_links(html: &str, base_url: &str) -> Vec<Url> {
    let mut links = Vec::new();

    let base_host = match Url::parse(base_url) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => return links,
        },
        Err(_) => return links,
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if is_skipped_href(href) {
            continue;
        }

        let Ok(mut link) = to_absolute(href, base_url) else {
            continue;
        };

        // "page#a" and "page#b" are the same page
        link.set_fragment(None);

        if link.host_str() == Some(base_host.as_str()) && seen.insert(link.to_string()) {
            links.push(link);
        }
    }

    links
}

// Resolves and parses a reference, failing on anything the url crate rejects
fn to_absolute(reference: &str, base_url: &str) -> Result<Url, ResolveError> {
    let resolved = resolve(reference, base_url)?;
    Url::parse(&resolved).map_err(|_| ResolveError::Malformed(resolved))
}

// Raw hrefs we never follow
fn is_skipped_href(href: &str) -> bool {
    let href = href.trim_start();

    href.starts_with('#')
        || href
            .get(.."javascript:".len())
            .is_some_and(|head| head.eq_ignore_ascii_case("javascript:"))
}

// Checks the lowercased extension of the last path segment
fn has_image_extension(url: &Url) -> bool {
    let file_name = url.path().rsplit('/').next().unwrap_or("");

    match file_name.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}
