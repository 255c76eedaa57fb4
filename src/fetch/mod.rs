// src/fetch/mod.rs
// =============================================================================
// This module retrieves raw bytes for a URL.
//
// The crawler only talks to the Fetcher trait, so tests can swap the real
// HTTP client for an in-memory site.
// =============================================================================

mod http;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// Retrieves the body of a URL
///
/// Any network, DNS, timeout or HTTP status problem comes back as a
/// FetchError; implementations never panic on a bad response.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}
