// src/fetch/http.rs
// =============================================================================
// The real fetcher, backed by a reqwest client.
//
// Key functionality:
// - One shared client (connection pooling) for pages and images
// - Fixed timeout and identifying User-Agent on every request
// - Redirects are followed up to a limit, more than that is a failure
// - Non-2xx responses are failures, just like network errors
// =============================================================================

use async_trait::async_trait;
use reqwest::{redirect, Client};
use url::Url;

use super::Fetcher;
use crate::config::{FETCH_TIMEOUT, MAX_REDIRECTS, USER_AGENT};
use crate::error::FetchError;

/// Fetches URLs over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        // 4xx and 5xx turn into errors here
        let response = response.error_for_status().map_err(FetchError::from_reqwest)?;

        let body = response.bytes().await.map_err(FetchError::from_reqwest)?;
        Ok(body.to_vec())
    }
}
