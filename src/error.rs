// src/error.rs
// =============================================================================
// Error types for the three collaborators of the crawler.
//
// None of these ever aborts a crawl: a FetchError ends the task that hit it,
// a WriteError skips one image, and a ResolveError silently drops a
// reference during extraction.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a page or image could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed")]
    Connect,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Sorts a reqwest error into one of our failure kinds
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        // Convert error to string once, the connect branch needs to inspect it
        let error_string = error.to_string();

        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if error.is_connect() {
            // Connection errors often mean DNS issues or host unreachable
            if error_string.contains("dns") {
                FetchError::Dns
            } else {
                FetchError::Connect
            }
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(error_string)
        }
    }
}

/// Why an image could not be written to disk
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("no file name can be derived from {url}")]
    NoFilename { url: String },

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a src/href could not be turned into an absolute URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("base URL is not usable: {0}")]
    InvalidBase(String),

    #[error("unsupported scheme in {0}")]
    UnsupportedScheme(String),

    #[error("malformed URL: {0}")]
    Malformed(String),
}
