// src/store/mod.rs
// =============================================================================
// This module persists downloaded images.
//
// Submodules:
// - writer: Derives a safe file name from a URL and writes the bytes
// =============================================================================

mod writer;

use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

use crate::error::WriteError;

pub use writer::DiskWriter;

/// Somewhere to put the bytes of a downloaded image
#[async_trait]
pub trait ImageSink: Send + Sync {
    /// Stores `bytes` for `url` and returns where they ended up
    async fn save(&self, url: &Url, bytes: &[u8]) -> Result<PathBuf, WriteError>;
}
