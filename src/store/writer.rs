// src/store/writer.rs
// =============================================================================
// Writes images into the output directory.
//
// The file name is the last path segment of the URL with every character
// outside [A-Za-z0-9.-] replaced by '_'. Existing files are overwritten, so
// two URLs that sanitize to the same name clobber each other. That is a
// known limitation of the flat output layout.
// =============================================================================

use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

use super::ImageSink;
use crate::error::WriteError;

/// Saves images as flat files under one directory
#[derive(Debug, Clone)]
pub struct DiskWriter {
    save_path: PathBuf,
}

impl DiskWriter {
    /// The directory must already exist
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }
}

#[async_trait]
impl ImageSink for DiskWriter {
    async fn save(&self, url: &Url, bytes: &[u8]) -> Result<PathBuf, WriteError> {
        let filename = filename_for(url).ok_or_else(|| WriteError::NoFilename {
            url: url.to_string(),
        })?;

        let target = self.save_path.join(filename);

        tokio::fs::write(&target, bytes)
            .await
            .map_err(|source| WriteError::Io {
                path: target.clone(),
                source,
            })?;

        Ok(target)
    }
}

/// File name for a URL, or None when the path ends in '/'
///
/// The segment is percent-decoded first, so "photo%20one.jpg" is saved as
/// "photo_one.jpg". Invalid UTF-8 decodes to U+FFFD and then to '_'.
pub fn filename_for(url: &Url) -> Option<String> {
    let last_segment = url.path().rsplit('/').next().unwrap_or("");

    if last_segment.is_empty() {
        return None;
    }

    let decoded = urlencoding::decode_binary(last_segment.as_bytes());
    Some(sanitize_filename(&String::from_utf8_lossy(&decoded)))
}

/// Replaces every character outside [A-Za-z0-9.-] with '_'
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
