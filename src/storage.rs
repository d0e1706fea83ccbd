//! Filesystem-backed blob store for image attachments.
//!
//! Stored values are always relative paths (`bucket/file.ext`); they are
//! resolved to servable URLs only at render time and never persisted as
//! URLs. Deleting a missing file is not an error, mirroring replace and
//! cascade cleanup being best-effort outside the row transaction.

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unsupported image type '{0}'")]
    UnsupportedImageType(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Image types accepted for attachment uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
    Svg,
}

impl ImageKind {
    pub fn from_content_type(content_type: &str) -> Result<ImageKind, StorageError> {
        match content_type {
            "image/jpeg" | "image/jpg" => Ok(ImageKind::Jpeg),
            "image/png" => Ok(ImageKind::Png),
            "image/gif" => Ok(ImageKind::Gif),
            "image/webp" => Ok(ImageKind::Webp),
            "image/svg+xml" => Ok(ImageKind::Svg),
            other => Err(StorageError::UnsupportedImageType(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Gif => "gif",
            ImageKind::Webp => "webp",
            ImageKind::Svg => "svg",
        }
    }
}

#[derive(Clone)]
pub struct BlobStore {
    root: PathBuf,
    base_url: String,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Writes bytes under `bucket` and returns the stored relative path.
    pub async fn store(
        &self,
        bytes: &[u8],
        bucket: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let kind = ImageKind::from_content_type(content_type)?;
        let name = format!(
            "{}_{:08x}.{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            rand::random::<u32>(),
            kind.extension()
        );

        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&name), bytes).await?;

        Ok(format!("{bucket}/{name}"))
    }

    /// Removes a stored file. Missing files are ignored.
    pub async fn delete(&self, path: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.root.join(path)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves a stored path to an absolute URL. Already-absolute URLs pass
    /// through unchanged so re-resolution is a no-op.
    pub fn url_of(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/storage/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
