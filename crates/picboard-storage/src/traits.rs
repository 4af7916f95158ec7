//! Storage abstraction trait
//!
//! This module defines the ImageStore trait the HTTP layer talks to.

use std::path::Path;

use async_trait::async_trait;
use picboard_core::models::{GalleryEntry, StoredImage, UploadRequest};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to move upload to {destination}: {reason}")]
    MoveFailed { destination: String, reason: String },

    #[error("Failed to list storage directory {directory}: {reason}")]
    ListFailed { directory: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Image storage abstraction
///
/// The directory it writes to is also the directory it lists, so stored file
/// names double as gallery captions.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Move the uploaded bytes to their derived destination.
    ///
    /// Takes ownership of the upload: the temporary source file is gone when
    /// this returns, whatever the outcome. An existing file at the
    /// destination is replaced.
    async fn persist(&self, file: UploadRequest, caption: &str) -> StorageResult<StoredImage>;

    /// All stored files, sorted by file name descending.
    async fn list(&self) -> StorageResult<Vec<GalleryEntry>>;

    /// Directory written by `persist` and read by `list`.
    fn storage_directory(&self) -> &Path;
}
