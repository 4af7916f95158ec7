use crate::keys::derive_file_name;
use crate::traits::{ImageStore, StorageError, StorageResult};
use async_trait::async_trait;
use picboard_core::models::{GalleryEntry, StoredImage, UploadRequest};
use picboard_core::UploadConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{PathPersistError, TempPath};
use tokio::fs;

/// Local filesystem image store
///
/// Writes accepted uploads to the configured storage directory and lists the
/// same directory for the gallery.
#[derive(Clone)]
pub struct LocalImageStore {
    config: Arc<UploadConfig>,
}

impl LocalImageStore {
    /// Create a new LocalImageStore, creating the storage directory if needed.
    pub async fn new(config: Arc<UploadConfig>) -> StorageResult<Self> {
        fs::create_dir_all(&config.storage_directory)
            .await
            .map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    config.storage_directory.display(),
                    e
                ))
            })?;

        Ok(LocalImageStore { config })
    }

    fn destination(&self, file_name: &str) -> PathBuf {
        self.config.storage_directory.join(file_name)
    }
}

/// Move `source` to `destination`, replacing whatever is there.
///
/// Rename first; when that fails (different file system, for instance) copy
/// the bytes instead. The temporary file is removed in every case.
fn move_into_place(source: TempPath, destination: &Path) -> std::io::Result<()> {
    source
        .persist(destination)
        .or_else(|err| copy_after_failed_rename(err, destination))
}

fn copy_after_failed_rename(err: PathPersistError, destination: &Path) -> std::io::Result<()> {
    tracing::debug!(
        error = %err.error,
        destination = %destination.display(),
        "Rename failed, falling back to copy"
    );
    // err.path still owns the temp file and deletes it when dropped
    std::fs::copy(&err.path, destination).map(|_| ())
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn persist(&self, file: UploadRequest, caption: &str) -> StorageResult<StoredImage> {
        let start = std::time::Instant::now();
        let file_name = derive_file_name(
            caption,
            &file.original_file_name,
            &file.declared_mime_type,
            self.config.extension_policy,
        );
        let path = self.destination(&file_name);

        if file_name == "." {
            return Err(StorageError::MoveFailed {
                destination: path.display().to_string(),
                reason: "derived file name is empty".to_string(),
            });
        }

        let size = file.size_bytes;
        let source = file.source;
        let destination = path.clone();
        tokio::task::spawn_blocking(move || move_into_place(source, &destination))
            .await
            .map_err(|e| StorageError::MoveFailed {
                destination: path.display().to_string(),
                reason: format!("Move task failed: {}", e),
            })?
            .map_err(|e| StorageError::MoveFailed {
                destination: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            path = %path.display(),
            file_name = %file_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredImage {
            derived_file_name: file_name,
            path,
        })
    }

    async fn list(&self) -> StorageResult<Vec<GalleryEntry>> {
        let directory = &self.config.storage_directory;
        let list_failed = |e: std::io::Error| StorageError::ListFailed {
            directory: directory.display().to_string(),
            reason: e.to_string(),
        };

        let mut entries = fs::read_dir(directory).await.map_err(list_failed)?;
        let mut gallery = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(list_failed)? {
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if file_type.is_dir() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => gallery.push(GalleryEntry::new(name, entry.path())),
                Err(raw) => {
                    tracing::warn!(file_name = ?raw, "Skipping file with non UTF-8 name");
                }
            }
        }

        gallery.sort_by(|a, b| b.file_name.cmp(&a.file_name));

        tracing::debug!(
            directory = %directory.display(),
            count = gallery.len(),
            "Listed storage directory"
        );

        Ok(gallery)
    }

    fn storage_directory(&self) -> &Path {
        &self.config.storage_directory
    }
}
