use crate::{ImageStore, LocalImageStore, StorageResult};
use picboard_core::UploadConfig;
use std::sync::Arc;

/// Create the image store for the configured storage directory
pub async fn create_store(config: Arc<UploadConfig>) -> StorageResult<Arc<dyn ImageStore>> {
    tracing::debug!(
        storage_directory = %config.storage_directory.display(),
        extension_policy = %config.extension_policy,
        "Creating local image store"
    );

    let store = LocalImageStore::new(config).await?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_store_uses_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            storage_directory: dir.path().join("gallery"),
            ..UploadConfig::default()
        };

        let store = create_store(Arc::new(config)).await.unwrap();

        assert_eq!(store.storage_directory(), dir.path().join("gallery"));
        assert!(dir.path().join("gallery").is_dir());
    }
}
