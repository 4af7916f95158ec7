//! Storage setup and initialization

use anyhow::{Context, Result};
use picboard_core::Config;
use picboard_storage::{create_store, ImageStore};
use std::sync::Arc;

/// Create the image store over the configured storage directory.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ImageStore>> {
    tracing::info!("Initializing image storage...");
    let store = create_store(config.upload.clone())
        .await
        .context("Failed to initialize image storage")?;
    tracing::info!(
        storage_directory = %store.storage_directory().display(),
        "Image storage initialized successfully"
    );
    Ok(store)
}
