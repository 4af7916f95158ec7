//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use picboard_core::{Config, ExtensionPolicy};

/// Validate configuration values
///
/// Fails fast on settings the server cannot run with and warns about
/// settings that are allowed but risky.
pub fn validate_config(config: &Config) -> Result<()> {
    config.upload.validate()?;

    if let Some(temp_dir) = config.upload_temp_dir() {
        if !temp_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "UPLOAD_TEMP_DIR {} does not exist or is not a directory",
                temp_dir.display()
            ));
        }
    }

    if config.storage_directory().is_file() {
        return Err(anyhow::anyhow!(
            "UPLOAD_DIR {} is a file, not a directory",
            config.storage_directory().display()
        ));
    }

    if config.upload.extension_policy == ExtensionPolicy::Verbatim && config.is_production() {
        tracing::warn!(
            "EXTENSION_POLICY=verbatim in production - stored files keep client-supplied extensions"
        );
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
