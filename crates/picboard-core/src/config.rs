//! Configuration module
//!
//! This module provides the configuration structures for the server and the
//! upload pipeline. Everything is read once at startup and is immutable
//! afterwards; components receive the pieces they need at construction.

use std::collections::BTreeSet;
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::{DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_UPLOAD_DIR};
use crate::models::ImageMimeType;

// Common constants
const SERVER_PORT: u16 = 8080;

/// How the stored file's extension is chosen.
///
/// Both policies strip every character outside `[A-Za-z0-9]` from the
/// client-supplied extension first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionPolicy {
    /// Keep the client's extension when it matches the validated content
    /// type, otherwise use the content type's canonical extension.
    #[default]
    MatchContentType,
    /// Keep the client's extension whatever it is.
    Verbatim,
}

impl FromStr for ExtensionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "match-content-type" | "match_content_type" => Ok(ExtensionPolicy::MatchContentType),
            "verbatim" => Ok(ExtensionPolicy::Verbatim),
            _ => Err(anyhow::anyhow!("Invalid extension policy: {}", s)),
        }
    }
}

impl Display for ExtensionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ExtensionPolicy::MatchContentType => write!(f, "match-content-type"),
            ExtensionPolicy::Verbatim => write!(f, "verbatim"),
        }
    }
}

/// Upload policy and storage location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    pub storage_directory: PathBuf,
    pub max_size_bytes: u64,
    pub allowed_mime_types: BTreeSet<ImageMimeType>,
    pub extension_policy: ExtensionPolicy,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            storage_directory: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: ImageMimeType::ALL.into_iter().collect(),
            extension_policy: ExtensionPolicy::default(),
        }
    }
}

impl UploadConfig {
    /// Read the upload settings from `lookup` (normally the process environment).
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = UploadConfig::default();

        let storage_directory = lookup("UPLOAD_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_directory);

        let max_size_bytes = match lookup("MAX_FILE_SIZE_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_BYTES must be a valid number"))?,
            None => defaults.max_size_bytes,
        };

        let allowed_mime_types = match lookup("ALLOWED_CONTENT_TYPES") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(ImageMimeType::from_str)
                .collect::<Result<BTreeSet<_>, _>>()?,
            None => defaults.allowed_mime_types,
        };

        let extension_policy = match lookup("EXTENSION_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.extension_policy,
        };

        let config = UploadConfig {
            storage_directory,
            max_size_bytes,
            allowed_mime_types,
            extension_policy,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_BYTES cannot be 0"));
        }

        if self.allowed_mime_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_CONTENT_TYPES must list at least one image type"
            ));
        }

        if self.storage_directory.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
        }

        Ok(())
    }
}

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub server_port: u16,
    pub environment: String,
    pub log_format: String,
    /// Where incoming files are spooled before they are moved into storage.
    pub upload_temp_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        Ok(ServerConfig {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            log_format: lookup("LOG_FORMAT")
                .unwrap_or_else(|| "compact".to_string())
                .to_lowercase(),
            upload_temp_dir: lookup("UPLOAD_TEMP_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: Arc<UploadConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig::from_vars(&lookup)?;
        let upload = UploadConfig::from_vars(&lookup)?;
        Ok(Config {
            server,
            upload: Arc::new(upload),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.server.server_port
    }

    pub fn environment(&self) -> &str {
        &self.server.environment
    }

    pub fn log_format(&self) -> &str {
        &self.server.log_format
    }

    pub fn upload_temp_dir(&self) -> Option<&PathBuf> {
        self.server.upload_temp_dir.as_ref()
    }

    pub fn storage_directory(&self) -> &PathBuf {
        &self.upload.storage_directory
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.upload.max_size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(lookup_from(&[])).unwrap();
        assert_eq!(config.server_port(), 8080);
        assert_eq!(config.environment(), "development");
        assert!(!config.is_production());
        assert_eq!(config.storage_directory(), &PathBuf::from("uploads/"));
        assert_eq!(config.max_file_size_bytes(), 30_000_000);
        assert_eq!(config.upload.allowed_mime_types.len(), 3);
        assert_eq!(
            config.upload.extension_policy,
            ExtensionPolicy::MatchContentType
        );
        assert!(config.upload_temp_dir().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(lookup_from(&[
            ("PORT", "3000"),
            ("APP_ENV", "prod"),
            ("UPLOAD_DIR", "/srv/gallery"),
            ("MAX_FILE_SIZE_BYTES", "1024"),
            ("ALLOWED_CONTENT_TYPES", "image/png, image/gif"),
            ("EXTENSION_POLICY", "verbatim"),
        ]))
        .unwrap();
        assert_eq!(config.server_port(), 3000);
        assert!(config.is_production());
        assert_eq!(config.storage_directory(), &PathBuf::from("/srv/gallery"));
        assert_eq!(config.max_file_size_bytes(), 1024);
        assert_eq!(
            config.upload.allowed_mime_types,
            BTreeSet::from([ImageMimeType::Png, ImageMimeType::Gif])
        );
        assert_eq!(config.upload.extension_policy, ExtensionPolicy::Verbatim);
    }

    #[test]
    fn test_rejects_unknown_content_type() {
        let result = Config::from_vars(lookup_from(&[(
            "ALLOWED_CONTENT_TYPES",
            "image/png,application/x-php",
        )]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_size_and_empty_type_list() {
        assert!(Config::from_vars(lookup_from(&[("MAX_FILE_SIZE_BYTES", "0")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("MAX_FILE_SIZE_BYTES", "lots")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("ALLOWED_CONTENT_TYPES", " , ")])).is_err());
    }

    #[test]
    fn test_rejects_invalid_port_and_policy() {
        assert!(Config::from_vars(lookup_from(&[("PORT", "http")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("EXTENSION_POLICY", "whatever")])).is_err());
    }

    #[test]
    fn test_extension_policy_round_trips_through_display() {
        for policy in [ExtensionPolicy::MatchContentType, ExtensionPolicy::Verbatim] {
            assert_eq!(policy.to_string().parse::<ExtensionPolicy>().unwrap(), policy);
        }
    }
}
