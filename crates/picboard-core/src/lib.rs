//! Picboard Core Library
//!
//! This crate provides the domain models, error types, configuration and the
//! upload validator shared by the storage and HTTP crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, ExtensionPolicy, ServerConfig, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::UploadValidator;
