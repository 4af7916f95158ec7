//! Data models for the application
//!
//! This module contains the data structures that flow through one upload:
//! the received file, the validation verdict and the stored artifact.

mod gallery;
mod mime;
mod upload;
mod verdict;

// Re-export all models for convenient imports
pub use gallery::{caption_from_file_name, GalleryEntry, StoredImage};
pub use mime::ImageMimeType;
pub use upload::{FileField, UploadRequest};
pub use verdict::{RejectionReason, ValidationVerdict};
