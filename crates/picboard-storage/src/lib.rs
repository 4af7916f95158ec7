//! Picboard Storage Library
//!
//! This crate persists accepted uploads and lists them back for the gallery.
//!
//! # File name format
//!
//! A stored image is named `{safe_title}.{extension}` inside the storage
//! directory:
//!
//! - `safe_title` is the caption with every character outside `[A-Za-z0-9-]`
//!   removed. Different captions can map to the same name; the later upload
//!   replaces the earlier file.
//! - `extension` comes from the original file name, restricted to
//!   `[A-Za-z0-9]` and checked against the content type according to the
//!   configured `ExtensionPolicy`.
//!
//! Name derivation is centralized in the `keys` module so the store and the
//! gallery agree on the format.

pub mod factory;
pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store;
pub use keys::{derive_file_name, file_extension, sanitize_title};
pub use local::LocalImageStore;
pub use traits::{ImageStore, StorageError, StorageResult};
