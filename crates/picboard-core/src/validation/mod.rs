//! Validation modules

pub mod upload;

pub use upload::{title_length, UploadValidator};
