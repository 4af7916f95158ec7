//! Upload pipeline: validate, then store.

mod service;

pub use service::{UploadOutcome, UploadService};
