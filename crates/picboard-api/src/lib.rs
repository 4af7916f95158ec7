//! Picboard API Library
//!
//! This crate provides the HTTP handlers, page rendering and application setup
//! for the image board.

pub mod constants;
pub mod error;
mod handlers;
pub mod render;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

// Re-exports
pub use error::HttpAppError;
pub use services::upload::{UploadOutcome, UploadService};
pub use state::AppState;
