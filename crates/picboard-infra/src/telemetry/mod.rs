//! Tracing initialization
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` read from
//! `RUST_LOG` plus a human-readable or JSON formatting layer.

mod init;

pub use init::{init_telemetry, LogFormat, DEFAULT_FILTER};
