//! Application-wide constants.

/// Longest accepted caption, in bytes of the trimmed caption.
pub const MAX_TITLE_BYTES: usize = 20;

/// Default storage directory, relative to the working directory.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/";

/// Default ceiling for a single upload.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 30_000_000;

/// Extra request body allowance on top of the file ceiling for the other form parts.
pub const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;
