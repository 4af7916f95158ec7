//! The uploaded file as the HTTP layer hands it to the pipeline.

use tempfile::TempPath;

/// One received image file.
///
/// `source` points at the temporary copy of the uploaded bytes. The file is
/// removed when the `TempPath` is dropped, so whoever ends up owning the
/// request (validator rejection, store success or store failure) cleans it up
/// just by letting it go out of scope.
#[derive(Debug)]
pub struct UploadRequest {
    pub declared_mime_type: String,
    pub size_bytes: u64,
    pub source: TempPath,
    pub original_file_name: String,
}

/// State of the `image` form field after the transfer.
#[derive(Debug)]
pub enum FileField {
    /// No file part, or an empty one (no file chosen in the browser).
    Absent,
    /// The part was present but its bytes could not be received.
    TransferFailed { reason: String },
    Received(UploadRequest),
}

impl FileField {
    pub fn received(&self) -> Option<&UploadRequest> {
        match self {
            FileField::Received(file) => Some(file),
            _ => None,
        }
    }

    pub fn into_received(self) -> Option<UploadRequest> {
        match self {
            FileField::Received(file) => Some(file),
            _ => None,
        }
    }
}
