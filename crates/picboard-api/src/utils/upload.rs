//! Multipart form extraction for the upload form
//!
//! The image part is streamed chunk by chunk into a named temporary file, so
//! the bytes never sit in memory as a whole. Transfer problems are not errors
//! here: they are recorded in the returned `FileField` for the validator to
//! report.

use std::path::Path;

use axum::extract::multipart::{Field, Multipart};
use picboard_core::models::{FileField, UploadRequest};
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::constants::{IMAGE_FIELD, TITLE_FIELD};

/// The submitted form, before validation.
#[derive(Debug)]
pub struct UploadForm {
    /// Raw caption, `None` when the field was not sent.
    pub title: Option<String>,
    pub file: FileField,
}

/// Read the `title` and `image` parts of the form.
///
/// Only the first `image` part is kept; unknown fields are ignored. A read
/// error ends the extraction and marks the file as failed unless it was
/// already received in full.
pub async fn extract_upload_form(mut multipart: Multipart, temp_dir: Option<&Path>) -> UploadForm {
    let mut title: Option<String> = None;
    let mut file = FileField::Absent;
    let mut image_seen = false;

    loop {
        let mut field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read multipart field");
                if !matches!(file, FileField::Received(_)) {
                    file = FileField::TransferFailed {
                        reason: e.body_text(),
                    };
                }
                break;
            }
        };

        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == TITLE_FIELD {
            match field.text().await {
                Ok(text) => title = Some(text),
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read title field");
                    if !matches!(file, FileField::Received(_)) {
                        file = FileField::TransferFailed {
                            reason: e.body_text(),
                        };
                    }
                    break;
                }
            }
        } else if field_name == IMAGE_FIELD && !image_seen {
            image_seen = true;
            file = match spool_to_temp_file(&mut field, temp_dir).await {
                Ok(received) => received,
                Err(reason) => {
                    tracing::debug!(reason = %reason, "Image transfer failed");
                    FileField::TransferFailed { reason }
                }
            };
            if matches!(file, FileField::TransferFailed { .. }) {
                break;
            }
        }
    }

    UploadForm { title, file }
}

/// Stream one file part to disk.
async fn spool_to_temp_file(
    field: &mut Field<'_>,
    temp_dir: Option<&Path>,
) -> Result<FileField, String> {
    let original_file_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();
    let declared_mime_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_default();

    let temp_file = match temp_dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .map_err(|e| format!("Failed to create temporary file: {}", e))?;

    // The TempPath removes the file on drop, including on the error paths below
    let (std_file, source) = temp_file.into_parts();
    let mut out = tokio::fs::File::from_std(std_file);

    let mut size_bytes: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| format!("Failed to read file data: {}", e.body_text()))?
    {
        size_bytes += chunk.len() as u64;
        out.write_all(&chunk)
            .await
            .map_err(|e| format!("Failed to write temporary file: {}", e))?;
    }
    out.flush()
        .await
        .map_err(|e| format!("Failed to write temporary file: {}", e))?;

    // Browsers send an empty, unnamed part when no file was chosen
    if size_bytes == 0 && original_file_name.is_empty() {
        return Ok(FileField::Absent);
    }

    tracing::debug!(
        file_name = %original_file_name,
        content_type = %declared_mime_type,
        size_bytes,
        "Received upload"
    );

    Ok(FileField::Received(UploadRequest {
        declared_mime_type,
        size_bytes,
        source,
        original_file_name,
    }))
}
