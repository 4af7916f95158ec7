//! Upload service
//!
//! Runs one form submission through the pipeline: skip submissions without a
//! title, validate, then move the accepted file into storage.

use std::sync::Arc;

use picboard_core::models::{FileField, RejectionReason, StoredImage, ValidationVerdict};
use picboard_core::{AppError, UploadValidator};
use picboard_storage::{sanitize_title, ImageStore};

use crate::error::app_error_from_storage;
use crate::utils::upload::UploadForm;

/// Result of a submission that did not fail.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The title was missing or empty, nothing was validated or stored.
    Skipped,
    Stored(StoredImage),
}

#[derive(Clone)]
pub struct UploadService {
    validator: UploadValidator,
    store: Arc<dyn ImageStore>,
}

impl UploadService {
    pub fn new(validator: UploadValidator, store: Arc<dyn ImageStore>) -> Self {
        Self { validator, store }
    }

    /// Handle one submission.
    ///
    /// A missing or empty title means the form was not really submitted and
    /// is ignored. The emptiness check runs on the raw value, so a title of
    /// only whitespace is validated and stored under an empty caption.
    /// Otherwise the caption is trimmed, validated together with the file,
    /// and the file is persisted under the derived name. The temporary file
    /// is released on every path.
    ///
    /// When the transfer broke off before the title was read, the upload is
    /// rejected as an invalid file instead of being skipped.
    #[tracing::instrument(skip(self, form), fields(operation = "upload_image"))]
    pub async fn handle(&self, form: UploadForm) -> Result<UploadOutcome, AppError> {
        let start = std::time::Instant::now();

        let caption = match form.title.as_deref() {
            Some(title) if !title.is_empty() => title.trim().to_string(),
            Some(_) => {
                tracing::debug!("Empty title submitted, skipping upload");
                return Ok(UploadOutcome::Skipped);
            }
            None => {
                if let FileField::TransferFailed { reason } = &form.file {
                    tracing::info!(reason = %reason, "Upload transfer failed before the title was read");
                    return Err(AppError::UploadRejected(vec![RejectionReason::InvalidFile]));
                }
                tracing::debug!("No title submitted, skipping upload");
                return Ok(UploadOutcome::Skipped);
            }
        };

        if let ValidationVerdict::Rejected(reasons) = self.validator.validate(&caption, &form.file) {
            tracing::info!(
                caption_bytes = caption.len(),
                reasons = ?reasons,
                "Upload rejected"
            );
            return Err(AppError::UploadRejected(reasons));
        }

        let file = form.file.into_received().ok_or_else(|| {
            AppError::Internal("Accepted upload without a received file".to_string())
        })?;
        let size_bytes = file.size_bytes;

        let stored = self
            .store
            .persist(file, &caption)
            .await
            .map_err(app_error_from_storage)?;

        tracing::info!(
            safe_title = %sanitize_title(&caption),
            file_name = %stored.derived_file_name,
            size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Upload stored"
        );

        Ok(UploadOutcome::Stored(stored))
    }
}
