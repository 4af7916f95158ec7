//! Upload policy checks
//!
//! Decides whether a submitted caption + file may be stored. Every check runs
//! independently so a rejection lists all of its reasons at once:
//! - file presence and transfer status
//! - caption length (bytes of the trimmed caption)
//! - declared content type, exact match against the allowed set
//! - declared size against the configured ceiling

use std::sync::Arc;

use crate::config::UploadConfig;
use crate::constants::MAX_TITLE_BYTES;
use crate::models::{FileField, ImageMimeType, RejectionReason, UploadRequest, ValidationVerdict};

/// Length of a caption as the policy counts it: UTF-8 bytes after trimming.
pub fn title_length(caption: &str) -> usize {
    caption.trim().len()
}

/// Stateless validator over the process-wide upload configuration.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    config: Arc<UploadConfig>,
}

impl UploadValidator {
    pub fn new(config: Arc<UploadConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Validate one submission.
    pub fn validate(&self, caption: &str, file: &FileField) -> ValidationVerdict {
        let mut reasons = Vec::new();

        if let FileField::TransferFailed { reason } = file {
            tracing::debug!(reason = %reason, "Upload transfer failed");
        }
        let received = file.received();
        if received.is_none() {
            reasons.push(RejectionReason::InvalidFile);
        }

        if !self.is_valid_title(caption) {
            reasons.push(RejectionReason::TitleTooLong);
        }

        if let Some(file) = received {
            if !self.is_allowed_type(file) {
                reasons.push(RejectionReason::DisallowedType);
            }
            if !self.is_within_size_limit(file) {
                reasons.push(RejectionReason::TooLarge);
            }
        }

        let verdict = ValidationVerdict::from_reasons(reasons);
        tracing::debug!(
            accepted = verdict.is_accepted(),
            reasons = ?verdict.reasons(),
            "Upload validated"
        );
        verdict
    }

    pub fn is_valid_title(&self, caption: &str) -> bool {
        title_length(caption) <= MAX_TITLE_BYTES
    }

    pub fn is_allowed_type(&self, file: &UploadRequest) -> bool {
        ImageMimeType::parse_exact(&file.declared_mime_type)
            .is_some_and(|mime| self.config.allowed_mime_types.contains(&mime))
    }

    pub fn is_within_size_limit(&self, file: &UploadRequest) -> bool {
        file.size_bytes <= self.config.max_size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn test_validator() -> UploadValidator {
        UploadValidator::new(Arc::new(UploadConfig::default()))
    }

    fn file(mime: &str, size: u64, name: &str) -> FileField {
        let source = tempfile::NamedTempFile::new().unwrap().into_temp_path();
        FileField::Received(UploadRequest {
            declared_mime_type: mime.to_string(),
            size_bytes: size,
            source,
            original_file_name: name.to_string(),
        })
    }

    #[test]
    fn test_accepts_valid_upload() {
        let validator = test_validator();
        let verdict = validator.validate("My Photo!!", &file("image/jpeg", 1000, "pic.JPG"));
        assert_eq!(verdict, ValidationVerdict::Accepted);
    }

    #[test]
    fn test_accepts_every_default_type_at_the_limit() {
        let validator = test_validator();
        for mime in ["image/jpeg", "image/png", "image/gif"] {
            let verdict = validator.validate("ok", &file(mime, 30_000_000, "a.bin"));
            assert!(verdict.is_accepted(), "{} should be accepted", mime);
        }
    }

    #[test]
    fn test_title_at_twenty_bytes_is_accepted() {
        let validator = test_validator();
        let caption = "a".repeat(20);
        assert!(validator
            .validate(&caption, &file("image/png", 1, "a.png"))
            .is_accepted());
    }

    #[test]
    fn test_long_title_rejected() {
        let validator = test_validator();
        let verdict = validator.validate(
            "a-very-very-long-caption-exceeding-limit",
            &file("image/png", 10, "a.png"),
        );
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![RejectionReason::TitleTooLong])
        );
    }

    #[test]
    fn test_title_length_counts_trimmed_bytes() {
        assert_eq!(title_length("  ok  "), 2);
        // 7 chars, 14 bytes
        assert_eq!(title_length("ééééééé"), 14);

        let validator = test_validator();
        let verdict = validator.validate(&"é".repeat(11), &file("image/png", 1, "a.png"));
        assert!(verdict.contains(RejectionReason::TitleTooLong));
        let padded = format!("   {}   ", "b".repeat(20));
        assert!(validator.is_valid_title(&padded));
    }

    #[test]
    fn test_disallowed_type_rejected() {
        let validator = test_validator();
        let verdict = validator.validate("ok", &file("application/pdf", 10, "doc.pdf"));
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![RejectionReason::DisallowedType])
        );
    }

    #[test]
    fn test_type_match_is_exact() {
        let validator = test_validator();
        for mime in ["IMAGE/JPEG", "image/jpeg ", "image/jpeg; q=1", "image/jpg", ""] {
            let verdict = validator.validate("ok", &file(mime, 10, "a.jpg"));
            assert!(
                verdict.contains(RejectionReason::DisallowedType),
                "{:?} should be rejected",
                mime
            );
        }
    }

    #[test]
    fn test_missing_file_rejected() {
        let validator = test_validator();
        let verdict = validator.validate("ok", &FileField::Absent);
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![RejectionReason::InvalidFile])
        );
    }

    #[test]
    fn test_transfer_error_rejected() {
        let validator = test_validator();
        let field = FileField::TransferFailed {
            reason: "connection reset".to_string(),
        };
        assert!(validator
            .validate("ok", &field)
            .contains(RejectionReason::InvalidFile));
    }

    #[test]
    fn test_too_large_rejected() {
        let validator = test_validator();
        let max = validator.config().max_size_bytes;
        let verdict = validator.validate("ok", &file("image/gif", max + 1, "a.gif"));
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![RejectionReason::TooLarge])
        );
    }

    #[test]
    fn test_reports_every_failing_reason() {
        let validator = test_validator();
        let max = validator.config().max_size_bytes;
        let verdict = validator.validate(
            "this caption is definitely too long",
            &file("text/html", max + 1, "x.html"),
        );
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![
                RejectionReason::TitleTooLong,
                RejectionReason::DisallowedType,
                RejectionReason::TooLarge,
            ])
        );

        let verdict = validator.validate("this caption is definitely too long", &FileField::Absent);
        assert_eq!(
            verdict,
            ValidationVerdict::Rejected(vec![
                RejectionReason::InvalidFile,
                RejectionReason::TitleTooLong,
            ])
        );
    }

    #[test]
    fn test_allowed_set_follows_config() {
        let config = UploadConfig {
            allowed_mime_types: BTreeSet::from([ImageMimeType::Png]),
            ..UploadConfig::default()
        };
        let validator = UploadValidator::new(Arc::new(config));
        assert!(validator
            .validate("ok", &file("image/png", 1, "a.png"))
            .is_accepted());
        assert!(validator
            .validate("ok", &file("image/jpeg", 1, "a.jpg"))
            .contains(RejectionReason::DisallowedType));
    }
}
