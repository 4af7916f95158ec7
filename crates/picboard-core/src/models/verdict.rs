use serde::Serialize;

use crate::config::UploadConfig;
use crate::constants::MAX_TITLE_BYTES;

/// Why an upload was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidFile,
    TitleTooLong,
    DisallowedType,
    TooLarge,
}

impl RejectionReason {
    /// Machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidFile => "INVALID_FILE",
            RejectionReason::TitleTooLong => "TITLE_TOO_LONG",
            RejectionReason::DisallowedType => "DISALLOWED_TYPE",
            RejectionReason::TooLarge => "TOO_LARGE",
        }
    }

    /// Message shown to the uploader. Limits and type lists follow `config`.
    pub fn message(&self, config: &UploadConfig) -> String {
        match self {
            RejectionReason::InvalidFile => "Error: Invalid file upload.".to_string(),
            RejectionReason::TitleTooLong => format!(
                "Error: Title is too long. Max {} characters allowed.",
                MAX_TITLE_BYTES
            ),
            RejectionReason::DisallowedType => format!(
                "Error: Only {} files are allowed.",
                human_list(
                    &config
                        .allowed_mime_types
                        .iter()
                        .map(|mime| mime.canonical_extension())
                        .collect::<Vec<_>>()
                )
            ),
            RejectionReason::TooLarge => format!(
                "Error: File size must not exceed {} bytes.",
                config.max_size_bytes
            ),
        }
    }
}

/// "jpg", "jpg and png", "jpg, png, and gif"
fn human_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Outcome of validating one submission.
///
/// `Rejected` always carries at least one reason, ordered as the checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted,
    Rejected(Vec<RejectionReason>),
}

impl ValidationVerdict {
    pub fn from_reasons(reasons: Vec<RejectionReason>) -> Self {
        if reasons.is_empty() {
            ValidationVerdict::Accepted
        } else {
            ValidationVerdict::Rejected(reasons)
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }

    pub fn reasons(&self) -> &[RejectionReason] {
        match self {
            ValidationVerdict::Accepted => &[],
            ValidationVerdict::Rejected(reasons) => reasons,
        }
    }

    pub fn contains(&self, reason: RejectionReason) -> bool {
        self.reasons().contains(&reason)
    }
}
