//! HTTP error response conversion
//!
//! This module provides HTTP-specific rendering for AppError.
//!
//! Upload and gallery failures are rendered inside the gallery page by the
//! handlers (see `handlers::gallery::page_response`), using `log_error` and
//! `status_code` from here. `HttpAppError` covers everything that fails
//! outside that page, rendering a small standalone HTML error page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use picboard_core::{AppError, ErrorMetadata, LogLevel};
use picboard_storage::StorageError;

use crate::constants::{GALLERY_UNAVAILABLE_MESSAGE, MOVE_FAILED_MESSAGE};

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from picboard-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

/// Map a storage failure onto the error shown to the uploader.
///
/// The path and OS error stay in the logs; the page only gets a fixed message.
pub fn app_error_from_storage(err: StorageError) -> AppError {
    match err {
        StorageError::MoveFailed { destination, reason } => {
            tracing::error!(
                destination = %destination,
                reason = %reason,
                "Failed to move upload into storage"
            );
            AppError::Storage(MOVE_FAILED_MESSAGE.to_string())
        }
        StorageError::ListFailed { directory, reason } => {
            tracing::error!(
                directory = %directory,
                reason = %reason,
                "Failed to list storage directory"
            );
            AppError::Storage(GALLERY_UNAVAILABLE_MESSAGE.to_string())
        }
        StorageError::ConfigError(msg) => AppError::Internal(msg),
    }
}

pub fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                error_type = error_type,
                error_code = error.error_code(),
                "Error occurred"
            );
        }
    }
}

pub fn status_code(error: &AppError) -> StatusCode {
    StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        let status = status_code(app_error);

        log_error(app_error);

        // client_message never carries details for sensitive errors
        let page = crate::render::error_page(status, &app_error.client_message());
        (status, Html(page.into_string())).into_response()
    }
}
