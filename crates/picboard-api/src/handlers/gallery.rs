use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use picboard_core::AppError;

use crate::error::{app_error_from_storage, log_error, status_code, HttpAppError};
use crate::render;
use crate::state::AppState;

/// Render the gallery page, with `error` (if any) shown above the form.
///
/// The gallery is listed on every path. A listing failure adds its own
/// message and turns a 200 into a 500.
pub(crate) async fn page_response(state: &AppState, error: Option<AppError>) -> Response {
    let mut status = StatusCode::OK;
    let mut messages = Vec::new();

    if let Some(err) = &error {
        log_error(err);
        status = status_code(err);
        messages = err.user_messages(&state.config.upload);
    }

    let entries = match state.store.list().await {
        Ok(entries) => entries,
        Err(e) => {
            let err = app_error_from_storage(e);
            log_error(&err);
            if status == StatusCode::OK {
                status = status_code(&err);
            }
            messages.extend(err.user_messages(&state.config.upload));
            Vec::new()
        }
    };

    let page = render::gallery_page(&messages, &entries);
    (status, Html(page.into_string())).into_response()
}

/// Gallery page handler
#[tracing::instrument(skip(state), fields(operation = "show_gallery"))]
pub async fn show_gallery(State(state): State<Arc<AppState>>) -> Response {
    page_response(&state, None).await
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpAppError {
    HttpAppError(AppError::NotFound("Page not found".to_string()))
}
