use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Response,
};
use picboard_core::AppError;

use crate::handlers::gallery::page_response;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Upload image handler
///
/// Extracts the form, runs it through `UploadService` and answers with the
/// gallery page either way.
///
/// # Returns
/// - 200 when the image was stored or the submission had no title
/// - 400 with one error paragraph per rejection reason
/// - 500 when the accepted file could not be stored
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            let err = AppError::InvalidInput(format!(
                "Invalid form submission: {}",
                rejection.body_text()
            ));
            return page_response(&state, Some(err)).await;
        }
    };

    let form = extract_upload_form(multipart, state.config.upload_temp_dir().map(|p| p.as_path())).await;

    match state.upload_service.handle(form).await {
        Ok(_) => page_response(&state, None).await,
        Err(err) => page_response(&state, Some(err)).await,
    }
}
