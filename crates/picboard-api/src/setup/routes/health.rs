//! Health check handler.

use axum::{http::StatusCode, response::IntoResponse, Json};

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: &'static str,
}

/// Liveness probe - process is running.
pub(super) async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthCheckResponse { status: "ok" }))
}
