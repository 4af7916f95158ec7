//! Route configuration and setup

mod health;

use crate::constants::UPLOADS_ROUTE;
use crate::handlers;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use picboard_core::constants::MULTIPART_OVERHEAD_BYTES;
use picboard_core::Config;
use picboard_infra::{request_id_middleware, security_headers_middleware, SecurityHeaders};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let body_limit = body_limit_bytes(config)?;
    tracing::info!(body_limit_bytes = body_limit, "Request body limit configured");

    let security_headers = SecurityHeaders::for_environment(config.is_production());

    let app = Router::new()
        .route(
            "/",
            get(handlers::gallery::show_gallery).post(handlers::upload::upload_image),
        )
        .route("/health", get(health::health_check))
        .nest_service(UPLOADS_ROUTE, ServeDir::new(config.storage_directory()))
        .fallback(handlers::gallery::not_found)
        // Multipart reads past the limit fail mid-transfer and surface as an invalid file
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn_with_state(
                    security_headers,
                    security_headers_middleware,
                )),
        )
        .with_state(state);

    Ok(app)
}

/// Largest accepted request body: the file ceiling plus room for the other form parts.
fn body_limit_bytes(config: &Config) -> Result<usize, anyhow::Error> {
    let limit = config
        .max_file_size_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    usize::try_from(limit)
        .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_BYTES is too large for this platform"))
}
