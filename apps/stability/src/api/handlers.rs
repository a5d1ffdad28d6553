//! HTTP request handlers.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

/// Cache policy for the single-page entry document.
pub const INDEX_CACHE_CONTROL: &str = "no-cache";

/// Body returned when the entry document cannot be read.
pub const MISSING_INDEX_MESSAGE: &str = "index.html not found. Please rebuild the application.";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Serve `index.html` for any path that is not a built asset.
///
/// The file is read per request so a rebuild is picked up without a restart.
pub async fn spa_index(index_path: Arc<PathBuf>) -> Response {
    match tokio::fs::read(index_path.as_path()).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, INDEX_CACHE_CONTROL),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            error!(path = %index_path.display(), error = %err, "failed to read index.html");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CACHE_CONTROL, "no-store")],
                MISSING_INDEX_MESSAGE,
            )
                .into_response()
        }
    }
}
