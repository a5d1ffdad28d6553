//! # HTTP Server Module
//!
//! Static file server for the built Stability Calculator frontend.
//!
//! ## Routes
//!
//! - `GET /health` - Health check
//! - `GET /<asset>` - Files from the build directory, cached for a year
//! - `GET /*` - Anything else gets `index.html` (client-side routing)

pub mod handlers;

use crate::config::{ServerConfig, index_path};
use crate::error::AppError;
use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{HeaderValue, Response, header},
    routing::get,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

/// Cache policy for built assets. Their filenames are content-hashed.
pub const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Build the router for a build directory.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = Arc::new(index_path(dist_dir));
    let spa_fallback = {
        let index = Arc::clone(&index);
        (move || handlers::spa_index(Arc::clone(&index))).into_service()
    };

    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            asset_cache_control,
        ))
        .service(
            ServeDir::new(dist_dir)
                .append_index_html_on_directories(false)
                .fallback(spa_fallback),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Long-lived caching only for files that were actually served.
fn asset_cache_control<B>(response: &Response<B>) -> Option<HeaderValue> {
    response
        .status()
        .is_success()
        .then(|| HeaderValue::from_static(ASSET_CACHE_CONTROL))
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    config.ensure_dist()?;

    let app = create_router(&config.dist_dir);
    let address = config.address();
    let listener = TcpListener::bind(address).await?;

    info!(%address, "Stability Calculator listening");
    info!(dist = %display_dist(&config.dist_dir), "Serving static files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn display_dist(dist_dir: &Path) -> String {
    std::fs::canonicalize(dist_dir)
        .unwrap_or_else(|_| PathBuf::from(dist_dir))
        .display()
        .to_string()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl+C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}
