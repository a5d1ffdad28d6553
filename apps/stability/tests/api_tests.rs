//! Integration tests for the static file server.
//!
//! Uses axum-test against a router built over a temporary build directory.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use stability::api::{ASSET_CACHE_CONTROL, create_router, handlers::MISSING_INDEX_MESSAGE, serve};
use stability::config::ServerConfig;
use stability::error::AppError;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

const INDEX_HTML: &str = "<!doctype html><title>Stability Calculator</title>";

/// Create a build directory with an index page and one asset.
fn create_dist() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log('ok');").unwrap();
    dir
}

fn create_server(dist: &TempDir) -> TestServer {
    TestServer::new(create_router(dist.path())).unwrap()
}

fn cache_control(response: &axum_test::TestResponse) -> String {
    response
        .header("cache-control")
        .to_str()
        .unwrap()
        .to_string()
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_reports_version() {
    let dist = create_dist();
    let server = create_server(&dist);

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(cache_control(&response), "no-store");

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// STATIC ASSETS
// =============================================================================

#[tokio::test]
async fn test_asset_is_served_with_long_cache() {
    let dist = create_dist();
    let server = create_server(&dist);

    let response = server.get("/assets/app.js").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "console.log('ok');");
    assert_eq!(cache_control(&response), ASSET_CACHE_CONTROL);
}

// =============================================================================
// SPA FALLBACK
// =============================================================================

#[tokio::test]
async fn test_root_serves_index_without_caching() {
    let dist = create_dist();
    let server = create_server(&dist);

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), INDEX_HTML);
    assert_eq!(cache_control(&response), "no-cache");
}

#[tokio::test]
async fn test_unknown_path_serves_index() {
    let dist = create_dist();
    let server = create_server(&dist);

    let response = server.get("/results/summary").await;
    response.assert_status_ok();
    assert_eq!(response.text(), INDEX_HTML);
    assert_eq!(cache_control(&response), "no-cache");
}

#[tokio::test]
async fn test_missing_asset_serves_index() {
    let dist = create_dist();
    let server = create_server(&dist);

    let response = server.get("/assets/missing.js").await;
    response.assert_status_ok();
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_index_is_read_per_request() {
    let dist = create_dist();
    let server = create_server(&dist);

    std::fs::write(dist.path().join("index.html"), "rebuilt").unwrap();

    let response = server.get("/anything").await;
    assert_eq!(response.text(), "rebuilt");
}

#[tokio::test]
async fn test_missing_index_is_a_server_error() {
    let dist = tempfile::tempdir().unwrap();
    let server = create_server(&dist);

    let response = server.get("/").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), MISSING_INDEX_MESSAGE);
    assert_ne!(cache_control(&response), ASSET_CACHE_CONTROL);

    // The server keeps answering.
    server.get("/health").await.assert_status_ok();
}

// =============================================================================
// STARTUP
// =============================================================================

#[tokio::test]
async fn test_serve_refuses_missing_dist() {
    let temp = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        dist_dir: temp.path().join("dist"),
        port: 0,
        ..ServerConfig::default()
    };

    let result = serve(config).await;
    assert!(matches!(result, Err(AppError::DistMissing(_))));
}
