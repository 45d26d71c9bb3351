//! HTTP tests for health probes, the root banner and the OpenAPI document.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_health_and_liveness() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = app.get("/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_follows_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"][0]["name"], "database");
    assert_eq!(body["checks"][0]["status"], "healthy");

    app.pool.close().await;
    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_root_banner_and_openapi() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().starts_with("Hardware App API"));

    let (status, doc) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Hardware App API");
    assert!(doc["paths"]["/products/"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;
    let (status, _) = app.get("/orders/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
