//! integration tests for `GET /health`

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_passes_with_live_database() {
    let (app, _db) = common::test_app().await;

    let response = app
        .clone()
        .oneshot(common::get("/health"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/health+json"),
        "unexpected content type {}",
        content_type
    );

    let (_, body) = common::send(&app, common::get("/health")).await;
    assert_eq!(body, serde_json::json!({ "status": "pass" }));
}

#[tokio::test]
async fn test_health_ignores_tenant_host() {
    let (app, _db) = common::test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header(header::HOST, "iit.lms.com")
        .body(Body::empty())
        .expect("failed to build request");
    let (status, body) = common::send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pass");
}
