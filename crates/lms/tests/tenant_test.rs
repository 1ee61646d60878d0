//! integration tests for host-based tenant resolution and tenant records

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{delete, get, json_request, send, test_app};
use serde_json::json;

fn current_tenant_request(host: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/tenants/current");
    if let Some(host) = host {
        builder = builder.header(header::HOST, host);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

#[tokio::test]
async fn test_subdomain_host_selects_tenant() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, current_tenant_request(Some("iit.lms.com"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenantId"], "iit");
    assert_eq!(body["tenantName"], "iit LMS");
    assert_eq!(body["subdomain"], "iit");
}

#[tokio::test]
async fn test_non_tenant_hosts_fall_back_to_default() {
    let (app, _db) = test_app().await;

    for host in [Some("www.lms.com"), Some("lms.com"), Some("lms.com."), None] {
        let (status, body) = send(&app, current_tenant_request(host)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tenantId"], "default", "host {:?}", host);
        assert_eq!(body["tenantName"], "Default LMS");
    }
}

#[tokio::test]
async fn test_tenant_context_does_not_leak_between_requests() {
    let (app, _db) = test_app().await;

    let (_, first) = send(&app, current_tenant_request(Some("mit.lms.com"))).await;
    let (_, second) = send(&app, current_tenant_request(None)).await;

    assert_eq!(first["tenantId"], "mit");
    assert_eq!(second["tenantId"], "default");
}

#[tokio::test]
async fn test_tenant_lifecycle() {
    let (app, _db) = test_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/tenants",
            json!({
                "name": "IIT",
                "subdomain": "iit",
                "domain": "iit.lms.com",
                "plan": "PREMIUM",
                "features": ["MULTI_UNIVERSITY", "EMAIL_SUPPORT"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "ACTIVE");
    assert_eq!(created["plan"], "PREMIUM");
    assert_eq!(created["maxStudents"], 1000);
    assert_eq!(created["features"], json!(["MULTI_UNIVERSITY", "EMAIL_SUPPORT"]));
    let id = created["id"].as_u64().unwrap();

    let (status, list) = send(&app, get("/api/tenants")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, suspended) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/tenants/{}/status", id),
            json!({"status": "SUSPENDED"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(suspended["status"], "SUSPENDED");
    assert_eq!(suspended["plan"], "PREMIUM");

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/tenants/{}", id),
            json!({"name": "IIT Bombay", "subdomain": "iitb", "domain": "iitb.lms.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["subdomain"], "iitb");
    assert_eq!(updated["plan"], "BASIC");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, _) = send(&app, delete(&format!("/api/tenants/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&format!("/api/tenants/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tenant not found");
}

#[tokio::test]
async fn test_tenant_conflicts_and_validation() {
    let (app, _db) = test_app().await;
    let body = json!({"name": "IIT", "subdomain": "iit", "domain": "iit.lms.com"});

    let (status, _) = send(&app, json_request("POST", "/api/tenants", body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut duplicate = body.clone();
    duplicate["name"] = json!("IIT Madras");
    let (status, _) = send(&app, json_request("POST", "/api/tenants", duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let mut reserved = body;
    reserved["name"] = json!("Portal");
    reserved["subdomain"] = json!("www");
    let (status, response) = send(&app, json_request("POST", "/api/tenants", reserved)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["message"],
        "Subdomain must be a lowercase DNS label other than www"
    );

    let (status, response) = send(
        &app,
        json_request("PUT", "/api/tenants/77/status", json!({"status": "INACTIVE"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Tenant not found");

    let (status, _) = send(&app, delete("/api/tenants/77")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
