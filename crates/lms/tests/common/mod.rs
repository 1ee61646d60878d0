//! shared helpers for router-level integration tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use lms::create_app;
use lms_db::LmsDb;
use lms_types::Config;
use serde_json::Value;
use tower::ServiceExt;

/// build the app over a fresh in-memory database.
pub async fn test_app() -> (Router, LmsDb) {
    let db = LmsDb::new_in_memory()
        .await
        .expect("failed to create in-memory database");
    let app = create_app(db.clone(), Config::default());
    (app, db)
}

/// send a request through the router and decode the json body, if any.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// a university body that passes validation.
pub fn university_body(name: &str) -> Value {
    serde_json::json!({
        "uniName": name,
        "estYear": "1861",
        "address": "77 Massachusetts Avenue, Cambridge",
        "status": "ACTIVE",
        "adminName": "Sally Kornbluth",
        "students": 11000,
        "courses": 1200
    })
}

/// a course body that passes validation.
pub fn course_body(university_id: u64) -> Value {
    serde_json::json!({
        "courseName": "Introduction to Algorithms",
        "courseCode": "6.006",
        "description": "Sorting, searching, graphs and dynamic programming.",
        "credits": 4,
        "instructor": "Erik Demaine",
        "universityId": university_id
    })
}

/// create a university through the api and return its id.
pub async fn create_university(app: &Router, name: &str) -> u64 {
    let (status, body) = send(
        app,
        json_request("POST", "/api/universities", university_body(name)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create university: {}", body);
    body["id"].as_u64().expect("university id")
}
