//! integration tests for `/api/courses` and course materials

mod common;

use axum::http::StatusCode;
use common::{course_body, create_university, delete, get, json_request, send, test_app};
use lms_db::Database;
use serde_json::json;

#[tokio::test]
async fn test_course_crud() {
    let (app, _db) = test_app().await;
    let uni_id = create_university(&app, "MIT").await;

    let (status, created) = send(
        &app,
        json_request("POST", "/api/courses", course_body(uni_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["courseName"], "Introduction to Algorithms");
    assert_eq!(created["status"], "ACTIVE");
    assert_eq!(created["universityId"], uni_id);
    let id = created["id"].as_u64().unwrap();

    let (status, fetched) = send(&app, get(&format!("/api/courses/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut changed = course_body(uni_id);
    changed["credits"] = json!(6);
    changed["status"] = json!("INACTIVE");
    let (status, updated) = send(
        &app,
        json_request("PUT", &format!("/api/courses/{}", id), changed),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["credits"], 6);
    assert_eq!(updated["status"], "INACTIVE");

    let (status, list) = send(&app, get("/api/courses")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, delete(&format!("/api/courses/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&format!("/api/courses/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found");
}

#[tokio::test]
async fn test_create_course_with_unknown_university_writes_nothing() {
    let (app, db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/courses", course_body(999)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "University not found");
    assert!(db.list_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_course_is_rejected() {
    let (app, db) = test_app().await;
    let uni_id = create_university(&app, "MIT").await;

    let mut body = course_body(uni_id);
    body["credits"] = json!(11);
    let (status, response) = send(&app, json_request("POST", "/api/courses", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Credits cannot exceed 10");

    let mut body = course_body(uni_id);
    body["status"] = json!("ARCHIVED");
    let (status, response) = send(&app, json_request("POST", "/api/courses", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Status must be ACTIVE or INACTIVE");

    assert!(db.list_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_course() {
    let (app, _db) = test_app().await;
    let uni_id = create_university(&app, "MIT").await;

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/courses/4242", course_body(uni_id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found");
}

#[tokio::test]
async fn test_course_materials() {
    let (app, _db) = test_app().await;
    let uni_id = create_university(&app, "MIT").await;
    let (_, course) = send(
        &app,
        json_request("POST", "/api/courses", course_body(uni_id)),
    )
    .await;
    let course_id = course["id"].as_u64().unwrap();
    let materials_uri = format!("/api/courses/{}/materials", course_id);

    let (status, material) = send(
        &app,
        json_request(
            "POST",
            &materials_uri,
            json!({
                "title": "Lecture 1: Peak finding",
                "type": "VIDEO",
                "url": "https://ocw.mit.edu/6-006/lecture-1",
                "duration": "00:52:10"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(material["type"], "VIDEO");
    assert_eq!(material["courseId"], course_id);
    assert_eq!(material["isPublic"], false);

    let (status, list) = send(&app, get(&materials_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let material_id = material["id"].as_u64().unwrap();
    let material_uri = format!("/api/materials/{}", material_id);
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &material_uri,
            json!({
                "title": "Lecture 1: Peak finding (captioned)",
                "type": "VIDEO",
                "url": "https://ocw.mit.edu/6-006/lecture-1-cc",
                "isPublic": true
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Lecture 1: Peak finding (captioned)");
    assert_eq!(updated["isPublic"], true);
    assert_eq!(updated["courseId"], course_id);
    assert!(updated["duration"].is_null());

    let (status, response) = send(
        &app,
        json_request("PUT", &material_uri, json!({"type": "VIDEO", "url": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Title is required");

    let (status, _) = send(&app, delete(&material_uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, list) = send(&app, get(&materials_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = send(&app, get("/api/courses/777/materials")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_a_json_bad_request() {
    let (app, _db) = test_app().await;

    for uri in ["/api/courses/abc", "/api/materials/-1", "/api/enrollments/1.5"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["message"], "Invalid id", "{}", uri);
    }
}
