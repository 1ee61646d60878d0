//! student endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use super::validation::validate_student;
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::student::{self, StudentDto};

/// create the students router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}

async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentDto>>, ApiError> {
    Ok(Json(student::list(&state.db).await?))
}

async fn create_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StudentDto>,
) -> Result<(StatusCode, Json<StudentDto>), ApiError> {
    validate_student(&req)?;
    let created = student::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<StudentDto>, ApiError> {
    Ok(Json(student::get(&state.db, id).await?))
}

async fn update_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<StudentDto>,
) -> Result<Json<StudentDto>, ApiError> {
    validate_student(&req)?;
    Ok(Json(student::update(&state.db, id, req).await?))
}

async fn delete_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    student::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
