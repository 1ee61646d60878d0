//! enrollment endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::enrollment::{self, EnrollmentDto};

/// create the enrollments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route(
            "/{id}",
            get(get_enrollment)
                .put(update_enrollment)
                .delete(delete_enrollment),
        )
}

async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrollmentDto>>, ApiError> {
    Ok(Json(enrollment::list(&state.db).await?))
}

/// `POST /api/enrollments`
///
/// student and course must exist; progress is stored as given.
async fn create_enrollment(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<EnrollmentDto>,
) -> Result<(StatusCode, Json<EnrollmentDto>), ApiError> {
    let created = enrollment::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_enrollment(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<EnrollmentDto>, ApiError> {
    Ok(Json(enrollment::get(&state.db, id).await?))
}

/// `PUT /api/enrollments/{id}`
///
/// wholesale overwrite; approving, rejecting and grading all go through here.
async fn update_enrollment(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<EnrollmentDto>,
) -> Result<Json<EnrollmentDto>, ApiError> {
    Ok(Json(enrollment::update(&state.db, id, req).await?))
}

async fn delete_enrollment(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    enrollment::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
