//! university endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::debug;

use super::validation::validate_university;
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::university::{self, UniversityDto};

/// create the universities router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_universities).post(create_university))
        .route(
            "/{id}",
            get(get_university)
                .put(update_university)
                .delete(delete_university),
        )
}

/// `GET /api/universities`
async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<UniversityDto>>, ApiError> {
    let universities = university::list(&state.db).await?;
    debug!(count = universities.len(), "listing universities");
    Ok(Json(universities))
}

/// `POST /api/universities`
async fn create_university(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UniversityDto>,
) -> Result<(StatusCode, Json<UniversityDto>), ApiError> {
    validate_university(&req)?;
    let created = university::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/universities/{id}`
async fn get_university(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<UniversityDto>, ApiError> {
    Ok(Json(university::get(&state.db, id).await?))
}

/// `PUT /api/universities/{id}`
async fn update_university(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<UniversityDto>,
) -> Result<Json<UniversityDto>, ApiError> {
    validate_university(&req)?;
    Ok(Json(university::update(&state.db, id, req).await?))
}

/// `DELETE /api/universities/{id}`
///
/// 409 while courses still belong to the university.
async fn delete_university(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    university::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
