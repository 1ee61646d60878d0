//! course material endpoints addressed by material id.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use super::validation::validate_material;
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::course_material::{self, CourseMaterialDto};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(get_material)
            .put(update_material)
            .delete(delete_material),
    )
}

/// `GET /api/materials/{id}`
async fn get_material(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<CourseMaterialDto>, ApiError> {
    Ok(Json(course_material::get(&state.db, id).await?))
}

/// `PUT /api/materials/{id}`
async fn update_material(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<CourseMaterialDto>,
) -> Result<Json<CourseMaterialDto>, ApiError> {
    validate_material(&req)?;
    Ok(Json(course_material::update(&state.db, id, req).await?))
}

/// `DELETE /api/materials/{id}`
async fn delete_material(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    course_material::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
