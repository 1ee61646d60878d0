//! admin endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use super::validation::validate_admin;
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::admin::{self, AdminDto};

/// create the admins router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins).post(create_admin))
        .route(
            "/{id}",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
}

async fn list_admins(State(state): State<AppState>) -> Result<Json<Vec<AdminDto>>, ApiError> {
    Ok(Json(admin::list(&state.db).await?))
}

async fn create_admin(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AdminDto>,
) -> Result<(StatusCode, Json<AdminDto>), ApiError> {
    validate_admin(&req)?;
    let created = admin::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_admin(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<AdminDto>, ApiError> {
    Ok(Json(admin::get(&state.db, id).await?))
}

async fn update_admin(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<AdminDto>,
) -> Result<Json<AdminDto>, ApiError> {
    validate_admin(&req)?;
    Ok(Json(admin::update(&state.db, id, req).await?))
}

async fn delete_admin(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    admin::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
