//! tenant endpoints.
//!
//! tenant records are informational; request routing never reads them.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};

use lms_types::{Tenant, TenantContext};

use super::validation::validate_tenant;
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::tenant::{self, StatusChange, TenantDto};
use crate::tenant::CurrentTenant;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tenants).post(create_tenant))
        .route("/current", get(current_tenant))
        .route(
            "/{id}",
            get(get_tenant).put(update_tenant).delete(delete_tenant),
        )
        .route("/{id}/status", put(change_status))
}

/// `GET /api/tenants`
async fn list_tenants(State(state): State<AppState>) -> Result<Json<Vec<Tenant>>, ApiError> {
    Ok(Json(tenant::list(&state.db).await?))
}

/// `POST /api/tenants`
///
/// 409 when the name or subdomain is taken.
async fn create_tenant(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TenantDto>,
) -> Result<(StatusCode, Json<Tenant>), ApiError> {
    validate_tenant(&req)?;
    let created = tenant::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/tenants/current`
///
/// the context resolved from this request's host.
async fn current_tenant(CurrentTenant(tenant): CurrentTenant) -> Json<TenantContext> {
    Json(tenant)
}

/// `GET /api/tenants/{id}`
async fn get_tenant(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(tenant::get(&state.db, id).await?))
}

/// `PUT /api/tenants/{id}`
async fn update_tenant(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<TenantDto>,
) -> Result<Json<Tenant>, ApiError> {
    validate_tenant(&req)?;
    Ok(Json(tenant::update(&state.db, id, req).await?))
}

/// `PUT /api/tenants/{id}/status`
async fn change_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<StatusChange>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(tenant::set_status(&state.db, id, req.status).await?))
}

/// `DELETE /api/tenants/{id}`
async fn delete_tenant(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    tenant::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
