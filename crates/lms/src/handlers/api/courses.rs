//! course endpoints, including a course's materials.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::debug;

use super::validation::{validate_course, validate_material};
use crate::AppState;
use crate::handlers::{ApiError, JsonBody, PathParam};
use crate::services::course::{self, CourseDto};
use crate::services::course_material::{self, CourseMaterialDto};
use crate::tenant::CurrentTenant;

/// create the courses router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/{id}/materials",
            get(list_materials).post(create_material),
        )
}

/// `GET /api/courses`
async fn list_courses(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<CourseDto>>, ApiError> {
    let courses = course::list(&state.db).await?;
    debug!(tenant = %tenant.tenant_id, count = courses.len(), "listing courses");
    Ok(Json(courses))
}

/// `POST /api/courses`
async fn create_course(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CourseDto>,
) -> Result<(StatusCode, Json<CourseDto>), ApiError> {
    validate_course(&req)?;
    let created = course::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/courses/{id}`
async fn get_course(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<CourseDto>, ApiError> {
    Ok(Json(course::get(&state.db, id).await?))
}

/// `PUT /api/courses/{id}`
async fn update_course(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<CourseDto>,
) -> Result<Json<CourseDto>, ApiError> {
    validate_course(&req)?;
    Ok(Json(course::update(&state.db, id, req).await?))
}

/// `DELETE /api/courses/{id}`
async fn delete_course(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ApiError> {
    course::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/courses/{id}/materials`
async fn list_materials(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<Vec<CourseMaterialDto>>, ApiError> {
    Ok(Json(course_material::list_for_course(&state.db, id).await?))
}

/// `POST /api/courses/{id}/materials`
async fn create_material(
    State(state): State<AppState>,
    PathParam(id): PathParam<u64>,
    JsonBody(req): JsonBody<CourseMaterialDto>,
) -> Result<(StatusCode, Json<CourseMaterialDto>), ApiError> {
    validate_material(&req)?;
    let created = course_material::create(&state.db, id, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
