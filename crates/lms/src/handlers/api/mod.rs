//! rest endpoints under `/api`.

mod admins;
mod courses;
mod enrollments;
mod materials;
mod students;
mod tenants;
mod universities;
mod validation;

use axum::Router;

use crate::AppState;
use crate::handlers::auth;

/// create the `/api` router with all resource endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/universities", universities::router())
        .nest("/courses", courses::router())
        .nest("/students", students::router())
        .nest("/admins", admins::router())
        .nest("/enrollments", enrollments::router())
        .nest("/materials", materials::router())
        .nest("/tenants", tenants::router())
}
