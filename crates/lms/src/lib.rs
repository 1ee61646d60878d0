//! lms - multi-tenant learning management system backend.
//!
//! serves crud over universities, courses, students, admins, enrollments
//! and course materials, with a per-request tenant context derived from
//! the `Host` header and a placeholder login scheme.

pub mod auth;
pub mod cli;
pub mod handlers;
pub mod services;
pub mod tenant;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use lms_db::LmsDb;
use lms_types::Config;

use crate::auth::AuthService;

/// shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// repository for every entity.
    pub db: LmsDb,
    /// login and token resolution.
    pub auth: AuthService<LmsDb>,
    /// server configuration.
    pub config: Config,
}

/// cors policy admitting the configured frontend origin.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match HeaderValue::from_str(&config.cors_allowed_origin) {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            warn!(
                origin = %config.cors_allowed_origin,
                error = %e,
                "invalid cors origin, cross-origin requests will be refused"
            );
            cors
        }
    }
}

/// create the axum application.
pub fn create_app(db: LmsDb, config: Config) -> Router {
    let cors = cors_layer(&config);
    let state = AppState {
        auth: AuthService::new(db.clone()),
        db,
        config,
    };

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", handlers::api_router())
        .layer(middleware::from_fn(tenant::tenant_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
