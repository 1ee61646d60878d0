//! `GET /health`

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use lms_db::Database;

use crate::AppState;

/// rfc draft health check media type
const HEALTH_CONTENT_TYPE: &str = "application/health+json; charset=utf-8";

/// how long the database gets to answer a ping
const PING_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn database_reachable(db: &impl Database) -> bool {
    match tokio::time::timeout(PING_TIMEOUT, db.ping()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "database ping failed");
            false
        }
        Err(_) => {
            warn!(timeout_ms = PING_TIMEOUT.as_millis() as u64, "database ping timed out");
            false
        }
    }
}

/// report `pass` with 200 when the database answers, `fail` with 500 otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    let (code, status) = if database_reachable(&state.db).await {
        (StatusCode::OK, "pass")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "fail")
    };

    (
        code,
        [(header::CONTENT_TYPE, HEALTH_CONTENT_TYPE)],
        Json(HealthBody { status }),
    )
        .into_response()
}
