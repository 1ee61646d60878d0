//! login, logout and token endpoints under `/api/auth`.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use lms_types::AuthenticatedUser;

use super::{ApiError, JsonBody};
use crate::AppState;
use crate::auth::AuthError;

/// login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// body of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AuthenticatedUser,
    pub token: String,
}

/// body of a rejected login.
#[derive(Debug, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

/// create the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/validate", get(validate))
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

/// `POST /api/auth/login`
async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Response, ApiError> {
    match state.auth.authenticate(&req.email, &req.password).await {
        Ok(session) => Ok(Json(LoginResponse {
            success: true,
            user: session.user,
            token: session.token,
        })
        .into_response()),
        Err(AuthError::Database(e)) => Err(ApiError::internal(e)),
        Err(e) => Ok((
            StatusCode::BAD_REQUEST,
            Json(LoginFailure {
                success: false,
                message: e.to_string(),
            }),
        )
            .into_response()),
    }
}

/// `POST /api/auth/logout`
///
/// tokens are not tracked, so there is nothing to revoke.
async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully",
    })
}

/// `GET /api/auth/me`
async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthenticatedUser>, ApiError> {
    state
        .auth
        .current_user(authorization(&headers))
        .map(Json)
        .map_err(|e| {
            debug!(error = %e, "current user lookup failed");
            ApiError::unauthorized(e.to_string())
        })
}

/// `GET /api/auth/validate`
async fn validate(State(state): State<AppState>, headers: HeaderMap) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        valid: state.auth.validate_token(authorization(&headers)),
    })
}
