//! api error handling for http handlers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::services::ServiceError;

/// api error type for handler responses
#[derive(Debug)]
pub enum ApiError {
    /// internal server error (500)
    Internal(String),
    /// bad request error (400)
    BadRequest(String),
    /// unauthorized error (401)
    Unauthorized(String),
    /// not found error (404)
    NotFound(String),
    /// conflict error (409)
    Conflict(String),
}

/// json body of every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// create internal server error from any error type
    pub fn internal(e: impl std::fmt::Display) -> Self {
        Self::Internal(e.to_string())
    }

    /// create bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// create unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// create not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// create conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Database(
                e @ (lms_db::Error::AlreadyExists(_) | lms_db::Error::Constraint(_)),
            ) => Self::conflict(e.to_string()),
            ServiceError::Database(lms_db::Error::NotFound(msg)) => Self::NotFound(msg),
            ServiceError::Database(e) => Self::internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => {
                // details go to the log, not the client
                error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
