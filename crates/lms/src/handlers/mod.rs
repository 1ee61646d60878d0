//! http handlers for the lms api.

mod api;
mod auth;
mod error;
mod extract;
mod health;

pub use api::router as api_router;
pub use error::ApiError;
pub use extract::{JsonBody, PathParam};
pub use health::health;
