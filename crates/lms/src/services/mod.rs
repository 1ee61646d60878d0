//! crud services over the repository layer.
//!
//! each submodule exposes a camelCase dto (the external representation)
//! and free functions generic over [`lms_db::Database`]. services do not
//! validate input; the http layer does that before calling in.
//!
//! updates are wholesale: every field is overwritten from the dto, so
//! fields the client leaves out fall back to their zero value.

pub mod admin;
pub mod course;
pub mod course_material;
pub mod enrollment;
pub mod student;
pub mod tenant;
pub mod university;

use std::str::FromStr;

use thiserror::Error;

use lms_db::Database;
use lms_types::{University, UniversityId};

/// errors returned by the crud services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// the addressed record, or one it references, does not exist.
    #[error("{0}")]
    NotFound(String),

    /// repository failure.
    #[error(transparent)]
    Database(#[from] lms_db::Error),
}

impl ServiceError {
    /// create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// parse a dto status string, treating absent or unknown values as the
/// default. the http layer rejects unknown values before they get here.
fn parse_status<T: FromStr + Default>(status: Option<&str>) -> T {
    status.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// look up a university that another record is about to reference.
async fn require_university(
    db: &impl Database,
    id: Option<u64>,
) -> ServiceResult<University> {
    let Some(id) = id else {
        return Err(ServiceError::not_found("University not found"));
    };
    db.get_university(UniversityId(id))
        .await?
        .ok_or_else(|| ServiceError::not_found("University not found"))
}
