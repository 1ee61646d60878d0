//! database error types.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// errors that can occur in database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// entity not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// unique constraint violation.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// foreign key violation (referenced row missing, or row still referenced).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// invalid data.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// generic database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Error::AlreadyExists(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return Error::Constraint(msg),
            _ => {}
        }
        match &err {
            DbErr::RecordNotFound(msg) => Error::NotFound(msg.clone()),
            DbErr::RecordNotUpdated => Error::NotFound("record not updated".to_string()),
            DbErr::Conn(e) => Error::Connection(e.to_string()),
            DbErr::ConnectionAcquire(e) => Error::Connection(e.to_string()),
            _ => Error::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
