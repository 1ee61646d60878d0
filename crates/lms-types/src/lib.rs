//! core types for the lms backend.
//!
//! this crate provides the data structures shared by the database layer
//! and the http server:
//! - [`University`], [`Course`], [`Student`], [`Admin`]: the directory records
//! - [`Enrollment`], [`CourseMaterial`]: course participation and content
//! - [`Tenant`], [`TenantContext`]: tenant records and the per-request context
//! - [`AuthenticatedUser`]: the role-tagged user returned at login
//! - [`Config`]: application configuration

#[macro_use]
mod macros;

mod admin;
mod config;
mod course;
mod course_material;
mod enrollment;
mod error;
mod identity;
mod student;
mod tenant;
mod university;

pub use admin::Admin;
pub use config::{Config, DatabaseConfig};
pub use course::{Course, CourseId, CourseStatus};
pub use course_material::{CourseMaterial, MaterialType};
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use error::Error;
pub use identity::{
    AuthenticatedUser, PLACEHOLDER_UNIVERSITY_ID, Role, SUPER_ADMIN_EMAIL, SUPER_ADMIN_ID,
    SUPER_ADMIN_NAME,
};
pub use student::Student;
pub use tenant::{Tenant, TenantContext, TenantFeature, TenantPlan, TenantStatus};
pub use university::{University, UniversityId, UniversityStatus};

/// result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;
