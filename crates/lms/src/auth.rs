//! login and bearer-token resolution.
//!
//! this is a placeholder scheme: every account shares the literal password
//! `"password"`, and a token is just the role prefix followed by the issue
//! time in epoch milliseconds. only super admin tokens can be redeemed.
//!
//! ## Login order
//!
//! 1. wrong password fails with "Invalid credentials"
//! 2. the built-in super admin email
//! 3. admins, by exact email
//! 4. students, by exact email
//! 5. otherwise "User not found"

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use lms_db::Database;
use lms_types::{
    Admin, AuthenticatedUser, PLACEHOLDER_UNIVERSITY_ID, Role, SUPER_ADMIN_EMAIL, Student,
};

/// the single password accepted for every account.
const SHARED_PASSWORD: &str = "password";

/// scheme prefix expected on the authorization header value.
const BEARER_PREFIX: &str = "Bearer ";

/// tokens starting with this are redeemed as the super admin.
const SUPER_ADMIN_TOKEN_MARKER: &str = "super_admin_token";

/// errors from the auth resolver.
///
/// the display text of every variant except `Database` is shown to clients.
#[derive(Debug, Error)]
pub enum AuthError {
    /// password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// no admin or student has this email.
    #[error("User not found")]
    UserNotFound,

    /// authorization value did not start with `Bearer `.
    #[error("Invalid token format")]
    InvalidTokenFormat,

    /// token is not a redeemable super admin token.
    #[error("Invalid token")]
    InvalidToken,

    /// repository failure while looking up the user.
    #[error(transparent)]
    Database(#[from] lms_db::Error),
}

/// a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// who logged in
    pub user: AuthenticatedUser,
    /// opaque bearer token
    pub token: String,
}

/// mint a token for a role at the given instant.
pub fn issue_token(role: Role, at: DateTime<Utc>) -> String {
    format!("{}{}", role.token_prefix(), at.timestamp_millis())
}

fn admin_identity(admin: Admin) -> AuthenticatedUser {
    AuthenticatedUser::UniversityAdmin {
        id: admin.id.to_string(),
        email: admin.email,
        name: admin.admin_name,
        university_name: admin.university_name,
        university_id: PLACEHOLDER_UNIVERSITY_ID.to_string(),
    }
}

fn student_identity(student: Student) -> AuthenticatedUser {
    let university_id = student
        .university_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| PLACEHOLDER_UNIVERSITY_ID.to_string());

    AuthenticatedUser::Student {
        id: student.id.to_string(),
        email: student.email,
        name: student.full_name,
        student_id: student.student_code,
        major: student.major,
        year: student.year,
        university_id,
    }
}

/// resolves credentials and bearer tokens against the user tables.
#[derive(Debug, Clone)]
pub struct AuthService<D> {
    db: D,
}

impl<D: Database> AuthService<D> {
    /// create an auth service over a repository.
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// log in, stamping the token with the current time.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.authenticate_at(email, password, Utc::now()).await
    }

    /// log in with an explicit clock.
    pub async fn authenticate_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthError> {
        if password != SHARED_PASSWORD {
            debug!(email, "login rejected: bad password");
            return Err(AuthError::InvalidCredentials);
        }

        let user = if email == SUPER_ADMIN_EMAIL {
            AuthenticatedUser::super_admin()
        } else if let Some(admin) = self.db.get_admin_by_email(email).await? {
            admin_identity(admin)
        } else if let Some(student) = self.db.get_student_by_email(email).await? {
            student_identity(student)
        } else {
            debug!(email, "login rejected: unknown user");
            return Err(AuthError::UserNotFound);
        };

        let token = issue_token(user.role(), now);
        info!(user_id = user.id(), role = %user.role(), "user logged in");
        Ok(Session { user, token })
    }

    /// resolve the user behind an authorization header value.
    ///
    /// admin and student tokens are never accepted here.
    pub fn current_user(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let token = authorization
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or(AuthError::InvalidTokenFormat)?;

        if token.starts_with(SUPER_ADMIN_TOKEN_MARKER) {
            Ok(AuthenticatedUser::super_admin())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    /// whether `current_user` would succeed for this header value.
    pub fn validate_token(&self, authorization: Option<&str>) -> bool {
        self.current_user(authorization).is_ok()
    }
}
