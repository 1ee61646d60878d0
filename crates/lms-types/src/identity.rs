//! role-tagged identities returned by the auth resolver.

use serde::{Deserialize, Serialize};

/// login address of the built-in super administrator.
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@lms.com";

/// fixed identifier reported for the super administrator.
pub const SUPER_ADMIN_ID: &str = "1";

/// display name reported for the super administrator.
pub const SUPER_ADMIN_NAME: &str = "Super Administrator";

/// university id reported when no real relation is available.
///
/// admins are tied to a university by name only, and students may have
/// no university; both report this value in that case.
pub const PLACEHOLDER_UNIVERSITY_ID: &str = "1";

/// the role a user logs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// platform-wide administrator.
    SuperAdmin,
    /// administrator of a single university.
    UniversityAdmin,
    /// enrolled student.
    Student,
}

impl Role {
    /// wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::UniversityAdmin => "university_admin",
            Role::Student => "student",
        }
    }

    /// prefix of session tokens issued for this role.
    pub fn token_prefix(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin_token_",
            Role::UniversityAdmin => "admin_token_",
            Role::Student => "student_token_",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// a logged-in user, tagged by role.
///
/// serializes as a flat object with a `role` field and camelCase keys,
/// e.g. `{"role":"student","id":"4","studentId":"S-1001",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AuthenticatedUser {
    /// the built-in super administrator.
    SuperAdmin {
        /// always [`SUPER_ADMIN_ID`]
        id: String,
        /// always [`SUPER_ADMIN_EMAIL`]
        email: String,
        /// always [`SUPER_ADMIN_NAME`]
        name: String,
    },
    /// an administrator loaded from the admin table.
    UniversityAdmin {
        /// admin row id
        id: String,
        /// admin email
        email: String,
        /// admin display name
        name: String,
        /// university the admin manages, by name
        university_name: String,
        /// always [`PLACEHOLDER_UNIVERSITY_ID`]
        university_id: String,
    },
    /// a student loaded from the student table.
    Student {
        /// student row id
        id: String,
        /// student email
        email: String,
        /// student full name
        name: String,
        /// external student number
        student_id: String,
        /// declared major
        major: String,
        /// year of study
        year: String,
        /// linked university id, or [`PLACEHOLDER_UNIVERSITY_ID`]
        university_id: String,
    },
}

impl AuthenticatedUser {
    /// the synthetic super administrator.
    pub fn super_admin() -> Self {
        Self::SuperAdmin {
            id: SUPER_ADMIN_ID.to_string(),
            email: SUPER_ADMIN_EMAIL.to_string(),
            name: SUPER_ADMIN_NAME.to_string(),
        }
    }

    /// role this user logged in as.
    pub fn role(&self) -> Role {
        match self {
            Self::SuperAdmin { .. } => Role::SuperAdmin,
            Self::UniversityAdmin { .. } => Role::UniversityAdmin,
            Self::Student { .. } => Role::Student,
        }
    }

    /// user identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::SuperAdmin { id, .. }
            | Self::UniversityAdmin { id, .. }
            | Self::Student { id, .. } => id,
        }
    }

    /// user email.
    pub fn email(&self) -> &str {
        match self {
            Self::SuperAdmin { email, .. }
            | Self::UniversityAdmin { email, .. }
            | Self::Student { email, .. } => email,
        }
    }

    /// user display name.
    pub fn name(&self) -> &str {
        match self {
            Self::SuperAdmin { name, .. }
            | Self::UniversityAdmin { name, .. }
            | Self::Student { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_token_prefixes() {
        assert_eq!(Role::SuperAdmin.token_prefix(), "super_admin_token_");
        assert_eq!(Role::UniversityAdmin.token_prefix(), "admin_token_");
        assert_eq!(Role::Student.token_prefix(), "student_token_");
    }

    #[test]
    fn test_super_admin_serialization() {
        let json = serde_json::to_value(AuthenticatedUser::super_admin()).unwrap();
        assert_eq!(json["role"], "super_admin");
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "superadmin@lms.com");
        assert_eq!(json["name"], "Super Administrator");
    }

    #[test]
    fn test_student_serialization_uses_camel_case() {
        let user = AuthenticatedUser::Student {
            id: "4".to_string(),
            email: "ravi@iit.edu".to_string(),
            name: "Ravi Kumar".to_string(),
            student_id: "S-1001".to_string(),
            major: "Physics".to_string(),
            year: "2".to_string(),
            university_id: "9".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["studentId"], "S-1001");
        assert_eq!(json["universityId"], "9");
        assert!(json.get("student_id").is_none());
    }

    #[test]
    fn test_accessors() {
        let user = AuthenticatedUser::UniversityAdmin {
            id: "3".to_string(),
            email: "dean@iit.edu".to_string(),
            name: "Dean".to_string(),
            university_name: "IIT".to_string(),
            university_id: PLACEHOLDER_UNIVERSITY_ID.to_string(),
        };
        assert_eq!(user.role(), Role::UniversityAdmin);
        assert_eq!(user.id(), "3");
        assert_eq!(user.email(), "dean@iit.edu");
        assert_eq!(user.name(), "Dean");
    }
}
