//! university administrator records.

use serde::{Deserialize, Serialize};

/// a university administrator.
///
/// the link to a university is by name only; nothing checks that
/// `university_name` matches an existing [`crate::University`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// unique identifier, zero until first saved.
    pub id: u64,

    /// email address, used to look the admin up at login.
    pub email: String,

    /// administrator display name.
    pub admin_name: String,

    /// name of the university this admin manages.
    pub university_name: String,
}

impl Admin {
    /// create a new, unsaved admin.
    pub fn new(email: impl Into<String>, admin_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            admin_name: admin_name.into(),
            ..Self::default()
        }
    }
}
