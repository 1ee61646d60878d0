//! university records.

use serde::{Deserialize, Serialize};

/// unique identifier for a university.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversityId(pub u64);

impl From<u64> for UniversityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UniversityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

string_enum! {
    /// whether a university is currently operating.
    #[derive(Default)]
    pub enum UniversityStatus {
        #[default]
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

/// a university registered with the lms.
///
/// `student_count` and `course_count` are figures entered by operators,
/// not counts derived from the student and course tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    /// unique identifier, zero until first saved.
    pub id: UniversityId,

    /// university name.
    pub name: String,

    /// year of establishment, as entered (e.g. "1951").
    pub established_year: String,

    /// postal address.
    pub address: String,

    /// operating status.
    pub status: UniversityStatus,

    /// name of the administrator responsible for this university.
    pub admin_name: String,

    /// reported number of students.
    pub student_count: i32,

    /// reported number of courses.
    pub course_count: i32,
}

impl University {
    /// create a new, unsaved university with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
