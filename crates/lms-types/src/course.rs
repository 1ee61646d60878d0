//! course records.

use serde::{Deserialize, Serialize};

use crate::university::UniversityId;

/// unique identifier for a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl From<u64> for CourseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

string_enum! {
    /// whether a course is open.
    #[derive(Default)]
    pub enum CourseStatus {
        #[default]
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

/// a course offered by exactly one university.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// unique identifier, zero until first saved.
    pub id: CourseId,

    /// course title.
    pub name: String,

    /// short catalogue code (e.g. "CS101").
    pub code: String,

    /// free-form description.
    pub description: String,

    /// credit count (1-10 when validated at the api boundary).
    pub credits: i32,

    /// instructor name.
    pub instructor: String,

    /// open/closed status.
    pub status: CourseStatus,

    /// owning university.
    pub university_id: UniversityId,
}

impl Course {
    /// create a new, unsaved course belonging to `university_id`.
    pub fn new(name: impl Into<String>, university_id: UniversityId) -> Self {
        Self {
            name: name.into(),
            university_id,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_defaults() {
        let course = Course::new("Operating Systems", UniversityId(3));
        assert_eq!(course.id, CourseId(0));
        assert_eq!(course.university_id, UniversityId(3));
        assert_eq!(course.status, CourseStatus::Active);
        assert!(course.code.is_empty());
    }

    #[test]
    fn test_course_status_all() {
        assert_eq!(
            CourseStatus::ALL,
            &[CourseStatus::Active, CourseStatus::Inactive]
        );
        assert_eq!(CourseStatus::Inactive.to_string(), "INACTIVE");
    }
}
