//! enrollment records linking a student to a course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::course::CourseId;

string_enum! {
    /// where an enrollment is in its lifecycle.
    ///
    /// no transition rules are enforced; any value may follow any other.
    #[derive(Default)]
    pub enum EnrollmentStatus {
        #[default]
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Enrolled => "ENROLLED",
        Completed => "COMPLETED",
        Dropped => "DROPPED",
    }
}

/// a student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// unique identifier, zero until first saved.
    pub id: u64,

    /// enrolled student (row id, not the external student code).
    pub student_id: u64,

    /// course enrolled in.
    pub course_id: CourseId,

    /// lifecycle status.
    pub status: EnrollmentStatus,

    /// when the enrollment was created.
    pub enrolled_at: DateTime<Utc>,

    /// when the course was completed.
    pub completed_at: Option<DateTime<Utc>>,

    /// completion percentage. nominally 0-100 but not range checked.
    pub progress: i32,

    /// letter grade, once awarded.
    pub grade: Option<String>,

    /// final numeric score, once awarded.
    pub final_score: Option<f64>,
}

impl Enrollment {
    /// create a new pending enrollment.
    pub fn new(student_id: u64, course_id: CourseId) -> Self {
        Self {
            id: 0,
            student_id,
            course_id,
            status: EnrollmentStatus::default(),
            enrolled_at: Utc::now(),
            completed_at: None,
            progress: 0,
            grade: None,
            final_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enrollment_is_pending() {
        let enrollment = Enrollment::new(7, CourseId(2));
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
        assert_eq!(enrollment.progress, 0);
        assert!(enrollment.completed_at.is_none());
    }

    #[test]
    fn test_progress_is_not_clamped() {
        let mut enrollment = Enrollment::new(1, CourseId(1));
        enrollment.progress = 150;
        assert_eq!(enrollment.progress, 150);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in EnrollmentStatus::ALL {
            assert_eq!(status.as_str().parse::<EnrollmentStatus>().unwrap(), *status);
        }
    }
}
