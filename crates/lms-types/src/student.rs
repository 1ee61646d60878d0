//! student records.

use serde::{Deserialize, Serialize};

use crate::university::UniversityId;

/// a student; the email address is the login key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// unique identifier, zero until first saved.
    pub id: u64,

    /// external student number issued by the university.
    pub student_code: String,

    /// full name.
    pub full_name: String,

    /// email address, used to look the student up at login.
    pub email: String,

    /// declared major.
    pub major: String,

    /// year of study, "1" through "4".
    pub year: String,

    /// contact phone number.
    pub phone_number: Option<String>,

    /// university the student is enrolled at, if any.
    pub university_id: Option<UniversityId>,
}

impl Student {
    /// create a new, unsaved student.
    pub fn new(student_code: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            student_code: student_code.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}
