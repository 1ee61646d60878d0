//! course material records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::course::CourseId;

string_enum! {
    /// kind of content a material points at.
    #[derive(Default)]
    pub enum MaterialType {
        #[default]
        Document => "DOCUMENT",
        Video => "VIDEO",
        Link => "LINK",
        Assignment => "ASSIGNMENT",
        Presentation => "PRESENTATION",
        Audio => "AUDIO",
    }
}

/// a piece of content attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMaterial {
    /// unique identifier, zero until first saved.
    pub id: u64,

    /// course the material belongs to.
    pub course_id: CourseId,

    /// display title.
    pub title: String,

    /// content kind.
    pub material_type: MaterialType,

    /// where the content lives.
    pub url: String,

    /// optional long description.
    pub description: Option<String>,

    /// size in bytes, for uploaded files.
    pub file_size: Option<i64>,

    /// running time, for audio and video (e.g. "12:30").
    pub duration: Option<String>,

    /// when the material was added.
    pub uploaded_at: DateTime<Utc>,

    /// visible to users outside the course.
    pub is_public: bool,

    /// number of times the material was downloaded.
    pub download_count: i32,
}

impl CourseMaterial {
    /// create a new, private material with no downloads.
    pub fn new(
        course_id: CourseId,
        title: impl Into<String>,
        material_type: MaterialType,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            course_id,
            title: title.into(),
            material_type,
            url: url.into(),
            description: None,
            file_size: None,
            duration: None,
            uploaded_at: Utc::now(),
            is_public: false,
            download_count: 0,
        }
    }
}
