//! course service.

use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::{Course, CourseId};

use super::{ServiceError, ServiceResult, parse_status, require_university};

/// external representation of a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Option<u64>,
    pub course_name: String,
    pub course_code: String,
    pub description: String,
    pub credits: i32,
    pub instructor: String,
    /// `ACTIVE` or `INACTIVE`; omitted status is stored as `ACTIVE`
    pub status: Option<String>,
    pub university_id: Option<u64>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: Some(course.id.0),
            course_name: course.name,
            course_code: course.code,
            description: course.description,
            credits: course.credits,
            instructor: course.instructor,
            status: Some(course.status.as_str().to_string()),
            university_id: Some(course.university_id.0),
        }
    }
}

impl CourseDto {
    /// overwrite every field of `course` except its id and university.
    fn apply_to(self, course: &mut Course) {
        course.name = self.course_name;
        course.code = self.course_code;
        course.description = self.description;
        course.credits = self.credits;
        course.instructor = self.instructor;
        course.status = parse_status(self.status.as_deref());
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Course not found")
}

/// create a course under an existing university.
///
/// nothing is written when the university is missing or unknown.
pub async fn create(db: &impl Database, dto: CourseDto) -> ServiceResult<CourseDto> {
    let university = require_university(db, dto.university_id).await?;

    let mut course = Course::new("", university.id);
    dto.apply_to(&mut course);

    let created = db.create_course(&course).await?;
    info!(
        course_id = created.id.0,
        university_id = university.id.0,
        "course created"
    );
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<CourseDto> {
    db.get_course(CourseId(id))
        .await?
        .map(Into::into)
        .ok_or_else(not_found)
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<CourseDto>> {
    let courses = db.list_courses().await?;
    Ok(courses.into_iter().map(Into::into).collect())
}

/// overwrite a course from the dto.
///
/// the university link is kept when `universityId` is omitted and
/// re-resolved when it is present.
pub async fn update(db: &impl Database, id: u64, dto: CourseDto) -> ServiceResult<CourseDto> {
    let mut course = db.get_course(CourseId(id)).await?.ok_or_else(not_found)?;

    if dto.university_id.is_some() {
        course.university_id = require_university(db, dto.university_id).await?.id;
    }
    dto.apply_to(&mut course);

    let updated = db.update_course(&course).await?;
    info!(course_id = id, "course updated");
    Ok(updated.into())
}

/// delete a course together with its enrollments and materials.
pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_course(CourseId(id)).await?.is_none() {
        return Err(not_found());
    }
    db.delete_course(CourseId(id)).await?;
    info!(course_id = id, "course deleted");
    Ok(())
}
