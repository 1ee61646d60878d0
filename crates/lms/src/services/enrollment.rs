//! enrollment service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::{CourseId, Enrollment, EnrollmentStatus};

use super::{ServiceError, ServiceResult};

/// external representation of an enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: Option<u64>,
    /// required on create; kept as is when omitted on update
    pub student_id: Option<u64>,
    /// required on create; kept as is when omitted on update
    pub course_id: Option<u64>,
    /// omitted status is stored as `PENDING`
    pub status: Option<EnrollmentStatus>,
    /// set by the server on create
    pub enrolled_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// percentage; bounds are not enforced
    pub progress: i32,
    pub grade: Option<String>,
    pub final_score: Option<f64>,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: Some(enrollment.id),
            student_id: Some(enrollment.student_id),
            course_id: Some(enrollment.course_id.0),
            status: Some(enrollment.status),
            enrolled_at: Some(enrollment.enrolled_at),
            completed_at: enrollment.completed_at,
            progress: enrollment.progress,
            grade: enrollment.grade,
            final_score: enrollment.final_score,
        }
    }
}

impl EnrollmentDto {
    /// overwrite the progress fields of `enrollment`; links and enrollment
    /// time are left alone.
    fn apply_to(self, enrollment: &mut Enrollment) {
        enrollment.status = self.status.unwrap_or_default();
        enrollment.completed_at = self.completed_at;
        enrollment.progress = self.progress;
        enrollment.grade = self.grade;
        enrollment.final_score = self.final_score;
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Enrollment not found")
}

async fn require_student(db: &impl Database, id: Option<u64>) -> ServiceResult<u64> {
    let missing = || ServiceError::not_found("Student not found");
    let id = id.ok_or_else(missing)?;
    db.get_student(id).await?.ok_or_else(missing)?;
    Ok(id)
}

async fn require_course(db: &impl Database, id: Option<u64>) -> ServiceResult<CourseId> {
    let missing = || ServiceError::not_found("Course not found");
    let id = CourseId(id.ok_or_else(missing)?);
    db.get_course(id).await?.ok_or_else(missing)?;
    Ok(id)
}

/// enroll an existing student in an existing course.
pub async fn create(db: &impl Database, dto: EnrollmentDto) -> ServiceResult<EnrollmentDto> {
    let student_id = require_student(db, dto.student_id).await?;
    let course_id = require_course(db, dto.course_id).await?;

    let mut enrollment = Enrollment::new(student_id, course_id);
    dto.apply_to(&mut enrollment);

    let created = db.create_enrollment(&enrollment).await?;
    info!(
        enrollment_id = created.id,
        student_id = created.student_id,
        course_id = course_id.0,
        "student enrolled"
    );
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<EnrollmentDto> {
    db.get_enrollment(id)
        .await?
        .map(Into::into)
        .ok_or_else(not_found)
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<EnrollmentDto>> {
    let enrollments = db.list_enrollments().await?;
    Ok(enrollments.into_iter().map(Into::into).collect())
}

/// overwrite an enrollment from the dto.
///
/// any status may follow any other. student and course links are
/// re-resolved when present and kept when omitted.
pub async fn update(db: &impl Database, id: u64, dto: EnrollmentDto) -> ServiceResult<EnrollmentDto> {
    let mut enrollment = db.get_enrollment(id).await?.ok_or_else(not_found)?;

    if dto.student_id.is_some() {
        enrollment.student_id = require_student(db, dto.student_id).await?;
    }
    if dto.course_id.is_some() {
        enrollment.course_id = require_course(db, dto.course_id).await?;
    }
    dto.apply_to(&mut enrollment);

    let updated = db.update_enrollment(&enrollment).await?;
    info!(enrollment_id = id, status = %updated.status, "enrollment updated");
    Ok(updated.into())
}

pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_enrollment(id).await?.is_none() {
        return Err(not_found());
    }
    db.delete_enrollment(id).await?;
    info!(enrollment_id = id, "enrollment deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_db::LmsDb;
    use lms_types::{Course, Student, University};

    async fn setup() -> (LmsDb, u64, u64) {
        let db = LmsDb::new_in_memory().await.unwrap();
        let uni = db.create_university(&University::new("MIT")).await.unwrap();
        let course = db.create_course(&Course::new("Compilers", uni.id)).await.unwrap();
        let student = db
            .create_student(&Student::new("STU-0001", "ada@example.com"))
            .await
            .unwrap();
        (db, student.id, course.id.0)
    }

    #[tokio::test]
    async fn test_enroll_defaults_to_pending() {
        let (db, student_id, course_id) = setup().await;

        let created = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(course_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(created.status, Some(EnrollmentStatus::Pending));
        assert_eq!(created.progress, 0);
        assert!(created.enrolled_at.is_some());
        assert_eq!(list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_progress_is_stored_as_given() {
        let (db, student_id, course_id) = setup().await;

        let created = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(course_id),
                progress: 140,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(created.progress, 140);
    }

    #[tokio::test]
    async fn test_enroll_requires_student_and_course() {
        let (db, student_id, course_id) = setup().await;

        let err = create(
            &db,
            EnrollmentDto {
                student_id: Some(999),
                course_id: Some(course_id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Student not found");

        let err = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Course not found");
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_moves_status_without_rules() {
        let (db, student_id, course_id) = setup().await;
        let created = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(course_id),
                status: Some(EnrollmentStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let id = created.id.unwrap();

        // completed back to pending is allowed
        let updated = update(
            &db,
            id,
            EnrollmentDto {
                status: Some(EnrollmentStatus::Pending),
                progress: 10,
                grade: Some("B".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.status, Some(EnrollmentStatus::Pending));
        assert_eq!(updated.progress, 10);
        assert_eq!(updated.grade.as_deref(), Some("B"));
        assert_eq!(updated.student_id, Some(student_id));
        assert_eq!(updated.course_id, Some(course_id));
        assert_eq!(updated.enrolled_at, created.enrolled_at);
    }

    #[tokio::test]
    async fn test_update_is_wholesale() {
        let (db, student_id, course_id) = setup().await;
        let created = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(course_id),
                progress: 75,
                final_score: Some(91.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = update(&db, created.id.unwrap(), EnrollmentDto::default())
            .await
            .unwrap();
        assert_eq!(updated.status, Some(EnrollmentStatus::Pending));
        assert_eq!(updated.progress, 0);
        assert_eq!(updated.final_score, None);
    }

    #[tokio::test]
    async fn test_update_missing_enrollment() {
        let (db, _, course_id) = setup().await;

        let err = update(&db, 404, EnrollmentDto::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Enrollment not found");

        let err = update(
            &db,
            404,
            EnrollmentDto {
                course_id: Some(course_id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Enrollment not found");
    }

    #[tokio::test]
    async fn test_delete_enrollment() {
        let (db, student_id, course_id) = setup().await;
        let created = create(
            &db,
            EnrollmentDto {
                student_id: Some(student_id),
                course_id: Some(course_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        delete(&db, created.id.unwrap()).await.unwrap();
        assert!(matches!(
            get(&db, created.id.unwrap()).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
