//! student service.

use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::Student;

use super::{ServiceError, ServiceResult, require_university};

/// external representation of a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentDto {
    pub id: Option<u64>,
    /// external student number, not the row id
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub major: String,
    pub year: String,
    pub phone_number: Option<String>,
    pub university_id: Option<u64>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            student_id: student.student_code,
            full_name: student.full_name,
            email: student.email,
            major: student.major,
            year: student.year,
            phone_number: student.phone_number,
            university_id: student.university_id.map(|id| id.0),
        }
    }
}

/// build the stored record, resolving the university when one is named.
async fn to_student(db: &impl Database, id: u64, dto: StudentDto) -> ServiceResult<Student> {
    let university_id = match dto.university_id {
        Some(_) => Some(require_university(db, dto.university_id).await?.id),
        None => None,
    };

    Ok(Student {
        id,
        student_code: dto.student_id,
        full_name: dto.full_name,
        email: dto.email,
        major: dto.major,
        year: dto.year,
        phone_number: dto.phone_number,
        university_id,
    })
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Student not found")
}

pub async fn create(db: &impl Database, dto: StudentDto) -> ServiceResult<StudentDto> {
    let student = to_student(db, 0, dto).await?;
    let created = db.create_student(&student).await?;
    info!(student_id = created.id, "student created");
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<StudentDto> {
    db.get_student(id)
        .await?
        .map(Into::into)
        .ok_or_else(not_found)
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<StudentDto>> {
    let students = db.list_students().await?;
    Ok(students.into_iter().map(Into::into).collect())
}

/// overwrite a student from the dto, including the university link.
pub async fn update(db: &impl Database, id: u64, dto: StudentDto) -> ServiceResult<StudentDto> {
    if db.get_student(id).await?.is_none() {
        return Err(not_found());
    }
    let student = to_student(db, id, dto).await?;

    let updated = db.update_student(&student).await?;
    info!(student_id = id, "student updated");
    Ok(updated.into())
}

/// delete a student together with their enrollments.
pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_student(id).await?.is_none() {
        return Err(not_found());
    }
    db.delete_student(id).await?;
    info!(student_id = id, "student deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_db::LmsDb;
    use lms_types::University;

    fn sample() -> StudentDto {
        StudentDto {
            student_id: "STU-1001".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            major: "Mathematics".to_string(),
            year: "2".to_string(),
            phone_number: Some("+441234567890".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_unlinked_student() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let created = create(&db, sample()).await.unwrap();
        assert_eq!(created.university_id, None);
        assert_eq!(created.student_id, "STU-1001");
    }

    #[tokio::test]
    async fn test_create_with_unknown_university() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let dto = StudentDto {
            university_id: Some(3),
            ..sample()
        };
        let err = create(&db, dto).await.unwrap_err();
        assert_eq!(err.to_string(), "University not found");
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_links_and_unlinks() {
        let db = LmsDb::new_in_memory().await.unwrap();
        let uni = db.create_university(&University::new("ETH")).await.unwrap();
        let created = create(&db, sample()).await.unwrap();
        let id = created.id.unwrap();

        let linked = update(
            &db,
            id,
            StudentDto {
                university_id: Some(uni.id.0),
                ..sample()
            },
        )
        .await
        .unwrap();
        assert_eq!(linked.university_id, Some(uni.id.0));

        let unlinked = update(&db, id, sample()).await.unwrap();
        assert_eq!(unlinked.university_id, None);
    }

    #[tokio::test]
    async fn test_unknown_student() {
        let db = LmsDb::new_in_memory().await.unwrap();
        assert_eq!(get(&db, 1).await.unwrap_err().to_string(), "Student not found");
        assert!(matches!(delete(&db, 1).await, Err(ServiceError::NotFound(_))));
    }
}
