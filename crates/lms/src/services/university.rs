//! university service.

use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::{University, UniversityId};

use super::{ServiceError, ServiceResult, parse_status};

/// external representation of a university.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UniversityDto {
    pub id: Option<u64>,
    pub uni_name: String,
    pub est_year: String,
    pub address: String,
    /// `ACTIVE` or `INACTIVE`; omitted status is stored as `ACTIVE`
    pub status: Option<String>,
    pub admin_name: String,
    pub students: i32,
    pub courses: i32,
}

impl From<University> for UniversityDto {
    fn from(university: University) -> Self {
        Self {
            id: Some(university.id.0),
            uni_name: university.name,
            est_year: university.established_year,
            address: university.address,
            status: Some(university.status.as_str().to_string()),
            admin_name: university.admin_name,
            students: university.student_count,
            courses: university.course_count,
        }
    }
}

impl UniversityDto {
    /// overwrite every mutable field of `university` from this dto.
    fn apply_to(self, university: &mut University) {
        university.name = self.uni_name;
        university.established_year = self.est_year;
        university.address = self.address;
        university.status = parse_status(self.status.as_deref());
        university.admin_name = self.admin_name;
        university.student_count = self.students;
        university.course_count = self.courses;
    }
}

fn not_found(id: u64) -> ServiceError {
    ServiceError::not_found(format!("University not found with id: {}", id))
}

/// create a university. any id in the dto is ignored.
pub async fn create(db: &impl Database, dto: UniversityDto) -> ServiceResult<UniversityDto> {
    let mut university = University::default();
    dto.apply_to(&mut university);

    let created = db.create_university(&university).await?;
    info!(university_id = created.id.0, name = %created.name, "university created");
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<UniversityDto> {
    db.get_university(UniversityId(id))
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found(id))
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<UniversityDto>> {
    let universities = db.list_universities().await?;
    Ok(universities.into_iter().map(Into::into).collect())
}

/// overwrite a university from the dto.
pub async fn update(
    db: &impl Database,
    id: u64,
    dto: UniversityDto,
) -> ServiceResult<UniversityDto> {
    let mut university = db
        .get_university(UniversityId(id))
        .await?
        .ok_or_else(|| not_found(id))?;
    dto.apply_to(&mut university);

    let updated = db.update_university(&university).await?;
    info!(university_id = id, "university updated");
    Ok(updated.into())
}

/// delete a university. students linked to it become unlinked.
pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_university(UniversityId(id)).await?.is_none() {
        return Err(not_found(id));
    }
    db.delete_university(UniversityId(id)).await?;
    info!(university_id = id, "university deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_db::LmsDb;

    fn sample() -> UniversityDto {
        UniversityDto {
            uni_name: "Indian Institute of Technology".to_string(),
            est_year: "1951".to_string(),
            address: "Kharagpur, West Bengal".to_string(),
            admin_name: "Dean Rao".to_string(),
            students: 12000,
            courses: 300,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_defaults_status_to_active() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let created = create(&db, sample()).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.status.as_deref(), Some("ACTIVE"));
        assert_eq!(created.students, 12000);
    }

    #[tokio::test]
    async fn test_missing_university_message_includes_id() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let err = get(&db, 77).await.unwrap_err();
        assert_eq!(err.to_string(), "University not found with id: 77");

        let err = delete(&db, 77).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_everything() {
        let db = LmsDb::new_in_memory().await.unwrap();
        let created = create(&db, sample()).await.unwrap();
        let id = created.id.unwrap();

        let updated = update(
            &db,
            id,
            UniversityDto {
                uni_name: "IIT Kharagpur".to_string(),
                status: Some("INACTIVE".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.uni_name, "IIT Kharagpur");
        assert_eq!(updated.status.as_deref(), Some("INACTIVE"));
        assert_eq!(updated.est_year, "");
        assert_eq!(updated.students, 0);
    }

    #[tokio::test]
    async fn test_list_in_storage_order() {
        let db = LmsDb::new_in_memory().await.unwrap();
        for name in ["A University", "B University", "C University"] {
            create(
                &db,
                UniversityDto {
                    uni_name: name.to_string(),
                    ..sample()
                },
            )
            .await
            .unwrap();
        }

        let names: Vec<String> = list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.uni_name)
            .collect();
        assert_eq!(names, ["A University", "B University", "C University"]);
    }
}
