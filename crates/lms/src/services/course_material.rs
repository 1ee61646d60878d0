//! course material service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::{CourseId, CourseMaterial, MaterialType};

use super::{ServiceError, ServiceResult};

/// external representation of a course material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseMaterialDto {
    pub id: Option<u64>,
    /// taken from the request path on create; on update the material
    /// moves to this course when present
    pub course_id: Option<u64>,
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub url: String,
    pub description: Option<String>,
    pub file_size: Option<i64>,
    pub duration: Option<String>,
    /// set by the server on create
    pub uploaded_at: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub download_count: i32,
}

impl From<CourseMaterial> for CourseMaterialDto {
    fn from(material: CourseMaterial) -> Self {
        Self {
            id: Some(material.id),
            course_id: Some(material.course_id.0),
            title: material.title,
            material_type: material.material_type,
            url: material.url,
            description: material.description,
            file_size: material.file_size,
            duration: material.duration,
            uploaded_at: Some(material.uploaded_at),
            is_public: material.is_public,
            download_count: material.download_count,
        }
    }
}

impl CourseMaterialDto {
    /// overwrite every field of `material` except its id, course and upload time.
    fn apply_to(self, material: &mut CourseMaterial) {
        material.title = self.title;
        material.material_type = self.material_type;
        material.url = self.url;
        material.description = self.description;
        material.file_size = self.file_size;
        material.duration = self.duration;
        material.is_public = self.is_public;
        material.download_count = self.download_count;
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Course material not found")
}

async fn require_course(db: &impl Database, course_id: CourseId) -> ServiceResult<()> {
    match db.get_course(course_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::not_found("Course not found")),
    }
}

/// attach a material to an existing course.
pub async fn create(
    db: &impl Database,
    course_id: u64,
    dto: CourseMaterialDto,
) -> ServiceResult<CourseMaterialDto> {
    let course_id = CourseId(course_id);
    require_course(db, course_id).await?;

    let mut material = CourseMaterial::new(course_id, "", MaterialType::default(), "");
    dto.apply_to(&mut material);

    let created = db.create_course_material(&material).await?;
    info!(
        material_id = created.id,
        course_id = course_id.0,
        material_type = %created.material_type,
        "course material added"
    );
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<CourseMaterialDto> {
    db.get_course_material(id)
        .await?
        .map(Into::into)
        .ok_or_else(not_found)
}

/// list the materials of a course.
pub async fn list_for_course(
    db: &impl Database,
    course_id: u64,
) -> ServiceResult<Vec<CourseMaterialDto>> {
    let course_id = CourseId(course_id);
    require_course(db, course_id).await?;

    let materials = db.list_course_materials_for_course(course_id).await?;
    Ok(materials.into_iter().map(Into::into).collect())
}

/// overwrite a course material from the dto.
pub async fn update(
    db: &impl Database,
    id: u64,
    dto: CourseMaterialDto,
) -> ServiceResult<CourseMaterialDto> {
    let mut material = db.get_course_material(id).await?.ok_or_else(not_found)?;

    if let Some(course_id) = dto.course_id.map(CourseId) {
        require_course(db, course_id).await?;
        material.course_id = course_id;
    }
    dto.apply_to(&mut material);

    let updated = db.update_course_material(&material).await?;
    info!(material_id = id, "course material updated");
    Ok(updated.into())
}

pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_course_material(id).await?.is_none() {
        return Err(not_found());
    }
    db.delete_course_material(id).await?;
    info!(material_id = id, "course material deleted");
    Ok(())
}
