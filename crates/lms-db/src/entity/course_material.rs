//! course material entity for database storage.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{CourseId, CourseMaterial};

use super::parse_stored;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    /// materialtype as string
    pub material_type: String,
    pub url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub file_size: Option<i64>,
    pub duration: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub is_public: bool,
    pub download_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CourseMaterial {
    fn from(model: Model) -> Self {
        CourseMaterial {
            id: model.id as u64,
            course_id: CourseId(model.course_id as u64),
            material_type: parse_stored(
                "course_materials",
                model.id,
                "material_type",
                &model.material_type,
            ),
            title: model.title,
            url: model.url,
            description: model.description,
            file_size: model.file_size,
            duration: model.duration,
            uploaded_at: model.uploaded_at,
            is_public: model.is_public,
            download_count: model.download_count,
        }
    }
}

impl From<&CourseMaterial> for ActiveModel {
    fn from(material: &CourseMaterial) -> Self {
        ActiveModel {
            id: if material.id == 0 {
                NotSet
            } else {
                Set(material.id as i64)
            },
            course_id: Set(material.course_id.0 as i64),
            title: Set(material.title.clone()),
            material_type: Set(material.material_type.as_str().to_string()),
            url: Set(material.url.clone()),
            description: Set(material.description.clone()),
            file_size: Set(material.file_size),
            duration: Set(material.duration.clone()),
            uploaded_at: Set(material.uploaded_at),
            is_public: Set(material.is_public),
            download_count: Set(material.download_count),
        }
    }
}
