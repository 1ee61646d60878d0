//! course entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{Course, CourseId, UniversityId};

use super::parse_stored;

/// course database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub credits: i32,
    pub instructor: String,
    /// coursestatus as string
    pub status: String,
    pub university_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::university::Entity",
        from = "Column::UniversityId",
        to = "super::university::Column::Id"
    )]
    University,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::course_material::Entity")]
    Materials,
}

impl Related<super::university::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::course_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Course {
            id: CourseId(model.id as u64),
            status: parse_stored("courses", model.id, "status", &model.status),
            name: model.name,
            code: model.code,
            description: model.description,
            credits: model.credits,
            instructor: model.instructor,
            university_id: UniversityId(model.university_id as u64),
        }
    }
}

impl From<&Course> for ActiveModel {
    fn from(course: &Course) -> Self {
        ActiveModel {
            id: if course.id.0 == 0 {
                NotSet
            } else {
                Set(course.id.0 as i64)
            },
            name: Set(course.name.clone()),
            code: Set(course.code.clone()),
            description: Set(course.description.clone()),
            credits: Set(course.credits),
            instructor: Set(course.instructor.clone()),
            status: Set(course.status.as_str().to_string()),
            university_id: Set(course.university_id.0 as i64),
        }
    }
}
