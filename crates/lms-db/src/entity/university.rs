//! university entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{University, UniversityId};

use super::parse_stored;

/// university database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "universities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub established_year: String,
    pub address: String,
    /// universitystatus as string
    pub status: String,
    pub admin_name: String,
    pub student_count: i32,
    pub course_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for University {
    fn from(model: Model) -> Self {
        University {
            id: UniversityId(model.id as u64),
            status: parse_stored("universities", model.id, "status", &model.status),
            name: model.name,
            established_year: model.established_year,
            address: model.address,
            admin_name: model.admin_name,
            student_count: model.student_count,
            course_count: model.course_count,
        }
    }
}

impl From<&University> for ActiveModel {
    fn from(university: &University) -> Self {
        ActiveModel {
            id: if university.id.0 == 0 {
                NotSet
            } else {
                Set(university.id.0 as i64)
            },
            name: Set(university.name.clone()),
            established_year: Set(university.established_year.clone()),
            address: Set(university.address.clone()),
            status: Set(university.status.as_str().to_string()),
            admin_name: Set(university.admin_name.clone()),
            student_count: Set(university.student_count),
            course_count: Set(university.course_count),
        }
    }
}
