//! student entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{Student, UniversityId};

/// student database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_code: String,
    pub full_name: String,
    pub email: String,
    pub major: String,
    pub year: String,
    pub phone_number: Option<String>,
    pub university_id: Option<i64>,
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

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: model.id as u64,
            student_code: model.student_code,
            full_name: model.full_name,
            email: model.email,
            major: model.major,
            year: model.year,
            phone_number: model.phone_number,
            university_id: model.university_id.map(|id| UniversityId(id as u64)),
        }
    }
}

impl From<&Student> for ActiveModel {
    fn from(student: &Student) -> Self {
        ActiveModel {
            id: if student.id == 0 {
                NotSet
            } else {
                Set(student.id as i64)
            },
            student_code: Set(student.student_code.clone()),
            full_name: Set(student.full_name.clone()),
            email: Set(student.email.clone()),
            major: Set(student.major.clone()),
            year: Set(student.year.clone()),
            phone_number: Set(student.phone_number.clone()),
            university_id: Set(student.university_id.map(|id| id.0 as i64)),
        }
    }
}
