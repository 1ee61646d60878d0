//! enrollment entity for database storage.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{CourseId, Enrollment};

use super::parse_stored;

/// enrollment database model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// enrollmentstatus as string
    pub status: String,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: i32,
    pub grade: Option<String>,
    pub final_score: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment {
            id: model.id as u64,
            student_id: model.student_id as u64,
            course_id: CourseId(model.course_id as u64),
            status: parse_stored("enrollments", model.id, "status", &model.status),
            enrolled_at: model.enrolled_at,
            completed_at: model.completed_at,
            progress: model.progress,
            grade: model.grade,
            final_score: model.final_score,
        }
    }
}

impl From<&Enrollment> for ActiveModel {
    fn from(enrollment: &Enrollment) -> Self {
        ActiveModel {
            id: if enrollment.id == 0 {
                NotSet
            } else {
                Set(enrollment.id as i64)
            },
            student_id: Set(enrollment.student_id as i64),
            course_id: Set(enrollment.course_id.0 as i64),
            status: Set(enrollment.status.as_str().to_string()),
            enrolled_at: Set(enrollment.enrolled_at),
            completed_at: Set(enrollment.completed_at),
            progress: Set(enrollment.progress),
            grade: Set(enrollment.grade.clone()),
            final_score: Set(enrollment.final_score),
        }
    }
}
