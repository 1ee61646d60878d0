//! admin entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::Admin;

/// admin database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub admin_name: String,
    /// university name; not a foreign key
    pub university_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
            id: model.id as u64,
            email: model.email,
            admin_name: model.admin_name,
            university_name: model.university_name,
        }
    }
}

impl From<&Admin> for ActiveModel {
    fn from(admin: &Admin) -> Self {
        ActiveModel {
            id: if admin.id == 0 {
                NotSet
            } else {
                Set(admin.id as i64)
            },
            email: Set(admin.email.clone()),
            admin_name: Set(admin.admin_name.clone()),
            university_name: Set(admin.university_name.clone()),
        }
    }
}
