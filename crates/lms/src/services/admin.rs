//! admin service.

use serde::{Deserialize, Serialize};
use tracing::info;

use lms_db::Database;
use lms_types::Admin;

use super::{ServiceError, ServiceResult};

/// external representation of an admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminDto {
    pub id: Option<u64>,
    pub email: String,
    pub admin_name: String,
    /// university the admin manages, by name
    pub uni_name: String,
}

impl From<Admin> for AdminDto {
    fn from(admin: Admin) -> Self {
        Self {
            id: Some(admin.id),
            email: admin.email,
            admin_name: admin.admin_name,
            uni_name: admin.university_name,
        }
    }
}

impl AdminDto {
    fn into_admin(self, id: u64) -> Admin {
        Admin {
            id,
            email: self.email,
            admin_name: self.admin_name,
            university_name: self.uni_name,
        }
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Admin not found")
}

pub async fn create(db: &impl Database, dto: AdminDto) -> ServiceResult<AdminDto> {
    let created = db.create_admin(&dto.into_admin(0)).await?;
    info!(admin_id = created.id, "admin created");
    Ok(created.into())
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<AdminDto> {
    db.get_admin(id).await?.map(Into::into).ok_or_else(not_found)
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<AdminDto>> {
    let admins = db.list_admins().await?;
    Ok(admins.into_iter().map(Into::into).collect())
}

pub async fn update(db: &impl Database, id: u64, dto: AdminDto) -> ServiceResult<AdminDto> {
    if db.get_admin(id).await?.is_none() {
        return Err(not_found());
    }
    let updated = db.update_admin(&dto.into_admin(id)).await?;
    info!(admin_id = id, "admin updated");
    Ok(updated.into())
}

pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    if db.get_admin(id).await?.is_none() {
        return Err(not_found());
    }
    db.delete_admin(id).await?;
    info!(admin_id = id, "admin deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_db::LmsDb;

    #[tokio::test]
    async fn test_admin_lifecycle() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let created = create(
            &db,
            AdminDto {
                email: "dean@mit.edu".to_string(),
                admin_name: "Dean".to_string(),
                uni_name: "MIT".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let id = created.id.unwrap();

        let updated = update(
            &db,
            id,
            AdminDto {
                email: "provost@mit.edu".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.email, "provost@mit.edu");
        assert_eq!(updated.uni_name, "");

        delete(&db, id).await.unwrap();
        assert_eq!(get(&db, id).await.unwrap_err().to_string(), "Admin not found");
    }
}
