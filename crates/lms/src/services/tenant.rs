//! tenant service.
//!
//! tenant records are bookkeeping only: the per-request tenant context is
//! derived from the host and never looked up here.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use lms_db::Database;
use lms_types::{Tenant, TenantFeature, TenantPlan, TenantStatus};

use super::{ServiceError, ServiceResult};

/// create and update body for a tenant.
///
/// omitted limits fall back to the values a new tenant starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantDto {
    pub name: String,
    pub subdomain: String,
    pub domain: String,
    pub status: Option<TenantStatus>,
    pub plan: Option<TenantPlan>,
    pub storage_limit: Option<i64>,
    pub storage_used: Option<i64>,
    pub max_universities: Option<i32>,
    pub max_students: Option<i32>,
    pub features: Vec<TenantFeature>,
}

/// body of a status change.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StatusChange {
    pub status: TenantStatus,
}

impl TenantDto {
    /// overwrite every field of `tenant` except its id and creation time.
    fn apply_to(self, tenant: &mut Tenant) {
        let fresh = Tenant::new("", "", "");
        tenant.name = self.name;
        tenant.subdomain = self.subdomain;
        tenant.domain = self.domain;
        tenant.status = self.status.unwrap_or_default();
        tenant.plan = self.plan.unwrap_or_default();
        tenant.storage_limit = self.storage_limit;
        tenant.storage_used = self.storage_used.unwrap_or(fresh.storage_used);
        tenant.max_universities = self.max_universities.unwrap_or(fresh.max_universities);
        tenant.max_students = self.max_students.unwrap_or(fresh.max_students);
        tenant.features = self.features;
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Tenant not found")
}

/// register a tenant. name and subdomain must be unused.
pub async fn create(db: &impl Database, dto: TenantDto) -> ServiceResult<Tenant> {
    let mut tenant = Tenant::new("", "", "");
    dto.apply_to(&mut tenant);

    let created = db.create_tenant(&tenant).await?;
    info!(tenant_id = created.id, subdomain = %created.subdomain, "tenant created");
    Ok(created)
}

pub async fn get(db: &impl Database, id: u64) -> ServiceResult<Tenant> {
    db.get_tenant(id).await?.ok_or_else(not_found)
}

pub async fn list(db: &impl Database) -> ServiceResult<Vec<Tenant>> {
    Ok(db.list_tenants().await?)
}

/// overwrite a tenant from the dto and stamp `updated_at`.
pub async fn update(db: &impl Database, id: u64, dto: TenantDto) -> ServiceResult<Tenant> {
    let mut tenant = get(db, id).await?;
    dto.apply_to(&mut tenant);
    tenant.updated_at = Utc::now();

    let updated = db.update_tenant(&tenant).await?;
    info!(tenant_id = id, "tenant updated");
    Ok(updated)
}

/// change only the status of a tenant and stamp `updated_at`.
pub async fn set_status(db: &impl Database, id: u64, status: TenantStatus) -> ServiceResult<Tenant> {
    let mut tenant = get(db, id).await?;
    tenant.status = status;
    tenant.updated_at = Utc::now();

    let updated = db.update_tenant(&tenant).await?;
    info!(tenant_id = id, status = %status, "tenant status changed");
    Ok(updated)
}

pub async fn delete(db: &impl Database, id: u64) -> ServiceResult<()> {
    get(db, id).await?;
    db.delete_tenant(id).await?;
    info!(tenant_id = id, "tenant deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lms_db::LmsDb;

    fn iit() -> TenantDto {
        TenantDto {
            name: "IIT".to_string(),
            subdomain: "iit".to_string(),
            domain: "iit.lms.com".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_uses_new_tenant_defaults() {
        let db = LmsDb::new_in_memory().await.unwrap();

        let created = create(&db, iit()).await.unwrap();

        assert_eq!(created.status, TenantStatus::Active);
        assert_eq!(created.plan, TenantPlan::Basic);
        assert_eq!(created.max_universities, 1);
        assert_eq!(created.max_students, 1000);
        assert_eq!(list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_subdomain_is_a_database_conflict() {
        let db = LmsDb::new_in_memory().await.unwrap();
        create(&db, iit()).await.unwrap();

        let err = create(
            &db,
            TenantDto {
                name: "IIT Delhi".to_string(),
                ..iit()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Database(lms_db::Error::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_status_change_refreshes_updated_at() {
        let db = LmsDb::new_in_memory().await.unwrap();
        let mut tenant = create(&db, iit()).await.unwrap();

        // backdate so the refresh is observable
        tenant.updated_at = Utc::now() - Duration::days(1);
        let stale = db.update_tenant(&tenant).await.unwrap();

        let changed = set_status(&db, tenant.id, TenantStatus::Suspended)
            .await
            .unwrap();
        assert_eq!(changed.status, TenantStatus::Suspended);
        assert!(changed.updated_at > stale.updated_at);
        assert_eq!(changed.name, "IIT");
    }

    #[tokio::test]
    async fn test_update_is_wholesale() {
        let db = LmsDb::new_in_memory().await.unwrap();
        let created = create(
            &db,
            TenantDto {
                plan: Some(TenantPlan::Enterprise),
                features: vec![TenantFeature::ApiAccess],
                max_students: Some(50_000),
                ..iit()
            },
        )
        .await
        .unwrap();

        let updated = update(&db, created.id, iit()).await.unwrap();
        assert_eq!(updated.plan, TenantPlan::Basic);
        assert!(updated.features.is_empty());
        assert_eq!(updated.max_students, 1000);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_and_missing_tenant() {
        let db = LmsDb::new_in_memory().await.unwrap();
        let created = create(&db, iit()).await.unwrap();

        delete(&db, created.id).await.unwrap();
        assert_eq!(get(&db, created.id).await.unwrap_err().to_string(), "Tenant not found");
        assert!(matches!(
            delete(&db, created.id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            set_status(&db, created.id, TenantStatus::Inactive).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
