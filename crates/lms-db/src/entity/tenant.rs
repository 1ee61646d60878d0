//! tenant entity for database storage.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use lms_types::{Tenant, TenantFeature};

use super::parse_stored;

/// tenant database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub subdomain: String,
    pub domain: String,
    pub status: String,
    pub plan: String,
    pub storage_limit: Option<i64>,
    pub storage_used: i64,
    pub max_universities: i32,
    pub max_students: i32,
    /// json-serialized vec<string>
    #[sea_orm(column_type = "Text")]
    pub features: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tenant {
    fn from(model: Model) -> Self {
        // unknown feature names are dropped rather than failing the load
        let features: Vec<TenantFeature> = serde_json::from_str::<Vec<String>>(&model.features)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        Tenant {
            id: model.id as u64,
            status: parse_stored("tenants", model.id, "status", &model.status),
            plan: parse_stored("tenants", model.id, "plan", &model.plan),
            name: model.name,
            subdomain: model.subdomain,
            domain: model.domain,
            storage_limit: model.storage_limit,
            storage_used: model.storage_used,
            max_universities: model.max_universities,
            max_students: model.max_students,
            features,
            created_at: model.created_at,
            updated_at: model.updated_at,
            last_activity: model.last_activity,
        }
    }
}

impl From<&Tenant> for ActiveModel {
    fn from(tenant: &Tenant) -> Self {
        let features: Vec<&str> = tenant.features.iter().map(|f| f.as_str()).collect();
        let features_json = serde_json::to_string(&features).unwrap_or_else(|_| "[]".to_string());

        ActiveModel {
            id: if tenant.id == 0 {
                NotSet
            } else {
                Set(tenant.id as i64)
            },
            name: Set(tenant.name.clone()),
            subdomain: Set(tenant.subdomain.clone()),
            domain: Set(tenant.domain.clone()),
            status: Set(tenant.status.as_str().to_string()),
            plan: Set(tenant.plan.as_str().to_string()),
            storage_limit: Set(tenant.storage_limit),
            storage_used: Set(tenant.storage_used),
            max_universities: Set(tenant.max_universities),
            max_students: Set(tenant.max_students),
            features: Set(features_json),
            created_at: Set(tenant.created_at),
            updated_at: Set(tenant.updated_at),
            last_activity: Set(tenant.last_activity),
        }
    }
}
