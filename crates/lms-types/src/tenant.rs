//! tenant records and the per-request tenant context.
//!
//! tenants are stored but nothing scopes data by tenant. the
//! [`TenantContext`] is derived from the request host alone and is never
//! checked against the stored tenants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// account status of a tenant.
    #[derive(Default)]
    pub enum TenantStatus {
        #[default]
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Suspended => "SUSPENDED",
    }
}

string_enum! {
    /// subscription plan of a tenant.
    #[derive(Default)]
    pub enum TenantPlan {
        #[default]
        Basic => "BASIC",
        Premium => "PREMIUM",
        Enterprise => "ENTERPRISE",
    }
}

string_enum! {
    /// optional capability enabled for a tenant.
    pub enum TenantFeature {
        MultiUniversity => "MULTI_UNIVERSITY",
        AdvancedAnalytics => "ADVANCED_ANALYTICS",
        ApiAccess => "API_ACCESS",
        CustomBranding => "CUSTOM_BRANDING",
        EmailSupport => "EMAIL_SUPPORT",
        PhoneSupport => "PHONE_SUPPORT",
        SingleSignOn => "SINGLE_SIGN_ON",
        BulkOperations => "BULK_OPERATIONS",
    }
}

/// a customer organisation hosted on the lms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// unique identifier, zero until first saved.
    pub id: u64,

    /// unique display name.
    pub name: String,

    /// unique subdomain label (e.g. "iit" for `iit.lms.com`).
    pub subdomain: String,

    /// full domain the tenant is served on.
    pub domain: String,

    /// account status.
    pub status: TenantStatus,

    /// subscription plan.
    pub plan: TenantPlan,

    /// storage quota in bytes, if limited.
    pub storage_limit: Option<i64>,

    /// storage consumed in bytes.
    pub storage_used: i64,

    /// how many universities the tenant may register.
    pub max_universities: i32,

    /// how many students the tenant may register.
    pub max_students: i32,

    /// enabled features.
    #[serde(default)]
    pub features: Vec<TenantFeature>,

    /// when the tenant was created.
    pub created_at: DateTime<Utc>,

    /// when the tenant was last updated.
    pub updated_at: DateTime<Utc>,

    /// last recorded activity.
    pub last_activity: DateTime<Utc>,
}

impl Tenant {
    /// create a new active tenant on the basic plan.
    pub fn new(
        name: impl Into<String>,
        subdomain: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            subdomain: subdomain.into(),
            domain: domain.into(),
            status: TenantStatus::default(),
            plan: TenantPlan::default(),
            storage_limit: None,
            storage_used: 0,
            max_universities: 1,
            max_students: 1000,
            features: Vec::new(),
            created_at: now,
            updated_at: now,
            last_activity: now,
        }
    }

    /// whether `feature` is enabled for this tenant.
    pub fn has_feature(&self, feature: TenantFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// tenant identity resolved for a single request.
///
/// one value exists per in-flight request and is dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantContext {
    /// tenant identifier (the subdomain label, or "default").
    pub tenant_id: String,

    /// human readable tenant name.
    pub tenant_name: String,

    /// subdomain the request arrived on.
    pub subdomain: String,
}

impl TenantContext {
    /// identifier used when no tenant subdomain is present.
    pub const DEFAULT_ID: &'static str = "default";

    /// context for a request addressed to a tenant subdomain.
    pub fn for_subdomain(subdomain: &str) -> Self {
        Self {
            tenant_id: subdomain.to_string(),
            tenant_name: format!("{subdomain} LMS"),
            subdomain: subdomain.to_string(),
        }
    }

    /// context for requests on the bare domain or an unrecognised host.
    pub fn default_tenant() -> Self {
        Self {
            tenant_id: Self::DEFAULT_ID.to_string(),
            tenant_name: "Default LMS".to_string(),
            subdomain: Self::DEFAULT_ID.to_string(),
        }
    }

    /// whether this is the fallback tenant.
    pub fn is_default(&self) -> bool {
        self.tenant_id == Self::DEFAULT_ID
    }
}

impl Default for TenantContext {
    fn default() -> Self {
        Self::default_tenant()
    }
}
