//! host-based tenant resolution.
//!
//! every request gets its own [`TenantContext`], computed once by
//! [`tenant_middleware`] from the `Host` header and stored in the request's
//! extensions. handlers read it back through the [`CurrentTenant`] extractor.
//! the context lives exactly as long as the request does.
//!
//! resolution is purely syntactic: the tenant store is never consulted.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, header::HOST, request::Parts},
    middleware::Next,
    response::Response,
};
use lms_types::TenantContext;
use tracing::{Instrument, debug, info_span};

/// subdomain label that never names a tenant.
const RESERVED_SUBDOMAIN: &str = "www";

/// extract the tenant id from a host name.
///
/// returns `None` unless the host has at least three dot-separated labels
/// and the first one is neither empty nor `www`. trailing empty labels (a
/// fully qualified `lms.com.`) are not counted. ports are not stripped.
pub fn extract_tenant_from_host(host: &str) -> Option<&str> {
    let mut labels = host.trim_end_matches('.').split('.');
    let first = labels.next()?;
    if first.is_empty() || labels.count() < 2 || first == RESERVED_SUBDOMAIN {
        return None;
    }
    Some(first)
}

/// compute the tenant context for a request's host header.
pub fn resolve_tenant(host: Option<&str>) -> TenantContext {
    match host.and_then(extract_tenant_from_host) {
        Some(subdomain) => TenantContext::for_subdomain(subdomain),
        None => TenantContext::default_tenant(),
    }
}

fn host_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(HOST).and_then(|v| v.to_str().ok())
}

/// middleware that attaches a freshly resolved tenant context to each request.
pub async fn tenant_middleware(mut request: Request, next: Next) -> Response {
    let tenant = resolve_tenant(host_header(request.headers()));
    debug!(tenant = %tenant.tenant_id, "resolved tenant");

    let span = info_span!("tenant", tenant = %tenant.tenant_id);
    request.extensions_mut().insert(tenant);
    next.run(request).instrument(span).await
}

/// extractor for the tenant context of the current request.
///
/// falls back to resolving from the headers when the middleware did not run,
/// so it never rejects.
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub TenantContext);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tenant = match parts.extensions.get::<TenantContext>() {
            Some(tenant) => tenant.clone(),
            None => resolve_tenant(host_header(&parts.headers)),
        };
        Ok(CurrentTenant(tenant))
    }
}
