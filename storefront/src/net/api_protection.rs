//! Security-admin request helpers.
//!
//! NOT A SECURITY BOUNDARY
//! =======================
//! Everything here trusts the `currentSecurityAdmin` record in client storage,
//! which any visitor can write, and the "bearer token" is just the stored
//! email. These helpers only decide what the demo UI shows and which headers
//! it sends. Real admin gating has to happen server-side against credentials
//! the server issued and can verify.
//!
//! Client-side (hydrate): `security_admin_fetch` performs the HTTP call via
//! `gloo-net`. Server-side (SSR): it stops after the local checks.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_protection_test.rs"]
mod tests;

use serde::de::DeserializeOwned;

use crate::state::session::{CurrentSecurityAdmin, SecurityAdmin};
use crate::storage::{StorageBackend, Store};

pub const SECURITY_ADMIN_ROLE: &str = "security-admin";
pub const SUPER_ADMIN_ACCESS: &str = "super-admin";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("Not authenticated as security admin")]
    NotAuthenticated,
    #[error("Forbidden: Security Admin access required")]
    Forbidden,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("{0}")]
    Network(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request issued on behalf of the stored security admin.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl AdminRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, url: url.into(), body: Some(body) }
    }

    pub fn put(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Put, url: url.into(), body: Some(body) }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self { method: Method::Delete, url: url.into(), body: None }
    }
}

/// Exactly `security-admin` with `super-admin` access; anything else fails.
pub fn has_super_admin_access(admin: &SecurityAdmin) -> bool {
    admin.role == SECURITY_ADMIN_ROLE && admin.access_level == SUPER_ADMIN_ACCESS
}

/// Whether the stored security admin record has super-admin access.
pub fn is_security_admin<B: StorageBackend>(store: &Store<B>) -> bool {
    store
        .load::<CurrentSecurityAdmin>()
        .is_some_and(|admin| has_super_admin_access(&admin))
}

/// Route-guard shape for admin-only views.
///
/// # Errors
///
/// [`AccessError::NotAuthenticated`] when no admin record is stored,
/// [`AccessError::Forbidden`] when the record lacks super-admin access.
pub fn require_security_admin<B: StorageBackend>(store: &Store<B>) -> Result<SecurityAdmin, AccessError> {
    let admin = store
        .load::<CurrentSecurityAdmin>()
        .ok_or(AccessError::NotAuthenticated)?;
    if has_super_admin_access(&admin) {
        Ok(admin)
    } else {
        Err(AccessError::Forbidden)
    }
}

/// Headers attached to every security-admin request.
pub fn admin_headers(admin: &SecurityAdmin) -> [(&'static str, String); 2] {
    [
        ("Authorization", format!("Bearer {}", admin.email)),
        ("X-Security-Admin", "true".to_owned()),
    ]
}

/// Map a response status onto the helper's error messages.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, status_text: &str) -> Option<AccessError> {
    match status {
        200..=299 => None,
        403 => Some(AccessError::Forbidden),
        _ => Some(AccessError::RequestFailed(status_text.to_owned())),
    }
}

/// Admin record the fetch helper will act as, or why it refuses to send.
fn authorize<B: StorageBackend>(store: &Store<B>) -> Result<SecurityAdmin, AccessError> {
    require_security_admin(store).map_err(|_| AccessError::NotAuthenticated)
}

/// Send `request` as the stored security admin and decode the JSON reply.
///
/// # Errors
///
/// [`AccessError::NotAuthenticated`] unless [`is_security_admin`] holds,
/// [`AccessError::Forbidden`] on HTTP 403, [`AccessError::RequestFailed`]
/// with the status text on any other non-2xx status, and
/// [`AccessError::Network`] for transport or decode failures.
pub async fn security_admin_fetch<B, T>(store: &Store<B>, request: AdminRequest) -> Result<T, AccessError>
where
    B: StorageBackend,
    T: DeserializeOwned,
{
    let admin = authorize(store)?;
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in admin_headers(&admin) {
            builder = builder.header(name, &value);
        }
        let req = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| AccessError::Network(e.to_string()))?;

        let resp = req.send().await.map_err(|e| AccessError::Network(e.to_string()))?;
        if let Some(err) = status_error(resp.status(), &resp.status_text()) {
            return Err(err);
        }
        resp.json::<T>().await.map_err(|e| AccessError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (admin, request);
        Err(AccessError::Network("not available on server".to_owned()))
    }
}
