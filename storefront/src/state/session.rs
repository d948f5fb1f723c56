//! Persisted identities for the storefront and the internal demo views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role writes its signed-in identity under its own key. None of these
//! records are verified: they are demo state in client storage and grant
//! nothing on their own.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::storage::{Entry, StorageKey};

/// Signed-in grocery subscriber.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Business account ordering boxes for a team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateAccount {
    pub id: String,
    pub company_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub seats: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAdmin {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseManager {
    pub id: String,
    pub name: String,
    pub email: String,
    pub warehouse: String,
}

/// Security admin identity read by `net::api_protection`.
///
/// `role` and `access_level` stay free-form strings: a record with an
/// unexpected level is still a readable record, it just fails the admin check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAdmin {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: String,
    pub access_level: String,
}

pub struct CurrentUser;
pub struct CurrentCorporateAccount;
pub struct CurrentSiteAdmin;
pub struct CurrentWarehouseManager;
pub struct CurrentSecurityAdmin;
pub struct SeenWelcome;

impl Entry for CurrentUser {
    const KEY: StorageKey = StorageKey::CurrentUser;
    type Value = Customer;
}

impl Entry for CurrentCorporateAccount {
    const KEY: StorageKey = StorageKey::CurrentCorporateAccount;
    type Value = CorporateAccount;
}

impl Entry for CurrentSiteAdmin {
    const KEY: StorageKey = StorageKey::CurrentSiteAdmin;
    type Value = SiteAdmin;
}

impl Entry for CurrentWarehouseManager {
    const KEY: StorageKey = StorageKey::CurrentWarehouseManager;
    type Value = WarehouseManager;
}

impl Entry for CurrentSecurityAdmin {
    const KEY: StorageKey = StorageKey::CurrentSecurityAdmin;
    type Value = SecurityAdmin;
}

impl Entry for SeenWelcome {
    const KEY: StorageKey = StorageKey::SeenWelcome;
    type Value = bool;
}
