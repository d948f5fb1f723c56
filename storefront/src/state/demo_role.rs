//! Role switching for the internal demo views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sales demos jump between the customer storefront and the staff dashboards
//! without a backend. Switching writes a canned identity for the chosen role
//! and clears the others, so exactly one demo session is active at a time.

#[cfg(test)]
#[path = "demo_role_test.rs"]
mod tests;

use crate::state::session::{
    CorporateAccount, CurrentCorporateAccount, CurrentSecurityAdmin, CurrentSiteAdmin, CurrentUser,
    CurrentWarehouseManager, Customer, SecurityAdmin, SiteAdmin, WarehouseManager,
};
use crate::storage::{StorageBackend, StorageKey, Store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoRole {
    Customer,
    CorporateAccount,
    SiteAdmin,
    WarehouseManager,
    SecurityAdmin,
}

impl DemoRole {
    pub const ALL: [DemoRole; 5] = [
        DemoRole::Customer,
        DemoRole::CorporateAccount,
        DemoRole::SiteAdmin,
        DemoRole::WarehouseManager,
        DemoRole::SecurityAdmin,
    ];

    /// Key holding this role's signed-in identity.
    pub fn key(self) -> StorageKey {
        match self {
            DemoRole::Customer => StorageKey::CurrentUser,
            DemoRole::CorporateAccount => StorageKey::CurrentCorporateAccount,
            DemoRole::SiteAdmin => StorageKey::CurrentSiteAdmin,
            DemoRole::WarehouseManager => StorageKey::CurrentWarehouseManager,
            DemoRole::SecurityAdmin => StorageKey::CurrentSecurityAdmin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemoRole::Customer => "Customer",
            DemoRole::CorporateAccount => "Corporate",
            DemoRole::SiteAdmin => "Site Admin",
            DemoRole::WarehouseManager => "Warehouse",
            DemoRole::SecurityAdmin => "Security",
        }
    }

    /// Route segment for the role's demo view.
    pub fn slug(self) -> &'static str {
        match self {
            DemoRole::Customer => "customer",
            DemoRole::CorporateAccount => "corporate",
            DemoRole::SiteAdmin => "site-admin",
            DemoRole::WarehouseManager => "warehouse",
            DemoRole::SecurityAdmin => "security",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == slug)
    }

    pub fn view_path(self) -> String {
        format!("/demo/{}", self.slug())
    }
}

/// Every key that holds a role identity.
pub fn role_keys() -> [StorageKey; 5] {
    DemoRole::ALL.map(DemoRole::key)
}

/// Sign in as `role` with its demo identity and return the path to navigate to.
pub fn switch_role<B: StorageBackend>(store: &Store<B>, role: DemoRole) -> String {
    let others: Vec<StorageKey> = DemoRole::ALL
        .into_iter()
        .filter(|other| *other != role)
        .map(DemoRole::key)
        .collect();
    store.clear(&others);
    write_identity(store, role);
    log::debug!("switched demo role to {}", role.slug());
    role.view_path()
}

/// First role (in [`DemoRole::ALL`] order) with a stored identity.
pub fn active_role<B: StorageBackend>(store: &Store<B>) -> Option<DemoRole> {
    let present = store.present_keys();
    DemoRole::ALL.into_iter().find(|role| present.contains(&role.key()))
}

/// Drop every demo identity. Orders and the welcome flag are kept.
pub fn sign_out<B: StorageBackend>(store: &Store<B>) {
    store.clear(&role_keys());
}

fn write_identity<B: StorageBackend>(store: &Store<B>, role: DemoRole) {
    match role {
        DemoRole::Customer => store.save::<CurrentUser>(&Customer {
            id: "demo-customer".to_owned(),
            name: "Rosa Delgado".to_owned(),
            email: "rosa@farmbox.test".to_owned(),
            plan: Some("Family Box".to_owned()),
        }),
        DemoRole::CorporateAccount => store.save::<CurrentCorporateAccount>(&CorporateAccount {
            id: "demo-corporate".to_owned(),
            company_name: "Green Desk Co".to_owned(),
            contact_email: "ops@greendesk.test".to_owned(),
            seats: 40,
        }),
        DemoRole::SiteAdmin => store.save::<CurrentSiteAdmin>(&SiteAdmin {
            id: "demo-site-admin".to_owned(),
            name: "Priya Natarajan".to_owned(),
            email: "priya@farmbox.test".to_owned(),
        }),
        DemoRole::WarehouseManager => store.save::<CurrentWarehouseManager>(&WarehouseManager {
            id: "demo-warehouse".to_owned(),
            name: "Dee Okafor".to_owned(),
            email: "dee@farmbox.test".to_owned(),
            warehouse: "North Valley Hub".to_owned(),
        }),
        DemoRole::SecurityAdmin => store.save::<CurrentSecurityAdmin>(&SecurityAdmin {
            email: "sam@farmbox.test".to_owned(),
            name: "Sam Whitfield".to_owned(),
            role: "security-admin".to_owned(),
            access_level: "super-admin".to_owned(),
        }),
    }
}
