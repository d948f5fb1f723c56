//! Fixed key namespace for persisted storefront state.

#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;

use std::fmt;

/// Every key the storefront persists under.
///
/// The literal strings are shared with data already written by earlier
/// builds of the storefront, so they must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    CurrentUser,
    CurrentCorporateAccount,
    CurrentSiteAdmin,
    CurrentWarehouseManager,
    /// Read by the security-admin authorization stub only.
    CurrentSecurityAdmin,
    Orders,
    SeenWelcome,
}

impl StorageKey {
    pub const ALL: [StorageKey; 7] = [
        StorageKey::CurrentUser,
        StorageKey::CurrentCorporateAccount,
        StorageKey::CurrentSiteAdmin,
        StorageKey::CurrentWarehouseManager,
        StorageKey::CurrentSecurityAdmin,
        StorageKey::Orders,
        StorageKey::SeenWelcome,
    ];

    /// Literal key written to the backing store.
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::CurrentUser => "currentUser",
            StorageKey::CurrentCorporateAccount => "currentCorporateAccount",
            StorageKey::CurrentSiteAdmin => "currentSiteAdmin",
            StorageKey::CurrentWarehouseManager => "currentWarehouseManager",
            StorageKey::CurrentSecurityAdmin => "currentSecurityAdmin",
            StorageKey::Orders => "orders",
            StorageKey::SeenWelcome => "hasSeenWelcome",
        }
    }

    /// Map a raw backing-store key back into the namespace.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
