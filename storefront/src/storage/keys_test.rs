use super::*;

#[test]
fn literals_match_persisted_names() {
    assert_eq!(StorageKey::CurrentUser.as_str(), "currentUser");
    assert_eq!(StorageKey::CurrentSecurityAdmin.as_str(), "currentSecurityAdmin");
    assert_eq!(StorageKey::Orders.as_str(), "orders");
    assert_eq!(StorageKey::SeenWelcome.as_str(), "hasSeenWelcome");
}

#[test]
fn literals_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for key in StorageKey::ALL {
        assert!(seen.insert(key.as_str()), "duplicate literal {key}");
    }
}

#[test]
fn parse_inverts_as_str() {
    for key in StorageKey::ALL {
        assert_eq!(StorageKey::parse(key.as_str()), Some(key));
    }
}

#[test]
fn parse_rejects_foreign_keys() {
    assert_eq!(StorageKey::parse("gauntlet_week_1_dark"), None);
    assert_eq!(StorageKey::parse(""), None);
    assert_eq!(StorageKey::parse("CurrentUser"), None);
}

#[test]
fn display_uses_literal() {
    assert_eq!(StorageKey::CurrentWarehouseManager.to_string(), "currentWarehouseManager");
}
