use super::*;
use crate::storage::MemoryBackend;
use serde::Deserialize;
use serde_json::{Value, json};

fn store() -> Store<MemoryBackend> {
    Store::new(MemoryBackend::new())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    email: String,
}

struct ProfileEntry;

impl Entry for ProfileEntry {
    const KEY: StorageKey = StorageKey::CurrentUser;
    type Value = Profile;
}

// =============================================================
// get / set
// =============================================================

#[test]
fn set_then_get_round_trips_orders() {
    let store = store();
    let orders = json!([{ "id": "A1" }]);
    store.set(StorageKey::Orders, &orders);
    assert_eq!(store.get::<Value>(StorageKey::Orders), Some(orders));
}

#[test]
fn set_then_get_round_trips_every_key() {
    let store = store();
    for (i, key) in StorageKey::ALL.into_iter().enumerate() {
        let value = json!({ "slot": i, "key": key.as_str(), "nested": [true, null, 1.5] });
        store.set(key, &value);
        assert_eq!(store.get::<Value>(key), Some(value));
    }
}

#[test]
fn get_never_set_key_is_absent() {
    let store = store();
    assert_eq!(store.get::<Value>(StorageKey::CurrentSiteAdmin), None);
    assert_eq!(store.try_get::<Value>(StorageKey::CurrentSiteAdmin).unwrap(), None);
}

#[test]
fn set_overwrites_previous_value() {
    let store = store();
    store.set(StorageKey::SeenWelcome, &false);
    store.set(StorageKey::SeenWelcome, &true);
    assert_eq!(store.get::<bool>(StorageKey::SeenWelcome), Some(true));
}

// =============================================================
// Corrupt entries
// =============================================================

#[test]
fn get_deletes_non_json_entry() {
    let store = store();
    store.backend().write("currentUser", "{not json").unwrap();

    assert_eq!(store.get::<Value>(StorageKey::CurrentUser), None);
    assert!(!store.has(StorageKey::CurrentUser));
}

#[test]
fn get_deletes_truncated_json_entry() {
    let store = store();
    store.backend().write("orders", "[{\"id\":\"A1\"").unwrap();

    assert_eq!(store.get::<Value>(StorageKey::Orders), None);
    assert!(!store.has(StorageKey::Orders));
}

#[test]
fn get_keeps_entry_with_wrong_shape() {
    let store = store();
    store.set(StorageKey::CurrentUser, &json!({ "name": 42 }));

    assert_eq!(store.load::<ProfileEntry>(), None);
    assert!(store.contains::<ProfileEntry>());
    assert_eq!(store.get::<Value>(StorageKey::CurrentUser), Some(json!({ "name": 42 })));
}

#[test]
fn unparseable_only_covers_text_that_is_not_json() {
    let store = store();
    store.backend().write("orders", "{not json").unwrap();
    store.set(StorageKey::CurrentUser, &json!({ "name": 42 }));

    assert!(store.try_get::<Value>(StorageKey::Orders).unwrap_err().is_unparseable());
    assert!(!store.try_get::<Profile>(StorageKey::CurrentUser).unwrap_err().is_unparseable());
    assert!(!StoreError::Unavailable.is_unparseable());
}

#[test]
fn try_get_reports_corruption_without_deleting() {
    let store = store();
    store.backend().write("orders", "[{").unwrap();

    let err = store.try_get::<Value>(StorageKey::Orders).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { key: StorageKey::Orders, .. }));
    assert!(store.has(StorageKey::Orders));
}

#[test]
fn corrupt_entry_does_not_touch_other_keys() {
    let store = store();
    store.set(StorageKey::Orders, &json!([]));
    store.backend().write("currentUser", "nope").unwrap();

    assert_eq!(store.get::<Value>(StorageKey::CurrentUser), None);
    assert_eq!(store.get::<Value>(StorageKey::Orders), Some(json!([])));
}

// =============================================================
// has / remove
// =============================================================

#[test]
fn has_is_true_for_null_and_falsy_values() {
    let store = store();
    store.set(StorageKey::CurrentUser, &Value::Null);
    store.set(StorageKey::SeenWelcome, &false);
    store.set(StorageKey::Orders, &0);
    store.set(StorageKey::CurrentSiteAdmin, "");

    assert!(store.has(StorageKey::CurrentUser));
    assert!(store.has(StorageKey::SeenWelcome));
    assert!(store.has(StorageKey::Orders));
    assert!(store.has(StorageKey::CurrentSiteAdmin));
}

#[test]
fn null_value_reads_back_as_null() {
    let store = store();
    store.set(StorageKey::CurrentUser, &Option::<Profile>::None);
    assert_eq!(store.get::<Option<Profile>>(StorageKey::CurrentUser), Some(None));
}

#[test]
fn has_does_not_parse() {
    let store = store();
    store.backend().write("orders", "{not json").unwrap();
    assert!(store.has(StorageKey::Orders));
}

#[test]
fn remove_then_has_is_false() {
    let store = store();
    store.set(StorageKey::Orders, &json!([{ "id": "A1" }]));
    store.remove(StorageKey::Orders);
    assert!(!store.has(StorageKey::Orders));
    assert_eq!(store.get::<Value>(StorageKey::Orders), None);
}

#[test]
fn remove_missing_key_is_noop() {
    let store = store();
    store.remove(StorageKey::CurrentWarehouseManager);
    store.try_remove(StorageKey::CurrentWarehouseManager).unwrap();
    assert!(!store.has(StorageKey::CurrentWarehouseManager));
}

// =============================================================
// Write failures
// =============================================================

#[test]
fn set_swallows_quota_failure() {
    let store = Store::new(MemoryBackend::with_quota(16));
    store.set(StorageKey::Orders, &json!([{ "id": "A1" }, { "id": "B2" }]));
    assert!(!store.has(StorageKey::Orders));
}

#[test]
fn try_set_reports_quota_failure() {
    let store = Store::new(MemoryBackend::with_quota(16));
    let err = store.try_set(StorageKey::Orders, &json!([{ "id": "A1" }, { "id": "B2" }])).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { key: Some(StorageKey::Orders) }));
    assert_eq!(err.to_string(), "quota exceeded writing orders");
}

#[test]
fn failed_write_keeps_previous_value() {
    let store = Store::new(MemoryBackend::with_quota(24));
    store.set(StorageKey::Orders, &json!([]));
    store.set(StorageKey::Orders, &json!([{ "id": "A1" }, { "id": "B2" }]));
    assert_eq!(store.get::<Value>(StorageKey::Orders), Some(json!([])));
}

#[test]
fn try_set_reports_serialization_failure() {
    use std::collections::HashMap;

    // JSON object keys must be strings.
    let mut bad = HashMap::new();
    bad.insert((1, 2), "x");
    let store = store();
    let err = store.try_set(StorageKey::Orders, &bad).unwrap_err();
    assert!(matches!(err, StoreError::Serialize { key: StorageKey::Orders, .. }));
    assert!(!store.has(StorageKey::Orders));
}

// =============================================================
// Typed entries and namespace helpers
// =============================================================

#[test]
fn typed_entry_round_trips() {
    let store = store();
    let profile = Profile { name: "Ada".to_owned(), email: "ada@example.com".to_owned() };
    store.save::<ProfileEntry>(&profile);
    assert!(store.contains::<ProfileEntry>());
    assert_eq!(store.load::<ProfileEntry>(), Some(profile));

    store.forget::<ProfileEntry>();
    assert!(!store.contains::<ProfileEntry>());
}

#[test]
fn present_keys_ignores_foreign_entries() {
    let store = store();
    store.backend().write("someone_elses_key", "1").unwrap();
    store.set(StorageKey::SeenWelcome, &true);
    store.set(StorageKey::CurrentUser, &json!({}));

    assert_eq!(store.present_keys(), vec![StorageKey::CurrentUser, StorageKey::SeenWelcome]);
}

#[test]
fn clear_removes_only_listed_keys() {
    let store = store();
    store.set(StorageKey::CurrentUser, &json!({}));
    store.set(StorageKey::CurrentSiteAdmin, &json!({}));
    store.set(StorageKey::Orders, &json!([]));

    store.clear(&[StorageKey::CurrentUser, StorageKey::CurrentSiteAdmin]);
    assert_eq!(store.present_keys(), vec![StorageKey::Orders]);
}
