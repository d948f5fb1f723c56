//! Browser `localStorage` backend.
//!
//! Hydrate builds talk to `window.localStorage`. SSR and native builds have
//! no browser store: reads see an empty namespace and writes and deletes
//! fail with [`StoreError::Unavailable`], which keeps server rendering
//! deterministic.

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;

use super::{StorageBackend, Store, StoreError};

/// Handle to the origin's `localStorage`. Looked up on every call, so the
/// handle itself is `Send + Sync` and can live in Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// Store type provided to components through Leptos context.
pub type BrowserStore = Store<LocalStorage>;

/// Store over the browser's `localStorage`.
pub const fn browser_store() -> BrowserStore {
    Store::new(LocalStorage)
}

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(key: &str, err: wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StoreError::QuotaExceeded {
            key: super::StorageKey::parse(key),
        },
        Some(ex) => StoreError::Backend(ex.message()),
        None => StoreError::Backend(format!("{err:?}")),
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).map_err(|e| js_error(key, e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.set_item(key, raw).map_err(|e| js_error(key, e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
            Err(StoreError::Unavailable)
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.remove_item(key).map_err(|e| js_error(key, e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            let len = storage.length().map_err(|e| js_error("", e))?;
            Ok((0..len).filter_map(|i| storage.key(i).ok().flatten()).collect())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(Vec::new())
        }
    }
}
