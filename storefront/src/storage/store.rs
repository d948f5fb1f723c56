//! JSON store facade over a [`StorageBackend`].

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{StorageBackend, StorageKey, StoreError};

/// Associates a key in the namespace with the schema stored under it.
///
/// Reading through an `Entry` validates the stored JSON against `Value`. A
/// value of the wrong shape reads as absent but stays in storage.
pub trait Entry {
    const KEY: StorageKey;
    type Value: Serialize + DeserializeOwned;
}

/// Keyed JSON persistence over an injectable backend.
///
/// Values are parsed on every read and never cached. Writes are
/// last-write-wins with no versioning, locking, or multi-key atomicity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Store<B> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and decode the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] when the stored text does not decode
    /// as `T`, or the backend's error when the read itself fails. The entry
    /// is left in place.
    pub fn try_get<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.read(key.as_str())? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source })
    }

    /// Read the value under `key`, failing open to `None`.
    ///
    /// An entry that is not valid JSON is logged and deleted before returning
    /// `None`, so the next read starts clean. Valid JSON that does not match
    /// `T` is logged and left in place.
    pub fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) if e.is_unparseable() => {
                log::warn!("discarding corrupt {key} entry: {e}");
                if let Err(e) = self.backend.delete(key.as_str()) {
                    log::warn!("failed to delete corrupt {key} entry: {e}");
                }
                None
            }
            Err(e) => {
                log::warn!("failed to read {key}: {e}");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if `value` cannot be encoded, or the
    /// backend's error. A quota failure is always reported as
    /// [`StoreError::QuotaExceeded`] carrying `key`.
    pub fn try_set<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize { key, source })?;
        self.backend.write(key.as_str(), &raw).map_err(|e| match e {
            StoreError::QuotaExceeded { .. } => StoreError::QuotaExceeded { key: Some(key) },
            other => other,
        })
    }

    /// Write `value` under `key`. Failures are logged, never returned, so
    /// callers must not assume the value was persisted.
    pub fn set<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            log::warn!("failed to persist {key}: {e}");
        }
    }

    /// Delete the entry under `key`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the delete fails.
    pub fn try_remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.backend.delete(key.as_str())
    }

    /// Delete the entry under `key`, logging failures.
    pub fn remove(&self, key: StorageKey) {
        if let Err(e) = self.try_remove(key) {
            log::warn!("failed to remove {key}: {e}");
        }
    }

    /// Whether a raw entry exists under `key`. The value is not parsed.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the read fails.
    pub fn try_has(&self, key: StorageKey) -> Result<bool, StoreError> {
        Ok(self.backend.read(key.as_str())?.is_some())
    }

    /// Whether a raw entry exists under `key`; `false` when the backend fails.
    pub fn has(&self, key: StorageKey) -> bool {
        self.try_has(key).unwrap_or_else(|e| {
            log::warn!("failed to check {key}: {e}");
            false
        })
    }

    pub fn load<E: Entry>(&self) -> Option<E::Value> {
        self.get(E::KEY)
    }

    pub fn save<E: Entry>(&self, value: &E::Value) {
        self.set(E::KEY, value);
    }

    pub fn forget<E: Entry>(&self) {
        self.remove(E::KEY);
    }

    pub fn contains<E: Entry>(&self) -> bool {
        self.has(E::KEY)
    }

    /// Namespace keys that currently hold an entry, in declaration order.
    /// Keys written by anything else sharing the backend are ignored.
    pub fn present_keys(&self) -> Vec<StorageKey> {
        match self.backend.keys() {
            Ok(raw_keys) => {
                let mut present: Vec<StorageKey> = raw_keys.iter().filter_map(|k| StorageKey::parse(k)).collect();
                present.sort();
                present.dedup();
                present
            }
            Err(e) => {
                log::warn!("failed to enumerate storage keys: {e}");
                Vec::new()
            }
        }
    }

    /// Remove every key in `keys`, best-effort.
    pub fn clear(&self, keys: &[StorageKey]) {
        for key in keys {
            self.remove(*key);
        }
    }
}
