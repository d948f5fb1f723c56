//! In-memory storage backend for tests and hosts without browser storage.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{StorageBackend, StorageKey, StoreError};

/// Shared in-memory key/value map. Clones share the same entries.
///
/// An optional byte quota (sum of key and value lengths) makes writes fail
/// the way a full browser store does.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once stored keys and values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        let backend = Self::default();
        if let Ok(mut inner) = backend.inner.lock() {
            inner.quota_bytes = Some(bytes);
        }
        backend
    }

    pub fn len(&self) -> usize {
        self.lock().map_or(0, |inner| inner.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_owned()))
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.entries.get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if let Some(quota) = inner.quota_bytes {
            let used: usize = inner
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + raw.len() > quota {
                return Err(StoreError::QuotaExceeded { key: StorageKey::parse(key) });
            }
        }
        inner.entries.insert(key.to_owned(), raw.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.entries.keys().cloned().collect())
    }
}
