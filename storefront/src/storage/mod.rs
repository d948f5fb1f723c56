//! Keyed local state persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components never touch `window.localStorage` directly. They go
//! through [`Store`], which only accepts keys from the fixed [`StorageKey`]
//! namespace and (de)serializes values as JSON.
//!
//! ERROR HANDLING
//! ==============
//! The `try_*` operations report failures as [`StoreError`]. The plain
//! operations (`get`, `set`, `remove`, `has`) are best-effort: they log and
//! swallow failures. `get` deletes entries whose text is not JSON at all so
//! the UI keeps rendering with empty state. Valid JSON of an unexpected shape
//! is logged and left in place.

pub mod keys;
pub mod local;
pub mod memory;
pub mod store;

pub use keys::StorageKey;
pub use local::{BrowserStore, LocalStorage, browser_store};
pub use memory::MemoryBackend;
pub use store::{Entry, Store};

/// Errors reported by storage backends and the strict store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    /// `key` is `None` when the backend rejected a key outside the namespace.
    #[error("quota exceeded writing {}", .key.map_or("unknown key", StorageKey::as_str))]
    QuotaExceeded { key: Option<StorageKey> },
    #[error("corrupt entry under {key}: {source}")]
    Corrupt {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize value for {key}: {source}")]
    Serialize {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// True when the stored text could not be parsed as JSON at all.
    ///
    /// A [`StoreError::Corrupt`] caused by valid JSON that does not match the
    /// target type is not unparseable.
    pub fn is_unparseable(&self) -> bool {
        use serde_json::error::Category;

        match self {
            StoreError::Corrupt { source, .. } => {
                matches!(source.classify(), Category::Syntax | Category::Eof)
            }
            _ => false,
        }
    }
}

/// Synchronous string-keyed storage provided by the host environment.
///
/// Mirrors the browser `Storage` interface: string keys, string values,
/// enumeration by key. Implementations use interior mutability so a store can
/// be shared through Leptos context.
pub trait StorageBackend {
    /// Raw value under `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `raw` under `key`, replacing any previous value.
    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently present, including keys outside [`StorageKey`].
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
