//! Key-value persistence port and the JSON adapter built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saved properties and filter preferences are best-effort session state kept
//! in a browser-local key-value store. The store is injected as a
//! [`StoragePort`] so the browser (`localStorage`), the CLI (files on disk) and
//! tests ([`MemoryStorage`]) share one code path.
//!
//! ERROR HANDLING
//! ==============
//! The port reports failures as [`StorageError`]. [`JsonStore`] exposes both
//! the typed `try_*` calls and the degrading `read`/`write` calls, which log
//! and fall back to a default or `false`. Nothing here panics on bad data.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the saved-property entry list.
pub const SAVED_PROPERTIES_KEY: &str = "homehub_saved_properties";
/// Storage key for the last-used filter criteria.
pub const FILTER_PREFERENCES_KEY: &str = "homehub_filter_preferences";

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing store in this environment (SSR, disabled storage).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write for lack of space.
    #[error("storage quota exceeded for key {0}")]
    QuotaExceeded(String),
    /// Opaque backend failure (for example a JS exception).
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string key-value capability, shaped like Web Storage.
pub trait StoragePort {
    /// Stored string for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: StoragePort + ?Sized> StoragePort for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-memory storage. Clones share the same map, like two handles onto one
/// `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `QuotaExceeded`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Raw stored string, bypassing JSON decoding.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store a raw string, bypassing JSON encoding and write rejection.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.items.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::QuotaExceeded(key.to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::QuotaExceeded(key.to_owned()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// JSON blobs under fixed keys on top of a [`StoragePort`].
#[derive(Clone, Debug)]
pub struct JsonStore<S> {
    port: S,
}

impl<S: StoragePort> JsonStore<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    /// Decode the blob under `key`, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails or the blob does not decode
    /// as `T`.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.port.get_item(key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Decode the blob under `key`. Missing, unreadable and structurally
    /// incompatible blobs all come back as `None`; failures are logged.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "discarding unreadable stored value");
                None
            }
        }
    }

    /// Like [`JsonStore::read`], substituting `default` for anything missing
    /// or unreadable.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(key).unwrap_or(default)
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding fails or the backend rejects the write.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.port.set_item(key, &raw)
    }

    /// Encode and store `value`; `false` (and a log line) on any failure.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_write(key, value) {
            Ok(()) => {
                tracing::debug!(key, "persisted value");
                true
            }
            Err(error) => {
                tracing::warn!(key, %error, "failed to persist value");
                false
            }
        }
    }

    /// Delete the blob under `key`; `false` (and a log line) on failure.
    pub fn remove(&self, key: &str) -> bool {
        match self.port.remove_item(key) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(key, %error, "failed to remove stored value");
                false
            }
        }
    }
}
