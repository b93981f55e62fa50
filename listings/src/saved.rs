//! Saved-property registry.
//!
//! DESIGN
//! ======
//! The persisted entry list is the source of truth; every call re-reads it
//! and every mutation writes the whole list back (read-modify-write on a
//! single-threaded store). Entries stay in insertion order. Ordering by
//! save date is the caller's job, see [`crate::saved_view`].
//!
//! A failed write leaves the store as it was, so the caller's in-memory view
//! and the persisted list can disagree until the next successful write.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::storage::{JsonStore, SAVED_PROPERTIES_KEY, StoragePort};

/// One favorited property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    /// Record id; may dangle once the record is deleted upstream.
    pub property_id: i64,
    /// RFC 3339 timestamp taken when the entry was added.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_date: OffsetDateTime,
}

/// Persisted set of saved property ids, at most one entry per id.
#[derive(Clone, Debug)]
pub struct SavedRegistry<S> {
    store: JsonStore<S>,
}

impl<S: StoragePort> SavedRegistry<S> {
    pub fn new(port: S) -> Self {
        Self {
            store: JsonStore::new(port),
        }
    }

    /// Persisted entries in stored order. Empty when storage is missing,
    /// unavailable or corrupt.
    pub fn list(&self) -> Vec<SavedEntry> {
        self.store.read_or(SAVED_PROPERTIES_KEY, Vec::new())
    }

    pub fn is_saved(&self, property_id: i64) -> bool {
        self.list().iter().any(|entry| entry.property_id == property_id)
    }

    /// Save `property_id` stamped with the current time.
    ///
    /// Returns `true` when a new entry was persisted, `false` when the id was
    /// already saved or the write failed.
    pub fn save(&self, property_id: i64) -> bool {
        self.save_at(property_id, OffsetDateTime::now_utc())
    }

    /// [`SavedRegistry::save`] with an explicit timestamp.
    pub fn save_at(&self, property_id: i64, saved_date: OffsetDateTime) -> bool {
        let mut entries = self.list();
        if entries.iter().any(|entry| entry.property_id == property_id) {
            return false;
        }
        entries.push(SavedEntry {
            property_id,
            saved_date,
        });
        self.store.write(SAVED_PROPERTIES_KEY, &entries)
    }

    /// Drop the entry for `property_id`, if any, and persist.
    ///
    /// Reports the write outcome, not whether the id was present.
    pub fn remove(&self, property_id: i64) -> bool {
        let mut entries = self.list();
        entries.retain(|entry| entry.property_id != property_id);
        self.store.write(SAVED_PROPERTIES_KEY, &entries)
    }

    /// Overwrite the registry with an empty list.
    pub fn clear_all(&self) -> bool {
        self.store.write(SAVED_PROPERTIES_KEY, &Vec::<SavedEntry>::new())
    }
}
