//! Contract for the remote property record store, plus an in-memory store.
//!
//! ERROR HANDLING
//! ==============
//! Implementations never surface errors to the core. Transport and lookup
//! failures collapse to an empty list, `None` or `false`, and callers treat
//! any of those as "no data". Implementations log the underlying cause.

#[cfg(test)]
#[path = "record_client_test.rs"]
mod record_client_test;

use std::cell::RefCell;

use crate::property::{Property, PropertyDraft, PropertyPatch};

/// CRUD access to property records.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single JS thread.
#[async_trait::async_trait(?Send)]
pub trait PropertyClient {
    /// Every record, empty on failure.
    async fn get_all(&self) -> Vec<Property>;

    async fn get_by_id(&self, id: i64) -> Option<Property>;

    /// Store a new record and return it with its assigned id.
    async fn create(&self, draft: PropertyDraft) -> Option<Property>;

    /// Merge `patch` into record `id` and return the result.
    async fn update(&self, id: i64, patch: PropertyPatch) -> Option<Property>;

    /// `true` when record `id` existed and was removed.
    async fn delete(&self, id: i64) -> bool;
}

/// Record store held in memory, used for fixtures, demos and tests.
#[derive(Debug, Default)]
pub struct InMemoryPropertyClient {
    records: RefCell<Vec<Property>>,
}

impl InMemoryPropertyClient {
    #[must_use]
    pub fn new(records: Vec<Property>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Parse a JSON array of records, as shipped in catalog dumps.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON array of property records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    fn next_id(&self) -> i64 {
        self.records
            .borrow()
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

#[async_trait::async_trait(?Send)]
impl PropertyClient for InMemoryPropertyClient {
    async fn get_all(&self) -> Vec<Property> {
        self.records.borrow().clone()
    }

    async fn get_by_id(&self, id: i64) -> Option<Property> {
        self.records
            .borrow()
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    async fn create(&self, draft: PropertyDraft) -> Option<Property> {
        let record = Property::from_draft(self.next_id(), draft);
        self.records.borrow_mut().push(record.clone());
        tracing::info!(id = record.id, "created property");
        Some(record)
    }

    async fn update(&self, id: i64, patch: PropertyPatch) -> Option<Property> {
        let mut records = self.records.borrow_mut();
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            tracing::warn!(id, "update of unknown property");
            return None;
        };
        record.apply_patch(patch);
        tracing::info!(id, "updated property");
        Some(record.clone())
    }

    async fn delete(&self, id: i64) -> bool {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|record| record.id != id);
        let removed = records.len() < before;
        if removed {
            tracing::info!(id, "deleted property");
        } else {
            tracing::warn!(id, "delete of unknown property");
        }
        removed
    }
}
