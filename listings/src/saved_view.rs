//! Saved-properties page state: saved entries joined against live records.
//!
//! DESIGN
//! ======
//! The registry stores ids in insertion order; this view owns the
//! most-recently-saved-first ordering. Ids whose record no longer exists are
//! dropped silently.

#[cfg(test)]
#[path = "saved_view_test.rs"]
mod saved_view_test;

use std::collections::HashMap;

use crate::property::Property;
use crate::record_client::PropertyClient;
use crate::saved::{SavedEntry, SavedRegistry};
use crate::storage::StoragePort;

/// Saved records, newest save first. Ties keep catalog order.
#[must_use]
pub fn resolve_saved(properties: &[Property], entries: &[SavedEntry]) -> Vec<Property> {
    let saved_at: HashMap<i64, _> = entries
        .iter()
        .map(|entry| (entry.property_id, entry.saved_date))
        .collect();

    let mut matched: Vec<_> = properties
        .iter()
        .filter_map(|property| saved_at.get(&property.id).map(|date| (*date, property)))
        .collect();
    matched.sort_by(|a, b| b.0.cmp(&a.0));
    matched.into_iter().map(|(_, property)| property.clone()).collect()
}

/// Saved list plus the registry it mirrors. The last fetched records are
/// kept so a re-save can put its property back in the list.
#[derive(Clone, Debug)]
pub struct SavedState<S> {
    registry: SavedRegistry<S>,
    catalog: Vec<Property>,
    pub items: Vec<Property>,
    pub loading: bool,
}

impl<S: StoragePort> SavedState<S> {
    pub fn new(port: S) -> Self {
        Self {
            registry: SavedRegistry::new(port),
            catalog: Vec::new(),
            items: Vec::new(),
            loading: false,
        }
    }

    pub fn registry(&self) -> &SavedRegistry<S> {
        &self.registry
    }

    /// Fetch records and rebuild the saved list.
    pub async fn load<C: PropertyClient + ?Sized>(&mut self, client: &C) {
        self.loading = true;
        let properties = client.get_all().await;
        self.catalog = properties;
        self.resolve();
        self.loading = false;
    }

    /// Rebuild the saved list from already-fetched records.
    pub fn refresh(&mut self, properties: &[Property]) {
        self.catalog = properties.to_vec();
        self.resolve();
    }

    fn resolve(&mut self) {
        self.items = resolve_saved(&self.catalog, &self.registry.list());
    }

    pub fn is_saved(&self, property_id: i64) -> bool {
        self.registry.is_saved(property_id)
    }

    /// Save when absent, unsave when present. Returns the persisted status
    /// afterwards, so a failed write reports the unchanged state.
    pub fn toggle(&mut self, property_id: i64) -> bool {
        if self.registry.is_saved(property_id) {
            if self.registry.remove(property_id) {
                self.items.retain(|item| item.id != property_id);
            }
        } else if self.registry.save(property_id) {
            self.resolve();
        }
        self.registry.is_saved(property_id)
    }

    /// Unsave one property and drop it from the list.
    pub fn remove(&mut self, property_id: i64) -> bool {
        let removed = self.registry.remove(property_id);
        if removed {
            self.items.retain(|item| item.id != property_id);
        }
        removed
    }

    /// Unsave everything.
    pub fn clear_all(&mut self) -> bool {
        let cleared = self.registry.clear_all();
        if cleared {
            self.items.clear();
        }
        cleared
    }
}
