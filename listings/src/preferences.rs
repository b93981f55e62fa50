//! Last-used filter criteria, persisted across sessions.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::criteria::FilterCriteria;
use crate::storage::{FILTER_PREFERENCES_KEY, JsonStore, StoragePort};

#[derive(Clone, Debug)]
pub struct FilterPreferences<S> {
    store: JsonStore<S>,
}

impl<S: StoragePort> FilterPreferences<S> {
    pub fn new(port: S) -> Self {
        Self {
            store: JsonStore::new(port),
        }
    }

    /// Stored criteria, `None` when nothing was saved or the blob is unreadable.
    pub fn load(&self) -> Option<FilterCriteria> {
        self.store.read(FILTER_PREFERENCES_KEY)
    }

    /// Persist `criteria` as-is. `false` when the write failed.
    pub fn save(&self, criteria: &FilterCriteria) -> bool {
        self.store.write(FILTER_PREFERENCES_KEY, criteria)
    }

    /// Criteria for a first visit, see [`FilterCriteria::seeded`].
    pub fn initial(&self, search_term: Option<&str>) -> FilterCriteria {
        FilterCriteria::seeded(self.load(), search_term)
    }
}
