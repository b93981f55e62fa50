//! Catalog page state: loaded records, active criteria and the visible subset.
//!
//! DESIGN
//! ======
//! `visible` is always `filter::apply(properties, criteria)`; every mutation
//! that touches either input recomputes it. Criteria changes made by the user
//! are persisted immediately. The criteria seeded on first load are not
//! written back until the user changes something.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::criteria::{ActiveFilter, FilterCriteria, FilterKey};
use crate::filter;
use crate::preferences::FilterPreferences;
use crate::property::Property;
use crate::record_client::PropertyClient;
use crate::storage::StoragePort;

#[derive(Clone, Debug)]
pub struct ListingState<S> {
    prefs: FilterPreferences<S>,
    pub properties: Vec<Property>,
    pub criteria: FilterCriteria,
    pub visible: Vec<Property>,
    pub loading: bool,
}

impl<S: StoragePort> ListingState<S> {
    /// Restore persisted criteria and apply the URL `search` term, if any.
    pub fn new(port: S, search_term: Option<&str>) -> Self {
        let prefs = FilterPreferences::new(port);
        let criteria = prefs.initial(search_term);
        Self {
            prefs,
            properties: Vec::new(),
            criteria,
            visible: Vec::new(),
            loading: false,
        }
    }

    /// Fetch every record from `client`. A failed fetch looks like an empty
    /// catalog.
    pub async fn load<C: PropertyClient + ?Sized>(&mut self, client: &C) {
        self.loading = true;
        let properties = client.get_all().await;
        tracing::debug!(count = properties.len(), "loaded properties");
        self.set_properties(properties);
        self.loading = false;
    }

    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
        self.recompute();
    }

    /// Replace the criteria and persist them. Returns the persist outcome;
    /// the in-memory criteria change either way.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        self.criteria = criteria;
        self.recompute();
        self.prefs.save(&self.criteria)
    }

    pub fn remove_filter(&mut self, key: FilterKey) -> bool {
        let mut criteria = self.criteria.clone();
        criteria.remove(key);
        self.set_criteria(criteria)
    }

    /// Reset to no constraints and persist the cleared criteria.
    pub fn clear_filters(&mut self) -> bool {
        self.set_criteria(FilterCriteria::default())
    }

    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.criteria.active_filters()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    fn recompute(&mut self) {
        self.visible = filter::apply(&self.properties, &self.criteria);
    }
}
