//! Filter evaluation engine.
//!
//! Pure functions over an already-loaded property list. Predicates are
//! evaluated in a fixed order (location, price bounds, bedrooms, bathrooms,
//! property type) and short-circuit on the first miss. The result keeps the
//! input order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::criteria::{FilterCriteria, active_text};
use crate::property::Property;

/// Criteria with text fields lowercased once, not per record.
struct Prepared<'a> {
    criteria: &'a FilterCriteria,
    location: Option<String>,
    property_type: Option<String>,
}

impl<'a> Prepared<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            location: active_text(criteria.location.as_ref()).map(str::to_lowercase),
            property_type: active_text(criteria.property_type.as_ref()).map(str::to_lowercase),
        }
    }

    fn allows(&self, property: &Property) -> bool {
        if let Some(term) = &self.location {
            let hit = property.address.to_lowercase().contains(term.as_str())
                || property.title.to_lowercase().contains(term.as_str())
                || property.property_type.to_lowercase().contains(term.as_str());
            if !hit {
                return false;
            }
        }
        if let Some(min) = self.criteria.price_min {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.criteria.price_max {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.criteria.bedrooms_min {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.criteria.bathrooms_min {
            if property.bathrooms < min {
                return false;
            }
        }
        if let Some(kind) = &self.property_type {
            if property.property_type.to_lowercase() != *kind {
                return false;
            }
        }
        true
    }
}

/// True when `property` passes every active predicate in `criteria`.
#[must_use]
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    Prepared::new(criteria).allows(property)
}

/// Borrowing variant of [`apply`].
pub fn filter_iter<'a>(
    properties: &'a [Property],
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = &'a Property> + 'a {
    let prepared = Prepared::new(criteria);
    properties
        .iter()
        .filter(move |property| prepared.allows(property))
}

/// Stable subset of `properties` passing every active predicate.
#[must_use]
pub fn apply(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    filter_iter(properties, criteria).cloned().collect()
}
