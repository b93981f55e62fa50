//! Typed filter criteria for the listing catalog.
//!
//! DESIGN
//! ======
//! Every field is optional and `None` is the only "unset" sentinel. Numeric
//! zero is a real bound. The deserializer folds the loose shapes older
//! preference blobs carry (`""` for "any", numbers sent as select-box
//! strings) into that single sentinel, so the engine never has to guess.

#[cfg(test)]
#[path = "criteria_test.rs"]
mod criteria_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{format_count, format_price};

/// Query object narrowing a property list to a subset.
///
/// Fields compose with logical AND; `location` alone ORs across address,
/// title and property type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "optional_number")]
    pub price_min: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub price_max: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub bedrooms_min: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub bathrooms_min: Option<f64>,
    /// Case-insensitive exact match against the record's type.
    #[serde(default, deserialize_with = "optional_text")]
    pub property_type: Option<String>,
    /// Case-insensitive substring of address, title or property type.
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
}

/// Removable filter groups, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    Location,
    /// Both price bounds together.
    Price,
    PropertyType,
    BedroomsMin,
    BathroomsMin,
}

/// One active constraint rendered as a removable pill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(value)) => value,
        Some(NumberOrText::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("expected a number, got {raw:?}")))?
        }
    };
    // `parse` accepts "NaN" and "inf"; neither is a usable bound.
    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format!("expected a non-negative bound, got {value}")));
    }
    Ok(Some(value))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.is_empty()))
}

/// Non-empty text value, treating `Some("")` built in code like `None`.
pub(crate) fn active_text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

impl FilterCriteria {
    /// Criteria for a first visit: persisted preferences supply every field,
    /// and a URL search term that is not blank overrides `location` (trimmed).
    #[must_use]
    pub fn seeded(persisted: Option<FilterCriteria>, search_term: Option<&str>) -> Self {
        let mut criteria = persisted.unwrap_or_default();
        if let Some(term) = search_term.map(str::trim).filter(|term| !term.is_empty()) {
            criteria.location = Some(term.to_owned());
        }
        criteria
    }

    /// True when no field constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.bedrooms_min.is_none()
            && self.bathrooms_min.is_none()
            && active_text(self.property_type.as_ref()).is_none()
            && active_text(self.location.as_ref()).is_none()
    }

    /// Unset one filter group.
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::Location => self.location = None,
            FilterKey::Price => {
                self.price_min = None;
                self.price_max = None;
            }
            FilterKey::PropertyType => self.property_type = None,
            FilterKey::BedroomsMin => self.bedrooms_min = None,
            FilterKey::BathroomsMin => self.bathrooms_min = None,
        }
    }

    /// Active constraints as display pills.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut pills = Vec::new();

        if let Some(location) = active_text(self.location.as_ref()) {
            pills.push(ActiveFilter {
                key: FilterKey::Location,
                label: format!("Location: {location}"),
            });
        }
        if self.price_min.is_some() || self.price_max.is_some() {
            let min = self.price_min.map_or_else(|| "Any".to_owned(), format_price);
            let max = self.price_max.map_or_else(|| "Any".to_owned(), format_price);
            pills.push(ActiveFilter {
                key: FilterKey::Price,
                label: format!("Price: {min} - {max}"),
            });
        }
        if let Some(kind) = active_text(self.property_type.as_ref()) {
            pills.push(ActiveFilter {
                key: FilterKey::PropertyType,
                label: format!("Type: {kind}"),
            });
        }
        if let Some(bedrooms) = self.bedrooms_min {
            pills.push(ActiveFilter {
                key: FilterKey::BedroomsMin,
                label: format!("{}+ bedrooms", format_count(bedrooms)),
            });
        }
        if let Some(bathrooms) = self.bathrooms_min {
            pills.push(ActiveFilter {
                key: FilterKey::BathroomsMin,
                label: format!("{}+ bathrooms", format_count(bathrooms)),
            });
        }

        pills
    }
}
