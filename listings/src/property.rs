//! Property records as served by the remote record store.
//!
//! DESIGN
//! ======
//! The record store owns these; the core only reads them. `id` is an opaque
//! equality key and is never generated here, except by the in-memory record
//! client standing in for the store.

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use serde::{Deserialize, Serialize};

/// A single listed real-estate unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique record identifier. Older catalog dumps spell the key `Id`.
    #[serde(alias = "Id")]
    pub id: i64,
    pub title: String,
    /// Asking price in dollars.
    pub price: f64,
    /// Free-text address, `"street, city, state"`.
    pub address: String,
    /// Category such as `"house"` or `"condo"`.
    pub property_type: String,
    pub bedrooms: f64,
    pub bathrooms: f64,
    #[serde(default)]
    pub square_feet: f64,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Image URIs, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Record payload for `create`; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub price: f64,
    pub address: String,
    pub property_type: String,
    pub bedrooms: f64,
    pub bathrooms: f64,
    #[serde(default)]
    pub square_feet: f64,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial record for `update`. Only `Some` fields overwrite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Property {
    /// Materialize a draft under a store-assigned id.
    #[must_use]
    pub fn from_draft(id: i64, draft: PropertyDraft) -> Self {
        Self {
            id,
            title: draft.title,
            price: draft.price,
            address: draft.address,
            property_type: draft.property_type,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            square_feet: draft.square_feet,
            year_built: draft.year_built,
            description: draft.description,
            features: draft.features,
            images: draft.images,
        }
    }

    /// Merge `patch` onto this record. The id never changes.
    pub fn apply_patch(&mut self, patch: PropertyPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(property_type) = patch.property_type {
            self.property_type = property_type;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(square_feet) = patch.square_feet {
            self.square_feet = square_feet;
        }
        if let Some(year_built) = patch.year_built {
            self.year_built = Some(year_built);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }

    /// Cover image, if the record carries any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
