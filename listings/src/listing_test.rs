use super::*;
use crate::record_client::InMemoryPropertyClient;
use crate::storage::{FILTER_PREFERENCES_KEY, MemoryStorage};

fn property(id: i64, price: f64, kind: &str, address: &str) -> Property {
    Property {
        id,
        title: format!("Listing {id}"),
        price,
        address: address.to_owned(),
        property_type: kind.to_owned(),
        bedrooms: 3.0,
        bathrooms: 2.0,
        square_feet: 1_500.0,
        year_built: Some(1999),
        description: String::new(),
        features: Vec::new(),
        images: Vec::new(),
    }
}

fn catalog() -> Vec<Property> {
    vec![
        property(1, 200_000.0, "house", "1 Main St, Springfield"),
        property(2, 500_000.0, "condo", "2 Oak Ave, Shelbyville"),
        property(3, 350_000.0, "house", "3 Oak Ct, Springfield"),
    ]
}

fn ids(properties: &[Property]) -> Vec<i64> {
    properties.iter().map(|p| p.id).collect()
}

fn stored(storage: &MemoryStorage) -> Option<FilterCriteria> {
    FilterPreferences::new(storage.clone()).load()
}

// =============================================================
// Initial criteria
// =============================================================

#[test]
fn new_without_preferences_or_seed_is_unfiltered() {
    let state = ListingState::new(MemoryStorage::new(), None);
    assert!(state.criteria.is_empty());
    assert!(!state.loading);
}

#[test]
fn new_merges_seed_over_persisted_preferences() {
    let storage = MemoryStorage::new();
    FilterPreferences::new(storage.clone()).save(&FilterCriteria {
        property_type: Some("house".to_owned()),
        location: Some("springfield".to_owned()),
        ..FilterCriteria::default()
    });

    let state = ListingState::new(storage.clone(), Some("oak"));
    assert_eq!(state.criteria.location.as_deref(), Some("oak"));
    assert_eq!(state.criteria.property_type.as_deref(), Some("house"));
    assert_eq!(
        stored(&storage).and_then(|c| c.location).as_deref(),
        Some("springfield")
    );
}

// =============================================================
// Loading and filtering
// =============================================================

#[tokio::test]
async fn load_applies_current_criteria() {
    let mut state = ListingState::new(MemoryStorage::new(), Some("oak"));
    state.load(&InMemoryPropertyClient::new(catalog())).await;
    assert_eq!(state.properties.len(), 3);
    assert_eq!(ids(&state.visible), vec![2, 3]);
    assert_eq!(state.visible_count(), 2);
}

#[tokio::test]
async fn load_from_empty_store_is_empty_not_error() {
    let mut state = ListingState::new(MemoryStorage::new(), Some("oak"));
    state.load(&InMemoryPropertyClient::default()).await;
    assert!(state.visible.is_empty());
    assert!(!state.loading);
}

#[test]
fn set_criteria_recomputes_and_persists() {
    let storage = MemoryStorage::new();
    let mut state = ListingState::new(storage.clone(), None);
    state.set_properties(catalog());

    let criteria = FilterCriteria {
        price_max: Some(400_000.0),
        property_type: Some("HOUSE".to_owned()),
        ..FilterCriteria::default()
    };
    assert!(state.set_criteria(criteria.clone()));
    assert_eq!(ids(&state.visible), vec![1, 3]);
    assert_eq!(stored(&storage), Some(criteria));
}

#[test]
fn set_criteria_with_failing_storage_still_filters() {
    let storage = MemoryStorage::new();
    let mut state = ListingState::new(storage.clone(), None);
    state.set_properties(catalog());
    storage.set_reject_writes(true);

    let persisted = state.set_criteria(FilterCriteria {
        price_max: Some(250_000.0),
        ..FilterCriteria::default()
    });
    assert!(!persisted);
    assert_eq!(ids(&state.visible), vec![1]);
    assert!(storage.raw(FILTER_PREFERENCES_KEY).is_none());
}

#[test]
fn remove_filter_widens_result() {
    let mut state = ListingState::new(MemoryStorage::new(), None);
    state.set_properties(catalog());
    state.set_criteria(FilterCriteria {
        location: Some("springfield".to_owned()),
        price_min: Some(300_000.0),
        ..FilterCriteria::default()
    });
    assert_eq!(ids(&state.visible), vec![3]);

    state.remove_filter(FilterKey::Price);
    assert_eq!(ids(&state.visible), vec![1, 3]);
    assert_eq!(state.active_filters().len(), 1);
}

#[test]
fn clear_filters_restores_everything_and_persists_cleared() {
    let storage = MemoryStorage::new();
    let mut state = ListingState::new(storage.clone(), Some("oak"));
    state.set_properties(catalog());
    assert!(state.clear_filters());
    assert_eq!(ids(&state.visible), vec![1, 2, 3]);
    assert!(state.active_filters().is_empty());
    assert_eq!(stored(&storage), Some(FilterCriteria::default()));
}
