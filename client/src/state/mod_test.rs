#![cfg(not(feature = "hydrate"))]

use listings::{FilterCriteria, InMemoryPropertyClient};

use super::*;

#[test]
fn listing_state_without_browser_is_unfiltered() {
    let state = listing_state();
    assert_eq!(state.criteria, FilterCriteria::default());
    assert!(state.visible.is_empty());
}

#[tokio::test]
async fn listing_state_still_filters_when_nothing_persists() {
    let mut state = listing_state();
    state.load(&InMemoryPropertyClient::default()).await;
    let persisted = state.set_criteria(FilterCriteria {
        price_max: Some(1.0),
        ..FilterCriteria::default()
    });
    assert!(!persisted);
    assert_eq!(state.criteria.price_max, Some(1.0));
}

#[test]
fn saved_state_without_browser_saves_nothing() {
    let mut state = saved_state();
    assert!(!state.toggle(3));
    assert!(!state.is_saved(3));
}
