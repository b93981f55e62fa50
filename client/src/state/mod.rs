//! Page state wired to browser storage and the page URL.
//!
//! DESIGN
//! ======
//! The state types live in `listings`; this module only binds them to
//! [`BrowserStorage`] and the URL search seed so pages build them the same
//! way everywhere.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use listings::{ListingState, SavedState};

use crate::util::local_storage::BrowserStorage;
use crate::util::search_seed::current_search_term;

/// Catalog state seeded from saved preferences and `?search=`.
#[must_use]
pub fn listing_state() -> ListingState<BrowserStorage> {
    let seed = current_search_term();
    ListingState::new(BrowserStorage, seed.as_deref())
}

/// Saved-properties page state.
#[must_use]
pub fn saved_state() -> SavedState<BrowserStorage> {
    SavedState::new(BrowserStorage)
}
