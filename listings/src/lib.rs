//! Listing catalog core for HomeHub: property model, filter evaluation, and
//! the locally persisted saved-property and filter-preference stores.
//!
//! This crate is UI-framework agnostic. Browser glue (`localStorage`, REST
//! fetches, URL parsing) lives in the `client` crate and plugs in through the
//! [`StoragePort`] and [`PropertyClient`] seams, so everything here runs the
//! same under native tests, the CLI, and WASM.

pub mod criteria;
pub mod filter;
pub mod format;
pub mod listing;
pub mod preferences;
pub mod property;
pub mod record_client;
pub mod saved;
pub mod saved_view;
pub mod storage;

pub use criteria::{ActiveFilter, FilterCriteria, FilterKey};
pub use filter::{apply, matches};
pub use listing::ListingState;
pub use preferences::FilterPreferences;
pub use property::{Property, PropertyDraft, PropertyPatch};
pub use record_client::{InMemoryPropertyClient, PropertyClient};
pub use saved::{SavedEntry, SavedRegistry};
pub use saved_view::{SavedState, resolve_saved};
pub use storage::{JsonStore, MemoryStorage, StorageError, StoragePort};
