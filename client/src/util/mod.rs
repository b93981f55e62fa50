//! Browser environment adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from the listing core so the core
//! stays testable without a browser.

pub mod local_storage;
pub mod search_seed;
