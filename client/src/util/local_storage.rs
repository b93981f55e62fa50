//! `localStorage` as a [`StoragePort`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The saved-property registry and the filter preference store take their
//! storage as a port. This is the browser one: hydrate builds talk to
//! `window.localStorage`, other builds see an empty store that refuses writes.
//!
//! TRADE-OFFS
//! ==========
//! Every call looks the storage object up again instead of caching it, so a
//! page that loses storage access mid-session degrades per call rather than
//! holding a dead handle.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use listings::{StorageError, StoragePort};

/// Handle onto the page's `localStorage`. Copies share the same store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|err| js_error("localStorage", &err))?
        .ok_or(StorageError::Unavailable)
}

/// Map a thrown JS value onto [`StorageError`].
#[cfg(feature = "hydrate")]
fn js_error(key: &str, value: &wasm_bindgen::JsValue) -> StorageError {
    use wasm_bindgen::JsCast;

    match value.dyn_ref::<web_sys::DomException>() {
        Some(exception) if is_quota_error(&exception.name()) => {
            StorageError::QuotaExceeded(key.to_owned())
        }
        Some(exception) => {
            StorageError::Backend(format!("{}: {}", exception.name(), exception.message()))
        }
        None => StorageError::Backend(format!("{value:?}")),
    }
}

/// Browsers disagree on the exception name for a full store.
#[cfg(any(test, feature = "hydrate"))]
fn is_quota_error(name: &str) -> bool {
    matches!(name, "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED")
}

impl StoragePort for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| js_error(key, &err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| js_error(key, &err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| js_error(key, &err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
