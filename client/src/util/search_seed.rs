//! Search term carried in the page URL (`?search=...`).
//!
//! The catalog page seeds its `location` filter from this on first load.

#[cfg(test)]
#[path = "search_seed_test.rs"]
mod search_seed_test;

/// Query parameter holding the free-text search term.
pub const SEARCH_PARAM: &str = "search";

/// Trimmed search term, `None` when absent or blank.
#[must_use]
pub fn normalize_search_term(raw: Option<String>) -> Option<String> {
    raw.map(|term| term.trim().to_owned())
        .filter(|term| !term.is_empty())
}

/// Search term from the current page URL. Always `None` outside the browser.
#[must_use]
pub fn current_search_term() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        normalize_search_term(params.get(SEARCH_PARAM))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
