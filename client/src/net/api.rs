//! REST record-store client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: every call yields the contract's "no data" shape, since the
//! record store is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-OK statuses and undecodable bodies are logged and
//! collapse to an empty list, `None` or `false`, so a flaky record store
//! empties the catalog instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use listings::{Property, PropertyClient, PropertyDraft, PropertyPatch};

/// Default mount point of the record store.
pub const DEFAULT_BASE_URL: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn properties_endpoint(base_url: &str) -> String {
    format!("{}/properties", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn property_endpoint(base_url: &str, id: i64) -> String {
    format!("{}/{id}", properties_endpoint(base_url))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// [`PropertyClient`] over the HTTP record store.
#[derive(Clone, Debug)]
pub struct RestPropertyClient {
    base_url: String,
}

impl Default for RestPropertyClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RestPropertyClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Send `request` and decode a JSON body, logging any failure.
#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(
    action: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Option<T> {
    let response = match request {
        Ok(request) => request.send().await,
        Err(error) => Err(error),
    };
    let response = match response {
        Ok(response) => response,
        Err(error) => {
            log::warn!("{action} failed: {error}");
            return None;
        }
    };
    if !response.ok() {
        log::warn!("{}", request_failed_message(action, response.status()));
        return None;
    }
    match response.json::<T>().await {
        Ok(body) => Some(body),
        Err(error) => {
            log::warn!("{action} returned an unreadable body: {error}");
            None
        }
    }
}

#[async_trait::async_trait(?Send)]
impl PropertyClient for RestPropertyClient {
    async fn get_all(&self) -> Vec<Property> {
        #[cfg(feature = "hydrate")]
        {
            let url = properties_endpoint(&self.base_url);
            fetch_json::<Vec<Property>>("list properties", gloo_net::http::Request::get(&url).build())
                .await
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }

    async fn get_by_id(&self, id: i64) -> Option<Property> {
        #[cfg(feature = "hydrate")]
        {
            let url = property_endpoint(&self.base_url, id);
            fetch_json("get property", gloo_net::http::Request::get(&url).build()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            None
        }
    }

    async fn create(&self, draft: PropertyDraft) -> Option<Property> {
        #[cfg(feature = "hydrate")]
        {
            let url = properties_endpoint(&self.base_url);
            fetch_json("create property", gloo_net::http::Request::post(&url).json(&draft)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            None
        }
    }

    async fn update(&self, id: i64, patch: PropertyPatch) -> Option<Property> {
        #[cfg(feature = "hydrate")]
        {
            let url = property_endpoint(&self.base_url, id);
            fetch_json("update property", gloo_net::http::Request::patch(&url).json(&patch)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, patch);
            None
        }
    }

    async fn delete(&self, id: i64) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let url = property_endpoint(&self.base_url, id);
            match gloo_net::http::Request::delete(&url).send().await {
                Ok(response) if response.ok() => true,
                Ok(response) => {
                    log::warn!("{}", request_failed_message("delete property", response.status()));
                    false
                }
                Err(error) => {
                    log::warn!("delete property failed: {error}");
                    false
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            false
        }
    }
}
