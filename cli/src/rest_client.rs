//! [`PropertyClient`] over the HTTP record store, via `reqwest`.

#[cfg(test)]
#[path = "rest_client_test.rs"]
mod rest_client_test;

use std::time::Duration;

use listings::{Property, PropertyClient, PropertyDraft, PropertyPatch};
use reqwest::{Method, RequestBuilder};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct RestPropertyClient {
    http: reqwest::Client,
    base_url: String,
}

fn properties_endpoint(base_url: &str) -> String {
    format!("{}/properties", base_url.trim_end_matches('/'))
}

fn property_endpoint(base_url: &str, id: i64) -> String {
    format!("{}/{id}", properties_endpoint(base_url))
}

impl RestPropertyClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend setup).
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_owned(),
        })
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Send and decode, logging and discarding any failure.
    async fn fetch<T: serde::de::DeserializeOwned>(&self, action: &str, request: RequestBuilder) -> Option<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(action, %error, "record store request failed");
                return None;
            }
        };
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(action, status = status.as_u16(), "record store rejected request");
            return None;
        }
        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(error) => {
                tracing::warn!(action, %error, "record store returned an unreadable body");
                None
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl PropertyClient for RestPropertyClient {
    async fn get_all(&self) -> Vec<Property> {
        let request = self.request(Method::GET, properties_endpoint(&self.base_url));
        self.fetch("list properties", request).await.unwrap_or_default()
    }

    async fn get_by_id(&self, id: i64) -> Option<Property> {
        let request = self.request(Method::GET, property_endpoint(&self.base_url, id));
        self.fetch("get property", request).await
    }

    async fn create(&self, draft: PropertyDraft) -> Option<Property> {
        let request = self
            .request(Method::POST, properties_endpoint(&self.base_url))
            .json(&draft);
        self.fetch("create property", request).await
    }

    async fn update(&self, id: i64, patch: PropertyPatch) -> Option<Property> {
        let request = self
            .request(Method::PATCH, property_endpoint(&self.base_url, id))
            .json(&patch);
        self.fetch("update property", request).await
    }

    async fn delete(&self, id: i64) -> bool {
        let request = self.request(Method::DELETE, property_endpoint(&self.base_url, id));
        match request.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(id, status = response.status().as_u16(), "delete rejected");
                false
            }
            Err(error) => {
                tracing::warn!(id, %error, "delete request failed");
                false
            }
        }
    }
}
