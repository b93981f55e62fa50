use super::*;

#[test]
fn properties_endpoint_joins_base_url() {
    assert_eq!(properties_endpoint("/api"), "/api/properties");
    assert_eq!(properties_endpoint("https://homes.example/v1/"), "https://homes.example/v1/properties");
}

#[test]
fn property_endpoint_appends_id() {
    assert_eq!(property_endpoint("/api", 42), "/api/properties/42");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("get property", 404), "get property failed: 404");
}

#[test]
fn default_client_targets_api_mount() {
    assert_eq!(RestPropertyClient::default().base_url(), DEFAULT_BASE_URL);
}

#[cfg(not(feature = "hydrate"))]
mod without_browser {
    use super::*;

    #[tokio::test]
    async fn every_call_yields_no_data() {
        let client = RestPropertyClient::default();
        assert!(client.get_all().await.is_empty());
        assert!(client.get_by_id(1).await.is_none());
        assert!(client.update(1, PropertyPatch::default()).await.is_none());
        assert!(!client.delete(1).await);
    }
}
