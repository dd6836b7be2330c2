//! Integration tests for the top-level client facade.
//!
//! These tests verify facade construction, configuration defaults, and that
//! all resource clients share the facade's transport.

use blackroad_api::{ApiKey, BaseUrl, BlackRoad, BlackRoadConfig, ConfigError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_with_api_key_defaults_to_production_url() {
    let client = BlackRoad::with_api_key("test-key").unwrap();
    assert_eq!(client.http().base_url(), "https://api.blackroad.io");
}

#[test]
fn test_with_api_key_rejects_empty_key() {
    let result = BlackRoad::with_api_key("");
    assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
}

#[test]
fn test_config_builder_requires_api_key() {
    let result = BlackRoadConfig::builder().build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_facade_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BlackRoad>();
}

#[test]
fn test_types_exported_at_crate_root() {
    // Verify the public surface is accessible from the crate root
    let _: fn(blackroad_api::BlackRoad) = |_| {};
    let _: fn(blackroad_api::HttpClient) = |_| {};
    let _: fn(blackroad_api::HttpError) = |_| {};
    let _: fn(blackroad_api::Product) = |_| {};
    let _: fn(blackroad_api::Deployment) = |_| {};
}

// ============================================================================
// Shared Transport Tests
// ============================================================================

#[tokio::test]
async fn test_all_resources_share_auth_and_base_url() {
    let server = MockServer::start().await;
    let config = BlackRoadConfig::builder()
        .api_key(ApiKey::new("shared-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = BlackRoad::new(&config);

    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(header("Authorization", "Bearer shared-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/deployments"))
        .and(header("Authorization", "Bearer shared-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deployments": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/analytics"))
        .and(header("Authorization", "Bearer shared-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    client.products().list(None).await.unwrap();
    client.deployments().list().await.unwrap();
    client.analytics().query(None).await.unwrap();
}

#[tokio::test]
async fn test_call_chain_style_usage() {
    let server = MockServer::start().await;
    let config = BlackRoadConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = BlackRoad::new(&config);

    Mock::given(method("GET"))
        .and(path("/v1/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .mount(&server)
        .await;

    // `client.products().get(...)` reads as the single-entry-point chain
    let product = client.products().get("p1").await.unwrap();
    assert_eq!(product["id"], "p1");
}

#[tokio::test]
async fn test_raw_transport_accessible_for_uncovered_endpoints() {
    let server = MockServer::start().await;
    let config = BlackRoadConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = BlackRoad::new(&config);

    Mock::given(method("GET"))
        .and(path("/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"healthy": true})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.http().get("/v1/status", None).await.unwrap();
    assert_eq!(body, json!({"healthy": true}));
}
