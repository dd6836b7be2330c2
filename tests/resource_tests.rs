//! Integration tests for the resource clients.
//!
//! These tests verify that each resource method maps to the expected HTTP
//! request (method, path, query parameters, body) and passes the response
//! body through unchanged.

use blackroad_api::{ApiKey, BaseUrl, BlackRoad, BlackRoadConfig, HttpError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> BlackRoad {
    let config = BlackRoadConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    BlackRoad::new(&config)
}

// ============================================================================
// Products Tests
// ============================================================================

#[tokio::test]
async fn test_products_list_sends_explicit_limit() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.products().list(Some(50)).await.unwrap();
    assert_eq!(body, json!({"products": []}));
}

#[tokio::test]
async fn test_products_list_defaults_limit_to_100() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&server)
        .await;

    client.products().list(None).await.unwrap();
}

#[tokio::test]
async fn test_products_get_issues_get_by_id() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let payload = json!({
        "id": "p1",
        "name": "Widget",
        "description": "A widget",
        "created_at": "2024-01-15T09:30:00Z"
    });

    Mock::given(method("GET"))
        .and(path("/v1/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.products().get("p1").await.unwrap();
    assert_eq!(body, payload);

    // The raw body decodes into the typed model
    let product: blackroad_api::Product = serde_json::from_value(body).unwrap();
    assert_eq!(product.id, "p1");
    assert_eq!(product.name, "Widget");
}

#[tokio::test]
async fn test_products_create_posts_arbitrary_body() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let data = json!({"name": "New Product", "description": "Brand new"});

    Mock::given(method("POST"))
        .and(path("/v1/products"))
        .and(body_json(data.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p2"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.products().create(data).await.unwrap();
    assert_eq!(body, json!({"id": "p2"}));
}

// ============================================================================
// Deployments Tests
// ============================================================================

#[tokio::test]
async fn test_deployments_list_issues_get() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deployments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.deployments().list().await.unwrap();
    assert_eq!(body, json!({"deployments": []}));
}

#[tokio::test]
async fn test_deployments_create_shapes_body_under_fixed_keys() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1/deployments"))
        .and(body_json(json!({
            "product_id": "prod-123",
            "environment": "production"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "dep-1",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client
        .deployments()
        .create("prod-123", "production")
        .await
        .unwrap();
    assert_eq!(body, json!({"id": "dep-1", "status": "pending"}));
}

#[tokio::test]
async fn test_deployments_get_status_issues_get_by_id() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/deployments/dep-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dep-1",
            "product_id": "prod-123",
            "environment": "production",
            "status": "running",
            "created_at": "2024-02-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.deployments().get_status("dep-1").await.unwrap();
    assert_eq!(body["status"], "running");

    let deployment: blackroad_api::Deployment = serde_json::from_value(body).unwrap();
    assert_eq!(deployment.status, "running");
}

#[tokio::test]
async fn test_deployments_deploy_posts_config_unmodified() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let config = json!({
        "product_id": "prod-123",
        "environment": "staging",
        "replicas": 3,
        "flags": {"canary": true}
    });

    Mock::given(method("POST"))
        .and(path("/v1/deployments"))
        .and(body_json(config.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "dep-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.deployments().deploy(config).await.unwrap();
    assert_eq!(body, json!({"id": "dep-2"}));
}

// ============================================================================
// Analytics Tests
// ============================================================================

#[tokio::test]
async fn test_analytics_query_sends_explicit_range() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/analytics"))
        .and(query_param("range", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_requests": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.analytics().query(Some("30d")).await.unwrap();
    assert_eq!(body, json!({"total_requests": 42}));
}

#[tokio::test]
async fn test_analytics_query_defaults_range_to_7d() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/analytics"))
        .and(query_param("range", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_requests": 7})))
        .expect(1)
        .mount(&server)
        .await;

    client.analytics().query(None).await.unwrap();
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[tokio::test]
async fn test_resource_errors_propagate_status_and_body() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/products/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .expect(1) // exactly one attempt, no retry
        .mount(&server)
        .await;

    let result = client.products().get("missing").await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("Not found"));
        }
        other => panic!("Expected HttpError::Response, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_resource_decode_error_on_malformed_body() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.deployments().list().await;

    assert!(
        matches!(result, Err(HttpError::Decode(_))),
        "Expected HttpError::Decode, got: {result:?}"
    );
}
