//! Products resource client.

use std::collections::HashMap;

use crate::clients::{HttpClient, HttpError};

/// Default page size for product listings.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Client for the `/v1/products` resource family.
///
/// Borrows the shared [`HttpClient`] and exposes domain-named methods that
/// forward to the corresponding HTTP verb with fixed endpoint paths. Holds
/// no state of its own.
///
/// # Example
///
/// ```rust,ignore
/// let client = BlackRoad::with_api_key("your-api-key")?;
///
/// let products = client.products().list(None).await?;
/// let product = client.products().get("prod-123").await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Products<'a> {
    client: &'a HttpClient,
}

impl<'a> Products<'a> {
    /// Creates a products client backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists products.
    ///
    /// Issues `GET /v1/products?limit=<n>`. The `limit` parameter defaults
    /// to [`DEFAULT_LIST_LIMIT`] and is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn list(&self, limit: Option<u32>) -> Result<serde_json::Value, HttpError> {
        let mut params = HashMap::new();
        params.insert(
            "limit".to_string(),
            limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string(),
        );
        self.client.get("/v1/products", Some(params)).await
    }

    /// Gets a product by ID.
    ///
    /// Issues `GET /v1/products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn get(&self, product_id: &str) -> Result<serde_json::Value, HttpError> {
        self.client
            .get(&format!("/v1/products/{product_id}"), None)
            .await
    }

    /// Creates a new product.
    ///
    /// Issues `POST /v1/products` with the given JSON body, which is passed
    /// through to the API unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn create(&self, data: serde_json::Value) -> Result<serde_json::Value, HttpError> {
        self.client.post("/v1/products", data).await
    }
}
