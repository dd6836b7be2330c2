//! Deployments resource client.

use serde_json::json;

use crate::clients::{HttpClient, HttpError};

/// Client for the `/v1/deployments` resource family.
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
/// let deployment = client
///     .deployments()
///     .create("prod-123", "production")
///     .await?;
/// let status = client.deployments().get_status("dep-9").await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Deployments<'a> {
    client: &'a HttpClient,
}

impl<'a> Deployments<'a> {
    /// Creates a deployments client backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists deployments.
    ///
    /// Issues `GET /v1/deployments`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn list(&self) -> Result<serde_json::Value, HttpError> {
        self.client.get("/v1/deployments", None).await
    }

    /// Creates a new deployment of a product to an environment.
    ///
    /// Issues `POST /v1/deployments` with body
    /// `{"product_id": <product_id>, "environment": <environment>}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn create(
        &self,
        product_id: &str,
        environment: &str,
    ) -> Result<serde_json::Value, HttpError> {
        self.client
            .post(
                "/v1/deployments",
                json!({
                    "product_id": product_id,
                    "environment": environment,
                }),
            )
            .await
    }

    /// Gets the status of a deployment.
    ///
    /// Issues `GET /v1/deployments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn get_status(&self, deployment_id: &str) -> Result<serde_json::Value, HttpError> {
        self.client
            .get(&format!("/v1/deployments/{deployment_id}"), None)
            .await
    }

    /// Creates a deployment from an arbitrary configuration object.
    ///
    /// Issues `POST /v1/deployments` with the given JSON body passed through
    /// unmodified. Use [`create`](Self::create) when only a product and an
    /// environment need to be specified.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn deploy(&self, config: serde_json::Value) -> Result<serde_json::Value, HttpError> {
        self.client.post("/v1/deployments", config).await
    }
}
