//! The top-level BlackRoad API client facade.

use crate::clients::HttpClient;
use crate::config::{ApiKey, BlackRoadConfig};
use crate::error::ConfigError;
use crate::resources::{Analytics, Deployments, Products};

/// The BlackRoad API client.
///
/// This is the single entry point consumers instantiate to access all
/// resource clients. It owns one [`HttpClient`] configured with the API key
/// and base URL; resource clients borrow that transport, so credentials and
/// the base URL are shared by reference and never mutated after
/// construction.
///
/// # Example
///
/// ```rust,ignore
/// use blackroad_api::BlackRoad;
///
/// let client = BlackRoad::with_api_key("your-api-key")?;
///
/// let products = client.products().list(None).await?;
/// let deployment = client
///     .deployments()
///     .create("product-123", "production")
///     .await?;
/// ```
#[derive(Debug)]
pub struct BlackRoad {
    http: HttpClient,
}

// Verify BlackRoad is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BlackRoad>();
};

impl BlackRoad {
    /// Creates a new client from the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blackroad_api::{BlackRoad, BlackRoadConfig, ApiKey, BaseUrl};
    ///
    /// let config = BlackRoadConfig::builder()
    ///     .api_key(ApiKey::new("your-api-key").unwrap())
    ///     .base_url(BaseUrl::new("https://api.staging.blackroad.io").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BlackRoad::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &BlackRoadConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Creates a new client from an API key, using the production base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blackroad_api::BlackRoad;
    ///
    /// let client = BlackRoad::with_api_key("your-api-key").unwrap();
    /// ```
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = BlackRoadConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Ok(Self::new(&config))
    }

    /// Returns the products resource client.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(&self.http)
    }

    /// Returns the deployments resource client.
    #[must_use]
    pub const fn deployments(&self) -> Deployments<'_> {
        Deployments::new(&self.http)
    }

    /// Returns the analytics resource client.
    #[must_use]
    pub const fn analytics(&self) -> Analytics<'_> {
        Analytics::new(&self.http)
    }

    /// Returns the underlying HTTP transport.
    ///
    /// Useful for endpoints not covered by the resource clients.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }
}
