//! Configuration types for the BlackRoad API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with BlackRoad.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BlackRoadConfig`]: The main configuration struct holding all SDK settings
//! - [`BlackRoadConfigBuilder`]: A builder for constructing [`BlackRoadConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use blackroad_api::{BlackRoadConfig, ApiKey, BaseUrl};
//!
//! let config = BlackRoadConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://api.staging.blackroad.io").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the BlackRoad API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// key used for Bearer authentication, the API base URL, and an optional
/// User-Agent prefix for outgoing requests.
///
/// # Immutability
///
/// Configuration is fixed at construction time. The transport client copies
/// these values once and never mutates them; resource clients share them by
/// borrowing the transport.
///
/// # Thread Safety
///
/// `BlackRoadConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use blackroad_api::{BlackRoadConfig, ApiKey};
///
/// let config = BlackRoadConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.blackroad.io");
/// ```
#[derive(Clone, Debug)]
pub struct BlackRoadConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl BlackRoadConfig {
    /// Creates a new builder for constructing a `BlackRoadConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blackroad_api::{BlackRoadConfig, ApiKey};
    ///
    /// let config = BlackRoadConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> BlackRoadConfigBuilder {
        BlackRoadConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BlackRoadConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BlackRoadConfig>();
};

/// Builder for constructing [`BlackRoadConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `api_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.blackroad.io`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use blackroad_api::{BlackRoadConfig, ApiKey, BaseUrl};
///
/// let config = BlackRoadConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BlackRoadConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl BlackRoadConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    ///
    /// Defaults to the production URL `https://api.blackroad.io` when unset.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BlackRoadConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<BlackRoadConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(BlackRoadConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
