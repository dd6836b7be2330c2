//! # BlackRoad API Rust SDK
//!
//! A Rust SDK for the BlackRoad API, providing type-safe configuration,
//! Bearer authentication, and an async HTTP client for products,
//! deployments, and analytics.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BlackRoadConfig`] and [`BlackRoadConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An async HTTP transport ([`HttpClient`]) with shared auth headers and
//!   connection reuse
//! - Thin resource clients for products, deployments, and analytics
//! - A single facade ([`BlackRoad`]) as the entry point for all of the above
//!
//! Every operation is a single synchronous request/response round trip over
//! the async transport: no retries, no caching, no pagination cursors beyond
//! a simple `limit` parameter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blackroad_api::BlackRoad;
//!
//! let client = BlackRoad::with_api_key("your-api-key")?;
//!
//! // List products (limit defaults to 100)
//! let products = client.products().list(None).await?;
//!
//! // Create a deployment
//! let deployment = client
//!     .deployments()
//!     .create("product-123", "production")
//!     .await?;
//!
//! // Query analytics for the last 30 days
//! let analytics = client.analytics().query(Some("30d")).await?;
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use blackroad_api::{BlackRoad, BlackRoadConfig, ApiKey, BaseUrl};
//!
//! let config = BlackRoadConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://api.staging.blackroad.io").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = BlackRoad::new(&config);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use blackroad_api::HttpError;
//!
//! match client.products().get("prod-123").await {
//!     Ok(product) => println!("{product}"),
//!     Err(HttpError::Response(e)) => eprintln!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => eprintln!("Bad response body: {e}"),
//!     Err(e) => eprintln!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Immutable credentials**: API key and base URL are fixed at construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::BlackRoad;
pub use config::{ApiKey, BaseUrl, BlackRoadConfig, BlackRoadConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use resources::{Analytics, Deployment, Deployments, Product, Products};
