//! HTTP client types for BlackRoad API communication.
//!
//! This module provides the foundational HTTP transport layer for making
//! authenticated requests to the BlackRoad API. It handles request/response
//! processing and error surfacing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use blackroad_api::{BlackRoadConfig, ApiKey};
//! use blackroad_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = BlackRoadConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! // Verb helpers return the decoded JSON body directly
//! let products = client.get("/v1/products", None).await?;
//!
//! // Or build a request explicitly for full control
//! let request = HttpRequest::builder(HttpMethod::Get, "/v1/products")
//!     .query_param("limit", "50")
//!     .build()
//!     .unwrap();
//! let response = client.request(request).await?;
//! ```
//!
//! # Error Behavior
//!
//! Every operation is a single request/response round trip. Non-2xx
//! responses surface as [`HttpError::Response`] carrying the status code and
//! raw body; a successful response whose body is not valid JSON surfaces as
//! [`HttpError::Decode`]. No retries are attempted.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
