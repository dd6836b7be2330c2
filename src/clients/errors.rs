//! HTTP-specific error types for the BlackRoad API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, body decode failures, and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Every failure propagates directly to the caller; the SDK performs no
//! retries or local recovery.
//!
//! # Example
//!
//! ```rust,ignore
//! use blackroad_api::clients::HttpError;
//!
//! match client.get("/v1/products/p1", None).await {
//!     Ok(body) => println!("Product: {body}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::Decode(e)) => {
//!         println!("Response body was not valid JSON: {e}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {e}");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// This error carries the HTTP status code and the raw response body so the
/// caller can decide how to handle the failure. No distinction is made
/// between 4xx and 5xx beyond the status code itself.
///
/// # Example
///
/// ```rust
/// use blackroad_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 404: {"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a missing body for POST/PUT requests.
///
/// # Example
///
/// ```rust
/// use blackroad_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// # Example
///
/// ```rust,ignore
/// use blackroad_api::HttpError;
///
/// let result = client.request(request).await;
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::Decode(e)) => { /* handle malformed body */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
