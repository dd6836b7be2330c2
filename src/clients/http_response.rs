//! HTTP response types for the BlackRoad API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data. The body is the JSON payload exactly as the server
//! returned it; no fields are rewritten or filtered.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the BlackRoad API.
///
/// Contains the response status code, headers, and the parsed JSON body.
/// A response has no identity beyond the single call that produced it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body, passed through unmodified.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the response body into a typed value.
    ///
    /// This is a convenience for callers who want typed models such as
    /// [`Product`](crate::resources::Product) or
    /// [`Deployment`](crate::resources::Deployment) instead of raw JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match the
    /// target type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blackroad_api::HttpResponse;
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), json!({"count": 3}));
    ///
    /// #[derive(serde::Deserialize)]
    /// struct Stats { count: u32 }
    ///
    /// let stats: Stats = response.decode().unwrap();
    /// assert_eq!(stats.count, 3);
    /// ```
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}
