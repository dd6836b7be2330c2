//! HTTP client for BlackRoad API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the BlackRoad API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::BlackRoadConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BlackRoad API.
///
/// The client handles:
/// - Full URL construction from the configured base URL and endpoint paths
/// - Default headers including User-Agent and the Bearer authorization token
/// - JSON response decoding
/// - Surfacing non-2xx responses as errors
///
/// The base URL and credentials are fixed at construction and never mutated.
/// One request maps to exactly one HTTP round trip; there is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The underlying reqwest client reuses
/// connections across calls, but no ordering guarantee is made for
/// concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// use blackroad_api::{BlackRoadConfig, ApiKey};
/// use blackroad_api::clients::HttpClient;
///
/// let config = BlackRoadConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let products = client.get("/v1/products", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.blackroad.io`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use blackroad_api::{BlackRoadConfig, ApiKey};
    /// use blackroad_api::clients::HttpClient;
    ///
    /// let config = BlackRoadConfig::builder()
    ///     .api_key(ApiKey::new("your-api-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url(), "https://api.blackroad.io");
    /// ```
    #[must_use]
    pub fn new(config: &BlackRoadConfig) -> Self {
        let base_url = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}BlackRoad API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, endpoint);
        if let Some(params) = params {
            builder = builder.query(params);
        }
        let response = self.request(builder.build()?).await?;
        Ok(response.body)
    }

    /// Sends a POST request with a JSON body to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn post(
        &self,
        endpoint: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, endpoint)
            .body(data)
            .build()?;
        let response = self.request(request).await?;
        Ok(response.body)
    }

    /// Sends a PUT request with a JSON body to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn put(
        &self,
        endpoint: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, endpoint)
            .body(data)
            .build()?;
        let response = self.request(request).await?;
        Ok(response.body)
    }

    /// Sends a DELETE request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn delete(&self, endpoint: &str) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, endpoint).build()?;
        let response = self.request(request).await?;
        Ok(response.body)
    }

    /// Sends an HTTP request to the BlackRoad API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// Exactly one HTTP call is made per invocation; failures propagate
    /// directly to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A successful response body is not valid JSON (`Decode`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "/v1/products")
    ///     .query_param("limit", "50")
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// println!("Products: {}", response.body);
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_url, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!(method = %request.http_method, %url, "sending request");

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        tracing::debug!(code, path = %request.path, "received response");

        // Non-2xx responses surface as errors carrying status and body
        if !(200..=299).contains(&code) {
            let request_id = res_headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
                request_id,
            }));
        }

        // Parse body as JSON; a malformed body is a decode error
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> BlackRoadConfig {
        BlackRoadConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_default_base_url() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_url(), "https://api.blackroad.io");
    }

    #[test]
    fn test_authorization_header_uses_bearer_scheme() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-api-key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("BlackRoad API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BlackRoadConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("BlackRoad API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let config = BlackRoadConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .base_url(crate::config::BaseUrl::new("http://localhost:9999").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
