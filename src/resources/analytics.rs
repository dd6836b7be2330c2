//! Analytics resource client.

use std::collections::HashMap;

use crate::clients::{HttpClient, HttpError};

/// Default time range for analytics queries.
pub const DEFAULT_TIME_RANGE: &str = "7d";

/// Client for the `/v1/analytics` resource family.
///
/// Borrows the shared [`HttpClient`] and exposes a single query operation.
/// Holds no state of its own.
///
/// # Example
///
/// ```rust,ignore
/// let client = BlackRoad::with_api_key("your-api-key")?;
///
/// // Last 7 days (default)
/// let analytics = client.analytics().query(None).await?;
///
/// // Last 30 days
/// let analytics = client.analytics().query(Some("30d")).await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Analytics<'a> {
    client: &'a HttpClient,
}

impl<'a> Analytics<'a> {
    /// Creates an analytics client backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Queries analytics for the given time range.
    ///
    /// Issues `GET /v1/analytics?range=<time_range>`. The `range` parameter
    /// defaults to [`DEFAULT_TIME_RANGE`] and is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures, non-2xx responses, or
    /// malformed JSON bodies.
    pub async fn query(&self, time_range: Option<&str>) -> Result<serde_json::Value, HttpError> {
        let mut params = HashMap::new();
        params.insert(
            "range".to_string(),
            time_range.unwrap_or(DEFAULT_TIME_RANGE).to_string(),
        );
        self.client.get("/v1/analytics", Some(params)).await
    }
}
