//! Typed models for BlackRoad API resources.
//!
//! Resource client methods return raw `serde_json::Value` bodies so nothing
//! the server sends is lost. These models are optional decode targets for
//! callers who prefer typed access, via [`serde_json::from_value`] or
//! [`HttpResponse::decode`](crate::HttpResponse::decode).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A BlackRoad product.
///
/// # Example
///
/// ```rust
/// use blackroad_api::resources::Product;
/// use serde_json::json;
///
/// let product: Product = serde_json::from_value(json!({
///     "id": "prod-123",
///     "name": "Widget",
///     "description": "A widget",
///     "created_at": "2024-01-15T09:30:00Z"
/// })).unwrap();
///
/// assert_eq!(product.id, "prod-123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: String,
    /// Human-readable product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A deployment of a product to an environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Unique deployment identifier.
    pub id: String,
    /// The product this deployment belongs to.
    pub product_id: String,
    /// Target environment (e.g., "production", "staging").
    pub environment: String,
    /// Current deployment status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
