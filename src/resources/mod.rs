//! Resource clients for the BlackRoad API.
//!
//! Each resource client is a thin, domain-scoped wrapper over the shared
//! [`HttpClient`](crate::clients::HttpClient): it hard-codes the endpoint
//! paths for one resource family and forwards to the corresponding HTTP
//! verb. Resource clients hold no independent state and perform no
//! validation beyond parameter pass-through.
//!
//! All methods return the decoded JSON response body unchanged as
//! [`serde_json::Value`]. The [`types`] module provides optional typed
//! models ([`Product`], [`Deployment`]) for callers who want structured
//! access.
//!
//! # Routing Convention
//!
//! The base URL carries no path prefix; resource clients hard-code the
//! `/v1/...` prefix in their endpoint paths.

mod analytics;
mod deployments;
mod products;
pub mod types;

pub use analytics::{Analytics, DEFAULT_TIME_RANGE};
pub use deployments::Deployments;
pub use products::{Products, DEFAULT_LIST_LIMIT};
pub use types::{Deployment, Product};
