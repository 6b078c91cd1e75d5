//
//  gitness-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Gitness Client
//!
//! This module provides the shared types used by every service in the
//! client: error handling, list-request options, and pagination metadata.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorBody`] - The `{message, details}` JSON body Gitness returns on failure
//! - [`ListOptions`] - Common pagination and filtering parameters for list endpoints
//! - [`Pagination`] - Header-based pagination metadata (re-exported from [`pagination`])
//!
//! # Example
//!
//! ```rust
//! use gitness_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthRequired) => println!("Please authenticate first"),
//!         Err(ApiError::NotFound(resource)) => println!("Not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - All types implement `Debug` for easy inspection
//! - Serialization/deserialization is handled via `serde` for JSON compatibility

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Gitness API operations.
///
/// `ApiError` covers the common failure scenarios when talking to a Gitness
/// instance. It implements the standard `Error` trait via `thiserror` for
/// ergonomic propagation with `?`.
///
/// Non-2xx responses are classified by status code; the attached message is
/// taken from the `{message, details}` JSON error body when the server sends
/// one, and falls back to the canonical status reason otherwise.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `AuthRequired` | Missing or rejected credentials | 401 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests, retry later | 429 |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Api` | Any other non-success status | other |
/// | `Network` | Transport-level failure | N/A |
/// | `InvalidBaseUrl` | Client configured with an unusable base URL | N/A |
///
/// # Example
///
/// ```rust
/// use gitness_client::api::common::ApiError;
///
/// fn fetch_repository() -> Result<(), ApiError> {
///     Err(ApiError::NotFound("repository 'demo'".to_string()))
/// }
///
/// match fetch_repository() {
///     Ok(_) => println!("Repository fetched successfully"),
///     Err(ApiError::NotFound(resource)) => eprintln!("Could not find: {}", resource),
///     Err(e) => eprintln!("Unexpected error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication is required or the supplied token was rejected.
    ///
    /// Maps to HTTP 401 responses.
    #[error("Authentication required")]
    AuthRequired,

    /// Access to the resource is forbidden.
    ///
    /// The authenticated principal does not have sufficient permissions to
    /// perform the requested operation. Maps to HTTP 403 responses.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found.
    ///
    /// Maps to HTTP 404 responses, meaning the space, repository, pull
    /// request, or other resource does not exist or is not visible.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    ///
    /// Maps to HTTP 429 responses. The client should wait before retrying.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The request was malformed or contained invalid parameters.
    ///
    /// Maps to HTTP 400 responses.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error occurred on the Gitness server.
    ///
    /// Maps to HTTP 5xx responses. These are typically transient.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Any other non-success response.
    ///
    /// Carries the raw status code together with the decoded error body so
    /// callers can inspect statuses the named variants do not cover.
    #[error("HTTP {status}: {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Message from the error body, or the status reason when absent.
        message: String,
        /// Optional details string from the error body.
        details: Option<String>,
    },

    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors, and
    /// response-body decoding failures from the underlying HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client was configured with a base URL that cannot be used.
    ///
    /// Returned by the constructor and by `with_base_url` when the URL does
    /// not parse or cannot serve as a base for path segments.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// The JSON error body returned by Gitness on failed requests.
///
/// Gitness reports failures as `{"message": "...", "details": "..."}` with
/// the `details` field frequently absent. The client decodes this body to
/// build the matching [`ApiError`] variant.
///
/// # Example
///
/// ```rust
/// use gitness_client::api::common::ErrorBody;
///
/// let body: ErrorBody =
///     serde_json::from_str(r#"{"message": "space not found"}"#).unwrap();
/// assert_eq!(body.message.as_deref(), Some("space not found"));
/// assert!(body.details.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: Option<String>,

    /// Optional extra context for the failure.
    #[serde(default)]
    pub details: Option<String>,
}

/// Common pagination and filtering parameters for list endpoints.
///
/// Every Gitness list endpoint accepts this set of query parameters. Only
/// fields that are set are sent; unset fields leave the server defaults in
/// effect. Endpoint-specific option structs embed a `ListOptions` and extend
/// its query pairs with their own.
///
/// # Fields
///
/// | Field | Query parameter | Description |
/// |-------|-----------------|-------------|
/// | `page` | `page` | Page number to fetch (1-indexed) |
/// | `limit` | `limit` | Maximum items per page |
/// | `sort` | `sort` | Field to sort by |
/// | `order` | `order` | Sort direction (`asc` or `desc`) |
/// | `query` | `query` | Free-text filter |
///
/// # Example
///
/// ```rust
/// use gitness_client::api::common::ListOptions;
///
/// let options = ListOptions {
///     page: Some(2),
///     limit: Some(25),
///     sort: Some("identifier".to_string()),
///     ..Default::default()
/// };
///
/// let query = options.to_query();
/// assert_eq!(query[0], ("page", "2".to_string()));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    /// Page number to fetch (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page.
    ///
    /// Gitness uses `limit` rather than `per_page` for this parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Field to sort the results by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction, `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Free-text filter applied by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl ListOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    ///
    /// Endpoint-specific option structs call this first and append their own
    /// pairs to the returned vector.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
        if let Some(order) = &self.order {
            query.push(("order", order.clone()));
        }
        if let Some(q) = &self.query {
            query.push(("query", q.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_to_query_full() {
        let options = ListOptions {
            page: Some(3),
            limit: Some(10),
            sort: Some("created".to_string()),
            order: Some("desc".to_string()),
            query: Some("demo".to_string()),
        };

        assert_eq!(
            options.to_query(),
            vec![
                ("page", "3".to_string()),
                ("limit", "10".to_string()),
                ("sort", "created".to_string()),
                ("order", "desc".to_string()),
                ("query", "demo".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_options_to_query_empty() {
        assert!(ListOptions::default().to_query().is_empty());
    }

    #[test]
    fn test_error_body_decodes_partial() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("boom"));
        assert!(body.details.is_none());

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("repository 'demo'".to_string());
        assert_eq!(err.to_string(), "Resource not found: repository 'demo'");

        let err = ApiError::Api {
            status: 409,
            message: "conflict".to_string(),
            details: None,
        };
        assert_eq!(err.to_string(), "HTTP 409: conflict");
    }
}
