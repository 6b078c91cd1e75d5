//
//  gitness-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client and the per-resource services for
//! the Gitness REST API (`/api/v1`).
//!
//! ## Architecture
//!
//! The layer has one shape throughout: [`GitnessClient`] owns the HTTP
//! transport and configuration, each resource module defines the DTOs and a
//! service handle borrowing the client, and each operation builds a URL from
//! identifiers, attaches query parameters from an options struct, issues a
//! request, and deserializes the JSON body.
//!
//! - [`client`]: Core HTTP client, verb helpers, and the [`ApiResponse`] wrapper
//! - [`common`]: Shared types (errors, list options, pagination)
//! - One module per resource: [`spaces`], [`repositories`], [`pullrequests`],
//!   [`pipelines`], [`users`], [`admin`], [`auth`], [`principals`],
//!   [`checks`], [`templates`], [`connectors`], [`secrets`], [`webhooks`],
//!   [`plugins`], [`resources`], [`system`], [`uploads`], [`cicache`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?
//!     .with_base_url("https://code.example.com/")?;
//!
//! let spaces = client.spaces().list_spaces(None).await?;
//! for space in &spaces.data {
//!     println!("{:?}", space.path);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants mapping common HTTP
//! failure statuses:
//!
//! - `AuthRequired`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

/// Core HTTP client wrapper for the Gitness API.
pub mod client;

/// Common types shared by all services.
pub mod common;

/// Administrative user and audit trail operations.
pub mod admin;

/// Login, logout, and registration operations.
pub mod auth;

/// Commit status check operations.
pub mod checks;

/// CI cache operations.
pub mod cicache;

/// Connector operations.
pub mod connectors;

/// Pipeline, execution, and trigger operations.
pub mod pipelines;

/// Plugin catalog operations.
pub mod plugins;

/// Principal lookup operations.
pub mod principals;

/// Pull request operations.
pub mod pullrequests;

/// Repository, branch, commit, and content operations.
pub mod repositories;

/// Gitignore and license template operations.
pub mod resources;

/// Secret operations at repository, space, and instance scope.
pub mod secrets;

/// Space operations.
pub mod spaces;

/// System configuration operations.
pub mod system;

/// Pipeline template operations.
pub mod templates;

/// File upload operations.
pub mod uploads;

/// Current-user operations.
pub mod users;

/// Webhook operations.
pub mod webhooks;

/// Re-export of the main API client.
pub use client::{ApiResponse, GitnessClient, DEFAULT_BASE_URL};

/// Re-export of the common API types.
pub use common::{ApiError, ErrorBody, ListOptions, Pagination};
