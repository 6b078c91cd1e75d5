//
//  gitness-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Gitness Client Library
//!
//! A typed async client for the Gitness REST API, covering spaces,
//! repositories, pull requests, pipelines, users, and the rest of the
//! platform surface.
//!
//! ## Overview
//!
//! All access goes through [`GitnessClient`]. The client authenticates with
//! a bearer token, and every resource is reached through a service handle:
//!
//! ```rust,no_run
//! use gitness_client::GitnessClient;
//!
//! # async fn example() -> Result<(), gitness_client::ApiError> {
//! let client = GitnessClient::new("your-token")?
//!     .with_base_url("https://code.example.com/")?;
//!
//! // Fetch a repository
//! let repo = client.repositories().get_repository("acme/widgets").await?;
//! println!("default branch: {:?}", repo.data.default_branch);
//!
//! // Page through its open pull requests
//! let prs = client
//!     .pull_requests()
//!     .list_pull_requests("acme/widgets", None)
//!     .await?;
//! println!("{} pull requests, {:?} total", prs.data.len(), prs.pagination.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Responses and pagination
//!
//! Every operation resolves to an [`ApiResponse`] carrying the deserialized
//! body, the HTTP status, and [`Pagination`] parsed from the `x-page`,
//! `x-per-page`, `x-next-page`, `x-total`, and `x-total-pages` response
//! headers.
//!
//! ## Errors
//!
//! Failures surface as [`ApiError`]. Non-2xx responses decode the platform's
//! `{message, details}` error body and map onto status-specific variants.
//!
//! ## Logging
//!
//! The client emits `tracing` debug events for every dispatched request
//! (method, URL, response status). Install a `tracing` subscriber to see
//! them; the library installs none itself.

/// API client implementation for the Gitness platform.
///
/// Provides the HTTP client, the shared error and pagination types, and one
/// module per resource with its DTOs and service handle.
pub mod api;

/// Re-export of the main API client.
pub use api::GitnessClient;

/// Re-export of the response wrapper and shared API types.
pub use api::{ApiError, ApiResponse, ListOptions, Pagination};

/// Crate version, derived from Cargo.toml at compile time.
///
/// Used as the default `gitness-rs/<version>` user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
