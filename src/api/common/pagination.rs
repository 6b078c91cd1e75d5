//
//  gitness-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Metadata for Gitness API Responses
//!
//! Gitness list endpoints return their pagination state in response headers
//! rather than in the JSON body. Each page of results carries up to five
//! headers describing the caller's position in the result set:
//!
//! | Header | Meaning |
//! |--------|---------|
//! | `x-page` | Current page number (1-indexed) |
//! | `x-per-page` | Number of items per page |
//! | `x-next-page` | Page number of the next page, absent on the last page |
//! | `x-total` | Total number of items across all pages |
//! | `x-total-pages` | Total number of pages |
//!
//! The [`Pagination`] type parses these headers into optional integer fields.
//! A header that is absent, or whose value does not parse as an unsigned
//! integer, leaves the corresponding field as `None`.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::common::ListOptions;
//! use gitness_client::api::spaces::ListSpacesOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! let mut options = ListSpacesOptions {
//!     list: ListOptions {
//!         page: Some(1),
//!         limit: Some(50),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! loop {
//!     let response = client.spaces().list_spaces(Some(&options)).await?;
//!     for space in &response.data {
//!         // Process each space
//!     }
//!
//!     match response.pagination.next_page {
//!         Some(next) => options.list.page = Some(next),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;

/// Parses a single pagination header into an unsigned integer.
///
/// Returns `None` when the header is missing, is not valid UTF-8, or does
/// not parse as a `u32`.
fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// Pagination state extracted from a Gitness list response.
///
/// Every request returns one of these as part of the
/// [`ApiResponse`](crate::api::client::ApiResponse) wrapper. All fields are
/// optional because the server omits headers it cannot compute cheaply, and
/// non-list endpoints return no pagination headers at all.
///
/// # Fields
///
/// | Field | Source header | Description |
/// |-------|---------------|-------------|
/// | `page` | `x-page` | Current page number (1-indexed) |
/// | `per_page` | `x-per-page` | Items per page |
/// | `next_page` | `x-next-page` | Next page number, `None` on the last page |
/// | `total` | `x-total` | Total items across all pages |
/// | `total_pages` | `x-total-pages` | Total page count |
///
/// # Example
///
/// ```rust
/// use gitness_client::api::common::Pagination;
///
/// let pagination = Pagination {
///     page: Some(1),
///     per_page: Some(25),
///     next_page: Some(2),
///     total: Some(60),
///     total_pages: Some(3),
/// };
///
/// assert!(pagination.has_next_page());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed), from the `x-page` header.
    pub page: Option<u32>,

    /// Number of items per page, from the `x-per-page` header.
    pub per_page: Option<u32>,

    /// Page number of the next page, from the `x-next-page` header.
    ///
    /// `None` when this is the last page.
    pub next_page: Option<u32>,

    /// Total number of items across all pages, from the `x-total` header.
    pub total: Option<u32>,

    /// Total number of pages, from the `x-total-pages` header.
    pub total_pages: Option<u32>,
}

impl Pagination {
    /// Extracts pagination metadata from a set of response headers.
    ///
    /// Headers that are absent or malformed are skipped rather than treated
    /// as errors, so a response without pagination headers produces a
    /// `Pagination` with every field set to `None`.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            page: header_u32(headers, "x-page"),
            per_page: header_u32(headers, "x-per-page"),
            next_page: header_u32(headers, "x-next-page"),
            total: header_u32(headers, "x-total"),
            total_pages: header_u32(headers, "x-total-pages"),
        }
    }

    /// Checks if there are more pages of results available.
    ///
    /// Returns `true` when the server advertised a next page. Use the
    /// [`next_page`](Self::next_page) value as the `page` parameter of the
    /// follow-up request.
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                name.parse::<HeaderName>().unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_parse_all_headers() {
        let map = headers(&[
            ("x-page", "1"),
            ("x-per-page", "2"),
            ("x-next-page", "2"),
            ("x-total", "6"),
            ("x-total-pages", "3"),
        ]);

        let pagination = Pagination::from_headers(&map);
        assert_eq!(pagination.page, Some(1));
        assert_eq!(pagination.per_page, Some(2));
        assert_eq!(pagination.next_page, Some(2));
        assert_eq!(pagination.total, Some(6));
        assert_eq!(pagination.total_pages, Some(3));
        assert!(pagination.has_next_page());
    }

    #[test]
    fn test_missing_headers_stay_unset() {
        let map = headers(&[("x-page", "4"), ("x-total", "100")]);

        let pagination = Pagination::from_headers(&map);
        assert_eq!(pagination.page, Some(4));
        assert_eq!(pagination.total, Some(100));
        assert_eq!(pagination.per_page, None);
        assert_eq!(pagination.next_page, None);
        assert_eq!(pagination.total_pages, None);
        assert!(!pagination.has_next_page());
    }

    #[test]
    fn test_malformed_header_is_ignored() {
        let map = headers(&[("x-page", "not-a-number"), ("x-next-page", "2")]);

        let pagination = Pagination::from_headers(&map);
        assert_eq!(pagination.page, None);
        assert_eq!(pagination.next_page, Some(2));
    }

    #[test]
    fn test_empty_headers() {
        let pagination = Pagination::from_headers(&HeaderMap::new());
        assert_eq!(pagination, Pagination::default());
        assert!(!pagination.has_next_page());
    }
}
