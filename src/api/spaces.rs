//
//  gitness-client
//  api/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Space API types and operations.
//!
//! Spaces are the hierarchical containers Gitness uses to group repositories,
//! similar to organizations or projects on other platforms. Spaces nest, and
//! a space is addressed by its full path (for example `acme/platform`), which
//! is sent as a single percent-encoded path segment.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::spaces::CreateSpaceOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! let space = client
//!     .spaces()
//!     .create_space(&CreateSpaceOptions {
//!         identifier: Some("platform".to_string()),
//!         parent_ref: Some("acme".to_string()),
//!         description: Some("Platform engineering".to_string()),
//!         is_public: Some(false),
//!     })
//!     .await?;
//! println!("created space {:?}", space.data.path);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};
use super::repositories::{ListRepositoriesOptions, Repository};

/// A Gitness space.
///
/// Every field is optional to reflect partial JSON responses; the server
/// omits fields it does not populate for a given endpoint.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `id` | Internal numeric identifier |
/// | `parent_id` | Identifier of the parent space, absent for root spaces |
/// | `identifier` | Name of the space within its parent |
/// | `path` | Full path from the root (e.g. `acme/platform`) |
/// | `description` | Free-text description |
/// | `is_public` | Whether the space is publicly visible |
/// | `created_by` | Principal id of the creator |
/// | `created` / `updated` | Creation and last-modification timestamps |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Space {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identifier of the parent space, absent for root spaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Name of the space within its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Full path of the space from the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the space is publicly visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Principal id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Options for creating a space.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSpaceOptions {
    /// Name of the new space within its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Path of the parent space. Omit to create a root space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the space should be publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Options for updating a space.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSpaceOptions {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Options for listing spaces.
#[derive(Debug, Clone, Default)]
pub struct ListSpacesOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Whether to include spaces nested below the immediate children.
    pub recursive: Option<bool>,
}

impl ListSpacesOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(recursive) = self.recursive {
            query.push(("recursive", recursive.to_string()));
        }
        query
    }
}

/// Request body for deleting a space.
#[derive(Debug, Clone, Serialize)]
struct DeleteSpaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_id: Option<String>,
}

/// Handles communication with the space endpoints.
pub struct SpacesService<'a> {
    client: &'a GitnessClient,
}

impl<'a> SpacesService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Retrieves a space by its path.
    pub async fn get_space(&self, space_ref: &str) -> Result<ApiResponse<Space>, ApiError> {
        self.client.get(&["spaces", space_ref], &[]).await
    }

    /// Lists spaces visible to the authenticated principal.
    pub async fn list_spaces(
        &self,
        options: Option<&ListSpacesOptions>,
    ) -> Result<ApiResponse<Vec<Space>>, ApiError> {
        let query = options.map(ListSpacesOptions::to_query).unwrap_or_default();
        self.client.get(&["spaces"], &query).await
    }

    /// Creates a new space.
    pub async fn create_space(
        &self,
        options: &CreateSpaceOptions,
    ) -> Result<ApiResponse<Space>, ApiError> {
        self.client.post(&["spaces"], Some(options)).await
    }

    /// Updates a space.
    pub async fn update_space(
        &self,
        space_ref: &str,
        options: &UpdateSpaceOptions,
    ) -> Result<ApiResponse<Space>, ApiError> {
        self.client
            .patch(&["spaces", space_ref], Some(options))
            .await
    }

    /// Deletes a space.
    ///
    /// The optional `delete_id` confirms deletion of a space that was already
    /// soft-deleted.
    pub async fn delete_space(
        &self,
        space_ref: &str,
        delete_id: Option<&str>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let payload = delete_id.map(|id| DeleteSpaceRequest {
            delete_id: Some(id.to_string()),
        });
        self.client
            .delete(&["spaces", space_ref], payload.as_ref())
            .await
    }

    /// Lists the repositories contained in a space.
    pub async fn list_repositories(
        &self,
        space_ref: &str,
        options: Option<&ListRepositoriesOptions>,
    ) -> Result<ApiResponse<Vec<Repository>>, ApiError> {
        let query = options
            .map(ListRepositoriesOptions::to_query)
            .unwrap_or_default();
        self.client
            .get(&["spaces", space_ref, "repos"], &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> GitnessClient {
        GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_space_encodes_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/spaces/acme%2Fplatform")
            .with_body(r#"{"identifier": "platform", "path": "acme/platform"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let space = client.spaces().get_space("acme/platform").await.unwrap();

        mock.assert_async().await;
        assert_eq!(space.data.identifier.as_deref(), Some("platform"));
        assert_eq!(space.data.path.as_deref(), Some("acme/platform"));
    }

    #[tokio::test]
    async fn test_list_spaces_recursive_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/spaces")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "1".into()),
                mockito::Matcher::UrlEncoded("recursive".into(), "true".into()),
            ]))
            .with_body(r#"[{"identifier": "acme"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListSpacesOptions {
            list: ListOptions {
                page: Some(1),
                ..Default::default()
            },
            recursive: Some(true),
        };
        let spaces = client.spaces().list_spaces(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(spaces.data.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_space_sends_delete_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v1/spaces/acme")
            .match_body(mockito::Matcher::JsonString(
                r#"{"delete_id": "tombstone-1"}"#.to_string(),
            ))
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .spaces()
            .delete_space("acme", Some("tombstone-1"))
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
