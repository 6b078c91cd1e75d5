//
//  gitness-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Current-user API types and operations.
//!
//! These endpoints operate on the authenticated user: profile lookup, public
//! keys, personal access tokens, space memberships, and favorites. User
//! administration across accounts lives in [`super::admin`].
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::users::CreateTokenOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! let me = client.users().get_current_user().await?;
//! println!("logged in as {:?}", me.data.uid);
//!
//! let token = client
//!     .users()
//!     .create_token(&CreateTokenOptions {
//!         identifier: Some("ci-token".to_string()),
//!         lifetime: Some(30 * 24 * 3600 * 1_000_000_000),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::admin::User;
use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A public key registered for the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicKey {
    /// Key name chosen by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Key algorithm (for example `ssh-ed25519`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,

    /// The key material in authorized-keys format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Fingerprint of the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// What the key may be used for, `auth` or `sign`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Registration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// A personal access token of the user.
///
/// The token value itself is only returned once, on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalAccessToken {
    /// Token name chosen by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Issue timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,

    /// When the token was last used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

/// The user's membership in a space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMembership {
    /// Identifier of the space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    /// Full path of the space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_path: Option<String>,

    /// Role of the user within the space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Principal id of whoever added the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<i64>,

    /// When the membership was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

/// A resource the user marked as favorite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFavorite {
    /// Identifier of the favorited resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,

    /// Type of the favorited resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Path of the favorited resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,

    /// When the favorite was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

/// Options for registering a public key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePublicKeyOptions {
    /// Name for the new key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Key material in authorized-keys format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// What the key may be used for, `auth` or `sign`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// Options for creating a personal access token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTokenOptions {
    /// Name for the new token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Token lifetime in nanoseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<i64>,
}

/// Options for listing public keys.
#[derive(Debug, Clone, Default)]
pub struct ListPublicKeysOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to keys with this usage.
    pub usage: Option<String>,
}

impl ListPublicKeysOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(usage) = &self.usage {
            query.push(("usage", usage.clone()));
        }
        query
    }
}

/// Handles communication with the current-user endpoints.
pub struct UsersService<'a> {
    client: &'a GitnessClient,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Retrieves the authenticated user.
    pub async fn get_current_user(&self) -> Result<ApiResponse<User>, ApiError> {
        self.client.get(&["user"], &[]).await
    }

    /// Retrieves a user by UID.
    pub async fn get_user(&self, uid: &str) -> Result<ApiResponse<User>, ApiError> {
        self.client.get(&["users", uid], &[]).await
    }

    /// Lists the public keys of the authenticated user.
    pub async fn list_keys(
        &self,
        options: Option<&ListPublicKeysOptions>,
    ) -> Result<ApiResponse<Vec<PublicKey>>, ApiError> {
        let query = options
            .map(ListPublicKeysOptions::to_query)
            .unwrap_or_default();
        self.client.get(&["user", "keys"], &query).await
    }

    /// Registers a public key for the authenticated user.
    pub async fn create_key(
        &self,
        options: &CreatePublicKeyOptions,
    ) -> Result<ApiResponse<PublicKey>, ApiError> {
        self.client.post(&["user", "keys"], Some(options)).await
    }

    /// Retrieves a specific public key.
    pub async fn get_key(&self, key_id: &str) -> Result<ApiResponse<PublicKey>, ApiError> {
        self.client.get(&["user", "keys", key_id], &[]).await
    }

    /// Deletes a public key.
    pub async fn delete_key(&self, key_id: &str) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["user", "keys", key_id], None::<&()>)
            .await
    }

    /// Lists the personal access tokens of the authenticated user.
    pub async fn list_tokens(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<PersonalAccessToken>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client.get(&["user", "tokens"], &query).await
    }

    /// Creates a personal access token.
    pub async fn create_token(
        &self,
        options: &CreateTokenOptions,
    ) -> Result<ApiResponse<PersonalAccessToken>, ApiError> {
        self.client.post(&["user", "tokens"], Some(options)).await
    }

    /// Deletes a personal access token.
    pub async fn delete_token(&self, token_id: &str) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["user", "tokens", token_id], None::<&()>)
            .await
    }

    /// Lists the space memberships of the authenticated user.
    pub async fn list_memberships(
        &self,
    ) -> Result<ApiResponse<Vec<UserMembership>>, ApiError> {
        self.client.get(&["user", "memberships"], &[]).await
    }

    /// Lists the favorites of the authenticated user.
    pub async fn list_favorites(&self) -> Result<ApiResponse<Vec<UserFavorite>>, ApiError> {
        self.client.get(&["user", "favorite"], &[]).await
    }

    /// Adds a resource to the user's favorites.
    pub async fn add_favorite(
        &self,
        resource_id: i64,
    ) -> Result<ApiResponse<UserFavorite>, ApiError> {
        let resource_id = resource_id.to_string();
        self.client
            .post(&["user", "favorite", &resource_id], None::<&()>)
            .await
    }

    /// Removes a resource from the user's favorites.
    pub async fn remove_favorite(&self, resource_id: i64) -> Result<ApiResponse<()>, ApiError> {
        let resource_id = resource_id.to_string();
        self.client
            .delete(&["user", "favorite", &resource_id], None::<&()>)
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
    async fn test_get_user_encodes_uid() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/users/team%2Fbot")
            .with_body(r#"{"uid": "team/bot", "display_name": "Team Bot"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let user = client.users().get_user("team/bot").await.unwrap();

        mock.assert_async().await;
        assert_eq!(user.data.uid.as_deref(), Some("team/bot"));
    }

    #[tokio::test]
    async fn test_list_keys_usage_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/user/keys")
            .match_query(mockito::Matcher::UrlEncoded("usage".into(), "auth".into()))
            .with_body(r#"[{"identifier": "laptop", "usage": "auth"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListPublicKeysOptions {
            usage: Some("auth".to_string()),
            ..Default::default()
        };
        let keys = client.users().list_keys(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(keys.data[0].identifier.as_deref(), Some("laptop"));
    }

    #[tokio::test]
    async fn test_create_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/user/tokens")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"identifier": "ci-token"}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"identifier": "ci-token"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let token = client
            .users()
            .create_token(&CreateTokenOptions {
                identifier: Some("ci-token".to_string()),
                lifetime: None,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(token.data.identifier.as_deref(), Some("ci-token"));
    }
}
