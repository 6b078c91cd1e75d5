//
//  gitness-client
//  api/secrets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Secret API types and operations.
//!
//! Secrets hold values pipelines can reference without exposing them in
//! configuration. They exist at three scopes: repository, space, and
//! instance-wide. The secret value is write-only; responses never echo it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A stored secret. The value itself is never returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Secret {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Secret name within its scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Options for creating or updating a secret.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSecretOptions {
    /// Name of the secret within its scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The secret value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Handles communication with the secret endpoints.
pub struct SecretsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> SecretsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists the secrets of a repository.
    pub async fn list_repo_secrets(
        &self,
        repo_path: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Secret>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "secrets"], &query)
            .await
    }

    /// Creates a secret scoped to a repository.
    pub async fn create_repo_secret(
        &self,
        repo_path: &str,
        options: &CreateSecretOptions,
    ) -> Result<ApiResponse<Secret>, ApiError> {
        self.client
            .post(&["repos", repo_path, "secrets"], Some(options))
            .await
    }

    /// Lists the secrets of a space.
    pub async fn list_space_secrets(
        &self,
        space_ref: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Secret>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["spaces", space_ref, "secrets"], &query)
            .await
    }

    /// Creates a secret scoped to a space.
    pub async fn create_space_secret(
        &self,
        space_ref: &str,
        options: &CreateSecretOptions,
    ) -> Result<ApiResponse<Secret>, ApiError> {
        self.client
            .post(&["spaces", space_ref, "secrets"], Some(options))
            .await
    }

    /// Lists instance-wide secrets.
    pub async fn list_global_secrets(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Secret>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client.get(&["secrets"], &query).await
    }

    /// Creates an instance-wide secret.
    pub async fn create_global_secret(
        &self,
        options: &CreateSecretOptions,
    ) -> Result<ApiResponse<Secret>, ApiError> {
        self.client.post(&["secrets"], Some(options)).await
    }

    /// Retrieves a secret by reference.
    pub async fn get_secret(&self, secret_ref: &str) -> Result<ApiResponse<Secret>, ApiError> {
        self.client.get(&["secrets", secret_ref], &[]).await
    }

    /// Updates a secret.
    pub async fn update_secret(
        &self,
        secret_ref: &str,
        options: &CreateSecretOptions,
    ) -> Result<ApiResponse<Secret>, ApiError> {
        self.client
            .patch(&["secrets", secret_ref], Some(options))
            .await
    }

    /// Deletes a secret.
    pub async fn delete_secret(&self, secret_ref: &str) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["secrets", secret_ref], None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_secret_value_is_write_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/spaces/acme/secrets")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"identifier": "deploy-key", "data": "hunter2"}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"id": 9, "identifier": "deploy-key"}"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let secret = client
            .secrets()
            .create_space_secret(
                "acme",
                &CreateSecretOptions {
                    identifier: Some("deploy-key".to_string()),
                    data: Some("hunter2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(secret.data.identifier.as_deref(), Some("deploy-key"));
    }

    #[tokio::test]
    async fn test_get_secret_encodes_ref() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/secrets/acme%2Fdeploy-key")
            .with_body(r#"{"identifier": "deploy-key"}"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        client.secrets().get_secret("acme/deploy-key").await.unwrap();

        mock.assert_async().await;
    }
}
