//
//  gitness-client
//  api/connectors.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Connector API types and operations.
//!
//! Connectors store credentials for talking to external systems. GitHub is
//! the only connector kind the platform currently ships; its configuration
//! lives in [`GithubConnectorData`]. Connector timestamps are epoch
//! milliseconds on the wire.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// Kind of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorType {
    /// A GitHub connector.
    #[serde(rename = "github")]
    Github,
}

/// Result of the most recent connectivity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorStatus {
    /// The last test succeeded.
    Ok,
    /// The last test failed.
    Error,
    /// No test has completed yet.
    Pending,
}

/// Authentication scheme of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorAuthType {
    /// Token-based bearer authentication.
    Bearer,
}

/// Credentials of a connector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorAuth {
    /// Authentication scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<ConnectorAuthType>,

    /// The token, write-only in practice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// GitHub-specific connector configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConnectorData {
    /// API endpoint, for GitHub Enterprise installations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Whether to skip TLS verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Credentials for the GitHub API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<ConnectorAuth>,
}

/// A connector to an external system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connector {
    /// Creation time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Principal id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// GitHub configuration, present for GitHub connectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConnectorData>,

    /// Connector name within its space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// When connectivity was last tested, in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_attempt: Option<i64>,

    /// Error message of the last failed test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_error_msg: Option<String>,

    /// Result of the last connectivity test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_status: Option<ConnectorStatus>,

    /// Identifier of the owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    /// Connector kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<ConnectorType>,

    /// Last-modification time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

/// Options for creating a connector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateConnectorOptions {
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// GitHub configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConnectorData>,

    /// Name of the new connector within its space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Path of the space to create the connector in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_ref: Option<String>,

    /// Connector kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<ConnectorType>,
}

/// Options for updating a connector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateConnectorOptions {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New GitHub configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConnectorData>,
}

/// Handles communication with the connector endpoints.
pub struct ConnectorsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> ConnectorsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists connectors visible to the authenticated principal.
    pub async fn list_connectors(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Connector>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client.get(&["connectors"], &query).await
    }

    /// Retrieves a connector by reference.
    pub async fn get_connector(
        &self,
        connector_ref: &str,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        self.client.get(&["connectors", connector_ref], &[]).await
    }

    /// Creates a new connector.
    pub async fn create_connector(
        &self,
        options: &CreateConnectorOptions,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        self.client.post(&["connectors"], Some(options)).await
    }

    /// Updates a connector.
    pub async fn update_connector(
        &self,
        connector_ref: &str,
        options: &UpdateConnectorOptions,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        self.client
            .patch(&["connectors", connector_ref], Some(options))
            .await
    }

    /// Deletes a connector.
    pub async fn delete_connector(
        &self,
        connector_ref: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["connectors", connector_ref], None::<&()>)
            .await
    }
}
