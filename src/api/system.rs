//
//  gitness-client
//  api/system.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! System configuration API types and operations.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;

/// Feature configuration of the instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Whether the artifact registry is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_registry_enabled: Option<bool>,

    /// Whether gitspaces are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitspace_enabled: Option<bool>,

    /// Whether LDAP authentication is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_enabled: Option<bool>,

    /// Whether OIDC authentication is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oidc_enabled: Option<bool>,

    /// Whether users may create public resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_resource_creation_enabled: Option<bool>,

    /// Whether git over SSH is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_enabled: Option<bool>,

    /// UI feature flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<SystemUi>,

    /// Whether self sign-up is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_signup_allowed: Option<bool>,
}

/// UI feature flags of the instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemUi {
    /// Whether the plugin catalog is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_plugin: Option<bool>,
}

/// Handles communication with the system endpoints.
pub struct SystemService<'a> {
    client: &'a GitnessClient,
}

impl<'a> SystemService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Retrieves the instance configuration.
    pub async fn get_config(&self) -> Result<ApiResponse<SystemConfig>, ApiError> {
        self.client.get(&["system", "config"], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_config() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/system/config")
            .with_body(
                r#"{"ssh_enabled": true, "user_signup_allowed": false,
                     "ui": {"show_plugin": true}}"#,
            )
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let config = client.system().get_config().await.unwrap();

        mock.assert_async().await;
        assert_eq!(config.data.ssh_enabled, Some(true));
        assert_eq!(config.data.ui.unwrap().show_plugin, Some(true));
    }
}
