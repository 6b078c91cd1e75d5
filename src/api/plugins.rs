//
//  gitness-client
//  api/plugins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Plugin catalog API types and operations.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;

/// A pipeline plugin available on the instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plugin {
    /// Internal identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Plugin name within the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plugin type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<String>,

    /// Plugin version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Whether the plugin is enabled on the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// YAML template describing the plugin's inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
}

/// Handles communication with the plugin catalog endpoints.
pub struct PluginsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> PluginsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists the plugins available on the instance.
    pub async fn list_plugins(&self) -> Result<ApiResponse<Vec<Plugin>>, ApiError> {
        self.client.get(&["plugins"], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_plugins() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/plugins")
            .with_body(r#"[{"identifier": "slack", "type": "step", "enabled": true}]"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let plugins = client.plugins().list_plugins().await.unwrap();

        mock.assert_async().await;
        assert_eq!(plugins.data[0].identifier.as_deref(), Some("slack"));
    }
}
