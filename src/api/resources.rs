//
//  gitness-client
//  api/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Static resource API types and operations.
//!
//! Gitignore and license templates offered during repository creation.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;

/// A gitignore template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitIgnoreTemplate {
    /// Template name (for example `Rust`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Body of the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A license template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseTemplate {
    /// Stable key of the license (for example `apache-2.0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// SPDX identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,

    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full license text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Handles communication with the static resource endpoints.
pub struct ResourcesService<'a> {
    client: &'a GitnessClient,
}

impl<'a> ResourcesService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists the available gitignore templates.
    pub async fn list_gitignore_templates(
        &self,
    ) -> Result<ApiResponse<Vec<GitIgnoreTemplate>>, ApiError> {
        self.client.get(&["resources", "gitignore"], &[]).await
    }

    /// Lists the available license templates.
    pub async fn list_license_templates(
        &self,
    ) -> Result<ApiResponse<Vec<LicenseTemplate>>, ApiError> {
        self.client.get(&["resources", "license"], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_license_templates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/resources/license")
            .with_body(r#"[{"key": "mit", "name": "MIT License", "spdx_id": "MIT"}]"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let licenses = client.resources().list_license_templates().await.unwrap();

        mock.assert_async().await;
        assert_eq!(licenses.data[0].spdx_id.as_deref(), Some("MIT"));
    }
}
