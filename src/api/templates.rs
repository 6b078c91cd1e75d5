//
//  gitness-client
//  api/templates.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Template API types and operations.
//!
//! Templates are reusable step or stage definitions scoped to a space and
//! referenced from pipeline configurations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A reusable pipeline template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    /// Template name within its space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// YAML body of the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Template type, `step` or `stage`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,

    /// Identifier of the owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Options for creating a template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTemplateOptions {
    /// Name of the new template within its space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// YAML body of the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Template type, `step` or `stage`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
}

/// Options for updating a template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplateOptions {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New YAML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Handles communication with the template endpoints.
pub struct TemplatesService<'a> {
    client: &'a GitnessClient,
}

impl<'a> TemplatesService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Creates a template in a space.
    pub async fn create_template(
        &self,
        space_ref: &str,
        options: &CreateTemplateOptions,
    ) -> Result<ApiResponse<Template>, ApiError> {
        self.client
            .post(&["spaces", space_ref, "templates"], Some(options))
            .await
    }

    /// Lists the templates of a space.
    pub async fn list_templates(
        &self,
        space_ref: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Template>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["spaces", space_ref, "templates"], &query)
            .await
    }

    /// Retrieves a specific template.
    pub async fn get_template(
        &self,
        space_ref: &str,
        template_identifier: &str,
    ) -> Result<ApiResponse<Template>, ApiError> {
        self.client
            .get(&["spaces", space_ref, "templates", template_identifier], &[])
            .await
    }

    /// Updates a template.
    pub async fn update_template(
        &self,
        space_ref: &str,
        template_identifier: &str,
        options: &UpdateTemplateOptions,
    ) -> Result<ApiResponse<Template>, ApiError> {
        self.client
            .patch(
                &["spaces", space_ref, "templates", template_identifier],
                Some(options),
            )
            .await
    }

    /// Deletes a template.
    pub async fn delete_template(
        &self,
        space_ref: &str,
        template_identifier: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(
                &["spaces", space_ref, "templates", template_identifier],
                None::<&()>,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_template_lifecycle_paths() {
        let mut server = mockito::Server::new_async().await;
        let get = server
            .mock("GET", "/api/v1/spaces/acme/templates/build-step")
            .with_body(r#"{"identifier": "build-step", "type": "step"}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/v1/spaces/acme/templates/build-step")
            .with_status(204)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();

        let template = client
            .templates()
            .get_template("acme", "build-step")
            .await
            .unwrap();
        assert_eq!(template.data.template_type.as_deref(), Some("step"));

        client
            .templates()
            .delete_template("acme", "build-step")
            .await
            .unwrap();

        get.assert_async().await;
        delete.assert_async().await;
    }
}
