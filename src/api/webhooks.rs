//
//  gitness-client
//  api/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Webhook API types and operations.
//!
//! Webhooks deliver repository events to external HTTP endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A repository webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Webhook {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Webhook name within its repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Endpoint the events are delivered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Shared secret used to sign deliveries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Event triggers the webhook subscribes to. Empty means all events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,

    /// Whether the webhook is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Whether to skip TLS verification when delivering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Options for creating a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWebhookOptions {
    /// Name of the new webhook within its repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Endpoint to deliver events to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Shared secret used to sign deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Event triggers to subscribe to. Empty subscribes to all events.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,

    /// Whether the webhook starts active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Whether to skip TLS verification when delivering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
}

/// Handles communication with the webhook endpoints.
pub struct WebhooksService<'a> {
    client: &'a GitnessClient,
}

impl<'a> WebhooksService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Creates a webhook on a repository.
    pub async fn create_webhook(
        &self,
        repo_path: &str,
        options: &CreateWebhookOptions,
    ) -> Result<ApiResponse<Webhook>, ApiError> {
        self.client
            .post(&["repos", repo_path, "webhooks"], Some(options))
            .await
    }

    /// Lists the webhooks of a repository.
    pub async fn list_webhooks(
        &self,
        repo_path: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Webhook>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "webhooks"], &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_webhook() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/acme%2Fwidgets/webhooks")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"identifier": "ci-hook", "triggers": ["branch_updated"]}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"id": 1, "identifier": "ci-hook", "enabled": true}"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let webhook = client
            .webhooks()
            .create_webhook(
                "acme/widgets",
                &CreateWebhookOptions {
                    identifier: Some("ci-hook".to_string()),
                    url: Some("https://ci.example.com/hook".to_string()),
                    triggers: vec!["branch_updated".to_string()],
                    enabled: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(webhook.data.enabled, Some(true));
    }
}
