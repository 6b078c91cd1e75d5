//
//  gitness-client
//  api/principals.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Principal API types and operations.
//!
//! A principal is any identity known to the platform: a user, a service
//! account, or a service. Principals are referenced all over the API, so the
//! compact [`PrincipalInfo`] shape embedded in other resources lives here
//! next to the full [`Principal`] type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A Gitness principal, a user or service account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Principal {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Principal type, `user`, `service`, or `serviceaccount`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<String>,

    /// Unique login identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Compact principal details embedded in other resources.
///
/// Pull requests, activities, and reviewers carry this shape instead of the
/// full [`Principal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrincipalInfo {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Unique login identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Principal type, `user`, `service`, or `serviceaccount`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<String>,
}

/// Options for listing principals.
#[derive(Debug, Clone, Default)]
pub struct ListPrincipalsOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to a principal type.
    pub principal_type: Option<String>,
}

impl ListPrincipalsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(principal_type) = &self.principal_type {
            query.push(("type", principal_type.clone()));
        }
        query
    }
}

/// Handles communication with the principal endpoints.
pub struct PrincipalsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> PrincipalsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists principals visible to the authenticated principal.
    pub async fn list_principals(
        &self,
        options: Option<&ListPrincipalsOptions>,
    ) -> Result<ApiResponse<Vec<Principal>>, ApiError> {
        let query = options
            .map(ListPrincipalsOptions::to_query)
            .unwrap_or_default();
        self.client.get(&["principals"], &query).await
    }

    /// Retrieves a principal by its numeric id.
    pub async fn get_principal(&self, id: i64) -> Result<ApiResponse<Principal>, ApiError> {
        let id = id.to_string();
        self.client.get(&["principals", &id], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_principals_type_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/principals")
            .match_query(mockito::Matcher::UrlEncoded("type".into(), "user".into()))
            .with_body(r#"[{"id": 1, "uid": "admin", "type": "user"}]"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let options = ListPrincipalsOptions {
            principal_type: Some("user".to_string()),
            ..Default::default()
        };
        let principals = client
            .principals()
            .list_principals(Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(principals.data[0].principal_type.as_deref(), Some("user"));
    }
}
