//
//  gitness-client
//  api/checks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Commit status check API types and operations.
//!
//! Checks record the outcome of external verification (builds, scans,
//! linters) against a specific commit. A check is identified by the commit
//! SHA plus its identifier, and external systems update it as the work
//! progresses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;

/// A status check reported against a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Check {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Identifier of the repository the commit lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Commit the check applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,

    /// Name of the check within the commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Current status (for example `pending`, `running`, `success`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the work started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,

    /// When the work finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<DateTime<Utc>>,

    /// Link to the external system with details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Short human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Free-form payload attached by the reporting system.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payload: HashMap<String, serde_json::Value>,

    /// UID of the reporting principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Options for reporting a check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCheckOptions {
    /// Name of the check within the commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the work started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,

    /// When the work finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<DateTime<Utc>>,

    /// Link to the external system with details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Short human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Free-form payload.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub payload: HashMap<String, serde_json::Value>,
}

/// Options for updating a check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCheckOptions {
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the work started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,

    /// When the work finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<DateTime<Utc>>,

    /// New details link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// New summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// New payload.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub payload: HashMap<String, serde_json::Value>,
}

/// Options for listing the checks of a commit.
#[derive(Debug, Clone, Default)]
pub struct ListChecksOptions {
    /// Return only the latest check per identifier.
    pub latest: Option<bool>,
}

impl ListChecksOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(latest) = self.latest {
            query.push(("latest", latest.to_string()));
        }
        query
    }
}

/// Handles communication with the commit status check endpoints.
pub struct ChecksService<'a> {
    client: &'a GitnessClient,
}

impl<'a> ChecksService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Reports a check against a commit.
    pub async fn create_check(
        &self,
        repo_path: &str,
        commit_sha: &str,
        options: &CreateCheckOptions,
    ) -> Result<ApiResponse<Check>, ApiError> {
        self.client
            .post(
                &["repos", repo_path, "commits", commit_sha, "checks"],
                Some(options),
            )
            .await
    }

    /// Updates a previously reported check.
    pub async fn update_check(
        &self,
        repo_path: &str,
        commit_sha: &str,
        check_identifier: &str,
        options: &UpdateCheckOptions,
    ) -> Result<ApiResponse<Check>, ApiError> {
        self.client
            .patch(
                &[
                    "repos",
                    repo_path,
                    "commits",
                    commit_sha,
                    "checks",
                    check_identifier,
                ],
                Some(options),
            )
            .await
    }

    /// Lists the checks of a commit.
    pub async fn list_checks(
        &self,
        repo_path: &str,
        commit_sha: &str,
        options: Option<&ListChecksOptions>,
    ) -> Result<ApiResponse<Vec<Check>>, ApiError> {
        let query = options.map(ListChecksOptions::to_query).unwrap_or_default();
        self.client
            .get(
                &["repos", repo_path, "commits", commit_sha, "checks"],
                &query,
            )
            .await
    }

    /// Retrieves a specific check.
    pub async fn get_check(
        &self,
        repo_path: &str,
        commit_sha: &str,
        check_identifier: &str,
    ) -> Result<ApiResponse<Check>, ApiError> {
        self.client
            .get(
                &[
                    "repos",
                    repo_path,
                    "commits",
                    commit_sha,
                    "checks",
                    check_identifier,
                ],
                &[],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list_checks() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/api/v1/repos/acme%2Fwidgets/commits/abc123/checks")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"identifier": "unit-tests", "status": "running"}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"identifier": "unit-tests", "status": "running"}"#)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/api/v1/repos/acme%2Fwidgets/commits/abc123/checks")
            .match_query(mockito::Matcher::UrlEncoded("latest".into(), "true".into()))
            .with_body(r#"[{"identifier": "unit-tests", "status": "success"}]"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();

        let check = client
            .checks()
            .create_check(
                "acme/widgets",
                "abc123",
                &CreateCheckOptions {
                    identifier: Some("unit-tests".to_string()),
                    status: Some("running".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(check.data.status.as_deref(), Some("running"));

        let checks = client
            .checks()
            .list_checks(
                "acme/widgets",
                "abc123",
                Some(&ListChecksOptions { latest: Some(true) }),
            )
            .await
            .unwrap();
        assert_eq!(checks.data[0].status.as_deref(), Some("success"));

        create.assert_async().await;
        list.assert_async().await;
    }
}
