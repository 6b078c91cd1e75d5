//
//  gitness-client
//  api/uploads.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! File upload API types and operations.
//!
//! Uploads attach files (for example screenshots in pull request comments)
//! to a repository and hand back a reference to embed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;

/// An uploaded file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Upload {
    /// Reference used to address the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Original file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,

    /// Content checksum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// Upload timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Request for creating an upload session.
#[derive(Debug, Clone, Serialize)]
struct CreateUploadRequest {
    file_name: String,
    file_size: i64,
}

/// Handles communication with the upload endpoints.
pub struct UploadsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> UploadsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Creates an upload session on a repository.
    pub async fn create_upload(
        &self,
        repo_path: &str,
        file_name: &str,
        file_size: i64,
    ) -> Result<ApiResponse<Upload>, ApiError> {
        let request = CreateUploadRequest {
            file_name: file_name.to_string(),
            file_size,
        };
        self.client
            .post(&["repos", repo_path, "uploads"], Some(&request))
            .await
    }

    /// Retrieves the metadata of an uploaded file.
    pub async fn get_upload(
        &self,
        repo_path: &str,
        file_ref: &str,
    ) -> Result<ApiResponse<Upload>, ApiError> {
        self.client
            .get(&["repos", repo_path, "uploads", file_ref], &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_upload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/acme%2Fwidgets/uploads")
            .match_body(mockito::Matcher::JsonString(
                r#"{"file_name": "diagram.png", "file_size": 2048}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"reference": "up-1", "file_name": "diagram.png", "file_size": 2048}"#)
            .create_async()
            .await;

        let client = GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let upload = client
            .uploads()
            .create_upload("acme/widgets", "diagram.png", 2048)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(upload.data.reference.as_deref(), Some("up-1"));
    }
}
