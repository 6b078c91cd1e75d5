//
//  gitness-client
//  api/cicache.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CI cache API types and operations.
//!
//! Pipelines store build caches under caller-chosen keys. Blobs travel as
//! raw `application/octet-stream` bodies; everything else is JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// Metadata of a stored cache entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CiCacheEntry {
    /// Cache key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Blob size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// When the entry was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the entry was last read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<DateTime<Utc>>,

    /// Version of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

/// Options for downloading a cache entry.
#[derive(Debug, Clone, Default)]
pub struct GetCiCacheOptions {
    /// Version to download, defaults to the latest.
    pub version: Option<i32>,
}

impl GetCiCacheOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(version) = self.version {
            query.push(("version", version.to_string()));
        }
        query
    }
}

/// Options for listing cache entries.
#[derive(Debug, Clone, Default)]
pub struct ListCiCacheOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to keys starting with this prefix.
    pub key_prefix: Option<String>,
}

impl ListCiCacheOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(key_prefix) = &self.key_prefix {
            query.push(("key_prefix", key_prefix.clone()));
        }
        query
    }
}

/// Handles communication with the CI cache endpoints.
pub struct CiCacheService<'a> {
    client: &'a GitnessClient,
}

impl<'a> CiCacheService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Stores a blob under a cache key.
    ///
    /// A `version` of zero stores the next version.
    pub async fn upload(
        &self,
        key: &str,
        version: i32,
        data: Vec<u8>,
    ) -> Result<ApiResponse<CiCacheEntry>, ApiError> {
        let mut query = Vec::new();
        if version > 0 {
            query.push(("version", version.to_string()));
        }
        self.client
            .put_bytes(&["ci", "cache", key], &query, data)
            .await
    }

    /// Downloads the blob stored under a cache key.
    pub async fn download(
        &self,
        key: &str,
        options: Option<&GetCiCacheOptions>,
    ) -> Result<ApiResponse<Vec<u8>>, ApiError> {
        let query = options
            .map(GetCiCacheOptions::to_query)
            .unwrap_or_default();
        self.client.get_bytes(&["ci", "cache", key], &query).await
    }

    /// Lists stored cache entries.
    pub async fn list_entries(
        &self,
        options: Option<&ListCiCacheOptions>,
    ) -> Result<ApiResponse<Vec<CiCacheEntry>>, ApiError> {
        let query = options
            .map(ListCiCacheOptions::to_query)
            .unwrap_or_default();
        self.client.get(&["ci", "cache"], &query).await
    }

    /// Deletes the entry stored under a cache key.
    pub async fn delete_entry(&self, key: &str) -> Result<ApiResponse<()>, ApiError> {
        self.client.delete(&["ci", "cache", key], None::<&()>).await
    }

    /// Deletes all cache entries.
    pub async fn clear(&self) -> Result<ApiResponse<()>, ApiError> {
        self.client.delete(&["ci", "cache"], None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> GitnessClient {
        GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_and_download_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let upload = server
            .mock("PUT", "/api/v1/ci/cache/deps%2Fcargo")
            .match_query(mockito::Matcher::UrlEncoded("version".into(), "2".into()))
            .match_header("content-type", "application/octet-stream")
            .with_body(r#"{"key": "deps/cargo", "size": 4, "version": 2}"#)
            .create_async()
            .await;
        let download = server
            .mock("GET", "/api/v1/ci/cache/deps%2Fcargo")
            .with_header("content-type", "application/octet-stream")
            .with_body("blob")
            .create_async()
            .await;

        let client = client_for(&server);

        let entry = client
            .ci_cache()
            .upload("deps/cargo", 2, b"blob".to_vec())
            .await
            .unwrap();
        assert_eq!(entry.data.key.as_deref(), Some("deps/cargo"));

        let blob = client.ci_cache().download("deps/cargo", None).await.unwrap();
        assert_eq!(blob.data, b"blob");

        upload.assert_async().await;
        download.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_entries_key_prefix() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/ci/cache")
            .match_query(mockito::Matcher::UrlEncoded(
                "key_prefix".into(),
                "deps".into(),
            ))
            .with_body(r#"[{"key": "deps/cargo", "size": 4}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListCiCacheOptions {
            key_prefix: Some("deps".to_string()),
            ..Default::default()
        };
        let entries = client
            .ci_cache()
            .list_entries(Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(entries.data[0].key.as_deref(), Some("deps/cargo"));
    }
}
