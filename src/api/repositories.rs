//
//  gitness-client
//  api/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Repository API types and operations.
//!
//! Repositories hold the git data, pull requests, pipelines, and webhooks of
//! a project. A repository lives inside a space and is addressed by its full
//! path (for example `acme/widgets`), which travels as a single
//! percent-encoded path segment in every endpoint below.
//!
//! # Overview
//!
//! The service covers repository CRUD, imports from external providers,
//! branches, commits, file content, and tree listings.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::repositories::CreateRepositoryOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! let repo = client
//!     .repositories()
//!     .create_repository(
//!         "acme",
//!         &CreateRepositoryOptions {
//!             identifier: Some("widgets".to_string()),
//!             default_branch: Some("main".to_string()),
//!             readme: Some(true),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("clone from {:?}", repo.data.git_url);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A Gitness repository.
///
/// Every field is optional to reflect partial JSON responses.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `id` | Internal numeric identifier |
/// | `parent_id` | Identifier of the containing space |
/// | `identifier` | Repository name within its space |
/// | `path` | Full path (e.g. `acme/widgets`) |
/// | `default_branch` | Name of the default branch |
/// | `git_url` | Clone URL |
/// | `importing` | Whether an import is still in progress |
/// | `num_*_pulls` | Pull request counters by state |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identifier of the containing space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Repository name within its space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Full path of the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository is publicly visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Principal id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Size of the git data in KiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// When the size was last computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_updated: Option<DateTime<Utc>>,

    /// HTTP clone URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,

    /// Name of the default branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Identifier of the repository this one was forked from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_id: Option<i64>,

    /// Number of forks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_forks: Option<i32>,

    /// Total number of pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pulls: Option<i32>,

    /// Number of closed pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_closed_pulls: Option<i32>,

    /// Number of open pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_open_pulls: Option<i32>,

    /// Number of merged pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_merged_pulls: Option<i32>,

    /// Whether an import is still in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importing: Option<bool>,
}

/// A user identity attached to a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    /// Name recorded in the git object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email recorded in the git object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A git signature, an identity plus the time of the action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signature {
    /// Who performed the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,

    /// When the action was performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<DateTime<Utc>>,
}

/// A git commit.
///
/// The `added`, `removed`, and `modified` file lists are only populated by
/// endpoints that compute the change set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// Commit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Author signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Signature>,

    /// Committer signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<Signature>,

    /// Paths added by this commit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<String>,

    /// Paths removed by this commit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<String>,

    /// Paths modified by this commit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modified: Vec<String>,
}

/// A repository branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// SHA the branch currently points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// The commit the branch points at, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

/// File content information returned by the content endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileContent {
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path of the file within the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Blob SHA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// Size of the blob in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// Entry type, `file`, `dir`, `symlink`, or `submodule`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,

    /// Base64-encoded file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A node in a repository tree listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Entry name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path of the entry within the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Entry type, `file`, `dir`, `symlink`, or `submodule`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,

    /// Unix file mode of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Object SHA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// Size in bytes, for blobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// Options for creating a repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRepositoryOptions {
    /// Name of the new repository within its space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository should be publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Name of the default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Name of a gitignore template to seed the repository with.
    #[serde(rename = "gitignore", skip_serializing_if = "Option::is_none")]
    pub git_ignore: Option<String>,

    /// Key of a license template to seed the repository with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Whether to create an initial README commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<bool>,
}

/// Options for updating a repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRepositoryOptions {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// New default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

/// Options for importing a repository from an external provider.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportRepositoryOptions {
    /// Clone URL of the source repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,

    /// Username for the source, when it requires authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password or token for the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Private key for SSH sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    /// Passphrase for the private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,

    /// Provider kind (for example `github`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Provider-side repository identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

/// Options for creating a branch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBranchOptions {
    /// Name of the new branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ref the new branch should point at, a branch name or commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Options for listing repositories.
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Whether to include repositories of nested spaces.
    pub recursive: Option<bool>,
}

impl ListRepositoriesOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(recursive) = self.recursive {
            query.push(("recursive", recursive.to_string()));
        }
        query
    }
}

/// Options for listing commits.
#[derive(Debug, Clone, Default)]
pub struct ListCommitsOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Ref to list commits from, defaults to the default branch.
    pub git_ref: Option<String>,

    /// List only commits after this ref.
    pub after: Option<String>,

    /// Lower bound on commit time.
    pub since: Option<DateTime<Utc>>,

    /// Upper bound on commit time.
    pub until: Option<DateTime<Utc>>,

    /// Restrict to commits touching this path.
    pub path: Option<String>,
}

impl ListCommitsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(git_ref) = &self.git_ref {
            query.push(("git_ref", git_ref.clone()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(since) = &self.since {
            query.push(("since", since.to_rfc3339()));
        }
        if let Some(until) = &self.until {
            query.push(("until", until.to_rfc3339()));
        }
        if let Some(path) = &self.path {
            query.push(("path", path.clone()));
        }
        query
    }
}

/// Options for retrieving file content.
#[derive(Debug, Clone, Default)]
pub struct GetFileOptions {
    /// Ref to read the file from, defaults to the default branch.
    pub git_ref: Option<String>,

    /// Whether to include the latest commit touching the file.
    pub include_commit: Option<bool>,
}

impl GetFileOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(git_ref) = &self.git_ref {
            query.push(("git_ref", git_ref.clone()));
        }
        if let Some(include_commit) = self.include_commit {
            query.push(("include_commit", include_commit.to_string()));
        }
        query
    }
}

/// Options for listing repository tree paths.
#[derive(Debug, Clone, Default)]
pub struct ListPathsOptions {
    /// Ref to read the tree from, defaults to the default branch.
    pub git_ref: Option<String>,

    /// Subtree to list, defaults to the repository root.
    pub path: Option<String>,

    /// Whether to include the latest commit touching each entry.
    pub include_commit: Option<bool>,
}

impl ListPathsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(git_ref) = &self.git_ref {
            query.push(("git_ref", git_ref.clone()));
        }
        if let Some(path) = &self.path {
            query.push(("path", path.clone()));
        }
        if let Some(include_commit) = self.include_commit {
            query.push(("include_commit", include_commit.to_string()));
        }
        query
    }
}

/// Request body for deleting a repository.
#[derive(Debug, Clone, Serialize)]
struct DeleteRepositoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_id: Option<String>,
}

/// Handles communication with the repository endpoints.
pub struct RepositoriesService<'a> {
    client: &'a GitnessClient,
}

impl<'a> RepositoriesService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Retrieves a repository by its path.
    pub async fn get_repository(
        &self,
        repo_path: &str,
    ) -> Result<ApiResponse<Repository>, ApiError> {
        self.client.get(&["repos", repo_path], &[]).await
    }

    /// Creates a new repository inside a space.
    pub async fn create_repository(
        &self,
        space_ref: &str,
        options: &CreateRepositoryOptions,
    ) -> Result<ApiResponse<Repository>, ApiError> {
        self.client
            .post(&["spaces", space_ref, "repos"], Some(options))
            .await
    }

    /// Updates a repository.
    pub async fn update_repository(
        &self,
        repo_path: &str,
        options: &UpdateRepositoryOptions,
    ) -> Result<ApiResponse<Repository>, ApiError> {
        self.client
            .patch(&["repos", repo_path], Some(options))
            .await
    }

    /// Deletes a repository.
    ///
    /// The optional `delete_id` confirms deletion of a repository that was
    /// already soft-deleted.
    pub async fn delete_repository(
        &self,
        repo_path: &str,
        delete_id: Option<&str>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let payload = delete_id.map(|id| DeleteRepositoryRequest {
            delete_id: Some(id.to_string()),
        });
        self.client
            .delete(&["repos", repo_path], payload.as_ref())
            .await
    }

    /// Imports a repository from an external provider into a space.
    ///
    /// The returned repository carries `importing: Some(true)` until the
    /// import finishes.
    pub async fn import_repository(
        &self,
        space_ref: &str,
        options: &ImportRepositoryOptions,
    ) -> Result<ApiResponse<Repository>, ApiError> {
        self.client
            .post(&["spaces", space_ref, "repos", "import"], Some(options))
            .await
    }

    /// Lists the branches of a repository.
    pub async fn list_branches(
        &self,
        repo_path: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Branch>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "branches"], &query)
            .await
    }

    /// Retrieves a specific branch.
    pub async fn get_branch(
        &self,
        repo_path: &str,
        branch_name: &str,
    ) -> Result<ApiResponse<Branch>, ApiError> {
        self.client
            .get(&["repos", repo_path, "branches", branch_name], &[])
            .await
    }

    /// Creates a new branch.
    pub async fn create_branch(
        &self,
        repo_path: &str,
        options: &CreateBranchOptions,
    ) -> Result<ApiResponse<Branch>, ApiError> {
        self.client
            .post(&["repos", repo_path, "branches"], Some(options))
            .await
    }

    /// Deletes a branch.
    pub async fn delete_branch(
        &self,
        repo_path: &str,
        branch_name: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(
                &["repos", repo_path, "branches", branch_name],
                None::<&()>,
            )
            .await
    }

    /// Lists commits of a repository.
    pub async fn list_commits(
        &self,
        repo_path: &str,
        options: Option<&ListCommitsOptions>,
    ) -> Result<ApiResponse<Vec<Commit>>, ApiError> {
        let query = options
            .map(ListCommitsOptions::to_query)
            .unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "commits"], &query)
            .await
    }

    /// Retrieves a specific commit.
    pub async fn get_commit(
        &self,
        repo_path: &str,
        commit_sha: &str,
    ) -> Result<ApiResponse<Commit>, ApiError> {
        self.client
            .get(&["repos", repo_path, "commits", commit_sha], &[])
            .await
    }

    /// Retrieves the content of a file.
    ///
    /// The `file_path` is split on `/` so each directory level stays its own
    /// path segment.
    pub async fn get_file_content(
        &self,
        repo_path: &str,
        file_path: &str,
        options: Option<&GetFileOptions>,
    ) -> Result<ApiResponse<FileContent>, ApiError> {
        let mut segments = vec!["repos", repo_path, "content"];
        segments.extend(file_path.split('/'));
        let query = options.map(GetFileOptions::to_query).unwrap_or_default();
        self.client.get(&segments, &query).await
    }

    /// Lists the tree paths of a repository.
    pub async fn list_paths(
        &self,
        repo_path: &str,
        options: Option<&ListPathsOptions>,
    ) -> Result<ApiResponse<Vec<TreeNode>>, ApiError> {
        let query = options.map(ListPathsOptions::to_query).unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "paths"], &query)
            .await
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
    async fn test_list_branches_encodes_repo_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/ci%2Fdemo/branches")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let branches = client
            .repositories()
            .list_branches("ci/demo", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(branches.data.is_empty());
    }

    #[tokio::test]
    async fn test_get_branch_encodes_branch_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/v1/repos/ci%2Fdemo/branches/feature%2Ftest-branch",
            )
            .with_body(r#"{"name": "feature/test-branch", "sha": "abc123"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let branch = client
            .repositories()
            .get_branch("ci/demo", "feature/test-branch")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(branch.data.name.as_deref(), Some("feature/test-branch"));
    }

    #[tokio::test]
    async fn test_create_repository_posts_into_space() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/spaces/acme/repos")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"identifier": "widgets", "readme": true}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"identifier": "widgets", "path": "acme/widgets"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let repo = client
            .repositories()
            .create_repository(
                "acme",
                &CreateRepositoryOptions {
                    identifier: Some("widgets".to_string()),
                    readme: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(repo.data.path.as_deref(), Some("acme/widgets"));
    }

    #[tokio::test]
    async fn test_list_commits_query_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/acme%2Fwidgets/commits")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "5".into()),
                mockito::Matcher::UrlEncoded("git_ref".into(), "main".into()),
                mockito::Matcher::UrlEncoded("path".into(), "src/lib.rs".into()),
            ]))
            .with_body(r#"[{"sha": "abc123", "message": "initial commit"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListCommitsOptions {
            list: ListOptions {
                limit: Some(5),
                ..Default::default()
            },
            git_ref: Some("main".to_string()),
            path: Some("src/lib.rs".to_string()),
            ..Default::default()
        };
        let commits = client
            .repositories()
            .list_commits("acme/widgets", Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(commits.data.len(), 1);
        assert_eq!(commits.data[0].sha.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_get_file_content_splits_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/acme%2Fwidgets/content/docs/README.md")
            .match_query(mockito::Matcher::UrlEncoded(
                "git_ref".into(),
                "main".into(),
            ))
            .with_body(r#"{"name": "README.md", "type": "file"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = GetFileOptions {
            git_ref: Some("main".to_string()),
            ..Default::default()
        };
        let file = client
            .repositories()
            .get_file_content("acme/widgets", "docs/README.md", Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(file.data.entry_type.as_deref(), Some("file"));
    }
}
