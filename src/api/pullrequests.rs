//
//  gitness-client
//  api/pullrequests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pull request API types and operations.
//!
//! Pull requests are addressed by their per-repository number. The service
//! covers the full lifecycle: creation, listing with filters, updates, state
//! transitions, merging, the activity timeline (comments and system events),
//! and reviewer management for both individual principals and user groups.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::pullrequests::CreatePullRequestOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! let pr = client
//!     .pull_requests()
//!     .create_pull_request(
//!         "acme/widgets",
//!         &CreatePullRequestOptions {
//!             title: Some("Add retry logic".to_string()),
//!             source_branch: Some("feature/retries".to_string()),
//!             target_branch: Some("main".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("opened PR #{:?}", pr.data.number);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};
use super::principals::PrincipalInfo;

/// A Gitness pull request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequest {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Per-repository pull request number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    /// Principal id of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// When the description was last edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited: Option<DateTime<Utc>>,

    /// Current state, `open`, `closed`, or `merged`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Whether the pull request is a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Repository the source branch lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_repo_id: Option<i64>,

    /// Branch the changes come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,

    /// Repository the target branch lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_repo_id: Option<i64>,

    /// Branch the changes merge into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,

    /// Merge method used, once merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<String>,

    /// Result of the server's mergeability check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_check_status: Option<String>,

    /// SHA of the merge commit, once merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_sha: Option<String>,

    /// Principal id of the merger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_by: Option<i64>,

    /// When the pull request was merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged: Option<DateTime<Utc>>,

    /// Change statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PullRequestStats>,

    /// Author details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PrincipalInfo>,

    /// Merger details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merger: Option<PrincipalInfo>,

    /// Labels attached to the pull request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    /// Assigned reviewers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<Reviewer>,
}

/// Change statistics of a pull request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequestStats {
    /// Number of commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<i32>,

    /// Number of files changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_changed: Option<i32>,

    /// Lines added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additions: Option<i32>,

    /// Lines deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<i32>,

    /// Number of comment threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversations: Option<i32>,

    /// Number of unresolved comment threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved_count: Option<i32>,
}

/// A label attached to a pull request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Label key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Label value, for key-value labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Scope the label is defined at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Verdict of a pull request review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDecision {
    /// The reviewer approved the changes.
    #[serde(rename = "approved")]
    Approved,

    /// The reviewer requested changes.
    #[serde(rename = "changereq")]
    ChangeRequested,

    /// The review is still pending.
    #[serde(rename = "pending")]
    Pending,
}

/// An individual reviewer assigned to a pull request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reviewer {
    /// The reviewing principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<PrincipalInfo>,

    /// How the reviewer was assigned.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub reviewer_type: Option<String>,

    /// The reviewer's current decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_decision: Option<ReviewDecision>,

    /// SHA the decision applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// When the reviewer was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the review state last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A user group assigned as reviewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserGroupReviewer {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identifier of the user group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_group_id: Option<i64>,

    /// Who assigned the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<PrincipalInfo>,

    /// When the group was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the group assignment last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Aggregated decision of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<ReviewDecision>,

    /// Decisions of the individual group members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_decisions: Vec<UserReviewDecision>,
}

/// An individual member's decision within a user group review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserReviewDecision {
    /// Identifier of the deciding user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Details of the deciding user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<PrincipalInfo>,

    /// The user's decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<ReviewDecision>,

    /// When the decision was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Individual and user group reviewers of a pull request, combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedReviewers {
    /// Individual reviewers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<Reviewer>,

    /// User group reviewers.
    #[serde(
        rename = "usergroup_reviewers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub user_group_reviewers: Vec<UserGroupReviewer>,
}

/// Metadata attached to code comment suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitySuggestionsMetadata {
    /// Checksums of the suggested replacements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_sums: Vec<String>,

    /// Checksum of the suggestion that was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_check_sum: Option<String>,

    /// Commit that applied the suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_commit_sha: Option<String>,
}

/// Metadata attached to comment mentions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMentionsMetadata {
    /// Principal ids mentioned in the comment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<i64>,
}

/// Metadata of a pull request activity entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMetadata {
    /// Suggestion bookkeeping for code comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<ActivitySuggestionsMetadata>,

    /// Mention bookkeeping for comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<ActivityMentionsMetadata>,
}

/// An entry in the pull request activity timeline.
///
/// Activities cover user comments as well as system events such as branch
/// updates and state changes. The `kind` and `activity_type` fields identify
/// the entry; comments carry their text in `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequestActivity {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Activity type (for example `comment` or `state-change`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,

    /// Activity kind (for example `system` or `change-comment`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Comment text, for comment entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw payload of system entries.
    #[serde(rename = "payload", default, skip_serializing_if = "Option::is_none")]
    pub payload_raw: Option<String>,

    /// Identifier of the parent entry, for threaded replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i64>,

    /// Position in the timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Position within a thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_order: Option<i64>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// When the entry was last edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited: Option<DateTime<Utc>>,

    /// Author of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PrincipalInfo>,

    /// Structured metadata of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ActivityMetadata>,
}

/// Options for creating a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePullRequestOptions {
    /// Title of the pull request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Branch the changes come from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,

    /// Branch the changes merge into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,

    /// Whether to open the pull request as a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
}

/// Options for updating a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePullRequestOptions {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Options for changing the state of a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatePullRequestOptions {
    /// Target state, `open` or `closed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Options for merging a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergePullRequestOptions {
    /// Merge method, `merge`, `squash`, `rebase`, or `fast-forward`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Message for the merge commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,

    /// Expected head of the source branch; the merge fails when it moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sha: Option<String>,

    /// Whether to bypass protection rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_rules: Option<bool>,

    /// Evaluate mergeability without merging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Evaluate rule violations without merging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run_rules: Option<bool>,
}

/// Options for listing pull requests.
#[derive(Debug, Clone, Default)]
pub struct ListPullRequestsOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to a state, `open`, `closed`, or `merged`.
    pub state: Option<String>,

    /// Restrict to a source branch.
    pub source_branch: Option<String>,

    /// Restrict to a target branch.
    pub target_branch: Option<String>,

    /// Restrict to an author by principal id.
    pub created_by: Option<i64>,
}

impl ListPullRequestsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(state) = &self.state {
            query.push(("state", state.clone()));
        }
        if let Some(source_branch) = &self.source_branch {
            query.push(("source_branch", source_branch.clone()));
        }
        if let Some(target_branch) = &self.target_branch {
            query.push(("target_branch", target_branch.clone()));
        }
        if let Some(created_by) = self.created_by {
            query.push(("created_by", created_by.to_string()));
        }
        query
    }
}

/// Options for commenting on a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommentOptions {
    /// Comment text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Identifier of the comment being replied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i64>,
}

/// Request body for assigning a user group reviewer.
#[derive(Debug, Clone, Serialize)]
struct UserGroupReviewerAddRequest {
    usergroup_id: i64,
}

/// Handles communication with the pull request endpoints.
pub struct PullRequestsService<'a> {
    client: &'a GitnessClient,
}

impl<'a> PullRequestsService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Creates a new pull request.
    pub async fn create_pull_request(
        &self,
        repo_path: &str,
        options: &CreatePullRequestOptions,
    ) -> Result<ApiResponse<PullRequest>, ApiError> {
        self.client
            .post(&["repos", repo_path, "pullreq"], Some(options))
            .await
    }

    /// Lists pull requests of a repository.
    pub async fn list_pull_requests(
        &self,
        repo_path: &str,
        options: Option<&ListPullRequestsOptions>,
    ) -> Result<ApiResponse<Vec<PullRequest>>, ApiError> {
        let query = options
            .map(ListPullRequestsOptions::to_query)
            .unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "pullreq"], &query)
            .await
    }

    /// Retrieves a specific pull request.
    pub async fn get_pull_request(
        &self,
        repo_path: &str,
        number: i64,
    ) -> Result<ApiResponse<PullRequest>, ApiError> {
        let number = number.to_string();
        self.client
            .get(&["repos", repo_path, "pullreq", &number], &[])
            .await
    }

    /// Updates the title or description of a pull request.
    pub async fn update_pull_request(
        &self,
        repo_path: &str,
        number: i64,
        options: &UpdatePullRequestOptions,
    ) -> Result<ApiResponse<PullRequest>, ApiError> {
        let number = number.to_string();
        self.client
            .patch(&["repos", repo_path, "pullreq", &number], Some(options))
            .await
    }

    /// Changes the state of a pull request.
    pub async fn set_pull_request_state(
        &self,
        repo_path: &str,
        number: i64,
        options: &StatePullRequestOptions,
    ) -> Result<ApiResponse<PullRequest>, ApiError> {
        let number = number.to_string();
        self.client
            .post(
                &["repos", repo_path, "pullreq", &number, "state"],
                Some(options),
            )
            .await
    }

    /// Merges a pull request.
    ///
    /// With `dry_run` set the server evaluates mergeability and returns the
    /// result without touching the target branch.
    pub async fn merge_pull_request(
        &self,
        repo_path: &str,
        number: i64,
        options: &MergePullRequestOptions,
    ) -> Result<ApiResponse<PullRequest>, ApiError> {
        let number = number.to_string();
        self.client
            .post(
                &["repos", repo_path, "pullreq", &number, "merge"],
                Some(options),
            )
            .await
    }

    /// Lists the activity timeline of a pull request.
    pub async fn list_activities(
        &self,
        repo_path: &str,
        number: i64,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<PullRequestActivity>>, ApiError> {
        let number = number.to_string();
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(
                &["repos", repo_path, "pullreq", &number, "activities"],
                &query,
            )
            .await
    }

    /// Comments on a pull request.
    pub async fn create_comment(
        &self,
        repo_path: &str,
        number: i64,
        options: &CreateCommentOptions,
    ) -> Result<ApiResponse<PullRequestActivity>, ApiError> {
        let number = number.to_string();
        self.client
            .post(
                &["repos", repo_path, "pullreq", &number, "comments"],
                Some(options),
            )
            .await
    }

    /// Assigns a reviewer to a pull request.
    pub async fn add_reviewer(
        &self,
        repo_path: &str,
        number: i64,
        reviewer_uid: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        let number = number.to_string();
        self.client
            .put_no_content(
                &[
                    "repos",
                    repo_path,
                    "pullreq",
                    &number,
                    "reviewers",
                    reviewer_uid,
                ],
                None::<&()>,
            )
            .await
    }

    /// Removes a reviewer from a pull request.
    pub async fn remove_reviewer(
        &self,
        repo_path: &str,
        number: i64,
        reviewer_uid: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        let number = number.to_string();
        self.client
            .delete(
                &[
                    "repos",
                    repo_path,
                    "pullreq",
                    &number,
                    "reviewers",
                    reviewer_uid,
                ],
                None::<&()>,
            )
            .await
    }

    /// Lists the individual reviewers of a pull request.
    pub async fn list_reviewers(
        &self,
        repo_path: &str,
        number: i64,
    ) -> Result<ApiResponse<Vec<Reviewer>>, ApiError> {
        let number = number.to_string();
        self.client
            .get(&["repos", repo_path, "pullreq", &number, "reviewers"], &[])
            .await
    }

    /// Lists individual and user group reviewers together.
    pub async fn list_combined_reviewers(
        &self,
        repo_path: &str,
        number: i64,
    ) -> Result<ApiResponse<CombinedReviewers>, ApiError> {
        let number = number.to_string();
        self.client
            .get(
                &[
                    "repos",
                    repo_path,
                    "pullreq",
                    &number,
                    "reviewers",
                    "combined",
                ],
                &[],
            )
            .await
    }

    /// Assigns a user group as reviewer.
    pub async fn add_user_group_reviewer(
        &self,
        repo_path: &str,
        number: i64,
        user_group_id: i64,
    ) -> Result<ApiResponse<UserGroupReviewer>, ApiError> {
        let number = number.to_string();
        let request = UserGroupReviewerAddRequest {
            usergroup_id: user_group_id,
        };
        self.client
            .put(
                &[
                    "repos",
                    repo_path,
                    "pullreq",
                    &number,
                    "reviewers",
                    "usergroups",
                ],
                Some(&request),
            )
            .await
    }

    /// Removes a user group reviewer.
    pub async fn remove_user_group_reviewer(
        &self,
        repo_path: &str,
        number: i64,
        user_group_id: i64,
    ) -> Result<ApiResponse<()>, ApiError> {
        let number = number.to_string();
        let user_group_id = user_group_id.to_string();
        self.client
            .delete(
                &[
                    "repos",
                    repo_path,
                    "pullreq",
                    &number,
                    "reviewers",
                    "usergroups",
                    &user_group_id,
                ],
                None::<&()>,
            )
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
    async fn test_list_pull_requests_with_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/test%2Frepo/pullreq")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("state".into(), "open".into()),
                mockito::Matcher::UrlEncoded("target_branch".into(), "main".into()),
            ]))
            .with_body(
                r#"[{"id": 1, "number": 1, "title": "Test PR", "state": "open",
                     "source_branch": "feature", "target_branch": "main"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListPullRequestsOptions {
            state: Some("open".to_string()),
            target_branch: Some("main".to_string()),
            ..Default::default()
        };
        let prs = client
            .pull_requests()
            .list_pull_requests("test/repo", Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(prs.data.len(), 1);
        assert_eq!(prs.data[0].title.as_deref(), Some("Test PR"));
    }

    #[tokio::test]
    async fn test_create_pull_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/test%2Frepo/pullreq")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"title": "New PR", "source_branch": "feature-2"}"#.to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"id": 2, "number": 2, "title": "New PR", "state": "open"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let pr = client
            .pull_requests()
            .create_pull_request(
                "test/repo",
                &CreatePullRequestOptions {
                    title: Some("New PR".to_string()),
                    source_branch: Some("feature-2".to_string()),
                    target_branch: Some("main".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(pr.data.number, Some(2));
    }

    #[tokio::test]
    async fn test_merge_pull_request_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/test%2Frepo/pullreq/7/merge")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"method": "squash"}"#.to_string(),
            ))
            .with_body(r#"{"number": 7, "state": "merged", "merge_method": "squash"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let pr = client
            .pull_requests()
            .merge_pull_request(
                "test/repo",
                7,
                &MergePullRequestOptions {
                    method: Some("squash".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(pr.data.state.as_deref(), Some("merged"));
    }

    #[tokio::test]
    async fn test_reviewer_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let add = server
            .mock("PUT", "/api/v1/repos/test%2Frepo/pullreq/3/reviewers/jdoe")
            .with_status(204)
            .create_async()
            .await;
        let remove = server
            .mock("DELETE", "/api/v1/repos/test%2Frepo/pullreq/3/reviewers/jdoe")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .pull_requests()
            .add_reviewer("test/repo", 3, "jdoe")
            .await
            .unwrap();
        client
            .pull_requests()
            .remove_reviewer("test/repo", 3, "jdoe")
            .await
            .unwrap();

        add.assert_async().await;
        remove.assert_async().await;
    }

    #[test]
    fn test_review_decision_wire_format() {
        assert_eq!(
            serde_json::to_string(&ReviewDecision::ChangeRequested).unwrap(),
            r#""changereq""#
        );
        let decision: ReviewDecision = serde_json::from_str(r#""approved""#).unwrap();
        assert_eq!(decision, ReviewDecision::Approved);
    }
}
