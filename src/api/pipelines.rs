//
//  gitness-client
//  api/pipelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipeline API types and operations.
//!
//! Pipelines are CI job definitions stored inside a repository; an execution
//! is one run of a pipeline, and triggers connect repository events to new
//! executions. Pipeline timestamps are epoch milliseconds on the wire and
//! stay plain integers here.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//!
//! // Kick off a run of the "build" pipeline on main
//! let execution = client
//!     .pipelines()
//!     .create_execution("acme/widgets", "build", Some("main"))
//!     .await?;
//! println!("execution #{:?} is {:?}", execution.data.number, execution.data.status);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// Trigger type of a hook-based trigger.
pub const TRIGGER_TYPE_HOOK: &str = "@hook";

/// Trigger type of a cron-based trigger.
pub const TRIGGER_TYPE_CRON: &str = "@cron";

/// A Gitness pipeline definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Pipeline name within its repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the pipeline is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Path of the pipeline YAML within the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,

    /// Branch the pipeline reads its configuration from by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Identifier of the owning repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Sequence number of the latest execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Principal id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    /// Creation time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Last-modification time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,

    /// Optimistic-locking version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// One run of a pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineExecution {
    /// Per-pipeline execution number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    /// Identifier of the pipeline that ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,

    /// Current status (for example `pending`, `running`, `success`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Event that started the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Action of the originating event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Git ref the run executed against.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    /// Source branch of the originating event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target branch of the originating event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// SHA before the originating push.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// SHA after the originating push.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Login of the commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_login: Option<String>,

    /// Display name of the commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Email of the commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    /// Avatar URL of the commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,

    /// Commit message of the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Failure message, when the run errored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Start time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<i64>,

    /// Finish time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished: Option<i64>,

    /// Creation time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Last-modification time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,

    /// Custom parameters the run was started with.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}

/// Repository events a trigger can fire on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    /// A branch was created.
    BranchCreated,
    /// A branch was updated.
    BranchUpdated,
    /// A tag was created.
    TagCreated,
    /// A tag was updated.
    TagUpdated,
    /// A pull request was opened.
    PullreqCreated,
    /// A pull request was reopened.
    PullreqReopened,
    /// The source branch of a pull request was updated.
    PullreqBranchUpdated,
    /// A pull request was closed.
    PullreqClosed,
    /// A pull request was merged.
    PullreqMerged,
}

/// Event classes a trigger can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Scheduled runs.
    Cron,
    /// Manually started runs.
    Manual,
    /// Push events.
    Push,
    /// Pull request events.
    PullRequest,
    /// Tag events.
    Tag,
}

/// A pipeline trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineTrigger {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Trigger name within its pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Trigger type, [`TRIGGER_TYPE_HOOK`] or [`TRIGGER_TYPE_CRON`].
    #[serde(
        rename = "trigger_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_type: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the trigger is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Shared secret for hook validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Actions the trigger fires on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<TriggerAction>,

    /// Creation time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Last-modification time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,

    /// Optimistic-locking version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Identifier of the owning pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,

    /// Identifier of the owning repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Principal id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

/// A single log line of an execution step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogLine {
    /// Line number within the step output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<i32>,

    /// Output text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,

    /// Seconds elapsed since the step started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Options for creating a pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePipelineOptions {
    /// Name of the new pipeline within its repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether to create the pipeline disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Path of the pipeline YAML within the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,

    /// Branch to read the configuration from by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

/// Options for updating a pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePipelineOptions {
    /// New identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New disabled state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// New configuration path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

/// Options for creating a pipeline trigger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTriggerOptions {
    /// Name of the new trigger within its pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Trigger type, [`TRIGGER_TYPE_HOOK`] or [`TRIGGER_TYPE_CRON`].
    #[serde(rename = "trigger_type", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether to create the trigger disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Shared secret for hook validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Actions the trigger fires on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<TriggerAction>,
}

/// Options for updating a pipeline trigger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTriggerOptions {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New disabled state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// New shared secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// New action set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<TriggerAction>,
}

/// Options for listing pipeline executions.
#[derive(Debug, Clone, Default)]
pub struct ListExecutionsOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to executions with this status.
    pub status: Option<String>,
}

impl ListExecutionsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}

/// Handles communication with the pipeline endpoints.
pub struct PipelinesService<'a> {
    client: &'a GitnessClient,
}

impl<'a> PipelinesService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists the pipelines of a repository.
    pub async fn list_pipelines(
        &self,
        repo_path: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Pipeline>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(&["repos", repo_path, "pipelines"], &query)
            .await
    }

    /// Creates a new pipeline.
    pub async fn create_pipeline(
        &self,
        repo_path: &str,
        options: &CreatePipelineOptions,
    ) -> Result<ApiResponse<Pipeline>, ApiError> {
        self.client
            .post(&["repos", repo_path, "pipelines"], Some(options))
            .await
    }

    /// Retrieves a specific pipeline.
    pub async fn get_pipeline(
        &self,
        repo_path: &str,
        pipeline: &str,
    ) -> Result<ApiResponse<Pipeline>, ApiError> {
        self.client
            .get(&["repos", repo_path, "pipelines", pipeline], &[])
            .await
    }

    /// Updates a pipeline.
    pub async fn update_pipeline(
        &self,
        repo_path: &str,
        pipeline: &str,
        options: &UpdatePipelineOptions,
    ) -> Result<ApiResponse<Pipeline>, ApiError> {
        self.client
            .patch(&["repos", repo_path, "pipelines", pipeline], Some(options))
            .await
    }

    /// Deletes a pipeline.
    pub async fn delete_pipeline(
        &self,
        repo_path: &str,
        pipeline: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["repos", repo_path, "pipelines", pipeline], None::<&()>)
            .await
    }

    /// Lists the executions of a pipeline.
    pub async fn list_executions(
        &self,
        repo_path: &str,
        pipeline: &str,
        options: Option<&ListExecutionsOptions>,
    ) -> Result<ApiResponse<Vec<PipelineExecution>>, ApiError> {
        let query = options
            .map(ListExecutionsOptions::to_query)
            .unwrap_or_default();
        self.client
            .get(
                &["repos", repo_path, "pipelines", pipeline, "executions"],
                &query,
            )
            .await
    }

    /// Starts a new execution, optionally on a specific branch.
    pub async fn create_execution(
        &self,
        repo_path: &str,
        pipeline: &str,
        branch: Option<&str>,
    ) -> Result<ApiResponse<PipelineExecution>, ApiError> {
        let mut query = Vec::new();
        if let Some(branch) = branch {
            query.push(("branch", branch.to_string()));
        }
        self.client
            .post_with_query(
                &["repos", repo_path, "pipelines", pipeline, "executions"],
                &query,
                None::<&()>,
            )
            .await
    }

    /// Retrieves a specific execution.
    pub async fn get_execution(
        &self,
        repo_path: &str,
        pipeline: &str,
        number: i64,
    ) -> Result<ApiResponse<PipelineExecution>, ApiError> {
        let number = number.to_string();
        self.client
            .get(
                &[
                    "repos",
                    repo_path,
                    "pipelines",
                    pipeline,
                    "executions",
                    &number,
                ],
                &[],
            )
            .await
    }

    /// Deletes an execution.
    pub async fn delete_execution(
        &self,
        repo_path: &str,
        pipeline: &str,
        number: i64,
    ) -> Result<ApiResponse<()>, ApiError> {
        let number = number.to_string();
        self.client
            .delete(
                &[
                    "repos",
                    repo_path,
                    "pipelines",
                    pipeline,
                    "executions",
                    &number,
                ],
                None::<&()>,
            )
            .await
    }

    /// Cancels a running execution.
    pub async fn cancel_execution(
        &self,
        repo_path: &str,
        pipeline: &str,
        number: i64,
    ) -> Result<ApiResponse<()>, ApiError> {
        let number = number.to_string();
        self.client
            .post_no_content(
                &[
                    "repos",
                    repo_path,
                    "pipelines",
                    pipeline,
                    "executions",
                    &number,
                    "cancel",
                ],
                None::<&()>,
            )
            .await
    }

    /// Retries a finished execution.
    pub async fn retry_execution(
        &self,
        repo_path: &str,
        pipeline: &str,
        number: i64,
    ) -> Result<ApiResponse<PipelineExecution>, ApiError> {
        let number = number.to_string();
        self.client
            .post(
                &[
                    "repos",
                    repo_path,
                    "pipelines",
                    pipeline,
                    "executions",
                    &number,
                    "retry",
                ],
                None::<&()>,
            )
            .await
    }

    /// Lists the triggers of a pipeline.
    pub async fn list_triggers(
        &self,
        repo_path: &str,
        pipeline: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<PipelineTrigger>>, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.client
            .get(
                &["repos", repo_path, "pipelines", pipeline, "triggers"],
                &query,
            )
            .await
    }

    /// Creates a trigger for a pipeline.
    pub async fn create_trigger(
        &self,
        repo_path: &str,
        pipeline: &str,
        options: &CreateTriggerOptions,
    ) -> Result<ApiResponse<PipelineTrigger>, ApiError> {
        self.client
            .post(
                &["repos", repo_path, "pipelines", pipeline, "triggers"],
                Some(options),
            )
            .await
    }

    /// Retrieves a specific trigger.
    pub async fn get_trigger(
        &self,
        repo_path: &str,
        pipeline: &str,
        trigger: &str,
    ) -> Result<ApiResponse<PipelineTrigger>, ApiError> {
        self.client
            .get(
                &["repos", repo_path, "pipelines", pipeline, "triggers", trigger],
                &[],
            )
            .await
    }

    /// Updates a trigger.
    pub async fn update_trigger(
        &self,
        repo_path: &str,
        pipeline: &str,
        trigger: &str,
        options: &UpdateTriggerOptions,
    ) -> Result<ApiResponse<PipelineTrigger>, ApiError> {
        self.client
            .patch(
                &["repos", repo_path, "pipelines", pipeline, "triggers", trigger],
                Some(options),
            )
            .await
    }

    /// Deletes a trigger.
    pub async fn delete_trigger(
        &self,
        repo_path: &str,
        pipeline: &str,
        trigger: &str,
    ) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(
                &["repos", repo_path, "pipelines", pipeline, "triggers", trigger],
                None::<&()>,
            )
            .await
    }

    /// Retrieves the logs of a single step of an execution.
    pub async fn view_execution_logs(
        &self,
        repo_path: &str,
        pipeline: &str,
        execution_number: i64,
        stage_number: i64,
        step_number: i64,
    ) -> Result<ApiResponse<Vec<LogLine>>, ApiError> {
        let execution_number = execution_number.to_string();
        let stage_number = stage_number.to_string();
        let step_number = step_number.to_string();
        self.client
            .get(
                &[
                    "repos",
                    repo_path,
                    "pipelines",
                    pipeline,
                    "executions",
                    &execution_number,
                    "logs",
                    &stage_number,
                    &step_number,
                ],
                &[],
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
    async fn test_create_execution_branch_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/acme%2Fwidgets/pipelines/build/executions")
            .match_query(mockito::Matcher::UrlEncoded("branch".into(), "main".into()))
            .with_body(r#"{"number": 12, "status": "pending"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let execution = client
            .pipelines()
            .create_execution("acme/widgets", "build", Some("main"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(execution.data.number, Some(12));
        assert_eq!(execution.data.status.as_deref(), Some("pending"));
    }

    #[tokio::test]
    async fn test_list_executions_status_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/acme%2Fwidgets/pipelines/build/executions")
            .match_query(mockito::Matcher::UrlEncoded(
                "status".into(),
                "running".into(),
            ))
            .with_body(r#"[{"number": 3, "status": "running"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListExecutionsOptions {
            status: Some("running".to_string()),
            ..Default::default()
        };
        let executions = client
            .pipelines()
            .list_executions("acme/widgets", "build", Some(&options))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(executions.data.len(), 1);
    }

    #[tokio::test]
    async fn test_view_execution_logs_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/v1/repos/acme%2Fwidgets/pipelines/build/executions/4/logs/1/2",
            )
            .with_body(r#"[{"pos": 0, "out": "cloning...", "time": 1}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let logs = client
            .pipelines()
            .view_execution_logs("acme/widgets", "build", 4, 1, 2)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(logs.data[0].out.as_deref(), Some("cloning..."));
    }

    #[test]
    fn test_trigger_action_wire_format() {
        assert_eq!(
            serde_json::to_string(&TriggerAction::PullreqBranchUpdated).unwrap(),
            r#""pullreq_branch_updated""#
        );
        assert_eq!(
            serde_json::to_string(&TriggerEvent::PullRequest).unwrap(),
            r#""pull_request""#
        );
    }
}
