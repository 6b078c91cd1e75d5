//
//  gitness-client
//  api/admin.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Administrative API types and operations.
//!
//! These endpoints require an administrator token. [`AdminService`] manages
//! user accounts across the instance, including LDAP lookups and
//! synchronization; [`AuditService`] exposes the instance audit trail.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use gitness_client::api::admin::ListUsersOptions;
//!
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("admin-token")?;
//!
//! let options = ListUsersOptions {
//!     admin: Some(true),
//!     ..Default::default()
//! };
//! let admins = client.admin().list_users(Some(&options)).await?;
//! println!("{} administrators", admins.data.len());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::{ApiError, ListOptions};

/// A Gitness user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique login identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether the user is an instance administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,

    /// Whether the account is blocked from signing in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A user found in the configured LDAP directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LdapUser {
    /// Login identifier in the directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Request for creating a user account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    /// Login identifier for the new account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Initial password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Whether to grant administrator rights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

/// Request for updating a user account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Request for synchronizing users from LDAP.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncLdapUsersRequest {
    /// UIDs of the directory users to synchronize.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_uids: Vec<String>,
}

/// Result of an LDAP synchronization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncLdapUsersResponse {
    /// Number of accounts synchronized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronized: Option<i32>,

    /// Number of accounts that failed to synchronize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed: Option<i32>,
}

/// Options for listing user accounts.
#[derive(Debug, Clone, Default)]
pub struct ListUsersOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to administrators or non-administrators.
    pub admin: Option<bool>,

    /// Restrict to blocked or unblocked accounts.
    pub blocked: Option<bool>,
}

impl ListUsersOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(admin) = self.admin {
            query.push(("admin", admin.to_string()));
        }
        if let Some(blocked) = self.blocked {
            query.push(("blocked", blocked.to_string()));
        }
        query
    }
}

/// Options for searching the LDAP directory.
#[derive(Debug, Clone, Default)]
pub struct SearchLdapUsersOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Directory search term.
    pub query: Option<String>,
}

impl SearchLdapUsersOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(term) = &self.query {
            query.push(("query", term.clone()));
        }
        query
    }
}

/// Request body for toggling the admin flag.
#[derive(Debug, Clone, Serialize)]
struct SetAdminRequest {
    admin: bool,
}

/// Request body for toggling the blocked flag.
#[derive(Debug, Clone, Serialize)]
struct SetBlockedRequest {
    blocked: bool,
}

/// Handles communication with the administrative user endpoints.
pub struct AdminService<'a> {
    client: &'a GitnessClient,
}

impl<'a> AdminService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists user accounts.
    pub async fn list_users(
        &self,
        options: Option<&ListUsersOptions>,
    ) -> Result<ApiResponse<Vec<User>>, ApiError> {
        let query = options.map(ListUsersOptions::to_query).unwrap_or_default();
        self.client.get(&["admin", "users"], &query).await
    }

    /// Retrieves a user account by UID.
    pub async fn get_user(&self, uid: &str) -> Result<ApiResponse<User>, ApiError> {
        self.client.get(&["admin", "users", uid], &[]).await
    }

    /// Creates a user account.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client.post(&["admin", "users"], Some(request)).await
    }

    /// Updates a user account.
    pub async fn update_user(
        &self,
        uid: &str,
        request: &UpdateUserRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client
            .patch(&["admin", "users", uid], Some(request))
            .await
    }

    /// Deletes a user account.
    pub async fn delete_user(&self, uid: &str) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .delete(&["admin", "users", uid], None::<&()>)
            .await
    }

    /// Grants or revokes administrator rights.
    pub async fn set_admin(
        &self,
        uid: &str,
        admin: bool,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client
            .patch(
                &["admin", "users", uid, "admin"],
                Some(&SetAdminRequest { admin }),
            )
            .await
    }

    /// Blocks or unblocks an account.
    pub async fn set_blocked(
        &self,
        uid: &str,
        blocked: bool,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client
            .patch(
                &["admin", "users", uid, "blocked"],
                Some(&SetBlockedRequest { blocked }),
            )
            .await
    }

    /// Searches the configured LDAP directory.
    pub async fn search_ldap_users(
        &self,
        options: Option<&SearchLdapUsersOptions>,
    ) -> Result<ApiResponse<Vec<LdapUser>>, ApiError> {
        let query = options
            .map(SearchLdapUsersOptions::to_query)
            .unwrap_or_default();
        self.client.get(&["admin", "ldap", "users"], &query).await
    }

    /// Synchronizes the given users from LDAP into local accounts.
    pub async fn sync_ldap_users(
        &self,
        request: &SyncLdapUsersRequest,
    ) -> Result<ApiResponse<SyncLdapUsersResponse>, ApiError> {
        self.client
            .post(&["admin", "ldap", "users", "sync"], Some(request))
            .await
    }
}

/// An entry in the instance audit trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    /// Internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// When the action happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// What happened (for example `created`, `updated`, `deleted`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Type of the affected resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Identifier of the affected resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_identifier: Option<String>,

    /// UID of the acting principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_uid: Option<String>,

    /// Display name of the acting principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_display_name: Option<String>,

    /// Raw change payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Options for listing audit log entries.
#[derive(Debug, Clone, Default)]
pub struct ListAuditLogsOptions {
    /// Common pagination and filtering parameters.
    pub list: ListOptions,

    /// Restrict to actions of this user.
    pub user_uid: Option<String>,

    /// Restrict to this action.
    pub action: Option<String>,

    /// Restrict to this resource type.
    pub resource_type: Option<String>,

    /// Restrict to this resource identifier.
    pub resource_identifier: Option<String>,

    /// Lower bound on the entry time.
    pub from: Option<DateTime<Utc>>,

    /// Upper bound on the entry time.
    pub to: Option<DateTime<Utc>>,
}

impl ListAuditLogsOptions {
    /// Builds the query-parameter pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.list.to_query();
        if let Some(user_uid) = &self.user_uid {
            query.push(("user_uid", user_uid.clone()));
        }
        if let Some(action) = &self.action {
            query.push(("action", action.clone()));
        }
        if let Some(resource_type) = &self.resource_type {
            query.push(("resource_type", resource_type.clone()));
        }
        if let Some(resource_identifier) = &self.resource_identifier {
            query.push(("resource_identifier", resource_identifier.clone()));
        }
        if let Some(from) = &self.from {
            query.push(("from", from.to_rfc3339()));
        }
        if let Some(to) = &self.to {
            query.push(("to", to.to_rfc3339()));
        }
        query
    }
}

/// Handles communication with the audit trail endpoints.
pub struct AuditService<'a> {
    client: &'a GitnessClient,
}

impl<'a> AuditService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Lists audit log entries.
    pub async fn list_logs(
        &self,
        options: Option<&ListAuditLogsOptions>,
    ) -> Result<ApiResponse<Vec<AuditLog>>, ApiError> {
        let query = options
            .map(ListAuditLogsOptions::to_query)
            .unwrap_or_default();
        self.client.get(&["admin", "audit"], &query).await
    }

    /// Retrieves a specific audit log entry.
    pub async fn get_log(&self, id: i64) -> Result<ApiResponse<AuditLog>, ApiError> {
        let id = id.to_string();
        self.client.get(&["admin", "audit", &id], &[]).await
    }

    /// Starts a cleanup of expired audit log entries.
    pub async fn cleanup_logs(&self) -> Result<ApiResponse<()>, ApiError> {
        self.client
            .post_no_content(&["admin", "audit", "cleanup"], None::<&()>)
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
    async fn test_list_users_with_pagination_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/admin/users")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "1".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .with_header("x-page", "1")
            .with_header("x-per-page", "2")
            .with_header("x-next-page", "2")
            .with_header("x-total", "6")
            .with_header("x-total-pages", "3")
            .with_body(
                r#"[{"uid": "user1", "display_name": "User One"},
                    {"uid": "user2", "display_name": "User Two"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListUsersOptions {
            list: ListOptions {
                page: Some(1),
                limit: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };
        let users = client.admin().list_users(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.data.len(), 2);
        assert_eq!(users.data[0].uid.as_deref(), Some("user1"));
        assert_eq!(users.pagination.page, Some(1));
        assert_eq!(users.pagination.per_page, Some(2));
        assert_eq!(users.pagination.next_page, Some(2));
        assert_eq!(users.pagination.total, Some(6));
        assert_eq!(users.pagination.total_pages, Some(3));
    }

    #[tokio::test]
    async fn test_set_admin_patches_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v1/admin/users/jdoe/admin")
            .match_body(mockito::Matcher::JsonString(r#"{"admin": true}"#.to_string()))
            .with_body(r#"{"uid": "jdoe", "admin": true}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let user = client.admin().set_admin("jdoe", true).await.unwrap();

        mock.assert_async().await;
        assert_eq!(user.data.admin, Some(true));
    }

    #[tokio::test]
    async fn test_audit_log_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/admin/audit")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("user_uid".into(), "jdoe".into()),
                mockito::Matcher::UrlEncoded("action".into(), "created".into()),
            ]))
            .with_body(r#"[{"id": 1, "action": "created", "resource_type": "repository"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let options = ListAuditLogsOptions {
            user_uid: Some("jdoe".to_string()),
            action: Some("created".to_string()),
            ..Default::default()
        };
        let logs = client.audit().list_logs(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(logs.data[0].action.as_deref(), Some("created"));
    }
}
