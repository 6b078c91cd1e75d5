//
//  gitness-client
//  api/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Authentication API types and operations.
//!
//! Session login, logout, and account self-registration. Note that the
//! client itself authenticates with a bearer token; these endpoints exist to
//! obtain such a token from credentials or to create an account where the
//! instance allows sign-up.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, GitnessClient};
use super::common::ApiError;
use super::principals::Principal;

/// Credentials for a login request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    /// UID or email of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_identifier: Option<String>,

    /// Account password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Result of a successful login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// The authenticated principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
}

/// Details for a self-registration request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    /// Login identifier for the new account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Password for the new account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Handles communication with the authentication endpoints.
pub struct AuthService<'a> {
    client: &'a GitnessClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a GitnessClient) -> Self {
        Self { client }
    }

    /// Authenticates with credentials and returns an access token.
    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.client.post(&["login"], Some(request)).await
    }

    /// Invalidates the current session.
    pub async fn logout(&self) -> Result<ApiResponse<()>, ApiError> {
        self.client.post_no_content(&["logout"], None::<&()>).await
    }

    /// Registers a new account, where the instance allows sign-up.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<Principal>, ApiError> {
        self.client.post(&["register"], Some(request)).await
    }
}
