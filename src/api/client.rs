//
//  gitness-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Gitness API
//!
//! This module provides the core HTTP client for interacting with a Gitness
//! instance. It handles endpoint construction, authentication, request and
//! response serialization, pagination-header parsing, and error mapping.
//!
//! ## Features
//!
//! - Bearer-token authentication on every request
//! - Percent-encoded path segments (a `/` inside an identifier becomes `%2F`)
//! - JSON serialization/deserialization via `serde`
//! - Pagination metadata parsed from `x-*` response headers
//! - Structured errors decoded from the `{message, details}` error body
//!
//! ## Creating a Client
//!
//! ```rust,no_run
//! use gitness_client::api::GitnessClient;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), gitness_client::api::ApiError> {
//! // Against the default instance
//! let client = GitnessClient::new("your-token")?;
//!
//! // Against a self-hosted instance, with a custom timeout
//! let client = GitnessClient::new("your-token")?
//!     .with_base_url("https://code.example.com/")?
//!     .with_timeout(Duration::from_secs(30));
//! # Ok(())
//! # }
//! ```
//!
//! ## Services
//!
//! All API operations are reached through per-resource service handles that
//! borrow the client:
//!
//! ```rust,no_run
//! # use gitness_client::api::GitnessClient;
//! # async fn example() -> Result<(), gitness_client::api::ApiError> {
//! let client = GitnessClient::new("your-token")?;
//! let repo = client.repositories().get_repository("acme/widgets").await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::admin::{AdminService, AuditService};
use super::auth::AuthService;
use super::checks::ChecksService;
use super::cicache::CiCacheService;
use super::common::{ApiError, ErrorBody, Pagination};
use super::connectors::ConnectorsService;
use super::pipelines::PipelinesService;
use super::plugins::PluginsService;
use super::principals::PrincipalsService;
use super::pullrequests::PullRequestsService;
use super::repositories::RepositoriesService;
use super::resources::ResourcesService;
use super::secrets::SecretsService;
use super::spaces::SpacesService;
use super::system::SystemService;
use super::templates::TemplatesService;
use super::uploads::UploadsService;
use super::users::UsersService;
use super::webhooks::WebhooksService;

/// Base URL used when none is configured explicitly.
pub const DEFAULT_BASE_URL: &str = "https://gitness.com/";

/// Path prefix of the versioned REST API, appended to the base URL.
const API_VERSION_SEGMENTS: [&str; 2] = ["api", "v1"];

/// Request timeout applied when none is configured explicitly.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A typed API response together with its transport metadata.
///
/// Every client operation resolves to an `ApiResponse` wrapping the
/// deserialized body, the HTTP status, and the pagination state parsed from
/// the response headers. Operations without a response body use `T = ()`.
///
/// # Example
///
/// ```rust,no_run
/// # use gitness_client::api::GitnessClient;
/// # async fn example() -> Result<(), gitness_client::api::ApiError> {
/// let client = GitnessClient::new("your-token")?;
/// let response = client.spaces().list_spaces(None).await?;
///
/// println!("fetched {} spaces", response.data.len());
/// if let Some(total) = response.pagination.total {
///     println!("{} spaces in total", total);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The deserialized response body.
    pub data: T,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// Pagination metadata parsed from the `x-*` response headers.
    ///
    /// All fields are `None` for endpoints that do not paginate.
    pub pagination: Pagination,
}

/// The main HTTP client for interacting with the Gitness API.
///
/// The client owns the underlying HTTP connection pool, the bearer token,
/// and the configured base URL. It is cheap to share by reference; all
/// service handles borrow it.
///
/// # Configuration
///
/// Construction follows the builder pattern:
///
/// ```rust,no_run
/// use gitness_client::api::GitnessClient;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), gitness_client::api::ApiError> {
/// let client = GitnessClient::new("your-token")?
///     .with_base_url("https://code.example.com/")?
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-tool/1.0")?;
/// # Ok(())
/// # }
/// ```
pub struct GitnessClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// Base URL of the Gitness instance, without the API version path.
    base_url: Url,
    /// Bearer token sent with every request.
    token: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl GitnessClient {
    /// Creates a new client for the default Gitness instance.
    ///
    /// The client starts out targeting [`DEFAULT_BASE_URL`] with a 10 second
    /// request timeout and a `gitness-rs/<version>` user agent. Use the
    /// `with_*` methods to adjust any of these.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(format!("gitness-rs/{}", crate::VERSION))
                .build()?,
            base_url,
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Points the client at a different Gitness instance.
    ///
    /// The URL must be absolute and able to carry path segments. A trailing
    /// slash is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when the URL does not parse or
    /// cannot serve as a base.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiError> {
        let url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        self.base_url = url;
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the default user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be rebuilt.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ApiError> {
        self.http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(self)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a handle to the space operations.
    pub fn spaces(&self) -> SpacesService<'_> {
        SpacesService::new(self)
    }

    /// Returns a handle to the repository operations.
    pub fn repositories(&self) -> RepositoriesService<'_> {
        RepositoriesService::new(self)
    }

    /// Returns a handle to the pull request operations.
    pub fn pull_requests(&self) -> PullRequestsService<'_> {
        PullRequestsService::new(self)
    }

    /// Returns a handle to the pipeline operations.
    pub fn pipelines(&self) -> PipelinesService<'_> {
        PipelinesService::new(self)
    }

    /// Returns a handle to the current-user operations.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Returns a handle to the administrative user operations.
    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(self)
    }

    /// Returns a handle to the audit log operations.
    pub fn audit(&self) -> AuditService<'_> {
        AuditService::new(self)
    }

    /// Returns a handle to the authentication operations.
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// Returns a handle to the principal lookup operations.
    pub fn principals(&self) -> PrincipalsService<'_> {
        PrincipalsService::new(self)
    }

    /// Returns a handle to the commit status check operations.
    pub fn checks(&self) -> ChecksService<'_> {
        ChecksService::new(self)
    }

    /// Returns a handle to the template operations.
    pub fn templates(&self) -> TemplatesService<'_> {
        TemplatesService::new(self)
    }

    /// Returns a handle to the connector operations.
    pub fn connectors(&self) -> ConnectorsService<'_> {
        ConnectorsService::new(self)
    }

    /// Returns a handle to the secret operations.
    pub fn secrets(&self) -> SecretsService<'_> {
        SecretsService::new(self)
    }

    /// Returns a handle to the webhook operations.
    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }

    /// Returns a handle to the plugin catalog operations.
    pub fn plugins(&self) -> PluginsService<'_> {
        PluginsService::new(self)
    }

    /// Returns a handle to the static resource operations.
    pub fn resources(&self) -> ResourcesService<'_> {
        ResourcesService::new(self)
    }

    /// Returns a handle to the system configuration operations.
    pub fn system(&self) -> SystemService<'_> {
        SystemService::new(self)
    }

    /// Returns a handle to the file upload operations.
    pub fn uploads(&self) -> UploadsService<'_> {
        UploadsService::new(self)
    }

    /// Returns a handle to the CI cache operations.
    pub fn ci_cache(&self) -> CiCacheService<'_> {
        CiCacheService::new(self)
    }

    /// Builds a full endpoint URL from the base URL and path segments.
    ///
    /// Each segment is pushed individually, so reserved characters inside a
    /// segment are percent-encoded. A repository path like `ci/demo` turns
    /// into the single segment `ci%2Fdemo` rather than two path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            for segment in API_VERSION_SEGMENTS {
                path.push(segment);
            }
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Dispatches a request and maps non-success statuses to [`ApiError`].
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(segments)?;

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .timeout(self.timeout)
            .bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            "gitness api request"
        );

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Wraps a successful response, deserializing the JSON body.
    async fn into_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        let pagination = Pagination::from_headers(response.headers());
        let data = response.json().await?;
        Ok(ApiResponse {
            data,
            status,
            pagination,
        })
    }

    /// Wraps a successful response whose body is not consumed.
    fn into_empty(response: &reqwest::Response) -> ApiResponse<()> {
        ApiResponse {
            data: (),
            status: response.status(),
            pagination: Pagination::from_headers(response.headers()),
        }
    }

    /// Performs a GET request and deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self
            .send(Method::GET, segments, query, None::<&()>)
            .await?;
        Self::into_json(response).await
    }

    /// Performs a POST request with an optional JSON body and deserializes
    /// the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.post_with_query(segments, &[], body).await
    }

    /// Performs a POST request carrying query parameters in addition to an
    /// optional JSON body.
    pub async fn post_with_query<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(Method::POST, segments, query, body).await?;
        Self::into_json(response).await
    }

    /// Performs a POST request whose response body is ignored.
    pub async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self.send(Method::POST, segments, &[], body).await?;
        Ok(Self::into_empty(&response))
    }

    /// Performs a PUT request with an optional JSON body and deserializes
    /// the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(Method::PUT, segments, &[], body).await?;
        Self::into_json(response).await
    }

    /// Performs a PUT request whose response body is ignored.
    pub async fn put_no_content<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self.send(Method::PUT, segments, &[], body).await?;
        Ok(Self::into_empty(&response))
    }

    /// Performs a PATCH request with an optional JSON body and deserializes
    /// the JSON response.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(Method::PATCH, segments, &[], body).await?;
        Self::into_json(response).await
    }

    /// Performs a DELETE request with an optional JSON body.
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self.send(Method::DELETE, segments, &[], body).await?;
        Ok(Self::into_empty(&response))
    }

    /// Performs a GET request and returns the raw response bytes.
    ///
    /// Used for endpoints serving binary content, such as CI cache blobs.
    pub async fn get_bytes(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<ApiResponse<Vec<u8>>, ApiError> {
        let response = self
            .send(Method::GET, segments, query, None::<&()>)
            .await?;
        let status = response.status();
        let pagination = Pagination::from_headers(response.headers());
        let data = response.bytes().await?.to_vec();
        Ok(ApiResponse {
            data,
            status,
            pagination,
        })
    }

    /// Performs a PUT request with a raw `application/octet-stream` body and
    /// deserializes the JSON response.
    pub async fn put_bytes<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        data: Vec<u8>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint(segments)?;

        let mut request = self
            .http
            .put(url.clone())
            .timeout(self.timeout)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        debug!(method = "PUT", url = %url, status = %response.status(), "gitness api request");

        if response.status().is_success() {
            Self::into_json(response).await
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Builds an [`ApiError`] from a non-success response.
///
/// The `{message, details}` error body is decoded on a best-effort basis;
/// when it is missing or malformed the canonical status reason is used as
/// the message instead.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body: ErrorBody = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
        Err(_) => ErrorBody::default(),
    };

    let message = body.message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });
    let detailed = match &body.details {
        Some(details) => format!("{} ({})", message, details),
        None => message.clone(),
    };

    match status.as_u16() {
        401 => ApiError::AuthRequired,
        403 => ApiError::Forbidden(detailed),
        404 => ApiError::NotFound(detailed),
        429 => ApiError::RateLimited,
        400 => ApiError::BadRequest(detailed),
        500..=599 => ApiError::ServerError(detailed),
        status => ApiError::Api {
            status,
            message,
            details: body.details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> GitnessClient {
        GitnessClient::new("test-token")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let client = GitnessClient::new("test-token").unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.token, "test-token");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_base_url_rejects_invalid() {
        let result = GitnessClient::new("t").unwrap().with_base_url("not a url");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));

        let result = GitnessClient::new("t").unwrap().with_base_url("data:text/plain,x");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let client = GitnessClient::new("t")
            .unwrap()
            .with_base_url("https://code.example.com/")
            .unwrap();

        let url = client
            .endpoint(&["repos", "ci/demo", "branches", "feature/test-branch"])
            .unwrap();
        assert_eq!(
            url.path(),
            "/api/v1/repos/ci%2Fdemo/branches/feature%2Ftest-branch"
        );

        let url = client.endpoint(&["spaces"]).unwrap();
        assert_eq!(url.path(), "/api/v1/spaces");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = GitnessClient::new("t")
            .unwrap()
            .with_base_url("https://example.com/gitness/")
            .unwrap();

        let url = client.endpoint(&["user"]).unwrap();
        assert_eq!(url.path(), "/gitness/api/v1/user");
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/user")
            .match_header("authorization", "Bearer test-token")
            .with_header("content-type", "application/json")
            .with_body(r#"{"uid": "admin"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<serde_json::Value> =
            client.get(&["user"], &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.data["uid"], "admin");
        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_all_verbs_hit_expected_paths() {
        let mut server = mockito::Server::new_async().await;
        let get = server
            .mock("GET", "/api/v1/test")
            .with_body(r#"{"method": "GET"}"#)
            .create_async()
            .await;
        let post = server
            .mock("POST", "/api/v1/test")
            .with_status(201)
            .with_body(r#"{"method": "POST"}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/api/v1/test")
            .with_body(r#"{"method": "PUT"}"#)
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/api/v1/test")
            .with_body(r#"{"method": "PATCH"}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/v1/test")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = json!({"data": "test"});

        let r: ApiResponse<serde_json::Value> = client.get(&["test"], &[]).await.unwrap();
        assert_eq!(r.data["method"], "GET");

        let r: ApiResponse<serde_json::Value> =
            client.post(&["test"], Some(&body)).await.unwrap();
        assert_eq!(r.data["method"], "POST");
        assert_eq!(r.status, StatusCode::CREATED);

        let r: ApiResponse<serde_json::Value> =
            client.put(&["test"], Some(&body)).await.unwrap();
        assert_eq!(r.data["method"], "PUT");

        let r: ApiResponse<serde_json::Value> =
            client.patch(&["test"], Some(&body)).await.unwrap();
        assert_eq!(r.data["method"], "PATCH");

        let r = client.delete(&["test"], None::<&()>).await.unwrap();
        assert_eq!(r.status, StatusCode::NO_CONTENT);

        get.assert_async().await;
        post.assert_async().await;
        put.assert_async().await;
        patch.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/spaces")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "2".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let _: ApiResponse<Vec<serde_json::Value>> = client
            .get(
                &["spaces"],
                &[("page", "2".to_string()), ("limit", "10".to_string())],
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_body_is_decoded() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/test")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Bad Request", "details": "Invalid input provided"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get::<serde_json::Value>(&["test"], &[])
            .await
            .unwrap_err();

        match err {
            ApiError::BadRequest(message) => {
                assert_eq!(message, "Bad Request (Invalid input provided)");
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        for (status, body) in [
            (401, "{}"),
            (403, r#"{"message": "no access"}"#),
            (404, r#"{"message": "not found"}"#),
            (429, "{}"),
            (500, "broken"),
            (409, r#"{"message": "conflict"}"#),
        ] {
            server
                .mock("GET", format!("/api/v1/status/{}", status).as_str())
                .with_status(status)
                .with_body(body)
                .create_async()
                .await;
        }

        async fn get_err(client: &GitnessClient, status: &str) -> ApiError {
            client
                .get::<serde_json::Value>(&["status", status], &[])
                .await
                .unwrap_err()
        }

        let client = client_for(&server);

        assert!(matches!(
            get_err(&client, "401").await,
            ApiError::AuthRequired
        ));
        assert!(matches!(
            get_err(&client, "403").await,
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            get_err(&client, "404").await,
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            get_err(&client, "429").await,
            ApiError::RateLimited
        ));

        match get_err(&client, "500").await {
            ApiError::ServerError(message) => {
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected ServerError, got {:?}", other),
        }

        match get_err(&client, "409").await {
            ApiError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 409);
                assert_eq!(message, "conflict");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pagination_headers_are_parsed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/spaces")
            .with_header("x-page", "1")
            .with_header("x-per-page", "2")
            .with_header("x-next-page", "2")
            .with_header("x-total", "6")
            .with_header("x-total-pages", "3")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<Vec<serde_json::Value>> =
            client.get(&["spaces"], &[]).await.unwrap();

        assert_eq!(response.pagination.page, Some(1));
        assert_eq!(response.pagination.per_page, Some(2));
        assert_eq!(response.pagination.next_page, Some(2));
        assert_eq!(response.pagination.total, Some(6));
        assert_eq!(response.pagination.total_pages, Some(3));
        assert!(response.pagination.has_next_page());
    }

    #[tokio::test]
    async fn test_put_bytes_sets_octet_stream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/ci/cache/build-cache")
            .match_header("content-type", "application/octet-stream")
            .match_body("blob")
            .with_body(r#"{"key": "build-cache"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response: ApiResponse<serde_json::Value> = client
            .put_bytes(&["ci", "cache", "build-cache"], &[], b"blob".to_vec())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.data["key"], "build-cache");
    }
}
