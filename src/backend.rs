use actix_http::StatusCode;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wire_shared::{
    error_chain_fmt,
    follows::{FollowListing, FollowerEdge, FollowingEdge},
    messages::MessageResponse,
    settings::BackendSettings,
    users::UserReference,
    UserId,
};

use crate::domain::users::ProfileUsername;

/// Upper bound for a single backend response body.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

#[derive(thiserror::Error)]
pub enum BackendError {
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },
    #[error("Backend answered {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error("Failed to read response body from {url}: {reason}")]
    UnreadablePayload { url: String, reason: String },
    #[error("Failed to decode response body from {url}")]
    InvalidBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl std::fmt::Debug for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

///
/// Read side of the wire backend's REST API as consumed by the profile page.
///
#[async_trait(?Send)]
pub trait WireApi {
    /// `GET /message/{username}`
    async fn messages(
        &self,
        username: &ProfileUsername,
    ) -> Result<Vec<MessageResponse>, BackendError>;

    /// `GET /get-recommended-users/{username}`
    async fn recommended_users(
        &self,
        username: &ProfileUsername,
    ) -> Result<Vec<UserReference>, BackendError>;

    /// `GET /following/{username}`
    async fn following(
        &self,
        username: &ProfileUsername,
    ) -> Result<FollowListing<FollowingEdge>, BackendError>;

    /// `GET /followers/{username}`
    async fn followers(
        &self,
        username: &ProfileUsername,
    ) -> Result<FollowListing<FollowerEdge>, BackendError>;

    /// `GET /users/{id}/{id}/.../`
    async fn users(&self, ids: &[UserId]) -> Result<Vec<UserReference>, BackendError>;
}

///
/// [`WireApi`] over HTTP.
///
/// Holds an [`awc::Client`], so one instance is built per actix worker.
///
pub struct WireBackend {
    http_client: awc::Client,
    base_url: String,
}

impl WireBackend {
    pub fn new(settings: &BackendSettings) -> Self {
        let http_client = awc::Client::builder()
            .timeout(settings.timeout())
            .finish();

        Self {
            http_client,
            base_url: settings.base_url().to_owned(),
        }
    }

    #[tracing::instrument(name = "Query wire backend", skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        let mut response = self
            .http_client
            .get(&url)
            .insert_header(("Accept", "application/json"))
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::UnexpectedStatus { url, status });
        }

        let body = response
            .body()
            .limit(MAX_BODY_SIZE)
            .await
            .map_err(|e| BackendError::UnreadablePayload {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|source| BackendError::InvalidBody { url, source })
    }
}

///
/// Build `/{endpoint}/{username}` with the username percent-encoded as a path segment.
///
fn user_path(endpoint: &str, username: &ProfileUsername) -> String {
    format!("/{}/{}", endpoint, urlencoding::encode(username.as_ref()))
}

///
/// Build the `/users/{id}/{id}/.../` path for a batch of ids.
///
fn users_path(ids: &[UserId]) -> String {
    let joined = ids
        .iter()
        .map(UserId::to_string)
        .collect::<Vec<_>>()
        .join("/");

    format!("/users/{}/", joined)
}

#[async_trait(?Send)]
impl WireApi for WireBackend {
    async fn messages(
        &self,
        username: &ProfileUsername,
    ) -> Result<Vec<MessageResponse>, BackendError> {
        self.get_json(&user_path("message", username)).await
    }

    async fn recommended_users(
        &self,
        username: &ProfileUsername,
    ) -> Result<Vec<UserReference>, BackendError> {
        self.get_json(&user_path("get-recommended-users", username))
            .await
    }

    async fn following(
        &self,
        username: &ProfileUsername,
    ) -> Result<FollowListing<FollowingEdge>, BackendError> {
        self.get_json(&user_path("following", username)).await
    }

    async fn followers(
        &self,
        username: &ProfileUsername,
    ) -> Result<FollowListing<FollowerEdge>, BackendError> {
        self.get_json(&user_path("followers", username)).await
    }

    async fn users(&self, ids: &[UserId]) -> Result<Vec<UserReference>, BackendError> {
        self.get_json(&users_path(ids)).await
    }
}
