//! REST client for the portal backend.
//!
//! [`StudentApi`] is the async interface the flow functions are written
//! against; [`HttpApi`] is the real implementation. Every authenticated call
//! sends the session token as an `Authorization: Bearer` header.

use std::future::Future;

use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{sanitize_body, ApiError};
use crate::models::{Profile, ProfileDraft, RegisterRequest, TokenResponse};

/// Async interface to the portal backend, implemented by [`HttpApi`] and by
/// test doubles.
pub trait StudentApi {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<Profile, ApiError>>;

    fn update_profile(
        &self,
        token: &str,
        draft: &ProfileDraft,
    ) -> impl Future<Output = Result<Profile, ApiError>>;

    fn delete_account(&self, token: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed [`StudentApi`] implementation.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl StudentApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.config.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(network_error)?;

        Self::read_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.config.url("/auth/register"))
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        Self::read_json(response).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        let response = self
            .client
            .get(self.config.url("/profile"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network_error)?;

        Self::read_json(response).await
    }

    async fn update_profile(
        &self,
        token: &str,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError> {
        let response = self
            .client
            .put(self.config.url("/profile"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;

        Self::read_json(response).await
    }

    async fn delete_account(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.config.url("/profile"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network_error)?;

        // Success bodies are an ack at best; nothing to decode.
        check_status(response).await?;
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Maps a non-success status onto the error taxonomy. 401 and 403 are
/// treated uniformly as session failures on every path.
fn error_for_status(status: u16, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        status => ApiError::Http {
            status,
            message: sanitize_body(body),
        },
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(error_for_status(status.as_u16(), &body))
}
