//! Authenticated HTTP handle shared by the client and its traversers.
//!
//! # What this module handles:
//! - Resolving API paths and query parameters against the base URL
//! - Attaching the `Authorization` header to each request
//! - Turning non-success responses into [`ClientError::ApiError`]
//!
//! # What this module does NOT handle:
//! - Retries, backoff or rate limiting: one call is one HTTP request
//! - Interpreting response bodies (see [`crate::endpoints`] and [`crate::pagination`])
//!
//! # Invariants
//! - The identity string is installed as the `User-Agent` of every request
//! - Clones share one connection pool

use reqwest::Response;
use reqwest::header::AUTHORIZATION;
use tracing::debug;
use url::Url;

use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result};
use crate::models::{ApiErrorBody, QueryParams};

/// Request-capable handle with credentials and identity attached.
#[derive(Debug, Clone)]
pub struct ApiInstance {
    http: reqwest::Client,
    base_url: Url,
    auth: AuthStrategy,
    user_agent: String,
}

impl ApiInstance {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: Url,
        auth: AuthStrategy,
        user_agent: String,
    ) -> Self {
        Self {
            http,
            base_url,
            auth,
            user_agent,
        }
    }

    /// Base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Identity string sent as `User-Agent`.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolve an API path plus query parameters into an absolute URL.
    ///
    /// Any path prefix on the base URL is kept, so a base of
    /// `https://proxy.example.com/salling` maps `/v1/jobs/` to
    /// `https://proxy.example.com/salling/v1/jobs/`.
    pub fn url_for(&self, path: &str, params: &QueryParams) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        url
    }

    /// Send an authenticated `GET` for an API path.
    pub async fn get(&self, path: &str, params: &QueryParams) -> Result<Response> {
        self.get_url(self.url_for(path, params)).await
    }

    /// Send an authenticated `GET` for an absolute URL (e.g. a next-page link).
    ///
    /// # Errors
    ///
    /// - [`ClientError::HttpError`] when the request cannot be sent
    /// - [`ClientError::ApiError`] for any non-2xx status
    pub async fn get_url(&self, url: Url) -> Result<Response> {
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let authorization = self.auth.authorization_header("GET", &path_and_query)?;

        debug!(url = %url, auth = self.auth.kind(), "Sending request");
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or(body);

        Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        })
    }
}
