//! Client builder for constructing [`JobsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating credentials and the base URL
//! - Building the identity string sent as `User-Agent`
//! - Configuring the underlying HTTP client (timeout, identity)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`JobsClient`] methods)
//! - Loading configuration from files or the environment (see `jobs_config`)
//!
//! # Invariants
//! - `auth_strategy` is required; every other setting has a default
//! - The base URL must be an absolute http(s) URL with a host

use std::time::Duration;

use jobs_config::Config;
use jobs_config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use reqwest::header::HeaderValue;
use url::Url;

use crate::auth::AuthStrategy;
use crate::client::JobsClient;
use crate::error::{ClientError, Result};
use crate::instance::ApiInstance;

/// Product name used in the identity string.
pub const SDK_NAME: &str = "Jobs SDK";

/// Builder for creating a new [`JobsClient`].
///
/// # Example
///
/// ```rust,ignore
/// use jobs_client::{AuthStrategy, JobsClient};
/// use secrecy::SecretString;
///
/// let client = JobsClient::builder()
///     .auth_strategy(AuthStrategy::Bearer {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .application_name("Store Finder".to_string())
///     .build()?;
/// ```
pub struct JobsClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    application_name: Option<String>,
    timeout: Duration,
}

impl Default for JobsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            application_name: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl JobsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the API.
    ///
    /// Defaults to `https://api.sallinggroup.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the application name shown in the `User-Agent`.
    pub fn application_name(mut self, name: String) -> Self {
        self.application_name = Some(name);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(config.auth.strategy.clone().into());
        self.application_name = config.application_name.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`JobsClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if no usable credentials were
    /// provided or the application name cannot be sent as a header.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is unusable.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<JobsClient> {
        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::Configuration("auth_strategy is required".to_string()))?;
        auth.validate()?;

        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let user_agent = identity_string(self.application_name.as_deref());
        let header = HeaderValue::from_str(&user_agent).map_err(|_| {
            ClientError::Configuration(
                "application name contains characters not allowed in a header".to_string(),
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(header)
            .build()?;

        tracing::debug!(base_url = %base_url, auth = auth.kind(), "Built jobs client");

        Ok(JobsClient::from_instance(ApiInstance::new(
            http, base_url, auth, user_agent,
        )))
    }
}

/// Identity string: `Jobs SDK v<version>`, or `<app> (Jobs SDK v<version>)`.
pub fn identity_string(application_name: Option<&str>) -> String {
    let base = format!("{} v{}", SDK_NAME, env!("CARGO_PKG_VERSION"));
    match application_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{} ({})", name, base),
        None => base,
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "scheme must be http or https, got: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ClientError::InvalidUrl(format!("{}: host is required", raw)));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn token() -> SecretString {
        SecretString::new("test-token".to_string().into())
    }

    #[test]
    fn test_from_config_with_bearer_token() {
        let mut config = Config::with_bearer_token(token());
        config.connection.base_url = "https://jobs.example.com".to_string();

        let client = JobsClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url().as_str(), "https://jobs.example.com/");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config =
            Config::with_jwt("dev@example.com".to_string(), SecretString::new("s".to_string().into()));
        config.application_name = Some("Careers Page".to_string());
        config.connection.timeout = Duration::from_secs(120);

        let builder = JobsClient::builder().from_config(&config);

        assert_eq!(builder.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(builder.application_name.as_deref(), Some("Careers Page"));
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert!(matches!(builder.auth_strategy, Some(AuthStrategy::Jwt { .. })));
    }

    #[test]
    fn test_build_requires_auth() {
        let err = JobsClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_build_rejects_bad_base_url() {
        for url in ["not a url", "ftp://jobs.example.com"] {
            let err = JobsClient::builder()
                .auth_strategy(AuthStrategy::Bearer { token: token() })
                .base_url(url.to_string())
                .build()
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidUrl(_)), "{url}");
        }
    }

    #[test]
    fn test_build_rejects_header_unsafe_application_name() {
        let err = JobsClient::builder()
            .auth_strategy(AuthStrategy::Bearer { token: token() })
            .application_name("bad\nname".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_identity_string_without_application() {
        assert_eq!(
            identity_string(None),
            format!("Jobs SDK v{}", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(identity_string(Some("  ")), identity_string(None));
    }

    #[test]
    fn test_identity_string_with_application() {
        assert_eq!(
            identity_string(Some("Store Finder")),
            format!("Store Finder (Jobs SDK v{})", env!("CARGO_PKG_VERSION"))
        );
    }
}
