//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from options files, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Options file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over options file values.
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - Credentials are chosen per layer: a token or a complete JWT pair from a
//!   higher layer replaces the credentials of lower layers, so a file token
//!   cannot shadow a JWT pair from the environment.
//! - Within a single layer a bearer token takes precedence over a JWT pair.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds config from files, environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    email: Option<String>,
    secret: Option<SecretString>,
    api_token: Option<SecretString>,
    application_name: Option<String>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON options file to read.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the options file set via `with_config_path`.
    ///
    /// Does nothing when no path has been set.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// The options file (if any) is read first, so environment variables win.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the email used as JWT issuer.
    ///
    /// Drops any bearer token from earlier sources.
    pub fn with_email(mut self, email: String) -> Self {
        self.api_token = None;
        self.email = Some(email);
        self
    }

    /// Set the JWT signing secret.
    ///
    /// Drops any bearer token from earlier sources.
    pub fn with_secret(mut self, secret: String) -> Self {
        self.api_token = None;
        self.secret = Some(SecretString::new(secret.into()));
        self
    }

    /// Set the bearer token.
    ///
    /// Drops any JWT email and secret from earlier sources.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.email = None;
        self.secret = None;
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the application name sent in the User-Agent.
    pub fn with_application_name(mut self, name: String) -> Self {
        self.application_name = Some(name);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let strategy = match (self.api_token, self.email, self.secret) {
            (Some(token), email, secret) => {
                if email.is_some() || secret.is_some() {
                    tracing::warn!("Both bearer token and JWT credentials set; using bearer token");
                }
                AuthStrategy::Bearer { token }
            }
            (None, Some(email), Some(secret)) => AuthStrategy::Jwt { email, secret },
            (None, Some(_), None) => return Err(ConfigError::IncompleteJwt { missing: "secret" }),
            (None, None, Some(_)) => return Err(ConfigError::IncompleteJwt { missing: "email" }),
            (None, None, None) => return Err(ConfigError::MissingAuth),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let application_name = self
            .application_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Config {
            auth: AuthConfig { strategy },
            application_name,
            connection: ConnectionConfig { base_url, timeout },
        })
    }

    /// Checks that the timeout is greater than 0 and not above MAX_TIMEOUT_SECS.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let timeout_secs = timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub(crate) fn set_secret(&mut self, secret: Option<SecretString>) {
        self.secret = secret;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn clear_credentials(&mut self) {
        self.email = None;
        self.secret = None;
        self.api_token = None;
    }

    pub(crate) fn set_application_name(&mut self, name: Option<String>) {
        self.application_name = name;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.sallinggroup.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.sallinggroup.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
