//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SALLING_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Parsing options files (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over options file values.
//! - A complete credential set in the environment (a token, or an email and
//!   secret pair) replaces whatever credentials the options file supplied.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    ENV_API_TOKEN, ENV_APPLICATION_NAME, ENV_BASE_URL, ENV_CONFIG_PATH, ENV_EMAIL, ENV_SECRET,
    ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// The options file (from the loader or `SALLING_CONFIG_PATH`) is applied
/// first so that environment variables take precedence over it.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
        && loader.config_path().is_none()
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    apply_file(loader)?;

    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    let email = env_var_or_none(ENV_EMAIL);
    let secret = env_var_or_none(ENV_SECRET);
    let token = env_var_or_none(ENV_API_TOKEN);
    if token.is_some() || (email.is_some() && secret.is_some()) {
        loader.clear_credentials();
    }
    if let Some(email) = email {
        loader.set_email(Some(email));
    }
    if let Some(secret) = secret {
        loader.set_secret(Some(SecretString::new(secret.into())));
    }
    if let Some(token) = token {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(name) = env_var_or_none(ENV_APPLICATION_NAME) {
        loader.set_application_name(Some(name));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
