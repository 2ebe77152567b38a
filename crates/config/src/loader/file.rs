//! Options file loading for configuration.
//!
//! Responsibilities:
//! - Read a JSON options document (`auth`, `applicationName`, `baseUrl`, `timeoutSeconds`).
//! - Apply its settings to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Every field of the document is optional; absent fields leave the loader untouched.
//! - An `auth` entry replaces all previously set credentials.
//! - Parse errors report position only, never file contents.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::AuthStrategy;

/// Partial options document; all fields optional so env vars can fill gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsFile {
    auth: Option<AuthStrategy>,
    application_name: Option<String>,
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
}

/// Apply the options file named by the loader's config path, if any.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.clone(),
        None => return Ok(()),
    };

    let options = read_options_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded options file");

    match options.auth {
        Some(AuthStrategy::Jwt { email, secret }) => {
            loader.clear_credentials();
            loader.set_email(Some(email));
            loader.set_secret(Some(secret));
        }
        Some(AuthStrategy::Bearer { token }) => {
            loader.clear_credentials();
            loader.set_api_token(Some(token));
        }
        None => {}
    }
    if let Some(name) = options.application_name {
        loader.set_application_name(Some(name));
    }
    if let Some(url) = options.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(secs) = options.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}

fn read_options_file(path: &Path) -> Result<OptionsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
    })
}
