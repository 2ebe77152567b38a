//! Connection and top-level configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, timeout).
//! - Define the main `Config` structure combining auth, application name and connection.
//! - Provide convenience constructors for the two credential kinds.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - Missing connection settings fall back to the constants in `crate::constants`.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the API host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.sallinggroup.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(
        default = "default_timeout",
        rename = "timeoutSeconds",
        with = "duration_seconds"
    )]
    pub timeout: Duration,
}

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Main configuration structure.
///
/// Serialized form mirrors the client options document:
///
/// ```json
/// {
///   "auth": { "type": "jwt", "email": "dev@example.com", "secret": "..." },
///   "applicationName": "my-app",
///   "baseUrl": "https://api.sallinggroup.com",
///   "timeoutSeconds": 30
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Authentication settings
    pub auth: AuthConfig,
    /// Name of the calling application, sent in the User-Agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Connection settings
    #[serde(flatten)]
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config authenticating with a bearer token.
    pub fn with_bearer_token(token: SecretString) -> Self {
        Self {
            auth: AuthConfig {
                strategy: AuthStrategy::Bearer { token },
            },
            application_name: None,
            connection: ConnectionConfig::default(),
        }
    }

    /// Create a config authenticating with per-request JWTs.
    pub fn with_jwt(email: String, secret: SecretString) -> Self {
        Self {
            auth: AuthConfig {
                strategy: AuthStrategy::Jwt { email, secret },
            },
            application_name: None,
            connection: ConnectionConfig::default(),
        }
    }
}
