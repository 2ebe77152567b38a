//! Centralized constants for the Jobs SDK workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sallinggroup.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL override.
pub const ENV_BASE_URL: &str = "SALLING_BASE_URL";

/// Email used as the JWT issuer.
pub const ENV_EMAIL: &str = "SALLING_EMAIL";

/// Shared secret used to sign JWTs.
pub const ENV_SECRET: &str = "SALLING_SECRET";

/// Bearer token.
pub const ENV_API_TOKEN: &str = "SALLING_API_TOKEN";

/// Application name folded into the User-Agent.
pub const ENV_APPLICATION_NAME: &str = "SALLING_APPLICATION_NAME";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "SALLING_TIMEOUT";

/// Path to a JSON options file.
pub const ENV_CONFIG_PATH: &str = "SALLING_CONFIG_PATH";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
