//! Configuration management for the Jobs SDK.
//!
//! This crate provides types and loaders for the construction-time options of
//! a jobs client: credentials, application name and connection settings,
//! read from `.env` files, environment variables and JSON options files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
