//! Configuration type definitions for the Jobs SDK.
//!
//! Responsibilities:
//! - Define credential types (JWT, bearer) and the top-level `Config`.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Request signing or any network activity (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - JSON field names match the client options document (`auth`, `applicationName`).

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
