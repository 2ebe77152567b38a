//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and credential selection.
//! - Test options file loading.
//! - Test environment variable handling and precedence.
//! - Test dotenv gating.
//!
//! Invariants:
//! - Tests that touch process env are marked `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod dotenv_tests;

/// Every variable the loader reads, for clearing in env tests.
pub const LOADER_ENV_VARS: [&str; 7] = [
    "SALLING_BASE_URL",
    "SALLING_EMAIL",
    "SALLING_SECRET",
    "SALLING_API_TOKEN",
    "SALLING_APPLICATION_NAME",
    "SALLING_TIMEOUT",
    "SALLING_CONFIG_PATH",
];
