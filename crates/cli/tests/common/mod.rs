//! Shared test utilities for jobs-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (tokens, base URLs).
//!
//! Invariants / Assumptions:
//! - `SALLING_API_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `jobs-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SALLING_API_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other credential env vars are cleared to ensure no leakage from the host.
pub fn jobs_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jobs-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SALLING_API_TOKEN", "test-token");

    cmd.env_remove("SALLING_BASE_URL")
        .env_remove("SALLING_EMAIL")
        .env_remove("SALLING_SECRET")
        .env_remove("SALLING_APPLICATION_NAME")
        .env_remove("SALLING_TIMEOUT")
        .env_remove("SALLING_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `jobs-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn jobs_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = jobs_cmd();
    cmd.env("SALLING_BASE_URL", base_url);
    cmd
}
