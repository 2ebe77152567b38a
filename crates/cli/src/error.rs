//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and CLI-level failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use jobs_client::ClientError;
use thiserror::Error;

/// Failures detected by the CLI itself rather than the client.
#[derive(Debug, Error)]
pub enum CliError {
    /// `get` answered with no job.
    #[error("Job not found: {0}")]
    JobNotFound(String),
}

/// Structured exit codes for jobs-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// Credentials rejected (HTTP 401) or a request could not be signed.
    AuthenticationFailed = 2,

    /// Network, timeout or DNS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Job does not exist.
    NotFound = 4,

    /// Bad request parameters (HTTP 400) or an unreadable response.
    ValidationError = 5,

    /// Insufficient privileges (HTTP 403).
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return match err.status_code() {
                Some(403) => ExitCode::PermissionDenied,
                _ => ExitCode::AuthenticationFailed,
            };
        }

        match err {
            ClientError::Auth(_) => ExitCode::AuthenticationFailed,
            ClientError::Configuration(_) => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::ApiError { status, .. } => match status {
                400 => ExitCode::ValidationError,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::JobNotFound(_) => ExitCode::NotFound,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }
        ExitCode::GeneralError
    }
}
