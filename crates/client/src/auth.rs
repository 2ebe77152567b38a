//! Authentication strategies and request signing.
//!
//! # What this module handles:
//! - Validating credentials at client construction
//! - Producing the `Authorization` header value for each request
//!
//! # What this module does NOT handle:
//! - Sending requests (see [`crate::instance::ApiInstance`])
//! - Token refresh: JWTs are minted per request, bearer tokens are static
//!
//! # Invariants
//! - JWTs are HS256-signed with the shared secret and bound to the request's
//!   method and path (`mth`, `sub` claims), so each request gets a fresh token.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::{ClientError, Result};

/// Strategy for authenticating with the API.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Email and shared secret; a signed JWT is sent with every request.
    Jwt { email: String, secret: SecretString },
    /// Static bearer token.
    Bearer { token: SecretString },
}

/// Claims carried by a per-request JWT.
#[derive(Debug, Serialize)]
struct RequestClaims<'a> {
    /// Account email.
    iss: &'a str,
    /// HTTP method of the signed request.
    mth: &'a str,
    /// Path and query string of the signed request.
    sub: &'a str,
    /// Issued-at, unix seconds.
    iat: i64,
}

impl AuthStrategy {
    /// Check that every credential field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Jwt { email, secret } => {
                if email.trim().is_empty() {
                    return Err(ClientError::Configuration(
                        "JWT authentication requires an email".to_string(),
                    ));
                }
                if secret.expose_secret().is_empty() {
                    return Err(ClientError::Configuration(
                        "JWT authentication requires a secret".to_string(),
                    ));
                }
            }
            Self::Bearer { token } => {
                if token.expose_secret().trim().is_empty() {
                    return Err(ClientError::Configuration(
                        "bearer authentication requires a token".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Jwt { .. } => "jwt",
            Self::Bearer { .. } => "bearer",
        }
    }

    /// Build the `Authorization` header value for one request.
    pub(crate) fn authorization_header(&self, method: &str, path_and_query: &str) -> Result<String> {
        match self {
            Self::Bearer { token } => Ok(format!("Bearer {}", token.expose_secret())),
            Self::Jwt { email, secret } => {
                let claims = RequestClaims {
                    iss: email,
                    mth: method,
                    sub: path_and_query,
                    iat: chrono::Utc::now().timestamp(),
                };
                let token = jsonwebtoken::encode(
                    &Header::new(Algorithm::HS256),
                    &claims,
                    &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
                )
                .map_err(|e| ClientError::Auth(format!("failed to sign request: {}", e)))?;
                Ok(format!("JWT {}", token))
            }
        }
    }
}

impl From<jobs_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: jobs_config::AuthStrategy) -> Self {
        match strategy {
            jobs_config::AuthStrategy::Jwt { email, secret } => Self::Jwt { email, secret },
            jobs_config::AuthStrategy::Bearer { token } => Self::Bearer { token },
        }
    }
}
