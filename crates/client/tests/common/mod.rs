//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock setup beyond the helpers below (use wiremock directly in tests)

#[allow(unused_imports)]
pub use jobs_client::{AuthStrategy, ClientError, JobsClient, QueryParams};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use serde_json::{Value, json};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_EMAIL: &str = "dev@example.com";
pub const TEST_SECRET: &str = "shared-secret";

/// Client authenticating with a bearer token against a mock server.
#[allow(dead_code)]
pub fn bearer_client(server: &MockServer) -> JobsClient {
    JobsClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Bearer {
            token: SecretString::new(TEST_TOKEN.to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// Client authenticating with per-request JWTs against a mock server.
#[allow(dead_code)]
pub fn jwt_client(server: &MockServer) -> JobsClient {
    JobsClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Jwt {
            email: TEST_EMAIL.to_string(),
            secret: SecretString::new(TEST_SECRET.to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// A minimal job record.
#[allow(dead_code)]
pub fn job(id: &str) -> Value {
    json!({ "id": id, "title": format!("Job {id}"), "brand": "netto" })
}

/// Build a parameter map from pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
