//! Tests for request authentication and identity headers.

mod common;

use common::*;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use wiremock::matchers::{header, method, path, query_param};

#[derive(Debug, Deserialize)]
struct Claims {
    iss: String,
    mth: String,
    sub: String,
}

fn decode_claims(authorization: &str) -> Claims {
    let token = authorization
        .strip_prefix("JWT ")
        .expect("JWT authorization scheme");
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .expect("token should verify with the shared secret")
    .claims
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job("1")))
        .expect(1)
        .mount(&server)
        .await;

    bearer_client(&server).get("1").await.unwrap();
}

#[tokio::test]
async fn test_jwt_bound_to_request_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job("1")))
        .mount(&server)
        .await;

    jwt_client(&server).get("1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    let claims = decode_claims(authorization);

    assert_eq!(claims.iss, TEST_EMAIL);
    assert_eq!(claims.mth, "GET");
    assert_eq!(claims.sub, "/v1/jobs/1");
}

#[tokio::test]
async fn test_jwt_signs_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/"))
        .and(query_param("brand", "netto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
        .mount(&server)
        .await;

    let client = jwt_client(&server);
    client
        .begin_query()
        .of_brand("netto")
        .execute()
        .collect_all()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(decode_claims(authorization).sub, "/v1/jobs/?brand=netto");
}

#[tokio::test]
async fn test_default_user_agent() {
    let server = MockServer::start().await;
    let expected = format!("Jobs SDK v{}", env!("CARGO_PKG_VERSION"));

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(job("1")))
        .expect(1)
        .mount(&server)
        .await;

    bearer_client(&server).get("1").await.unwrap();
}

#[tokio::test]
async fn test_application_name_in_user_agent() {
    let server = MockServer::start().await;
    let expected = format!("Store Finder (Jobs SDK v{})", env!("CARGO_PKG_VERSION"));

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(job("1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = JobsClient::builder()
        .base_url(server.uri())
        .application_name("Store Finder".to_string())
        .auth_strategy(AuthStrategy::Bearer {
            token: secrecy::SecretString::new(TEST_TOKEN.to_string().into()),
        })
        .build()
        .unwrap();

    assert_eq!(client.user_agent(), expected);
    client.get("1").await.unwrap();
}

#[tokio::test]
async fn test_rejected_credentials_are_auth_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            serde_json::json!({ "error": "invalid_token" }),
        ))
        .mount(&server)
        .await;

    let err = bearer_client(&server).get("1").await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(matches!(err, ClientError::ApiError { ref message, .. } if message == "invalid_token"));
}
