//! Integration tests for configuration sources.

mod common;

use common::jobs_cmd;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options_file(contents: &serde_json::Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.to_string().as_bytes()).unwrap();
    file
}

async fn mount_job(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_options_file_with_jwt_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .and(header_regex("Authorization", "^JWT [A-Za-z0-9_-]+\\.[A-Za-z0-9_-]+\\.[A-Za-z0-9_-]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .expect(1)
        .mount(&server)
        .await;

    let file = options_file(&json!({
        "auth": { "type": "jwt", "email": "dev@example.com", "secret": "s3cret" },
        "baseUrl": server.uri(),
    }));

    jobs_cmd()
        .env_remove("SALLING_API_TOKEN")
        .arg("--config-path")
        .arg(file.path())
        .args(["get", "1"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_flag_overrides_environment_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs/1"))
        .and(header("Authorization", "Bearer from-flag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .expect(1)
        .mount(&server)
        .await;

    jobs_cmd()
        .env("SALLING_BASE_URL", server.uri())
        .args(["--api-token", "from-flag", "get", "1"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_environment_overrides_options_file() {
    let server = MockServer::start().await;
    mount_job(&server).await;

    let file = options_file(&json!({
        "auth": { "type": "bearer", "token": "file-token" },
        "baseUrl": "http://127.0.0.1:1",
    }));

    jobs_cmd()
        .env("SALLING_BASE_URL", server.uri())
        .env("SALLING_CONFIG_PATH", file.path())
        .args(["get", "1"])
        .assert()
        .success();
}

#[test]
fn test_missing_options_file_fails() {
    jobs_cmd()
        .args(["--config-path", "/nonexistent/jobs-options.json", "get", "1"])
        .assert()
        .code(1);
}
