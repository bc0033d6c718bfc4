//! Integration tests for authentication
//!
//! Tests cover:
//! - Device code request and polling responses
//! - Transparent token refresh on expired credentials
//! - Account enumeration through the AccountService

mod common;

use common::TestContext;
use nimbus_cli::api::{list_projects, poll_device_token, request_device_code, AccountService};
use nimbus_cli::credentials::AccountStore;
use nimbus_cli::error::CliError;
use nimbus_cli::interactive::backend::AccountsBackend;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_request_device_code_success() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/oauth/device/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "test-device-code-12345",
            "user_code": "ABCD-1234",
            "verification_uri": format!("{}/device", ctx.base_url()),
            "expires_in": 600,
            "interval": 5
        })))
        .mount(&ctx.server)
        .await;

    let client = reqwest::Client::new();
    let response = request_device_code(&client, &ctx.config).await.unwrap();

    assert_eq!(response.user_code, "ABCD-1234");
    assert_eq!(response.interval, 5);
}

#[tokio::test]
async fn test_poll_device_token_pending_returns_none() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "authorization_pending"
        })))
        .mount(&ctx.server)
        .await;

    let client = reqwest::Client::new();
    let token = poll_device_token(&client, &ctx.config, "test-device-code")
        .await
        .unwrap();

    assert!(token.is_none());
}

#[tokio::test]
async fn test_poll_device_token_denied() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "access_denied"
        })))
        .mount(&ctx.server)
        .await;

    let client = reqwest::Client::new();
    let result = poll_device_token(&client, &ctx.config, "test-device-code").await;

    assert!(matches!(result, Err(CliError::AuthorizationDenied)));
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_request() {
    let ctx = TestContext::new().await;
    ctx.write_expired_credentials("dev@example.com");

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-access-token",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "fresh-refresh-token"
        })))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&ctx.server)
        .await;

    let projects = list_projects(&ctx.api_client()).await.unwrap();
    assert!(projects.is_empty());

    // The rotated tokens are persisted for the account
    let entry = ctx.account_store().default_entry().unwrap().unwrap();
    assert_eq!(entry.credentials.access_token, "fresh-access-token");
    assert_eq!(entry.credentials.refresh_token, "fresh-refresh-token");
}

#[tokio::test]
async fn test_refresh_failure_maps_to_token_expired() {
    let ctx = TestContext::new().await;
    ctx.write_expired_credentials("dev@example.com");

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&ctx.server)
        .await;

    let result = list_projects(&ctx.api_client()).await;

    assert!(matches!(result, Err(CliError::TokenExpired)));
}

#[tokio::test]
async fn test_account_service_lists_stored_accounts() {
    let ctx = TestContext::new().await;
    ctx.write_test_credentials("dev@example.com");

    let service = AccountService::new(ctx.config.clone(), ctx.paths.clone()).unwrap();

    let accounts = service.list_accounts().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].email, "dev@example.com");

    let default = service.default_account().unwrap().unwrap();
    assert_eq!(default.email, "dev@example.com");
}
