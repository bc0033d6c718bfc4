//! Integration tests for the projects API module
//!
//! Tests cover:
//! - Listing projects with a valid token
//! - Creating a project with the non-interactive flag
//! - Error mapping for unauthorized and server failures

mod common;

use common::TestContext;
use nimbus_cli::api::{create_project, list_projects};
use nimbus_cli::error::CliError;
use nimbus_cli::models::CreateProjectRequest;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_projects_success() {
    let ctx = TestContext::new().await;
    ctx.write_test_credentials("dev@example.com");

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"projectId": "p1", "displayName": "P One"},
                {"projectId": "p2", "displayName": "P Two"}
            ]
        })))
        .mount(&ctx.server)
        .await;

    let projects = list_projects(&ctx.api_client()).await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].project_id, "p1");
    assert_eq!(projects[1].display_name, "P Two");
}

#[tokio::test]
async fn test_list_projects_unauthorized() {
    let ctx = TestContext::new().await;
    ctx.write_test_credentials("dev@example.com");

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let result = list_projects(&ctx.api_client()).await;

    assert!(matches!(result, Err(CliError::NotAuthenticated)));
}

#[tokio::test]
async fn test_list_projects_without_stored_account() {
    let ctx = TestContext::new().await;

    let result = list_projects(&ctx.api_client()).await;

    assert!(matches!(result, Err(CliError::NotAuthenticated)));
}

#[tokio::test]
async fn test_create_project_sends_non_interactive_request() {
    let ctx = TestContext::new().await;
    ctx.write_test_credentials("dev@example.com");

    Mock::given(method("POST"))
        .and(path("/v1/projects"))
        .and(body_partial_json(json!({
            "projectId": "shiny-new-app",
            "displayName": "Shiny",
            "nonInteractive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projectId": "shiny-new-app",
            "displayName": "Shiny"
        })))
        .mount(&ctx.server)
        .await;

    let request = CreateProjectRequest {
        project_id: "shiny-new-app".to_string(),
        display_name: "Shiny".to_string(),
        non_interactive: true,
    };
    let project = create_project(&ctx.api_client(), &request).await.unwrap();

    assert_eq!(project.project_id, "shiny-new-app");
}

#[tokio::test]
async fn test_create_project_server_error_carries_status_and_body() {
    let ctx = TestContext::new().await;
    ctx.write_test_credentials("dev@example.com");

    Mock::given(method("POST"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(409).set_body_string("project id already taken"))
        .mount(&ctx.server)
        .await;

    let request = CreateProjectRequest {
        project_id: "taken".to_string(),
        display_name: "Taken".to_string(),
        non_interactive: true,
    };
    let result = create_project(&ctx.api_client(), &request).await;

    match result {
        Err(CliError::Api { status, message }) => {
            assert_eq!(status, 409);
            assert!(message.contains("already taken"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
