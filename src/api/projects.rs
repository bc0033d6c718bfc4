//! Project API operations (listing, creation)

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::interactive::backend::ProjectsBackend;
use crate::models::{CreateProjectRequest, Project, ProjectListResponse};

/// List projects visible to the authenticated account
pub async fn list_projects(client: &ApiClient) -> CliResult<Vec<Project>> {
    let url = format!("{}/projects", client.config().api_url);

    let response = client.get_authenticated(&url).await?;

    if response.status().is_success() {
        let list: ProjectListResponse = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid project list response: {}", e)))?;
        return Ok(list.results);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to list projects: {}", body),
    })
}

/// Create a new project
pub async fn create_project(
    client: &ApiClient,
    request: &CreateProjectRequest,
) -> CliResult<Project> {
    let url = format!("{}/projects", client.config().api_url);

    let response = client.post_json(&url, request).await?;

    if response.status().is_success() {
        let project: Project = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid project response: {}", e)))?;
        return Ok(project);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to create project: {}", body),
    })
}

impl ProjectsBackend for ApiClient {
    async fn list_projects(&self) -> CliResult<Vec<Project>> {
        list_projects(self).await
    }

    async fn create_project(&self, project_id: &str, display_name: &str) -> CliResult<Project> {
        let request = CreateProjectRequest {
            project_id: project_id.to_string(),
            display_name: display_name.to_string(),
            non_interactive: true,
        };
        create_project(self, &request).await
    }
}
