//! App API operations, per-platform (listing, creation)

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::interactive::backend::AppsBackend;
use crate::models::{AppListResponse, AppPlatform, CreateAppRequest, WebApp};

/// List the apps of one platform registered under a project
pub async fn list_apps(
    client: &ApiClient,
    project_id: &str,
    platform: AppPlatform,
) -> CliResult<Vec<WebApp>> {
    let url = format!(
        "{}/projects/{}/{}",
        client.config().api_url,
        project_id,
        platform.as_path_segment()
    );

    let response = client.get_authenticated(&url).await?;

    if response.status().is_success() {
        let list: AppListResponse = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid app list response: {}", e)))?;
        return Ok(list.apps);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to list apps: {}", body),
    })
}

/// Register a new app under a project
pub async fn create_app(
    client: &ApiClient,
    project_id: &str,
    platform: AppPlatform,
    request: &CreateAppRequest,
) -> CliResult<WebApp> {
    let url = format!(
        "{}/projects/{}/{}",
        client.config().api_url,
        project_id,
        platform.as_path_segment()
    );

    let response = client.post_json(&url, request).await?;

    if response.status().is_success() {
        let app: WebApp = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid app response: {}", e)))?;
        return Ok(app);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to create app: {}", body),
    })
}

impl AppsBackend for ApiClient {
    async fn list_web_apps(&self, project_id: &str) -> CliResult<Vec<WebApp>> {
        list_apps(self, project_id, AppPlatform::Web).await
    }

    async fn create_web_app(&self, project_id: &str, display_name: &str) -> CliResult<WebApp> {
        let request = CreateAppRequest {
            display_name: display_name.to_string(),
        };
        create_app(self, project_id, AppPlatform::Web, &request).await
    }
}
