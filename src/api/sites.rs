//! Hosting site API operations (listing, creation)

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::interactive::backend::SitesBackend;
use crate::models::{CreateSiteRequest, Site, SiteListResponse};

/// List the hosting sites of a project
pub async fn list_sites(client: &ApiClient, project_id: &str) -> CliResult<Vec<Site>> {
    let url = format!("{}/projects/{}/sites", client.config().api_url, project_id);

    let response = client.get_authenticated(&url).await?;

    if response.status().is_success() {
        let list: SiteListResponse = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid site list response: {}", e)))?;
        return Ok(list.sites);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to list sites: {}", body),
    })
}

/// Create a new hosting site under a project
pub async fn create_site(
    client: &ApiClient,
    project_id: &str,
    request: &CreateSiteRequest,
) -> CliResult<Site> {
    let url = format!("{}/projects/{}/sites", client.config().api_url, project_id);

    let response = client.post_json(&url, request).await?;

    if response.status().is_success() {
        let site: Site = response
            .json()
            .await
            .map_err(|e| CliError::Server(format!("Invalid site response: {}", e)))?;
        return Ok(site);
    }

    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::NotAuthenticated);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api {
        status: status.as_u16(),
        message: format!("Failed to create site: {}", body),
    })
}

impl SitesBackend for ApiClient {
    async fn list_sites(&self, project_id: &str) -> CliResult<Vec<Site>> {
        list_sites(self, project_id).await
    }

    async fn create_site(&self, project_id: &str, subdomain: &str) -> CliResult<Site> {
        let request = CreateSiteRequest {
            site_id: subdomain.to_string(),
        };
        create_site(self, project_id, &request).await
    }
}
