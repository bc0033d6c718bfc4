//! Hosting site models

use serde::{Deserialize, Serialize};

/// Distinguishes the implicit per-project default site from sites the user
/// created explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteType {
    #[serde(rename = "DEFAULT_SITE")]
    Default,
    #[serde(rename = "USER_SITE")]
    UserCreated,
}

/// A hosting site belonging to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Path-like resource name, e.g. `projects/p1/sites/p1`
    pub name: String,

    /// URL the site is served from
    pub default_url: String,

    #[serde(rename = "type")]
    pub site_type: SiteType,
}

impl Site {
    /// The last path segment of the resource name, used as the selectable id
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// The default site every project implicitly owns
    ///
    /// A freshly created project may report zero sites; this record stands in
    /// for the backend's not-yet-materialized default site.
    pub fn default_for_project(project_id: &str) -> Self {
        Self {
            name: format!("projects/{project_id}/sites/{project_id}"),
            default_url: format!("https://{project_id}.web.app"),
            site_type: SiteType::Default,
        }
    }
}

/// Request body for site creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    pub site_id: String,
}

/// Response from the site list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListResponse {
    #[serde(default)]
    pub sites: Vec<Site>,
}
