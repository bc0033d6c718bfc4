//! Registered application models

use serde::{Deserialize, Serialize};

/// Application platform tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppPlatform {
    #[serde(rename = "WEB")]
    Web,
    #[serde(rename = "IOS")]
    Ios,
    #[serde(rename = "ANDROID")]
    Android,
}

impl AppPlatform {
    /// Path segment used by the apps endpoints
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            AppPlatform::Web => "webApps",
            AppPlatform::Ios => "iosApps",
            AppPlatform::Android => "androidApps",
        }
    }
}

/// An application registered under a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApp {
    /// Path-like resource id, e.g. `projects/p1/webApps/app-4f21`
    pub app_id: String,

    /// Human-readable name
    #[serde(default)]
    pub display_name: String,

    pub platform: AppPlatform,
}

impl WebApp {
    /// The last path segment of the resource id, used as the selectable id
    pub fn short_id(&self) -> &str {
        self.app_id.rsplit('/').next().unwrap_or(&self.app_id)
    }
}

/// Request body for app creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppRequest {
    pub display_name: String,
}

/// Response from the app list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListResponse {
    #[serde(default)]
    pub apps: Vec<WebApp>,
}
