//! CLI settings persisted in config.json

use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

/// User-editable settings with platform defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the management API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the authorization server
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// OAuth client id of this CLI
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.nimbus.dev/v1".to_string()
}

fn default_auth_url() -> String {
    "https://auth.nimbus.dev".to_string()
}

fn default_client_id() -> String {
    "nimbus-cli".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_url: default_auth_url(),
            client_id: default_client_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load settings from config.json, falling back to defaults when the
    /// file does not exist
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file)?;
        serde_json::from_str(&contents)
            .map_err(|e| CliError::Config(format!("Invalid config.json: {}", e)))
    }

    /// Save settings to config.json
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.config_file, contents)?;
        Ok(())
    }

    /// URL of the device code endpoint
    pub fn device_code_url(&self) -> String {
        format!("{}/oauth/device/code", self.auth_url)
    }

    /// URL of the token endpoint (device token and refresh)
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.auth_url)
    }

    /// URL of the userinfo endpoint
    pub fn userinfo_url(&self) -> String {
        format!("{}/userinfo", self.auth_url)
    }
}
