//! HTTP client wrapper for the Nimbus management API

use crate::config::{Config, ConfigPaths};
use crate::credentials::{get_account_store, AccountEntry, AccountStore};
use crate::error::{CliError, CliResult};
use crate::logging::global_logger;
use crate::models::{Credentials, TokenResponse};
use chrono::Utc;
use reqwest::Client;
use std::time::{Duration, Instant};

/// API client for making authenticated requests
pub struct ApiClient {
    client: Client,
    config: Config,
    paths: ConfigPaths,
}

impl ApiClient {
    /// Create an API client from default config paths
    pub fn from_defaults() -> CliResult<Self> {
        let paths = ConfigPaths::new()?;
        let config = Config::load(&paths)?;
        Self::new(config, paths)
    }

    /// Create a new API client
    pub fn new(config: Config, paths: ConfigPaths) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            paths,
        })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the paths
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Get credentials for the default account, refreshing if needed
    pub async fn get_valid_credentials(&self) -> CliResult<Credentials> {
        let store = get_account_store(&self.paths);
        let entry = store.default_entry()?.ok_or(CliError::NotAuthenticated)?;

        // Refresh with a 5 minute buffer before actual expiry
        let now = Utc::now();
        let buffer = chrono::Duration::minutes(5);

        if entry.credentials.expires_at <= now + buffer {
            self.refresh_token(&entry, store.as_ref()).await
        } else {
            Ok(entry.credentials)
        }
    }

    /// Refresh the access token using the refresh token
    async fn refresh_token(
        &self,
        entry: &AccountEntry,
        store: &dyn AccountStore,
    ) -> CliResult<Credentials> {
        let response = self
            .client
            .post(self.config.token_url())
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", &self.config.client_id),
                ("refresh_token", &entry.credentials.refresh_token),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CliError::TokenExpired);
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| CliError::AuthenticationFailed(format!("Invalid token response: {e}")))?;
        let new_credentials = Credentials::from_token_response(token_response);

        store.update_credentials(&entry.account.email, &new_credentials)?;

        Ok(new_credentials)
    }

    /// Make an authenticated GET request
    pub async fn get_authenticated(&self, url: &str) -> CliResult<reqwest::Response> {
        let credentials = self.get_valid_credentials().await?;
        let logger = global_logger();

        logger.debug_request("GET", url);
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .bearer_auth(&credentials.access_token)
            .send()
            .await?;
        logger.debug_response(response.status().as_u16(), started.elapsed().as_millis());

        Ok(response)
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> CliResult<reqwest::Response> {
        let credentials = self.get_valid_credentials().await?;
        let logger = global_logger();

        logger.debug_request("POST", url);
        let started = Instant::now();
        let response = self
            .client
            .post(url)
            .bearer_auth(&credentials.access_token)
            .json(body)
            .send()
            .await?;
        logger.debug_response(response.status().as_u16(), started.elapsed().as_millis());

        Ok(response)
    }
}
