//! Shared test harness for integration tests
#![allow(dead_code)]

use chrono::{Duration, Utc};
use nimbus_cli::api::ApiClient;
use nimbus_cli::config::{Config, ConfigPaths};
use nimbus_cli::credentials::{AccountEntry, AccountStore, FileAccountStore};
use nimbus_cli::models::{Account, Credentials};
use tempfile::TempDir;
use wiremock::MockServer;

/// Mock server plus isolated config directory for one test
pub struct TestContext {
    pub server: MockServer,
    pub temp_dir: TempDir,
    pub paths: ConfigPaths,
    pub config: Config,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::in_dir(temp_dir.path().to_path_buf());

        let mut config = Config::default();
        config.api_url = format!("{}/v1", server.uri());
        config.auth_url = server.uri();

        Self {
            server,
            temp_dir,
            paths,
            config,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), self.paths.clone()).unwrap()
    }

    pub fn account_store(&self) -> FileAccountStore {
        FileAccountStore::new(self.paths.accounts_file.clone())
    }

    /// Store a default account with a non-expired access token
    pub fn write_test_credentials(&self, email: &str) {
        self.account_store()
            .upsert(
                AccountEntry {
                    account: Account::new(email),
                    credentials: Credentials {
                        access_token: "test-access-token".to_string(),
                        refresh_token: "test-refresh-token".to_string(),
                        expires_at: Utc::now() + Duration::hours(1),
                        token_type: "Bearer".to_string(),
                    },
                },
                true,
            )
            .unwrap();
    }

    /// Store a default account whose access token is already expired
    pub fn write_expired_credentials(&self, email: &str) {
        self.account_store()
            .upsert(
                AccountEntry {
                    account: Account::new(email),
                    credentials: Credentials {
                        access_token: "stale-access-token".to_string(),
                        refresh_token: "stale-refresh-token".to_string(),
                        expires_at: Utc::now() - Duration::hours(1),
                        token_type: "Bearer".to_string(),
                    },
                },
                true,
            )
            .unwrap();
    }
}
