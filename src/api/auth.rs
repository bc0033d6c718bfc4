//! Authentication APIs - Device code OAuth and account management

use crate::config::{Config, ConfigPaths};
use crate::credentials::{get_account_store, AccountEntry};
use crate::error::{CliError, CliResult};
use crate::interactive::backend::AccountsBackend;
use crate::models::token::OAuthError;
use crate::models::{
    Account, Credentials, DeviceCodeResponse, LoginOptions, TokenResponse, UserInfo,
};
use crate::output::print_info;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;

/// Request a device code for authentication
pub async fn request_device_code(
    client: &Client,
    config: &Config,
) -> CliResult<DeviceCodeResponse> {
    let response = client
        .post(config.device_code_url())
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("scope", "openid profile email"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::AuthenticationFailed(format!(
            "Failed to request device code: {status} - {body}"
        )));
    }

    let device_code: DeviceCodeResponse = response.json().await.map_err(|e| {
        CliError::AuthenticationFailed(format!("Invalid device code response: {e}"))
    })?;

    Ok(device_code)
}

/// Poll for device token after user authentication
///
/// Returns Ok(Some(token)) when authentication is complete,
/// Ok(None) when still pending, or Err on failure.
pub async fn poll_device_token(
    client: &Client,
    config: &Config,
    device_code: &str,
) -> CliResult<Option<TokenResponse>> {
    let response = client
        .post(config.token_url())
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("device_code", device_code),
            ("grant_type", "urn:ietf:params:oauth:grant-type:device_code"),
        ])
        .send()
        .await?;

    if response.status().is_success() {
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CliError::AuthenticationFailed(format!("Invalid token response: {e}")))?;
        return Ok(Some(token));
    }

    // Check for expected error responses
    let error: OAuthError = response
        .json()
        .await
        .map_err(|e| CliError::AuthenticationFailed(format!("Invalid error response: {e}")))?;

    if error.is_authorization_pending() || error.is_slow_down() {
        // Still waiting for user to authenticate
        return Ok(None);
    }

    if error.is_access_denied() {
        return Err(CliError::AuthorizationDenied);
    }

    if error.is_expired_token() {
        return Err(CliError::DeviceCodeExpired);
    }

    // Other error
    Err(CliError::AuthenticationFailed(
        error
            .error_description
            .unwrap_or_else(|| error.error.clone()),
    ))
}

/// Fetch the identity behind an access token
pub async fn get_user_info(
    client: &Client,
    config: &Config,
    access_token: &str,
) -> CliResult<UserInfo> {
    let response = client
        .get(config.userinfo_url())
        .bearer_auth(access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::AuthenticationFailed(format!(
            "Failed to fetch user info: {status} - {body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| CliError::AuthenticationFailed(format!("Invalid userinfo response: {e}")))
}

/// Account backend driving the device code flow against the auth server
/// and persisting results in the local account store
pub struct AccountService {
    client: Client,
    config: Config,
    paths: ConfigPaths,
}

impl AccountService {
    /// Create a service from explicit config and paths
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

    /// Create a service from default config paths
    pub fn from_defaults() -> CliResult<Self> {
        let paths = ConfigPaths::new()?;
        let config = Config::load(&paths)?;
        Self::new(config, paths)
    }

    /// Run the device code dance and return the authenticated identity
    async fn device_login(&self, no_browser: bool) -> CliResult<(Account, Credentials)> {
        let device_code = request_device_code(&self.client, &self.config).await?;

        println!();
        println!("To authenticate, visit:");
        println!("  {}", device_code.verification_uri);
        println!();
        println!("And enter this code: {}", device_code.user_code);
        println!();

        if !no_browser {
            let url = device_code.display_url();
            if open::that(url).is_ok() {
                print_info("Browser opened. Complete authentication there.");
            } else {
                print_info("Could not open browser. Please visit the URL above manually.");
            }
        }

        println!();
        print!("Waiting for authentication");

        let poll_interval = Duration::from_secs(device_code.interval.max(5));
        let deadline = std::time::Instant::now() + Duration::from_secs(device_code.expires_in);

        let token = loop {
            if std::time::Instant::now() > deadline {
                println!();
                return Err(CliError::DeviceCodeExpired);
            }

            sleep(poll_interval).await;
            print!(".");

            match poll_device_token(&self.client, &self.config, &device_code.device_code).await {
                Ok(Some(token)) => {
                    println!();
                    break token;
                }
                Ok(None) => continue,
                Err(e) => {
                    println!();
                    return Err(e);
                }
            }
        };

        let credentials = Credentials::from_token_response(token);
        let user = get_user_info(&self.client, &self.config, &credentials.access_token).await?;

        Ok((Account::new(user.email), credentials))
    }
}

impl AccountsBackend for AccountService {
    fn list_accounts(&self) -> CliResult<Vec<Account>> {
        let store = get_account_store(&self.paths);
        Ok(store.list()?.into_iter().map(|e| e.account).collect())
    }

    fn default_account(&self) -> CliResult<Option<Account>> {
        let store = get_account_store(&self.paths);
        Ok(store.default_entry()?.map(|e| e.account))
    }

    async fn login(&self) -> CliResult<Account> {
        let (account, credentials) = self.device_login(false).await?;

        let store = get_account_store(&self.paths);
        store.upsert(
            AccountEntry {
                account: account.clone(),
                credentials,
            },
            true,
        )?;

        Ok(account)
    }

    async fn login_with_options(&self, options: &LoginOptions) -> CliResult<Account> {
        // An earlier login in the same invocation already stored a fresh
        // default account; reuse it instead of prompting again.
        let store = get_account_store(&self.paths);
        if let Some(entry) = store.default_entry()? {
            if !entry.credentials.is_expired() {
                return Ok(entry.account);
            }
        }

        let (account, credentials) = self.device_login(options.no_browser).await?;
        store.upsert(
            AccountEntry {
                account: account.clone(),
                credentials,
            },
            true,
        )?;

        Ok(account)
    }

    async fn login_add(&self) -> CliResult<Account> {
        let (account, credentials) = self.device_login(false).await?;

        let store = get_account_store(&self.paths);
        store.upsert(
            AccountEntry {
                account: account.clone(),
                credentials,
            },
            false,
        )?;

        Ok(account)
    }
}
