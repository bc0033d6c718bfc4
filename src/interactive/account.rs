//! Account selection flow

use crate::error::{CliError, CliResult};
use crate::interactive::backend::AccountsBackend;
use crate::interactive::prompts::PromptRenderer;
use crate::models::{Account, LoginOptions};

/// Fixed list entry offering a login with a different account
const LOGIN_NEW_ACCOUNT_LABEL: &str = "[Login with another account]";

/// Let the user pick one of the authorized accounts, or log in
///
/// With no stored accounts the interactive login runs first; its own
/// return value is discarded and the follow-up call returns the persisted
/// identity.
pub async fn pick_account<B, P>(backend: &B, prompt: &P) -> CliResult<Account>
where
    B: AccountsBackend,
    P: PromptRenderer + ?Sized,
{
    let accounts = backend.list_accounts()?;

    if accounts.is_empty() {
        backend.login().await?;
        return backend.login_with_options(&LoginOptions::default()).await;
    }

    let default_account = backend.default_account()?;

    let mut items: Vec<String> = accounts.iter().map(|a| a.email.clone()).collect();
    items.push(LOGIN_NEW_ACCOUNT_LABEL.to_string());

    let default = default_account
        .and_then(|current| accounts.iter().position(|a| a.email == current.email));
    let index = prompt.select("Which account do you want to use?", &items, default)?;

    if index == accounts.len() {
        return backend.login_add().await;
    }

    accounts
        .into_iter()
        .nth(index)
        .ok_or_else(|| CliError::Internal(format!("Account index {index} out of range")))
}
