//! Login command - Device code OAuth authentication

use crate::api::AccountService;
use crate::config::ConfigPaths;
use crate::credentials::get_account_store;
use crate::error::CliResult;
use crate::interactive::backend::AccountsBackend;
use crate::models::LoginOptions;
use crate::output::{print_info, print_success};
use clap::Args;

/// Arguments for the login command
#[derive(Args)]
pub struct LoginArgs {
    /// Don't automatically open the browser
    #[arg(long)]
    pub no_browser: bool,

    /// Authorize an additional account without replacing the default
    #[arg(long)]
    pub add: bool,
}

/// Execute the login command
pub async fn execute(args: LoginArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    // Check if already logged in
    if !args.add {
        let store = get_account_store(&paths);
        if let Some(entry) = store.default_entry()? {
            if !entry.credentials.is_expired() {
                print_info(&format!(
                    "You are already logged in as {}. Run 'nimbus logout' first to log out.",
                    entry.account.email
                ));
                return Ok(());
            }
        }
    }

    let service = AccountService::from_defaults()?;

    let account = if args.add {
        service.login_add().await?
    } else {
        service
            .login_with_options(&LoginOptions {
                no_browser: args.no_browser,
            })
            .await?
    };

    println!();
    print_success(&format!("Successfully authenticated as {}", account.email));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_args_default() {
        let args = LoginArgs {
            no_browser: false,
            add: false,
        };
        assert!(!args.no_browser);
        assert!(!args.add);
    }
}
