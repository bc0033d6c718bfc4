//! Logout command - Clear stored accounts

use crate::config::ConfigPaths;
use crate::credentials::get_account_store;
use crate::error::CliResult;
use crate::output::{print_info, print_success};
use clap::Args;

/// Arguments for the logout command
#[derive(Args)]
pub struct LogoutArgs {}

/// Execute the logout command
pub async fn execute(_args: LogoutArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    let store = get_account_store(&paths);
    if !store.exists() {
        print_info("You are not logged in.");
        return Ok(());
    }

    store.clear()?;

    print_success("Accounts cleared. Logged out successfully.");

    Ok(())
}
