//! Whoami command - Display the default account

use crate::config::ConfigPaths;
use crate::credentials::get_account_store;
use crate::error::{CliError, CliResult};
use crate::output::print_key_value;
use clap::Args;
use serde::Serialize;

/// Arguments for the whoami command
#[derive(Args)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for whoami
#[derive(Serialize)]
struct WhoamiOutput {
    email: String,
    accounts: Vec<String>,
}

/// Execute the whoami command
pub async fn execute(args: WhoamiArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    let store = get_account_store(&paths);
    let default = store.default_entry()?.ok_or(CliError::NotAuthenticated)?;
    let accounts: Vec<String> = store
        .list()?
        .into_iter()
        .map(|e| e.account.email)
        .collect();

    if args.json {
        let output = WhoamiOutput {
            email: default.account.email,
            accounts,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        print_key_value("Email", &default.account.email);
        if accounts.len() > 1 {
            print_key_value("Authorized accounts", &accounts.join(", "));
        }
    }

    Ok(())
}
