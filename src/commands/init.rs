//! Init command - Interactive project setup wizard
//!
//! Walks through account, project, app and site selection and records the
//! choices in nimbus.json in the working directory.

use crate::api::{AccountService, ApiClient};
use crate::config::{Config, ConfigPaths};
use crate::credentials::get_account_store;
use crate::error::CliResult;
use crate::interactive::{
    pick_account, pick_project, pick_site, pick_web_app, require_interactive, DialoguerPrompter,
};
use crate::logging::global_logger;
use crate::models::Manifest;
use crate::output::{print_header, print_key_value, print_next_steps, print_success};
use clap::Args;

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {}

/// Execute the init command
pub async fn execute(_args: InitArgs) -> CliResult<()> {
    require_interactive()?;

    let paths = ConfigPaths::new()?;
    let config = Config::load(&paths)?;
    let prompt = DialoguerPrompter;

    print_header("Nimbus project setup");

    // Account
    let service = AccountService::new(config.clone(), paths.clone())?;
    let account = pick_account(&service, &prompt).await?;
    get_account_store(&paths).set_default(&account.email)?;

    // Existing selections become defaults on re-runs
    let cwd = std::env::current_dir()?;
    let manifest = Manifest::load(&cwd)?.unwrap_or_default();
    if !manifest.project.is_empty() {
        global_logger().verbose(format!(
            "Found existing manifest with project {}",
            manifest.project
        ));
    }
    let default_project = if manifest.project.is_empty() {
        None
    } else {
        Some(manifest.project.as_str())
    };

    // Project
    let client = ApiClient::new(config, paths)?;
    let project = pick_project(&client, &prompt, default_project).await?;

    // App and hosting site
    let app = pick_web_app(&client, &prompt, &project.project_id).await?;
    let site = pick_site(&client, &prompt, &project.project_id).await?;

    let manifest = Manifest {
        project: project.project_id.clone(),
        app: Some(app.short_id().to_string()),
        site: Some(site.short_name().to_string()),
    };
    manifest.save(&cwd)?;

    println!();
    print_success("Project setup complete.");
    println!();
    print_key_value("Account", &account.email);
    print_key_value("Project", project.display_label());
    print_key_value("App", app.short_id());
    print_key_value("Site", &site.default_url);

    print_next_steps(&[
        "Review nimbus.json in this directory".to_string(),
        format!("Your site will be served at {}", site.default_url),
    ]);

    Ok(())
}
