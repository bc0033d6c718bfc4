//! Projects command - Non-interactive project listing

use crate::api::{list_projects, ApiClient};
use crate::error::CliResult;
use crate::output::print_info;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Arguments for the projects command
#[derive(Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Subcommand)]
pub enum ProjectsCommand {
    /// List projects visible to the current account
    List(ListArgs),
}

/// Arguments for the list subcommand
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the list subcommand
#[derive(Serialize)]
struct ProjectOutput {
    project_id: String,
    display_name: String,
}

/// Execute the projects command
pub async fn execute(args: ProjectsArgs) -> CliResult<()> {
    match args.command {
        ProjectsCommand::List(list_args) => list(list_args).await,
    }
}

async fn list(args: ListArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let projects = list_projects(&client).await?;

    if args.json {
        let output: Vec<ProjectOutput> = projects
            .into_iter()
            .map(|p| ProjectOutput {
                project_id: p.project_id,
                display_name: p.display_name,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if projects.is_empty() {
        print_info("No projects found. Run 'nimbus init' to create one.");
        return Ok(());
    }

    println!("{:<30} {}", "PROJECT ID", "DISPLAY NAME");
    for project in projects {
        println!("{:<30} {}", project.project_id, project.display_name);
    }

    Ok(())
}
