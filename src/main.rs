//! nimbus CLI - Command-line interface for the Nimbus platform
//!
//! This CLI enables developers to:
//! - Authenticate via device code OAuth flow
//! - Pick or create projects, apps and hosting sites interactively
//! - List projects non-interactively

use clap::{Parser, Subcommand};

use nimbus_cli::commands;
use nimbus_cli::error::CliResult;
use nimbus_cli::logging::{init_global_logger, LogLevel};

/// nimbus CLI - Application platform management
#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show progress messages
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Show HTTP request/response lines
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with the Nimbus platform
    Login(commands::login::LoginArgs),

    /// Clear stored accounts and log out
    Logout(commands::logout::LogoutArgs),

    /// Display the default account
    Whoami(commands::whoami::WhoamiArgs),

    /// Interactively pick or create a project, app and hosting site
    Init(commands::init::InitArgs),

    /// Manage projects
    Projects(commands::projects::ProjectsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_global_logger(LogLevel::from_flags_and_env(cli.verbose, cli.debug));

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Login(args) => commands::login::execute(args).await,
        Commands::Logout(args) => commands::logout::execute(args).await,
        Commands::Whoami(args) => commands::whoami::execute(args).await,
        Commands::Init(args) => commands::init::execute(args).await,
        Commands::Projects(args) => commands::projects::execute(args).await,
    }
}
