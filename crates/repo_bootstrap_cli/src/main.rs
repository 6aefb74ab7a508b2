use clap::{Parser, Subcommand};

mod auth;
mod commands;
mod errors;

use commands::init_cmd::InitArgs;
use errors::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// repo-bootstrap CLI: Create a GitHub repository with boilerplate files
#[derive(Parser)]
#[command(name = "repo-bootstrap")]
#[command(about = "Create a GitHub repository and populate it with boilerplate files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new repository and write the boilerplate file set
    Init(InitArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("REPO_BOOTSTRAP_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Init(args) => {
            if let Err(e) = commands::init_cmd::execute(args).await {
                eprintln!("Error: {e}");
                let code = match e {
                    Error::InvalidArguments(_) => 2,
                    _ => 1,
                };
                std::process::exit(code);
            }
        }
        Commands::Version => {
            // Print version info from baked-in value
            println!(
                "repo-bootstrap version {}",
                option_env!("REPO_BOOTSTRAP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            std::process::exit(0);
        }
    }
}
