//! Repository initialization command module.
//!
//! This module handles creation of a new GitHub repository and population of
//! the boilerplate file set. It resolves the personal access token from the
//! environment, validates the command-line arguments, and delegates the
//! sequential creation flow to the core orchestration.
//!
//! The flow is split so the interesting part stays testable: [`execute`]
//! wires up the real GitHub client, [`handle_init_command`] takes any
//! `RepositoryClient` implementation and can run against a fake.

use clap::{ArgAction, Args};
use github_client::{GitHubClient, RepositoryClient};
use repo_bootstrap_core::{bootstrap_repository, BootstrapOutcome, BootstrapRequest};
use tracing::debug;

use crate::auth;
use crate::errors::Error;

#[cfg(test)]
#[path = "init_cmd_tests.rs"]
mod init_cmd_tests;

/// Command-line arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the repository to create.
    #[arg(long)]
    pub name: String,

    /// Description for the repository.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Whether the repository is created as private (true/false).
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub private: bool,

    /// Organization to own the repository. Defaults to the authenticated
    /// user's own account.
    #[arg(long)]
    pub org: Option<String>,

    /// Whether to write a README.md (true/false).
    #[arg(long = "with-readme", default_value_t = true, action = ArgAction::Set)]
    pub readme: bool,

    /// License to write: mit, apache2, gpl3 or none.
    #[arg(long = "with-license", default_value = "none")]
    pub license: String,
}

/// Runs the init command against the real GitHub API.
pub async fn execute(args: &InitArgs) -> Result<(), Error> {
    run_init(args, auth::resolve_token, make_github_client).await
}

fn make_github_client(token: &str) -> Result<Box<dyn RepositoryClient>, Error> {
    debug!("Creating GitHub token client");
    let octocrab =
        github_client::create_token_client(token).map_err(|e| Error::Auth(e.to_string()))?;
    Ok(Box::new(GitHubClient::new(octocrab)))
}

/// Runs the init command with injected token resolution and client
/// construction.
///
/// The token is resolved before the client is built, so a missing token
/// aborts the run before any GitHub call can be attempted.
pub async fn run_init<R, F>(args: &InitArgs, resolve_token: R, make_client: F) -> Result<(), Error>
where
    R: Fn() -> Result<String, Error>,
    F: Fn(&str) -> Result<Box<dyn RepositoryClient>, Error>,
{
    let token = resolve_token()?;
    let client = make_client(&token)?;
    handle_init_command(client.as_ref(), args).await
}

/// Validates the arguments, runs the bootstrap flow, and prints progress.
///
/// # Errors
///
/// Returns `Error::InvalidArguments` for a blank repository name and
/// `Error::Bootstrap` when the creation flow fails remotely.
pub async fn handle_init_command(
    client: &dyn RepositoryClient,
    args: &InitArgs,
) -> Result<(), Error> {
    let request = build_request(args)?;

    println!("Creating GitHub repository '{}'...", request.name);
    let outcome = bootstrap_repository(client, &request).await?;
    report_outcome(&outcome);
    Ok(())
}

/// Converts CLI arguments into a bootstrap request.
///
/// License keys are lowercased before the catalog lookup, matching the
/// original tool's handling of flag values.
fn build_request(args: &InitArgs) -> Result<BootstrapRequest, Error> {
    if args.name.trim().is_empty() {
        return Err(Error::InvalidArguments(
            "Repository name cannot be empty.".to_string(),
        ));
    }

    Ok(BootstrapRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        private: args.private,
        organization: args.org.clone(),
        readme: args.readme,
        license: args.license.to_lowercase(),
    })
}

fn report_outcome(outcome: &BootstrapOutcome) {
    println!("Repository created: {}", outcome.clone_url);
    for path in &outcome.files_created {
        println!("Added {}", path);
    }
    if let Some(key) = &outcome.skipped_license {
        println!("Unknown license '{}'. Skipping.", key);
    }
    println!("Bootstrap complete.");
}
