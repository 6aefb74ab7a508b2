use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the repo-bootstrap CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication with GitHub failed.
    ///
    /// This error is returned when the GitHub client cannot be built from
    /// the provided personal access token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A bootstrap run failed after it started.
    ///
    /// Wraps the core error; when the failure happened after repository
    /// creation, the remote repository is left partially scaffolded.
    #[error("Bootstrap failed: {0}")]
    Bootstrap(#[from] repo_bootstrap_core::Error),

    /// The process environment is missing required configuration.
    ///
    /// This error is returned when the GITHUB_TOKEN environment variable is
    /// absent or blank. It is raised before any network call is made.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    ///
    /// This error is returned when an argument passes clap's type checks but
    /// fails validation, such as a blank repository name.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
