//! Error types for the bootstrap orchestration.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during a bootstrap run.
///
/// Both variants are fatal: the run stops at the first failure. The
/// `FileCreation` variant implies the repository already exists remotely,
/// since files are only committed after successful creation.
#[derive(Debug, Error)]
pub enum Error {
    /// The repository itself could not be created.
    ///
    /// Typical causes: a repository with the same name already exists under
    /// the owner, the token lacks repository-creation scope, or the network
    /// call failed. Nothing has been created remotely when this is returned.
    #[error("Failed to create repository '{name}'")]
    RepositoryCreation {
        name: String,
        #[source]
        source: github_client::Error,
    },

    /// A boilerplate file could not be committed to the repository.
    ///
    /// The repository exists at this point; the run aborts and leaves it
    /// partially scaffolded with no rollback.
    #[error("Failed to create file '{path}'")]
    FileCreation {
        path: String,
        #[source]
        source: github_client::Error,
    },
}
