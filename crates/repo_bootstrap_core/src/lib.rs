//! # Repo Bootstrap Core
//!
//! This crate provides the orchestration logic for repo-bootstrap, a tool
//! that creates a GitHub repository and populates it with boilerplate files.
//!
//! ## Overview
//!
//! The complete workflow of a bootstrap run:
//! 1. Repository creation via the GitHub API (user or organization owned)
//! 2. Optional README with the repository name and description
//! 3. Optional LICENSE from the static license catalog
//! 4. A fixed set of structural files (.gitignore, entry point stub,
//!    Dockerfile, CI workflow, example service stub)
//!
//! The flow is strictly sequential. Nothing is retried and nothing is rolled
//! back: a failure before repository creation leaves no remote state behind,
//! a failure after it leaves a partially-scaffolded repository.
//!
//! ## Architecture
//!
//! The crate follows a dependency injection pattern for testability: all
//! GitHub access goes through the [`RepositoryClient`] trait from
//! [`github_client`], so [`bootstrap_repository`] can be exercised against a
//! fake implementation without network access.

use github_client::{RepositoryClient, RepositoryCreatePayload};
use tracing::{info, warn};
use url::Url;

mod errors;
pub use errors::Error;

pub mod licenses;
pub mod scaffold;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// License key meaning "do not write a LICENSE file".
pub const LICENSE_NONE: &str = "none";

/// Request for bootstrapping a new repository.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    /// Name of the repository to create. Must be non-empty.
    pub name: String,
    /// Description for the repository, interpolated into the README.
    pub description: String,
    /// Whether the repository is created as private.
    pub private: bool,
    /// Organization to own the repository. The authenticated user's own
    /// account is used when absent.
    pub organization: Option<String>,
    /// Whether to write a README.md.
    pub readme: bool,
    /// License catalog key, or [`LICENSE_NONE`] to skip the LICENSE file.
    pub license: String,
}

impl Default for BootstrapRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            private: true,
            organization: None,
            readme: true,
            license: LICENSE_NONE.to_string(),
        }
    }
}

/// Result of a successful bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    /// Clone URL of the created repository.
    pub clone_url: Url,
    /// Paths of the files committed to the repository, in creation order.
    pub files_created: Vec<String>,
    /// The requested license key when it was not recognized and the LICENSE
    /// step was skipped.
    pub skipped_license: Option<String>,
}

/// Creates a repository and populates it with the boilerplate file set.
///
/// Steps run strictly in sequence and the first error aborts the run:
/// 1. Create the repository under the owner from the request.
/// 2. If the readme flag is set, commit `README.md`.
/// 3. If the license key is not `none`, look it up in the catalog; a known
///    key commits `LICENSE`, an unknown key is recorded and skipped with a
///    warning.
/// 4. Commit the five structural files unconditionally.
///
/// # Errors
///
/// Returns [`Error::RepositoryCreation`] when the repository cannot be
/// created (nothing exists remotely at that point) and
/// [`Error::FileCreation`] when a file commit fails after the repository
/// exists.
pub async fn bootstrap_repository(
    client: &dyn RepositoryClient,
    request: &BootstrapRequest,
) -> Result<BootstrapOutcome, Error> {
    let payload = RepositoryCreatePayload {
        name: request.name.clone(),
        description: Some(request.description.clone()),
        private: Some(request.private),
    };

    let repository = match &request.organization {
        Some(org_name) => client.create_org_repository(org_name, &payload).await,
        None => client.create_user_repository(&payload).await,
    }
    .map_err(|source| Error::RepositoryCreation {
        name: request.name.clone(),
        source,
    })?;

    info!(
        repository = repository.full_name(),
        clone_url = %repository.clone_url(),
        "Repository created"
    );

    let mut files_created = Vec::new();

    if request.readme {
        let content = scaffold::readme_content(&request.name, &request.description);
        commit_file(
            client,
            repository.full_name(),
            scaffold::README_PATH,
            &content,
            scaffold::README_MESSAGE,
            &mut files_created,
        )
        .await?;
    }

    let mut skipped_license = None;
    if request.license != LICENSE_NONE {
        match licenses::license_text(&request.license) {
            Some(text) => {
                commit_file(
                    client,
                    repository.full_name(),
                    scaffold::LICENSE_PATH,
                    text,
                    scaffold::LICENSE_MESSAGE,
                    &mut files_created,
                )
                .await?;
            }
            None => {
                warn!(license = %request.license, "Unknown license key, skipping LICENSE");
                skipped_license = Some(request.license.clone());
            }
        }
    }

    for file in scaffold::STRUCTURAL_FILES {
        commit_file(
            client,
            repository.full_name(),
            file.path,
            file.content,
            file.message,
            &mut files_created,
        )
        .await?;
    }

    info!(
        repository = repository.full_name(),
        file_count = files_created.len(),
        "Bootstrap complete"
    );

    Ok(BootstrapOutcome {
        clone_url: repository.clone_url(),
        files_created,
        skipped_license,
    })
}

async fn commit_file(
    client: &dyn RepositoryClient,
    full_name: &str,
    path: &str,
    content: &str,
    message: &str,
    files_created: &mut Vec<String>,
) -> Result<(), Error> {
    client
        .create_file(full_name, path, content, message)
        .await
        .map_err(|source| Error::FileCreation {
            path: path.to_string(),
            source,
        })?;
    info!(path = path, "File committed");
    files_created.push(path.to_string());
    Ok(())
}
