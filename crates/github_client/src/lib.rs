//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating with a personal access token. It exposes the narrow set of
//! operations the bootstrapper needs: creating a repository (for the
//! authenticated user or for an organization) and committing single files to
//! a repository's default branch.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use octocrab::{Octocrab, Result as OctocrabResult};
use serde::Serialize;
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` wrapping an authenticated `Octocrab`
    /// instance, typically produced by [`create_token_client`].
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    /// Creates a new repository within a specified organization using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `org_name` - The name of the organization.
    /// * `payload` - A `RepositoryCreatePayload` struct containing the repository details.
    ///
    /// # Errors
    /// Returns `Error::ApiError` if the API call fails, for example when a
    /// repository with the same name already exists under the organization or
    /// the token lacks the necessary scope.
    #[instrument(skip(self, payload), fields(org_name = %org_name, repo_name = %payload.name))]
    async fn create_org_repository(
        &self,
        org_name: &str,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error> {
        let path = format!("/orgs/{}/repos", org_name);
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(payload)).await;
        match response {
            Ok(r) => {
                info!(
                    org_name = org_name,
                    repo_name = payload.name,
                    "Created repository for organization"
                );
                Ok(models::Repository::from(r))
            }
            Err(e) => Err(map_octocrab_error(
                "Failed to create repository for organization",
                e,
            )),
        }
    }

    /// Creates a new repository for the authenticated user using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `payload` - A `RepositoryCreatePayload` struct containing the repository details.
    ///
    /// # Errors
    /// Returns `Error::ApiError` if the API call fails, for example when the
    /// user already owns a repository with the same name.
    #[instrument(skip(self, payload), fields(repo_name = %payload.name))]
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error> {
        let path = "/user/repos";
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(payload)).await;
        match response {
            Ok(r) => {
                info!(repo_name = payload.name, "Created repository for user");
                Ok(models::Repository::from(r))
            }
            Err(e) => Err(map_octocrab_error("Failed to create repository for user", e)),
        }
    }

    /// Commits a single new file to a repository's default branch via the
    /// contents API.
    ///
    /// # Arguments
    ///
    /// * `full_name` - The full name of the repository (owner/name).
    /// * `path` - The path of the file within the repository.
    /// * `content` - The file content, encoded to base64 before the call.
    /// * `message` - The commit message.
    ///
    /// # Errors
    /// Returns `Error::ApiError` if the API call fails, for example when a
    /// file already exists at the given path.
    #[instrument(skip(self, content), fields(full_name = %full_name, path = %path))]
    async fn create_file(
        &self,
        full_name: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<(), Error> {
        let route = format!("/repos/{}/contents/{}", full_name, path);
        let payload = FileCreatePayload {
            message: message.to_string(),
            content: BASE64.encode(content),
        };
        let response: OctocrabResult<serde_json::Value> =
            self.client.put(route, Some(&payload)).await;
        match response {
            Ok(_) => {
                info!(full_name = full_name, path = path, "Committed file");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to commit file", e)),
        }
    }
}

/// Represents the payload for creating a new repository via the REST API.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Default, Debug, Clone)]
pub struct RepositoryCreatePayload {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>, // Defaults to false if None
}

/// Payload for the contents API when committing a new file.
#[derive(Serialize, Debug)]
struct FileCreatePayload {
    message: String,
    content: String, // base64-encoded file content
}

/// Trait for the repository operations the bootstrapper needs.
///
/// Keeping this surface narrow lets the orchestration logic run against a
/// fake implementation in tests without network access.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Creates a new repository within the given organization.
    async fn create_org_repository(
        &self,
        org_name: &str,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error>;

    /// Creates a new repository under the authenticated user's own account.
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error>;

    /// Commits a single new file to the repository's default branch.
    ///
    /// # Arguments
    ///
    /// * `full_name` - The full name of the repository (owner/name).
    /// * `path` - The path of the file within the repository.
    /// * `content` - The raw file content.
    /// * `message` - The commit message.
    async fn create_file(
        &self,
        full_name: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<(), Error>;
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Errors
/// Returns an `Error::AuthError` if the client cannot be built from the
/// provided token.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build the GitHub client: {}", e)))
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            error!(
                error_message = source.message,
                status_code = source.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            if source.status_code.as_u16() == 404 {
                Error::NotFound
            } else {
                Error::ApiError(source.message.clone())
            }
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::ApiError(e.to_string())
        }
    }
}
