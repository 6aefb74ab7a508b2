//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. It provides error context for debugging and error
//! handling in applications using this client.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// This enum represents all possible error conditions when working with the GitHub API,
/// including authentication failures, API errors, and data processing issues. None of
/// these conditions is retried by the client; every failure propagates to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitHub API request failure.
    ///
    /// This error occurs when a GitHub API request is rejected or cannot be
    /// completed. Common causes include:
    /// - A repository or file with the same name already exists
    /// - The token lacks the necessary scope for the operation
    /// - Network connectivity issues
    ///
    /// The contained string holds the message GitHub returned, or the
    /// transport error description for network failures.
    #[error("GitHub API request failed: {0}")]
    ApiError(String),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be constructed from the
    /// provided personal access token.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// This error indicates that the API response structure doesn't match
    /// what the client expects, for example after API version changes.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the requested resource (organization, repository, etc.)
    /// does not exist or is not accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,
}
