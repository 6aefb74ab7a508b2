//! Credential resolution.
//!
//! The CLI authenticates with a GitHub personal access token read from the
//! process environment. Resolution happens before any network call so a
//! missing token fails fast with a configuration error.

use crate::errors::Error;

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;

/// Environment variable holding the GitHub personal access token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Reads the personal access token from the environment.
///
/// # Errors
///
/// Returns `Error::Config` when the variable is absent or blank.
pub fn resolve_token() -> Result<String, Error> {
    resolve_token_value(std::env::var(GITHUB_TOKEN_VAR).ok())
}

fn resolve_token_value(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::Config(format!(
            "Environment variable {} not set.",
            GITHUB_TOKEN_VAR
        ))),
    }
}
