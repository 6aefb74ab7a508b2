//! Repository domain types.
//!
//! This module contains the data models returned by the GitHub client,
//! decoupled from the underlying octocrab response types.

use serde::Deserialize;
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// This struct contains the information about a just-created repository that
/// the bootstrapper consumes: its name, its full name (used to address
/// follow-up contents API calls), its visibility, and its clone URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The name of the repository
    name: String,
    /// Whether the repository is private
    private: bool,
    /// The Git clone URL, when GitHub returned one
    clone_url: Option<Url>,
}

impl Repository {
    /// Creates a new Repository instance.
    pub fn new(name: String, full_name: String, private: bool, clone_url: Option<Url>) -> Self {
        Self {
            full_name,
            name,
            private,
            clone_url,
        }
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the Git clone URL for the repository.
    ///
    /// Uses the URL reported by GitHub when present, and falls back to the
    /// canonical `https://github.com/{owner}/{name}.git` form otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the repository full name cannot be formatted into a valid URL.
    /// This should not happen with valid GitHub repository names.
    pub fn clone_url(&self) -> Url {
        match &self.clone_url {
            Some(url) => url.clone(),
            None => Url::parse(&format!("https://github.com/{}.git", self.full_name))
                .expect("Valid GitHub repository URL"),
        }
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            name: value.name.clone(),
            full_name: value.full_name.unwrap_or(value.name),
            private: value.private.unwrap_or(false),
            clone_url: value.clone_url,
        }
    }
}
