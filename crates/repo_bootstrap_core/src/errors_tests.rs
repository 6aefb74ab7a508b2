use super::*;
use std::error::Error as StdError;

#[test]
fn test_repository_creation_error() {
    let error = Error::RepositoryCreation {
        name: "demo".to_string(),
        source: github_client::Error::ApiError("name already exists".to_string()),
    };

    assert_eq!(error.to_string(), "Failed to create repository 'demo'");
    assert!(error.source().is_some());
}

#[test]
fn test_file_creation_error() {
    let error = Error::FileCreation {
        path: "README.md".to_string(),
        source: github_client::Error::InvalidResponse,
    };

    assert_eq!(error.to_string(), "Failed to create file 'README.md'");
    assert!(error.source().is_some());
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
