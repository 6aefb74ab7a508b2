//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "ghp_test_token";

fn create_test_client(mock_server: &MockServer) -> GitHubClient {
    let octocrab = octocrab::Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token(TEST_TOKEN.to_string())
        .build()
        .unwrap();
    GitHubClient::new(octocrab)
}

#[tokio::test]
async fn test_create_user_repository_success() {
    let mock_server = MockServer::start().await;
    let payload = RepositoryCreatePayload {
        name: "test-repo".to_string(),
        description: Some("A test repository".to_string()),
        private: Some(true),
    };

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_partial_json(json!({
            "name": "test-repo",
            "description": "A test repository",
            "private": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 123456,
            "name": "test-repo",
            "full_name": "test-user/test-repo",
            "private": true,
            "clone_url": "https://github.com/test-user/test-repo.git",
            "url": "https://api.github.com/repos/test-user/test-repo"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.create_user_repository(&payload).await;

    if let Err(e) = &result {
        eprintln!("create_user_repository error: {e:?}");
    }
    let repo = result.unwrap();
    assert_eq!(repo.name(), "test-repo");
    assert_eq!(repo.full_name(), "test-user/test-repo");
    assert!(repo.is_private());
    assert_eq!(
        repo.clone_url().as_str(),
        "https://github.com/test-user/test-repo.git"
    );
}

#[tokio::test]
async fn test_create_org_repository_success() {
    let mock_server = MockServer::start().await;
    let org_name = "test-org";
    let payload = RepositoryCreatePayload {
        name: "test-repo".to_string(),
        description: None,
        private: Some(false),
    };

    Mock::given(method("POST"))
        .and(path(format!("/orgs/{org_name}/repos")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 123456,
            "name": "test-repo",
            "full_name": "test-org/test-repo",
            "private": false,
            "url": "https://api.github.com/repos/test-org/test-repo"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.create_org_repository(org_name, &payload).await;

    if let Err(e) = &result {
        eprintln!("create_org_repository error: {e:?}");
    }
    let repo = result.unwrap();
    assert_eq!(repo.full_name(), "test-org/test-repo");
    assert!(!repo.is_private());
}

#[tokio::test]
async fn test_create_repository_name_conflict() {
    let mock_server = MockServer::start().await;
    let payload = RepositoryCreatePayload {
        name: "taken".to_string(),
        description: None,
        private: None,
    };

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "errors": [{
                "resource": "Repository",
                "code": "custom",
                "field": "name",
                "message": "name already exists on this account"
            }],
            "documentation_url": "https://docs.github.com/rest/repos/repos#create-a-repository-for-the-authenticated-user"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.create_user_repository(&payload).await;

    assert!(matches!(result, Err(Error::ApiError(_))));
}

#[tokio::test]
async fn test_create_file_success() {
    let mock_server = MockServer::start().await;

    // "# demo\n" base64-encoded
    Mock::given(method("PUT"))
        .and(path("/repos/test-user/demo/contents/README.md"))
        .and(body_partial_json(json!({
            "message": "Add README.md",
            "content": "IyBkZW1vCg=="
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": { "name": "README.md", "path": "README.md" },
            "commit": { "sha": "abc123" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .create_file("test-user/demo", "README.md", "# demo\n", "Add README.md")
        .await;

    if let Err(e) = &result {
        eprintln!("create_file error: {e:?}");
    }
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_file_nested_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/test-user/demo/contents/.github/workflows/ci.yml"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": { "path": ".github/workflows/ci.yml" },
            "commit": { "sha": "def456" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .create_file(
            "test-user/demo",
            ".github/workflows/ci.yml",
            "name: CI\n",
            "Add .github/workflows/ci.yml",
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_file_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/test-user/demo/contents/LICENSE"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid request.\n\n\"sha\" wasn't supplied.",
            "documentation_url": "https://docs.github.com/rest/repos/contents#create-or-update-file-contents"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .create_file("test-user/demo", "LICENSE", "MIT License", "Add LICENSE")
        .await;

    assert!(matches!(result, Err(Error::ApiError(_))));
}

#[tokio::test]
async fn test_create_token_client() {
    let result = create_token_client(TEST_TOKEN);
    assert!(result.is_ok());
}
