use super::*;

#[test]
fn test_token_present() {
    let result = resolve_token_value(Some("ghp_abc123".to_string()));
    assert_eq!(result.unwrap(), "ghp_abc123");
}

#[test]
fn test_token_absent() {
    let result = resolve_token_value(None);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_token_empty() {
    let result = resolve_token_value(Some(String::new()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_token_blank() {
    let result = resolve_token_value(Some("   ".to_string()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_error_message_names_the_variable() {
    let error = resolve_token_value(None).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Configuration error: Environment variable GITHUB_TOKEN not set."
    );
}
