use super::*;

#[test]
fn test_readme_content_interpolates_name_and_description() {
    let content = readme_content("demo", "A demo");
    assert_eq!(content, "# demo\n\nA demo\n");
}

#[test]
fn test_readme_content_empty_description() {
    let content = readme_content("demo", "");
    assert_eq!(content, "# demo\n\n\n");
}

#[test]
fn test_structural_file_order() {
    let paths: Vec<&str> = STRUCTURAL_FILES.iter().map(|f| f.path).collect();
    assert_eq!(
        paths,
        vec![
            ".gitignore",
            "src/main.py",
            "Dockerfile",
            ".github/workflows/ci.yml",
            "services/example_service/main.py",
        ]
    );
}

#[test]
fn test_gitignore_bytes() {
    // Byte-for-byte compatible with the original bootstrapper.
    assert_eq!(STRUCTURAL_FILES[0].content, "*.pyc\n__pycache__/\n.env\n");
}

#[test]
fn test_main_stub_bytes() {
    assert_eq!(
        STRUCTURAL_FILES[1].content,
        "print('Hello from your new project!')\n"
    );
}

#[test]
fn test_dockerfile_template() {
    let dockerfile = STRUCTURAL_FILES[2].content;
    assert!(dockerfile.starts_with("FROM python:3.11-slim\n"));
    assert!(dockerfile.contains("RUN pip install -r requirements.txt || true"));
    assert!(dockerfile.ends_with("CMD [\"python\", \"src/main.py\"]\n"));
}

#[test]
fn test_ci_workflow_template() {
    let workflow = STRUCTURAL_FILES[3].content;
    assert!(workflow.starts_with("name: CI\n"));
    assert!(workflow.contains("on: [push]"));
    assert!(workflow.contains("actions/checkout@v4"));
    assert!(workflow.contains("run: python src/main.py"));
}

#[test]
fn test_commit_messages_name_the_file() {
    for file in STRUCTURAL_FILES {
        assert_eq!(file.message, format!("Add {}", file.path));
    }
}
