//! Fixed scaffold file definitions.
//!
//! Every file the bootstrapper commits is defined here as a (path, content,
//! commit message) triple. The README is the only file with interpolated
//! content; everything else is a fixed template.

#[cfg(test)]
#[path = "scaffold_tests.rs"]
mod tests;

/// A single boilerplate file to commit to the new repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path of the file within the repository.
    pub path: &'static str,
    /// Fixed file content.
    pub content: &'static str,
    /// Commit message for the file.
    pub message: &'static str,
}

pub const README_PATH: &str = "README.md";
pub const README_MESSAGE: &str = "Add README.md";

pub const LICENSE_PATH: &str = "LICENSE";
pub const LICENSE_MESSAGE: &str = "Add LICENSE";

const GITIGNORE_CONTENT: &str = "*.pyc\n__pycache__/\n.env\n";

const MAIN_STUB_CONTENT: &str = "print('Hello from your new project!')\n";

const SERVICE_STUB_CONTENT: &str = "print('Hello from example_service!')\n";

const DOCKERFILE_CONTENT: &str = "\
FROM python:3.11-slim
WORKDIR /app
COPY . .
RUN pip install -r requirements.txt || true
CMD [\"python\", \"src/main.py\"]
";

const CI_WORKFLOW_CONTENT: &str = "\
name: CI

on: [push]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-python@v5
        with:
          python-version: '3.11'
      - run: pip install -r requirements.txt || true
      - run: python src/main.py
";

/// The structural files written once per successful run, in this order,
/// regardless of the readme and license flags.
pub const STRUCTURAL_FILES: [ScaffoldFile; 5] = [
    ScaffoldFile {
        path: ".gitignore",
        content: GITIGNORE_CONTENT,
        message: "Add .gitignore",
    },
    ScaffoldFile {
        path: "src/main.py",
        content: MAIN_STUB_CONTENT,
        message: "Add src/main.py",
    },
    ScaffoldFile {
        path: "Dockerfile",
        content: DOCKERFILE_CONTENT,
        message: "Add Dockerfile",
    },
    ScaffoldFile {
        path: ".github/workflows/ci.yml",
        content: CI_WORKFLOW_CONTENT,
        message: "Add .github/workflows/ci.yml",
    },
    ScaffoldFile {
        path: "services/example_service/main.py",
        content: SERVICE_STUB_CONTENT,
        message: "Add services/example_service/main.py",
    },
];

/// Renders the README content for a repository.
pub fn readme_content(name: &str, description: &str) -> String {
    format!("# {}\n\n{}\n", name, description)
}
