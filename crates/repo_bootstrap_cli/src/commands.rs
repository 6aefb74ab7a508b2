//! CLI command implementations.

/// Repository initialization command.
pub mod init_cmd;
