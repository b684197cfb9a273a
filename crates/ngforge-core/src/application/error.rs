//! Application layer errors.
//!
//! These errors represent failures while generating a project: child
//! processes, configuration files and the filesystem. Invalid answers are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A child process exited unsuccessfully.
    #[error("Command failed{}: {command}", exit_suffix(.exit_code))]
    CommandFailed {
        command: String,
        /// `None` when the process was terminated by a signal.
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// A child process could not be started at all.
    #[error("Could not start command '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// A configuration file is not valid JSON (after comment stripping).
    #[error("Invalid JSON in {path}: {reason}")]
    JsonParse { path: PathBuf, reason: String },

    /// A JSON document has a different shape than the patch expects.
    #[error("Unexpected JSON structure in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the Angular CLI should have generated is missing.
    #[error("Expected project file is missing: {path}")]
    MissingProjectFile { path: PathBuf },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Node.js is missing or older than the Angular CLI requires.
    #[error("Node.js {required}+ is required, found {found}")]
    UnsupportedNodeVersion { required: u32, found: String },
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}"))
        .unwrap_or_default()
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { command, .. } => vec![
                format!("The command '{}' did not succeed", command),
                "Run it manually inside the project to see the full output".into(),
                "Re-run with -v to log every command".into(),
            ],
            Self::CommandSpawn { .. } => vec![
                "Check that a shell is available on PATH".into(),
                "Check that the working directory exists".into(),
            ],
            Self::JsonParse { path, .. } => vec![
                format!("Fix the syntax of {}", path.display()),
                "Comments are allowed, trailing commas are not".into(),
            ],
            Self::JsonShape { path, .. } => vec![
                format!("Check that {} has a top-level object", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::MissingProjectFile { path } => vec![
                format!("The Angular CLI did not produce {}", path.display()),
                "Check the Angular CLI version with: npx @angular/cli version".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or generate into another directory with -C <DIR>".into(),
            ],
            Self::UnsupportedNodeVersion { required, .. } => vec![
                format!("Install Node.js {} or newer from https://nodejs.org", required),
                "Or skip the check with --skip-node-check".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandSpawn { .. } => ErrorCategory::Execution,
            Self::JsonParse { .. } | Self::JsonShape { .. } => ErrorCategory::Parse,
            Self::FilesystemError { .. } | Self::MissingProjectFile { .. } => {
                ErrorCategory::FileSystem
            }
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::UnsupportedNodeVersion { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_message_includes_exit_code() {
        let err = ApplicationError::CommandFailed {
            command: "npm install".into(),
            exit_code: Some(2),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Command failed with exit code 2: npm install");
    }

    #[test]
    fn command_failed_without_code() {
        let err = ApplicationError::CommandFailed {
            command: "ng new".into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Command failed: ng new");
    }

    #[test]
    fn node_version_suggests_skip_flag() {
        let err = ApplicationError::UnsupportedNodeVersion {
            required: 20,
            found: "v18.19.0".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--skip-node-check")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
