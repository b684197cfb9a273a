//! Unified error handling for ngforge core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ngforge core operations.
///
/// This enum wraps all possible errors that can occur when using ngforge-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Errors from the domain layer (invalid answers).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (commands, files, JSON).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ForgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in ngforge".into(),
                "Please report this issue at: https://github.com/cosecruz/ngforge/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The failing command's stderr, when the error came from a child process.
    pub fn command_stderr(&self) -> Option<&str> {
        match self {
            Self::Application(ApplicationError::CommandFailed { stderr, .. }) => Some(stderr),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Execution,
    Parse,
    FileSystem,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn command_failure_exposes_stderr() {
        let err: ForgeError = ApplicationError::CommandFailed {
            command: "npm install".into(),
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "ERESOLVE".into(),
        }
        .into();

        assert_eq!(err.command_stderr(), Some("ERESOLVE"));
        assert_eq!(err.category(), ErrorCategory::Execution);
    }

    #[test]
    fn domain_errors_map_to_validation() {
        let err: ForgeError = DomainError::InvalidProjectName {
            name: "X".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.command_stderr().is_none());
    }

    #[test]
    fn json_parse_is_parse_category() {
        let err: ForgeError = ApplicationError::JsonParse {
            path: PathBuf::from("package.json"),
            reason: "expected value".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Parse);
    }
}
