//! Application layer for ngforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, JsonFile, PackageManagerResolver)
//! - **Steps**: The ordered table of generation steps
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the rules about
//! valid answers live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod steps;

// Re-export main services
pub use services::{
    DEFAULT_ANGULAR_CLI_VERSION, JsonFile, MIN_NODE_MAJOR, PackageManagerResolver,
    ScaffoldOptions, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, CommandRunner, Filesystem, ProgressReporter, RunOptions};

pub use steps::StepId;

pub use error::ApplicationError;
