//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ngforge-adapters` crate provides implementations.

use crate::application::steps::StepId;
use crate::error::ForgeResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ngforge_adapters::filesystem::LocalFilesystem` (production)
/// - `ngforge_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - Paths are used as given; the orchestrator hands out absolute project
///   paths
/// - Only text files are read and written
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Write content to a file, replacing it when present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Options for a single command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory the command runs in. `None` means the current directory.
    pub working_dir: Option<PathBuf>,
    /// Suppress the command log lines (used for availability probes).
    pub silent: bool,
}

impl RunOptions {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            silent: false,
        }
    }

    pub fn silent() -> Self {
        Self {
            working_dir: None,
            silent: true,
        }
    }
}

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running shell commands.
///
/// Implemented by:
/// - `ngforge_adapters::runner::ShellCommandRunner` (production)
/// - `ngforge_adapters::runner::RecordingRunner` (testing, dry runs)
///
/// A non-zero exit must surface as `ApplicationError::CommandFailed` carrying
/// the captured streams; a process that cannot be started as
/// `ApplicationError::CommandSpawn`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str, options: &RunOptions) -> ForgeResult<CommandOutput>;
}

/// Port for progress feedback while a project is generated.
///
/// Implemented by the CLI (spinner or plain lines). All methods default to
/// doing nothing.
pub trait ProgressReporter {
    fn step_started(&mut self, _step: StepId) {}

    fn step_finished(&mut self, _step: StepId) {}

    /// Called before `<pm> install` runs in the new project.
    fn install_started(&mut self, _command: &str) {}
}

/// Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {}
