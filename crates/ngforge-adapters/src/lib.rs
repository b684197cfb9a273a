//! Infrastructure adapters for ngforge.
//!
//! This crate implements the ports defined in `ngforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{RecordingRunner, ShellCommandRunner};
