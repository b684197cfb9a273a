//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ngforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Child processes (Angular CLI, package managers, git)
//!   - `ProgressReporter`: Step progress feedback
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandOutput, CommandRunner, Filesystem, NoopReporter, ProgressReporter, RunOptions,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
