//! ngforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ngforge
//! Angular project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ngforge-cli (CLI)             │
//! │   (prompts, config, output, errors)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, JsonFile, Resolver)  │
//! │     + ordered table of feature steps    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Progress)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ngforge-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ShellCommandRunner)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectConfig, value objects, JSONC)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ngforge_core::prelude::*;
//! use std::path::Path;
//!
//! # fn run(service: ScaffoldService) -> ForgeResult<()> {
//! let config = ProjectConfig::builder(ProjectName::try_new("shop")?)
//!     .package_manager(PackageManager::Pnpm)
//!     .styles(StyleLanguage::Tailwind)
//!     .build();
//!
//! let report = service.scaffold(&config, Path::new("."), &mut NoopReporter)?;
//! println!("created {}", report.project_path.display());
//! # Ok(())
//! # }
//! ```

// Domain layer (pure, no I/O)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        JsonFile, PackageManagerResolver, ScaffoldOptions, ScaffoldReport, ScaffoldService,
        StepId,
        ports::{
            CommandOutput, CommandRunner, Filesystem, NoopReporter, ProgressReporter, RunOptions,
        },
    };
    pub use crate::domain::{
        Linter, PackageManager, ProjectConfig, ProjectName, ProjectType, StyleLanguage, TestRunner,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
