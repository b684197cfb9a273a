//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "patch a JSON file".

pub mod json_patch;
pub mod package_manager;
pub mod scaffold_service;

pub use json_patch::{JsonFile, object_entry};
pub use package_manager::PackageManagerResolver;
pub use scaffold_service::{
    DEFAULT_ANGULAR_CLI_VERSION, MIN_NODE_MAJOR, ScaffoldOptions, ScaffoldReport, ScaffoldService,
};
