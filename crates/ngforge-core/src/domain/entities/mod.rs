pub mod common;
pub mod project_config;

pub use crate::domain::DomainError;
pub use common::ProjectName;
pub use project_config::{ProjectConfig, ProjectConfigBuilder};
