//! Core domain layer for ngforge.
//!
//! This module contains pure logic with no I/O of its own. Running commands
//! and touching files is done through ports defined in the application
//! layer.
//!
//! ## Contents
//!
//! - **Value objects**: the closed set of answers to each question
//! - **Entities**: `ProjectName` and the immutable `ProjectConfig`
//! - **JSONC**: comment stripping for Angular's `tsconfig*.json` files
//! - **Assets**: static contents of generated files

pub mod assets;
pub mod entities;
pub mod error;
pub mod jsonc;
pub mod value_objects;

pub use entities::{ProjectConfig, ProjectConfigBuilder, ProjectName};

pub use error::DomainError;

pub use value_objects::{Linter, PackageManager, ProjectType, StyleLanguage, TestRunner};
