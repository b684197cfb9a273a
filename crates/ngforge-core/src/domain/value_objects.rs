//! Domain value objects: PackageManager, ProjectType, StyleLanguage,
//! TestRunner, Linter.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one mirrors exactly one question of the project questionnaire and
//! carries its string representation, a case-insensitive `FromStr` parser,
//! and the command-line fragments the steps derive from it.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Extend `ALL` so prompts and shell completions list it
//! 4. Handle it in the step that consumes the field

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PackageManager ───────────────────────────────────────────────────────────

/// The package manager used to install dependencies in the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [Self; 4] = [Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// The manager every Node.js installation ships with.
    ///
    /// The resolver never probes for it.
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Npm)
    }

    /// Subcommand that adds packages as development dependencies.
    pub const fn add_dev_args(&self) -> &'static str {
        match self {
            Self::Npm => "install -D",
            Self::Pnpm | Self::Yarn => "add -D",
            Self::Bun => "add -d",
        }
    }

    /// Subcommand that installs everything listed in the manifest.
    pub const fn install_args(&self) -> &'static str {
        "install"
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::UnknownValue {
                field: "package manager",
                value: other.to_string(),
            }),
        }
    }
}

// ── ProjectType ──────────────────────────────────────────────────────────────

/// Rendering model of the generated application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Single page application, client-side rendering only.
    #[default]
    Spa,
    /// Server-side rendering.
    Ssr,
}

impl ProjectType {
    pub const ALL: [Self; 2] = [Self::Spa, Self::Ssr];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spa => "spa",
            Self::Ssr => "ssr",
        }
    }

    pub const fn is_ssr(&self) -> bool {
        matches!(self, Self::Ssr)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spa" => Ok(Self::Spa),
            "ssr" => Ok(Self::Ssr),
            other => Err(DomainError::UnknownValue {
                field: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── StyleLanguage ────────────────────────────────────────────────────────────

/// Stylesheet flavour of the generated application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLanguage {
    #[default]
    Css,
    Scss,
    Tailwind,
}

impl StyleLanguage {
    pub const ALL: [Self; 3] = [Self::Css, Self::Scss, Self::Tailwind];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
        }
    }

    /// Value passed to `ng new --style`.
    ///
    /// Angular CLI 21 accepts `tailwind` natively, so every variant maps
    /// onto itself.
    pub const fn cli_flag_value(&self) -> &'static str {
        self.as_str()
    }

    /// Global stylesheet the Angular CLI generates for this flavour.
    pub const fn global_stylesheet(&self) -> &'static str {
        match self {
            Self::Css | Self::Tailwind => "src/styles.css",
            Self::Scss => "src/styles.scss",
        }
    }
}

impl fmt::Display for StyleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" | "sass" => Ok(Self::Scss),
            "tailwind" | "tailwindcss" => Ok(Self::Tailwind),
            other => Err(DomainError::UnknownValue {
                field: "style",
                value: other.to_string(),
            }),
        }
    }
}

// ── TestRunner ───────────────────────────────────────────────────────────────

/// Unit-test runner configured in the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestRunner {
    #[default]
    Vitest,
    Jest,
    /// No test runner; the base app is generated with `--skip-tests`.
    None,
}

impl TestRunner {
    pub const ALL: [Self; 3] = [Self::Vitest, Self::Jest, Self::None];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vitest => "vitest",
            Self::Jest => "jest",
            Self::None => "none",
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human-readable name used in generated documentation files.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vitest => "Vitest",
            Self::Jest => "Jest",
            Self::None => "no test runner",
        }
    }
}

impl fmt::Display for TestRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestRunner {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vitest" => Ok(Self::Vitest),
            "jest" => Ok(Self::Jest),
            "none" => Ok(Self::None),
            other => Err(DomainError::UnknownValue {
                field: "test runner",
                value: other.to_string(),
            }),
        }
    }
}

// ── Linter ───────────────────────────────────────────────────────────────────

/// Linter configured in the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    #[default]
    Eslint,
    None,
}

impl Linter {
    pub const ALL: [Self; 2] = [Self::Eslint, Self::None];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eslint => "eslint",
            Self::None => "none",
        }
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Eslint)
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Linter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eslint" => Ok(Self::Eslint),
            "none" => Ok(Self::None),
            other => Err(DomainError::UnknownValue {
                field: "linter",
                value: other.to_string(),
            }),
        }
    }
}
