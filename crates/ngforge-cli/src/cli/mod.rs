//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ngforge_core::domain::{Linter, PackageManager, ProjectType, StyleLanguage, TestRunner};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ngforge",
    bin_name = "ngforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive Angular project generator",
    long_about = "ngforge creates an Angular application with the Angular CLI and \
                  layers tooling on top: test runner, Testing Library, ESLint, \
                  Husky git hooks, AI editor rules and Tailwind.",
    after_help = "EXAMPLES:\n\
        \x20 ngforge new\n\
        \x20 ngforge new my-app --style tailwind --test-runner vitest --yes\n\
        \x20 ngforge new my-app --package-manager pnpm --type ssr --linter none -y\n\
        \x20 ngforge completions bash > /usr/share/bash-completion/completions/ngforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Angular project.
    #[command(
        visible_alias = "n",
        about = "Create a new Angular project",
        after_help = "EXAMPLES:\n\
            \x20 ngforge new                                  # answer every question\n\
            \x20 ngforge new my-app -y                        # configured defaults\n\
            \x20 ngforge new my-app --test-runner jest --no-husky\n\
            \x20 ngforge new my-app --dry-run --output-format json"
    )]
    New(NewArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ngforge init                         # default location\n\
            \x20 ngforge init --force                 # overwrite\n\
            \x20 ngforge --config ./ngforge.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ngforge completions bash > ~/.local/share/bash-completion/completions/ngforge\n\
            \x20 ngforge completions zsh  > ~/.zfunc/_ngforge\n\
            \x20 ngforge completions fish > ~/.config/fish/completions/ngforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the ngforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ngforge config get defaults.package_manager\n\
            \x20 ngforge config set defaults.package_manager pnpm\n\
            \x20 ngforge config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `ngforge new`.
///
/// Every question of the interactive flow has a flag. Answers given here are
/// never asked again.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name (lowercase letters, digits and hyphens).
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 'p',
        long = "package-manager",
        visible_alias = "pm",
        value_name = "PM",
        value_enum,
        help = "Package manager"
    )]
    pub package_manager: Option<PackageManagerArg>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub project_type: Option<ProjectTypeArg>,

    #[arg(
        short = 's',
        long = "style",
        value_name = "STYLE",
        value_enum,
        help = "Styling"
    )]
    pub style: Option<StyleArg>,

    #[arg(
        long = "test-runner",
        value_name = "RUNNER",
        value_enum,
        help = "Unit test runner"
    )]
    pub test_runner: Option<TestRunnerArg>,

    #[arg(
        long = "testing-library",
        overrides_with = "no_testing_library",
        help = "Add Angular Testing Library"
    )]
    pub testing_library: bool,

    #[arg(
        long = "no-testing-library",
        overrides_with = "testing_library",
        help = "Skip Angular Testing Library"
    )]
    pub no_testing_library: bool,

    #[arg(long = "linter", value_name = "LINTER", value_enum, help = "Linter")]
    pub linter: Option<LinterArg>,

    #[arg(
        long = "husky",
        overrides_with = "no_husky",
        help = "Add Husky and lint-staged git hooks"
    )]
    pub husky: bool,

    #[arg(long = "no-husky", overrides_with = "husky", help = "Skip git hooks")]
    pub no_husky: bool,

    #[arg(
        long = "ai-config",
        overrides_with = "no_ai_config",
        help = "Add VS Code settings and Cursor rules"
    )]
    pub ai_config: bool,

    #[arg(
        long = "no-ai-config",
        overrides_with = "ai_config",
        help = "Skip editor configuration"
    )]
    pub no_ai_config: bool,

    /// Directory the project folder is created in.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory of the new project"
    )]
    pub directory: PathBuf,

    /// Never prompt; unanswered questions take the configured defaults.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,

    #[arg(long = "skip-install", help = "Do not run the final dependency install")]
    pub skip_install: bool,

    #[arg(long = "skip-node-check", help = "Do not check the Node.js version first")]
    pub skip_node_check: bool,

    /// Preview the Angular CLI command and the steps without running anything.
    #[arg(long = "dry-run", help = "Show what would run without running it")]
    pub dry_run: bool,
}

impl NewArgs {
    pub fn testing_library(&self) -> Option<bool> {
        flag_pair(self.testing_library, self.no_testing_library)
    }

    pub fn husky(&self) -> Option<bool> {
        flag_pair(self.husky, self.no_husky)
    }

    pub fn ai_config(&self) -> Option<bool> {
        flag_pair(self.ai_config, self.no_ai_config)
    }
}

/// `--x` / `--no-x` to an optional answer.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ngforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ngforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ngforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.package_manager`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => Self::Npm,
            PackageManagerArg::Pnpm => Self::Pnpm,
            PackageManagerArg::Yarn => Self::Yarn,
            PackageManagerArg::Bun => Self::Bun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectTypeArg {
    /// Client-side single page application.
    Spa,
    /// Server-side rendering.
    Ssr,
}

impl From<ProjectTypeArg> for ProjectType {
    fn from(arg: ProjectTypeArg) -> Self {
        match arg {
            ProjectTypeArg::Spa => Self::Spa,
            ProjectTypeArg::Ssr => Self::Ssr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    Css,
    /// Also accepted as `sass`.
    #[value(alias = "sass")]
    Scss,
    /// Tailwind CSS v4 through PostCSS.
    #[value(alias = "tailwindcss")]
    Tailwind,
}

impl From<StyleArg> for StyleLanguage {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Css => Self::Css,
            StyleArg::Scss => Self::Scss,
            StyleArg::Tailwind => Self::Tailwind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TestRunnerArg {
    Vitest,
    Jest,
    /// No unit test runner; the Angular CLI skips spec files.
    None,
}

impl From<TestRunnerArg> for TestRunner {
    fn from(arg: TestRunnerArg) -> Self {
        match arg {
            TestRunnerArg::Vitest => Self::Vitest,
            TestRunnerArg::Jest => Self::Jest,
            TestRunnerArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LinterArg {
    Eslint,
    None,
}

impl From<LinterArg> for Linter {
    fn from(arg: LinterArg) -> Self {
        match arg {
            LinterArg::Eslint => Self::Eslint,
            LinterArg::None => Self::None,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
