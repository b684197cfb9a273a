//! Generation steps.
//!
//! A project is produced by the base step (the Angular CLI's `ng new`)
//! followed by optional feature steps, each one a `(predicate, action)`
//! descriptor in a static table. The table order is the execution order:
//!
//! ```text
//! CreateBaseApp -> Styling -> TestRunner -> TestingLibrary -> Linter -> GitHooks -> EditorConfig
//! ```
//!
//! Steps receive a [`StepContext`] and talk to the outside world only
//! through it.

pub mod base_app;
pub mod editor_config;
pub mod git_hooks;
pub mod linter;
pub mod styling;
pub mod test_runner;
pub mod testing_library;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::{
    ApplicationError,
    ports::{CommandOutput, CommandRunner, Filesystem, RunOptions},
    services::JsonFile,
};
use crate::domain::ProjectConfig;
use crate::error::ForgeResult;

/// Identifier of a generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    CreateBaseApp,
    Styling,
    TestRunner,
    TestingLibrary,
    Linter,
    GitHooks,
    EditorConfig,
}

impl StepId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateBaseApp => "create-base-app",
            Self::Styling => "styling",
            Self::TestRunner => "test-runner",
            Self::TestingLibrary => "testing-library",
            Self::Linter => "linter",
            Self::GitHooks => "git-hooks",
            Self::EditorConfig => "editor-config",
        }
    }

    /// Progress label shown while the step runs.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CreateBaseApp => "Creating Angular application",
            Self::Styling => "Configuring Tailwind CSS",
            Self::TestRunner => "Configuring test runner",
            Self::TestingLibrary => "Adding Angular Testing Library",
            Self::Linter => "Configuring ESLint",
            Self::GitHooks => "Setting up Husky git hooks",
            Self::EditorConfig => "Writing AI editor configuration",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step descriptor: when it applies and what it does.
#[derive(Clone, Copy)]
pub struct StepDef {
    pub id: StepId,
    pub applies: fn(&ProjectConfig) -> bool,
    pub run: fn(&StepContext<'_>) -> ForgeResult<()>,
}

impl fmt::Debug for StepDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDef").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Always runs, first.
pub static BASE_STEP: StepDef = StepDef {
    id: StepId::CreateBaseApp,
    applies: always,
    run: base_app::run,
};

/// Optional steps in execution order.
pub static FEATURE_STEPS: &[StepDef] = &[
    StepDef {
        id: StepId::Styling,
        applies: styling::applies,
        run: styling::run,
    },
    StepDef {
        id: StepId::TestRunner,
        applies: test_runner::applies,
        run: test_runner::run,
    },
    StepDef {
        id: StepId::TestingLibrary,
        applies: testing_library::applies,
        run: testing_library::run,
    },
    StepDef {
        id: StepId::Linter,
        applies: linter::applies,
        run: linter::run,
    },
    StepDef {
        id: StepId::GitHooks,
        applies: git_hooks::applies,
        run: git_hooks::run,
    },
    StepDef {
        id: StepId::EditorConfig,
        applies: editor_config::applies,
        run: editor_config::run,
    },
];

fn always(_: &ProjectConfig) -> bool {
    true
}

/// The steps that would run for `config`, in order, without running them.
pub fn plan(config: &ProjectConfig) -> Vec<StepId> {
    std::iter::once(&BASE_STEP)
        .chain(FEATURE_STEPS.iter())
        .filter(|step| (step.applies)(config))
        .map(|step| step.id)
        .collect()
}

/// Everything a step may use.
pub struct StepContext<'a> {
    pub config: &'a ProjectConfig,
    /// Directory the project is created in.
    pub base_dir: &'a Path,
    /// `base_dir/<name>`.
    pub project_path: PathBuf,
    /// Resolved package-manager command (`"pnpm"`, `"npx yarn"`, ...).
    pub package_manager: &'a str,
    /// Version tag passed to `npx @angular/cli@<version>`.
    pub angular_cli_version: &'a str,
    runner: &'a dyn CommandRunner,
    fs: &'a dyn Filesystem,
}

impl<'a> StepContext<'a> {
    pub fn new(
        config: &'a ProjectConfig,
        base_dir: &'a Path,
        package_manager: &'a str,
        angular_cli_version: &'a str,
        runner: &'a dyn CommandRunner,
        fs: &'a dyn Filesystem,
    ) -> Self {
        Self {
            config,
            base_dir,
            project_path: base_dir.join(config.name().as_str()),
            package_manager,
            angular_cli_version,
            runner,
            fs,
        }
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_path.join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.fs.exists(&self.path(relative))
    }

    /// Run a command inside the project directory.
    pub fn exec(&self, command: &str) -> ForgeResult<CommandOutput> {
        self.runner
            .run(command, &RunOptions::in_dir(&self.project_path))
    }

    /// Run a command in an arbitrary directory.
    pub fn exec_in(&self, dir: &Path, command: &str) -> ForgeResult<CommandOutput> {
        self.runner.run(command, &RunOptions::in_dir(dir))
    }

    /// Add development dependencies with the chosen package manager.
    pub fn install_dev(&self, packages: &[&str]) -> ForgeResult<CommandOutput> {
        let command = format!(
            "{} {} {}",
            self.package_manager,
            self.config.package_manager().add_dev_args(),
            packages.join(" ")
        );
        self.exec(&command)
    }

    pub fn json(&self) -> JsonFile<'a> {
        JsonFile::new(self.fs)
    }

    /// Write a project-relative file, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> ForgeResult<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&path, content)?;
        Ok(path)
    }

    /// [`write_file`](Self::write_file) followed by setting the executable bit.
    pub fn write_executable(&self, relative: &str, content: &str) -> ForgeResult<PathBuf> {
        let path = self.write_file(relative, content)?;
        self.fs.set_permissions(&path, true)?;
        Ok(path)
    }

    pub fn read_file(&self, relative: &str) -> ForgeResult<String> {
        self.fs.read_to_string(&self.path(relative))
    }

    pub fn create_dir(&self, relative: &str) -> ForgeResult<()> {
        self.fs.create_dir_all(&self.path(relative))
    }

    /// Path of a file the base app must contain, or `MissingProjectFile`.
    pub fn require_file(&self, relative: &str) -> ForgeResult<PathBuf> {
        let path = self.path(relative);
        if self.fs.exists(&path) {
            Ok(path)
        } else {
            Err(ApplicationError::MissingProjectFile { path }.into())
        }
    }
}
