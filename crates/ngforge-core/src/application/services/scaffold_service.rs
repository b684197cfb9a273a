//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Check the Node.js version (optional)
//! 2. Refuse to overwrite an existing project directory
//! 3. Resolve the package manager command
//! 4. Run the base step, then every applicable feature step in order
//! 5. Install dependencies (optional)
//!
//! Steps run sequentially. The first failure aborts the run and whatever was
//! generated so far stays on disk.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ProgressReporter, RunOptions},
        services::PackageManagerResolver,
        steps::{self, BASE_STEP, FEATURE_STEPS, StepContext, StepDef, StepId},
    },
    domain::ProjectConfig,
    error::ForgeResult,
};

/// Lowest Node.js major version the Angular CLI supports.
pub const MIN_NODE_MAJOR: u32 = 20;

/// Angular CLI version used when none is configured.
pub const DEFAULT_ANGULAR_CLI_VERSION: &str = "21";

/// Knobs that are not part of the project itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub angular_cli_version: String,
    pub check_node: bool,
    pub skip_install: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            angular_cli_version: DEFAULT_ANGULAR_CLI_VERSION.to_string(),
            check_node: true,
            skip_install: false,
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    /// Resolved package-manager command.
    pub package_manager: String,
    pub steps: Vec<StepId>,
    pub installed: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ngforge_core::application::{ScaffoldOptions, ScaffoldService};
    /// # fn adapters() -> (Box<dyn ngforge_core::application::ports::CommandRunner>, Box<dyn ngforge_core::application::ports::Filesystem>) { unimplemented!() }
    /// let (runner, filesystem) = adapters();
    /// let service = ScaffoldService::new(runner, filesystem, ScaffoldOptions::default());
    /// ```
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        options: ScaffoldOptions,
    ) -> Self {
        Self {
            runner,
            filesystem,
            options,
        }
    }

    pub fn options(&self) -> &ScaffoldOptions {
        &self.options
    }

    /// The steps `scaffold` would run for `config`, without side effects.
    pub fn plan(&self, config: &ProjectConfig) -> Vec<StepId> {
        steps::plan(config)
    }

    /// The `ng new` command line `scaffold` would run.
    pub fn base_command(&self, config: &ProjectConfig) -> String {
        steps::base_app::base_command(config, &self.options.angular_cli_version)
    }

    /// Generate a project under `base_dir`.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            base_dir = %base_dir.display()
        )
    )]
    pub fn scaffold(
        &self,
        config: &ProjectConfig,
        base_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> ForgeResult<ScaffoldReport> {
        info!("Generating Angular project");

        if self.options.check_node {
            self.check_node()?;
        }

        let project_path = base_dir.join(config.name().as_str());
        if self.filesystem.exists(&project_path) {
            return Err(ApplicationError::ProjectExists { path: project_path }.into());
        }

        let package_manager =
            PackageManagerResolver::new(self.runner.as_ref()).resolve(config.package_manager());
        info!(package_manager = %package_manager, "Package manager resolved");

        let ctx = StepContext::new(
            config,
            base_dir,
            &package_manager,
            &self.options.angular_cli_version,
            self.runner.as_ref(),
            self.filesystem.as_ref(),
        );

        let mut executed = Vec::new();
        for step in std::iter::once(&BASE_STEP).chain(FEATURE_STEPS.iter()) {
            if !(step.applies)(config) {
                continue;
            }
            run_step(step, &ctx, reporter)?;
            executed.push(step.id);
        }

        let installed = if self.options.skip_install {
            info!("Skipping dependency installation");
            false
        } else {
            let command = format!(
                "{} {}",
                package_manager,
                config.package_manager().install_args()
            );
            reporter.install_started(&command);
            ctx.exec(&command)?;
            true
        };

        info!(steps = executed.len(), "Project generated successfully");
        Ok(ScaffoldReport {
            project_path,
            package_manager,
            steps: executed,
            installed,
        })
    }

    /// Fail unless `node --version` reports at least [`MIN_NODE_MAJOR`].
    ///
    /// `scaffold` runs this itself when `check_node` is set; callers that
    /// want to fail before collecting answers can run it up front instead.
    pub fn check_node(&self) -> ForgeResult<()> {
        let found = match self.runner.run("node --version", &RunOptions::silent()) {
            Ok(output) => output.stdout.trim().to_string(),
            Err(_) => "no Node.js installation".to_string(),
        };

        match parse_node_major(&found) {
            Some(major) if major >= MIN_NODE_MAJOR => {
                info!(node = %found, "Node.js version OK");
                Ok(())
            }
            _ => Err(ApplicationError::UnsupportedNodeVersion {
                required: MIN_NODE_MAJOR,
                found,
            }
            .into()),
        }
    }
}

fn run_step(
    step: &StepDef,
    ctx: &StepContext<'_>,
    reporter: &mut dyn ProgressReporter,
) -> ForgeResult<()> {
    reporter.step_started(step.id);
    (step.run)(ctx).inspect_err(|e| error!(step = %step.id, error = %e, "Step failed"))?;
    reporter.step_finished(step.id);
    Ok(())
}

/// Major version from `node --version` output (`v20.11.1` -> 20).
pub fn parse_node_major(version: &str) -> Option<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()?
        .parse()
        .ok()
}
