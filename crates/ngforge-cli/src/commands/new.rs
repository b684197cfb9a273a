//! Implementation of the `ngforge new` command.
//!
//! Responsibility: turn flags, prompts and configured defaults into a
//! `ProjectConfig`, call the core scaffold service, and display results.
//! No generation logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use ngforge_adapters::{LocalFilesystem, ShellCommandRunner};
use ngforge_core::{
    application::{ScaffoldOptions, ScaffoldReport, ScaffoldService, StepId},
    domain::ProjectConfig,
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{self, Prompter},
};

/// Execute the `ngforge new` command.
///
/// Dispatch sequence:
/// 1. Check the Node version (unless skipped or `--dry-run`)
/// 2. Answer the questionnaire (flags, then prompts, then defaults)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Confirm with the user when prompting
/// 5. Run `ScaffoldService`
/// 6. Print a report or next-steps guidance
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Node is checked before any question is asked; scaffold skips it.
    let options = ScaffoldOptions {
        angular_cli_version: config.angular.cli_version.clone(),
        check_node: false,
        skip_install: args.skip_install,
    };
    let service = ScaffoldService::new(
        Box::new(ShellCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
        options,
    );
    if config.angular.check_node && !args.skip_node_check && !args.dry_run {
        service.check_node()?;
    }

    let mut prompter = prompt::terminal_prompter(args.yes || global.quiet || output.is_json())?;
    let project = prompt::collect(
        &args,
        &config.defaults,
        prompter.as_mut().map(|p| p.as_mut() as &mut dyn prompt::Prompter),
    )?;

    debug!(
        name = %project.name(),
        package_manager = %project.package_manager(),
        project_type = %project.project_type(),
        styles = %project.styles(),
        test_runner = %project.test_runner(),
        testing_library = project.testing_library(),
        linter = %project.linter(),
        husky = project.husky(),
        ai_editor_config = project.ai_editor_config(),
        "Configuration collected"
    );

    if args.dry_run {
        let plan = DryRunPlan::new(&service, &project, &args.directory);
        return show_plan(&plan, &output);
    }

    if let Some(prompter) = prompter.as_deref_mut() {
        show_configuration(&project, &args.directory, &output)?;
        confirm(prompter)?;
    }

    if !output.is_json() {
        output.header(&format!("Creating '{}'...", project.name()))?;
    }
    info!(project = %project.name(), dir = %args.directory.display(), "Scaffold started");

    let mut progress = output.progress();
    let result = service.scaffold(&project, &args.directory, &mut progress);
    progress.finish();
    let report = result?;

    info!(project = %project.name(), steps = report.steps.len(), "Scaffold completed");

    if output.is_json() {
        return output.json(&report);
    }

    output.success(&format!("Project '{}' created!", project.name()))?;
    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for line in next_steps(&project, &report) {
            output.print(&format!("  {line}"))?;
        }
    }

    Ok(())
}

// ── dry run ───────────────────────────────────────────────────────────────────

/// Everything `new` would do, without doing it.
#[derive(Debug, Serialize)]
struct DryRunPlan<'a> {
    project_path: PathBuf,
    command: String,
    steps: Vec<StepId>,
    /// Package-manager install, unless skipped. The npx fallback is only
    /// decided by a probe at run time.
    install: Option<String>,
    config: &'a ProjectConfig,
}

impl<'a> DryRunPlan<'a> {
    fn new(service: &ScaffoldService, project: &'a ProjectConfig, directory: &Path) -> Self {
        let install = (!service.options().skip_install)
            .then(|| format!("{} install", project.package_manager()));
        Self {
            project_path: directory.join(project.name().as_str()),
            command: service.base_command(project),
            steps: service.plan(project),
            install,
            config: project,
        }
    }
}

fn show_plan(plan: &DryRunPlan<'_>, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(plan);
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.config.name(),
        plan.project_path.display(),
    ))?;
    output.print("")?;
    output.print("Command:")?;
    output.print(&format!("  {}", plan.command))?;
    output.print("")?;
    output.print("Steps:")?;
    for (i, step) in plan.steps.iter().enumerate() {
        output.print(&format!("  {}. {:<16} {}", i + 1, step.as_str(), step.description()))?;
    }
    if let Some(install) = &plan.install {
        output.print(&format!("  {}. {:<16} {install}", plan.steps.len() + 1, "install"))?;
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(project: &ProjectConfig, directory: &Path, out: &OutputManager) -> CliResult<()> {
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    out.print("")?;
    out.header("Configuration")?;
    out.print(&format!("  Project:          {}", project.name()))?;
    out.print(&format!("  Location:         {}", directory.join(project.name().as_str()).display()))?;
    out.print(&format!("  Package manager:  {}", project.package_manager()))?;
    out.print(&format!("  Type:             {}", project.project_type()))?;
    out.print(&format!("  Styles:           {}", project.styles()))?;
    out.print(&format!("  Test runner:      {}", project.test_runner()))?;
    out.print(&format!("  Testing Library:  {}", yes_no(project.testing_library())))?;
    out.print(&format!("  Linter:           {}", project.linter()))?;
    out.print(&format!("  Husky:            {}", yes_no(project.husky())))?;
    out.print(&format!("  AI editor config: {}", yes_no(project.ai_editor_config())))?;
    out.print("")?;
    Ok(())
}

fn confirm(prompter: &mut dyn Prompter) -> CliResult<()> {
    if prompter.confirm("Create this project?", true)? {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

fn next_steps(project: &ProjectConfig, report: &ScaffoldReport) -> Vec<String> {
    let pm = &report.package_manager;
    let mut lines = vec![format!("cd {}", project.name())];
    if !report.installed {
        lines.push(format!("{pm} install"));
    }
    lines.push(format!("{pm} start"));
    if project.test_runner().is_enabled() {
        lines.push(format!("{pm} test"));
    }
    if project.linter().is_enabled() {
        lines.push(format!("{pm} run lint"));
    }
    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
