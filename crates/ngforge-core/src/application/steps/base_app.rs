//! Base application: `ng new` through `npx`.

use tracing::info;

use super::StepContext;
use crate::domain::{ProjectConfig, TestRunner};
use crate::error::ForgeResult;

/// Full `ng new` command line for `config`.
///
/// Vitest is selected explicitly, no runner means `--skip-tests`, and Jest
/// keeps the CLI default (the test-runner step reconfigures the project).
pub fn base_command(config: &ProjectConfig, angular_cli_version: &str) -> String {
    let mut args = vec![
        config.name().to_string(),
        "--skip-git".to_string(),
        "--skip-install".to_string(),
        format!("--package-manager={}", config.package_manager()),
        format!("--style={}", config.styles().cli_flag_value()),
        "--routing".to_string(),
        "--standalone".to_string(),
    ];

    match config.test_runner() {
        TestRunner::Vitest => args.push("--test-runner=vitest".to_string()),
        TestRunner::None => args.push("--skip-tests".to_string()),
        TestRunner::Jest => {}
    }

    args.push(if config.project_type().is_ssr() {
        "--ssr".to_string()
    } else {
        "--ssr=false".to_string()
    });

    format!(
        "npx -y @angular/cli@{} new {}",
        angular_cli_version,
        args.join(" ")
    )
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    let command = base_command(ctx.config, ctx.angular_cli_version);
    ctx.exec_in(ctx.base_dir, &command)?;
    info!(project = %ctx.config.name(), "Angular project created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandOutput, MockCommandRunner, MockFilesystem};
    use crate::domain::{PackageManager, ProjectName, ProjectType, StyleLanguage};
    use std::path::Path;

    fn config() -> crate::domain::ProjectConfigBuilder {
        ProjectConfig::builder(ProjectName::try_new("test-app").unwrap())
    }

    #[test]
    fn tailwind_is_passed_natively() {
        let cmd = base_command(&config().styles(StyleLanguage::Tailwind).build(), "21");

        assert!(cmd.contains("--style=tailwind"));
        assert!(!cmd.contains("--style=css"));
        assert!(!cmd.contains("--style=scss"));
    }

    #[test]
    fn scss_style_flag() {
        let cmd = base_command(&config().styles(StyleLanguage::Scss).build(), "21");
        assert!(cmd.contains("--style=scss"));
        assert!(!cmd.contains("--style=tailwind"));
    }

    #[test]
    fn default_command_line() {
        let cmd = base_command(&config().build(), "21");
        assert_eq!(
            cmd,
            "npx -y @angular/cli@21 new test-app --skip-git --skip-install \
             --package-manager=npm --style=css --routing --standalone \
             --test-runner=vitest --ssr=false"
        );
    }

    #[test]
    fn runner_flags() {
        let jest = base_command(&config().test_runner(TestRunner::Jest).build(), "21");
        let none = base_command(&config().test_runner(TestRunner::None).build(), "21");

        assert!(!jest.contains("--test-runner"));
        assert!(!jest.contains("--skip-tests"));
        assert!(none.contains("--skip-tests"));
    }

    #[test]
    fn ssr_and_package_manager_flags() {
        let cmd = base_command(
            &config()
                .project_type(ProjectType::Ssr)
                .package_manager(PackageManager::Bun)
                .build(),
            "21.0.1",
        );
        assert!(cmd.starts_with("npx -y @angular/cli@21.0.1 new"));
        assert!(cmd.ends_with(" --ssr"));
        assert!(cmd.contains("--package-manager=bun"));
    }

    #[test]
    fn runs_in_base_dir() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, opts| {
                cmd.contains(" new test-app ")
                    && opts.working_dir.as_deref() == Some(Path::new("/work"))
            })
            .times(1)
            .returning(|_, _| Ok(CommandOutput::default()));
        let fs = MockFilesystem::new();

        let config = config().build();
        let ctx = StepContext::new(&config, Path::new("/work"), "npm", "21", &runner, &fs);
        run(&ctx).unwrap();
    }
}
