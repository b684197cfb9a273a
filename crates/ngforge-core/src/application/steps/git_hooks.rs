//! Husky pre-commit hook running lint-staged.

use serde_json::{Map, Value, json};
use tracing::{debug, info};

use super::StepContext;
use crate::domain::{ProjectConfig, assets};
use crate::error::ForgeResult;

pub const PACKAGES: &[&str] = &["husky", "lint-staged", "prettier"];

pub fn applies(config: &ProjectConfig) -> bool {
    config.husky()
}

/// The `lint-staged` section of package.json.
///
/// ESLint only runs on staged files when the project has it.
pub fn lint_staged_config(config: &ProjectConfig) -> Value {
    let mut map = Map::new();
    if config.linter().is_enabled() {
        map.insert("*.{ts,html}".into(), json!(["eslint --fix"]));
    }
    map.insert(
        "*.{ts,html,css,scss,json,md}".into(),
        json!(["prettier --write"]),
    );
    Value::Object(map)
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ctx.install_dev(PACKAGES)?;

    // ng new ran with --skip-git and husky refuses to init outside a repo.
    if ctx.exists(".git") {
        debug!("Git repository already present");
    } else {
        ctx.exec("git init")?;
    }

    ctx.exec("npx husky init")?;
    ctx.write_executable(".husky/pre-commit", assets::HUSKY_PRE_COMMIT)?;

    let package_json = ctx.require_file("package.json")?;
    let lint_staged = lint_staged_config(ctx.config);
    ctx.json().modify_object(&package_json, |pkg| {
        pkg.insert("lint-staged".into(), lint_staged);
    })?;

    info!("Husky configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandOutput, MockCommandRunner, MockFilesystem};
    use crate::domain::{Linter, ProjectName};
    use mockall::Sequence;
    use std::path::Path;

    fn config(linter: Linter) -> ProjectConfig {
        ProjectConfig::builder(ProjectName::try_new("demo").unwrap())
            .linter(linter)
            .build()
    }

    #[test]
    fn lint_staged_includes_eslint_only_with_linter() {
        let with = lint_staged_config(&config(Linter::Eslint));
        let without = lint_staged_config(&config(Linter::None));

        assert_eq!(with["*.{ts,html}"], json!(["eslint --fix"]));
        assert!(without.get("*.{ts,html}").is_none());
        assert_eq!(
            without["*.{ts,html,css,scss,json,md}"],
            json!(["prettier --write"])
        );
    }

    #[test]
    fn initializes_git_then_husky_and_writes_executable_hook() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _| cmd == "npm install -D husky lint-staged prettier")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CommandOutput::default()));
        runner
            .expect_run()
            .withf(|cmd, _| cmd == "git init")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CommandOutput::default()));
        runner
            .expect_run()
            .withf(|cmd, _| cmd == "npx husky init")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CommandOutput::default()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p.ends_with(".git"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p| !p.ends_with(".git"))
            .return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/w/demo/.husky/pre-commit") && c == "npx lint-staged\n")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|p, exec| p.ends_with(".husky/pre-commit") && *exec)
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"demo"}"#.into()));
        fs.expect_write_file()
            .withf(|p, c| p.ends_with("package.json") && c.contains("\"lint-staged\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let config = config(Linter::Eslint);
        let ctx = StepContext::new(&config, Path::new("/w"), "npm", "21", &runner, &fs);
        run(&ctx).unwrap();
    }
}
