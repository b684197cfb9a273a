//! Test runner configuration (Jest or Vitest).

use serde_json::{Value, json};
use tracing::{debug, info};

use super::StepContext;
use crate::application::services::object_entry;
use crate::domain::{ProjectConfig, TestRunner, assets};
use crate::error::ForgeResult;

pub const JEST_PACKAGES: &[&str] = &["jest", "@types/jest", "jest-preset-angular", "ts-jest"];
pub const VITEST_PACKAGES: &[&str] = &["@vitest/coverage-v8"];

const ANGULAR_JSON: &str = "angular.json";

pub fn applies(config: &ProjectConfig) -> bool {
    config.test_runner().is_enabled()
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    match ctx.config.test_runner() {
        TestRunner::Jest => configure_jest(ctx),
        TestRunner::Vitest => configure_vitest(ctx),
        TestRunner::None => Ok(()),
    }
}

fn configure_jest(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ctx.install_dev(JEST_PACKAGES)?;
    ctx.write_file("jest.config.ts", assets::JEST_CONFIG_TS)?;
    ctx.write_file("src/test-setup.ts", assets::JEST_TEST_SETUP_TS)?;

    let package_json = ctx.require_file("package.json")?;
    ctx.json().modify_object(&package_json, |pkg| {
        let scripts = object_entry(pkg, "scripts");
        scripts.insert("test".into(), json!("jest"));
        scripts.insert("test:watch".into(), json!("jest --watch"));
        scripts.insert("test:coverage".into(), json!("jest --coverage"));
    })?;

    if ctx.exists("tsconfig.spec.json") {
        let tsconfig = ctx.path("tsconfig.spec.json");
        ctx.json().modify_object(&tsconfig, |root| {
            object_entry(root, "compilerOptions").insert("types".into(), json!(["jest"]));
        })?;
    } else {
        debug!("No tsconfig.spec.json, leaving compiler types untouched");
    }

    drop_cli_test_targets(ctx)?;

    info!("Jest configured");
    Ok(())
}

/// Remove the `test` architect target of every project in angular.json.
///
/// `ng new` still generates its own unit-test target when no runner flag is
/// passed; with Jest the `test` script runs `jest` directly instead.
fn drop_cli_test_targets(ctx: &StepContext<'_>) -> ForgeResult<()> {
    if !ctx.exists(ANGULAR_JSON) {
        debug!("No angular.json, nothing to reconfigure");
        return Ok(());
    }

    ctx.json().modify_object(&ctx.path(ANGULAR_JSON), |root| {
        let Some(Value::Object(projects)) = root.get_mut("projects") else {
            return;
        };
        for (name, project) in projects.iter_mut() {
            let architect = project.get_mut("architect").and_then(Value::as_object_mut);
            if let Some(target) = architect.and_then(|a| a.shift_remove("test")) {
                debug!(project = %name, builder = ?target.get("builder"), "Removed CLI test target");
            }
        }
    })
}

fn configure_vitest(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ctx.install_dev(VITEST_PACKAGES)?;

    let package_json = ctx.require_file("package.json")?;
    ctx.json().modify_object(&package_json, |pkg| {
        let scripts = object_entry(pkg, "scripts");
        scripts
            .entry("test")
            .or_insert_with(|| Value::String("ng test".into()));
        scripts.insert("test:coverage".into(), json!("ng test --coverage"));
    })?;

    info!("Vitest configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandOutput, MockCommandRunner, MockFilesystem};
    use crate::domain::{PackageManager, ProjectName};
    use std::path::Path;

    fn config(runner: TestRunner, pm: PackageManager) -> ProjectConfig {
        ProjectConfig::builder(ProjectName::try_new("demo").unwrap())
            .test_runner(runner)
            .package_manager(pm)
            .build()
    }

    #[test]
    fn skipped_without_runner() {
        assert!(!applies(&config(TestRunner::None, PackageManager::Npm)));
        assert!(applies(&config(TestRunner::Vitest, PackageManager::Npm)));
    }

    #[test]
    fn vitest_installs_coverage_with_chosen_manager() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, opts| {
                cmd == "pnpm add -D @vitest/coverage-v8"
                    && opts.working_dir.as_deref() == Some(Path::new("/w/demo"))
            })
            .times(1)
            .returning(|_, _| Ok(CommandOutput::default()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"demo","scripts":{"test":"ng test"}}"#.into()));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("/w/demo/package.json")
                    && c.contains("\"test\": \"ng test\"")
                    && c.contains("\"test:coverage\": \"ng test --coverage\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let config = config(TestRunner::Vitest, PackageManager::Pnpm);
        let ctx = StepContext::new(&config, Path::new("/w"), "pnpm", "21", &runner, &fs);
        run(&ctx).unwrap();
    }

    #[test]
    fn jest_writes_config_and_scripts() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _| cmd == "npm install -D jest @types/jest jest-preset-angular ts-jest")
            .times(1)
            .returning(|_, _| Ok(CommandOutput::default()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(|p| p.ends_with("tsconfig.spec.json") || p.ends_with("angular.json"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p| !p.ends_with("tsconfig.spec.json") && !p.ends_with("angular.json"))
            .return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"demo"}"#.into()));
        fs.expect_write_file()
            .withf(|p, c| p.ends_with("jest.config.ts") && c.contains("jest-preset-angular"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p.ends_with("src/test-setup.ts") && c.contains("setup-jest"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| {
                p.ends_with("package.json")
                    && c.contains("\"test\": \"jest\"")
                    && c.contains("\"test:watch\": \"jest --watch\"")
                    && c.contains("\"test:coverage\": \"jest --coverage\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let config = config(TestRunner::Jest, PackageManager::Npm);
        let ctx = StepContext::new(&config, Path::new("/w"), "npm", "21", &runner, &fs);
        run(&ctx).unwrap();
    }

    #[test]
    fn jest_removes_cli_test_target() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutput::default()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(|p| p.ends_with("tsconfig.spec.json"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p| !p.ends_with("tsconfig.spec.json"))
            .return_const(true);
        fs.expect_read_to_string()
            .withf(|p| p.ends_with("angular.json"))
            .returning(|_| {
                Ok(r#"{"projects":{"demo":{"architect":{
                    "build":{"builder":"@angular/build:application"},
                    "test":{"builder":"@angular/build:unit-test"}}}}}"#
                    .into())
            });
        fs.expect_read_to_string()
            .withf(|p| p.ends_with("package.json"))
            .returning(|_| Ok(r#"{"name":"demo"}"#.into()));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("/w/demo/angular.json")
                    && c.contains("@angular/build:application")
                    && !c.contains("unit-test")
                    && !c.contains("\"test\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| !p.ends_with("angular.json"))
            .returning(|_, _| Ok(()));

        let config = config(TestRunner::Jest, PackageManager::Npm);
        let ctx = StepContext::new(&config, Path::new("/w"), "npm", "21", &runner, &fs);
        run(&ctx).unwrap();
    }
}
