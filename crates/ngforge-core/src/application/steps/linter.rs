//! ESLint with angular-eslint and typescript-eslint.

use serde_json::Value;
use tracing::{debug, info};

use super::StepContext;
use crate::application::services::object_entry;
use crate::domain::{ProjectConfig, assets};
use crate::error::ForgeResult;

pub const PACKAGES: &[&str] = &["eslint", "@eslint/js", "typescript-eslint", "angular-eslint"];

const CONFIG_FILE: &str = "eslint.config.js";

pub fn applies(config: &ProjectConfig) -> bool {
    config.linter().is_enabled()
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ctx.install_dev(PACKAGES)?;

    if ctx.exists(CONFIG_FILE) {
        debug!("{} already present, keeping it", CONFIG_FILE);
    } else {
        ctx.write_file(CONFIG_FILE, assets::ESLINT_CONFIG_JS)?;
    }

    let package_json = ctx.require_file("package.json")?;
    ctx.json().modify_object(&package_json, |pkg| {
        object_entry(pkg, "scripts")
            .entry("lint")
            .or_insert_with(|| Value::String("eslint .".into()));
    })?;

    info!("ESLint configured");
    Ok(())
}
