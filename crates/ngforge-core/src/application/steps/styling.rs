//! Tailwind CSS wiring.
//!
//! `ng new --style=tailwind` already adds the packages; this step makes sure
//! the PostCSS plugin is registered and the global stylesheet imports
//! Tailwind, whichever parts the CLI left out.

use serde_json::{Value, json};
use tracing::debug;

use super::StepContext;
use crate::application::services::object_entry;
use crate::domain::{ProjectConfig, StyleLanguage, assets};
use crate::error::ForgeResult;

const POSTCSS_CONFIG: &str = ".postcssrc.json";

pub fn applies(config: &ProjectConfig) -> bool {
    config.styles() == StyleLanguage::Tailwind
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ensure_postcss_plugin(ctx)?;
    ensure_stylesheet_import(ctx)
}

fn ensure_postcss_plugin(ctx: &StepContext<'_>) -> ForgeResult<()> {
    let path = ctx.path(POSTCSS_CONFIG);
    let json = ctx.json();

    if ctx.exists(POSTCSS_CONFIG) {
        json.modify_object(&path, |root| {
            object_entry(root, "plugins")
                .entry(assets::TAILWIND_POSTCSS_PLUGIN)
                .or_insert_with(|| Value::Object(Default::default()));
        })
    } else {
        debug!("Creating {}", POSTCSS_CONFIG);
        json.write(
            &path,
            &json!({ "plugins": { assets::TAILWIND_POSTCSS_PLUGIN: {} } }),
        )
    }
}

fn ensure_stylesheet_import(ctx: &StepContext<'_>) -> ForgeResult<()> {
    let relative = ctx.config.styles().global_stylesheet();
    ctx.require_file(relative)?;

    let content = ctx.read_file(relative)?;
    if content.contains(assets::TAILWIND_IMPORT) {
        return Ok(());
    }
    ctx.write_file(relative, &format!("{}\n\n{}", assets::TAILWIND_IMPORT, content))?;
    Ok(())
}
