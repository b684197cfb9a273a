//! VS Code settings and `.cursorrules` for AI-assisted editors.

use tracing::info;

use super::StepContext;
use crate::domain::{ProjectConfig, assets};
use crate::error::ForgeResult;

pub fn applies(config: &ProjectConfig) -> bool {
    config.ai_editor_config()
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    let config = ctx.config;
    ctx.create_dir(".vscode")?;

    let json = ctx.json();
    json.write(&ctx.path(".vscode/settings.json"), &assets::vscode_settings())?;
    json.write(
        &ctx.path(".vscode/extensions.json"),
        &assets::vscode_extensions(config.styles()),
    )?;

    ctx.write_file(
        ".cursorrules",
        &assets::cursor_rules(config.test_runner(), config.testing_library()),
    )?;

    info!("Editor configuration written");
    Ok(())
}
