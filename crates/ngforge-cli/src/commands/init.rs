//! `ngforge init`: create a default configuration file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, write_config_file},
    error::CliResult,
    output::OutputManager,
};

/// Create a default ngforge configuration file at `--config` or the
/// platform location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path_for(global.config.as_deref());
    output.info("Initialising configuration...")?;

    if write_default(&config_path, args.force)? {
        info!(path = %config_path.display(), "Configuration written");
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    }

    Ok(())
}

/// `false` when the file exists and `force` is off.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    write_config_file(path, &AppConfig::default_toml()?)?;
    Ok(true)
}
