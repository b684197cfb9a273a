//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `NGFORGE_<SECTION>__<KEY>`, e.g.
//!    `NGFORGE_DEFAULTS__PACKAGE_MANAGER=pnpm`
//! 3. Config file (`--config`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ngforge_core::{
    application::DEFAULT_ANGULAR_CLI_VERSION,
    domain::{Linter, PackageManager, ProjectType, StyleLanguage, TestRunner},
};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult, IntoCli},
};

const ENV_PREFIX: &str = "NGFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a question is skipped.
    pub defaults: Defaults,
    /// Angular CLI invocation.
    pub angular: AngularConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub package_manager: PackageManager,
    pub project_type: ProjectType,
    pub styles: StyleLanguage,
    pub test_runner: TestRunner,
    pub testing_library: bool,
    pub linter: Linter,
    pub husky: bool,
    pub ai_editor_config: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default(),
            project_type: ProjectType::default(),
            styles: StyleLanguage::default(),
            test_runner: TestRunner::default(),
            testing_library: true,
            linter: Linter::default(),
            husky: true,
            ai_editor_config: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngularConfig {
    /// Version spec passed to `npx @angular/cli@<version>`.
    pub cli_version: String,
    /// Refuse to run on Node.js older than the Angular CLI supports.
    pub check_node: bool,
}

impl Default for AngularConfig {
    fn default() -> Self {
        Self {
            cli_version: DEFAULT_ANGULAR_CLI_VERSION.to_string(),
            check_node: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Every key accepted by `get` and `set`, in display order.
    pub const KEYS: [&'static str; 12] = [
        "defaults.package_manager",
        "defaults.project_type",
        "defaults.styles",
        "defaults.test_runner",
        "defaults.testing_library",
        "defaults.linter",
        "defaults.husky",
        "defaults.ai_editor_config",
        "angular.cli_version",
        "angular.check_node",
        "output.no_color",
        "output.format",
    ];

    /// Load configuration: defaults, then the TOML file, then the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::config_path_for(config_file.map(PathBuf::as_path));
        debug!(path = %path.display(), "Loading configuration");
        Self::load_from(&path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_from(path: &Path, env: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
            )
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ngforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ngforge", "ngforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ngforge.toml"))
    }

    /// `--config` if given, otherwise [`Self::config_path`].
    pub fn config_path_for(explicit: Option<&Path>) -> PathBuf {
        explicit.map(Path::to_path_buf).unwrap_or_else(Self::config_path)
    }

    /// Current value of a dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let d = &self.defaults;
        let value = match key {
            "defaults.package_manager" => d.package_manager.to_string(),
            "defaults.project_type" => d.project_type.to_string(),
            "defaults.styles" => d.styles.to_string(),
            "defaults.test_runner" => d.test_runner.to_string(),
            "defaults.testing_library" => d.testing_library.to_string(),
            "defaults.linter" => d.linter.to_string(),
            "defaults.husky" => d.husky.to_string(),
            "defaults.ai_editor_config" => d.ai_editor_config.to_string(),
            "angular.cli_version" => self.angular.cli_version.clone(),
            "angular.check_node" => self.angular.check_node.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Parse `value` for `key` and store it.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let d = &mut self.defaults;
        match key {
            "defaults.package_manager" => d.package_manager = parse_value(key, value)?,
            "defaults.project_type" => d.project_type = parse_value(key, value)?,
            "defaults.styles" => d.styles = parse_value(key, value)?,
            "defaults.test_runner" => d.test_runner = parse_value(key, value)?,
            "defaults.testing_library" => d.testing_library = parse_bool(key, value)?,
            "defaults.linter" => d.linter = parse_value(key, value)?,
            "defaults.husky" => d.husky = parse_bool(key, value)?,
            "defaults.ai_editor_config" => d.ai_editor_config = parse_bool(key, value)?,
            "angular.cli_version" => {
                let version = value.trim();
                if version.is_empty() || version.contains(char::is_whitespace) {
                    return Err(invalid_value(key, value, "expected a version such as 21 or 21.0.1"));
                }
                self.angular.cli_version = version.to_string();
            }
            "angular.check_node" => self.angular.check_node = parse_bool(key, value)?,
            "output.no_color" => self.output.no_color = parse_bool(key, value)?,
            "output.format" => self.output.format = parse_value(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// `(key, value)` for every known key.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }

    /// Default configuration rendered as TOML.
    pub fn default_toml() -> CliResult<String> {
        toml::to_string_pretty(&Self::default()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Persist one key to the TOML file at `path`, keeping every other entry.
    ///
    /// Only the file layer changes; environment overrides are not written.
    pub fn persist_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
        let mut probe = Self::default();
        probe.set(key, value)?;
        let (section, field) = split_key(key)?;

        let rendered = toml::Value::try_from(&probe).map_err(|e| CliError::ConfigError {
            message: format!("Failed to encode '{key}': {e}"),
            source: Some(Box::new(e)),
        })?;
        let typed = rendered
            .get(section)
            .and_then(|s| s.get(field))
            .cloned()
            .ok_or_else(|| unknown_key(key))?;

        let mut table = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
                message: format!("Failed to read '{}'", path.display()),
                source: e,
            })?;
            toml::from_str::<toml::Table>(&content).map_err(|e| CliError::ConfigError {
                message: format!("'{}' is not valid TOML", path.display()),
                source: Some(Box::new(e)),
            })?
        } else {
            toml::Table::new()
        };

        let section_table = table
            .entry(section)
            .or_insert(toml::Value::Table(toml::Table::new()));
        let Some(section_table) = section_table.as_table_mut() else {
            return Err(CliError::ConfigError {
                message: format!("'{section}' in '{}' is not a table", path.display()),
                source: None,
            });
        };
        section_table.insert(field.to_string(), typed);

        let content = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;
        write_config_file(path, &content)
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_config_file(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, content)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn split_key(key: &str) -> CliResult<(&str, &str)> {
    key.split_once('.').ok_or_else(|| unknown_key(key))
}

fn parse_value<T>(key: &str, value: &str) -> CliResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid_value(key, value, &e.to_string()))
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value, "expected true or false")),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn invalid_value(key: &str, value: &str, reason: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Invalid value '{value}' for '{key}': {reason}"),
        source: None,
    }
}
