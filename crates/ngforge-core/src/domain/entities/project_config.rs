//! The answers collected for one generation run.

use serde::{Deserialize, Serialize};

use super::common::ProjectName;
use crate::domain::value_objects::{
    Linter, PackageManager, ProjectType, StyleLanguage, TestRunner,
};

/// Immutable record of the user's choices.
///
/// Invariant: `testing_library` is never `true` while `test_runner` is
/// [`TestRunner::None`]. The builder enforces it, deserialization goes
/// through the builder, and there are no setters after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProjectConfig")]
pub struct ProjectConfig {
    name: ProjectName,
    package_manager: PackageManager,
    project_type: ProjectType,
    styles: StyleLanguage,
    test_runner: TestRunner,
    testing_library: bool,
    linter: Linter,
    husky: bool,
    ai_editor_config: bool,
}

/// Serialized shape of [`ProjectConfig`], before the invariants apply.
#[derive(Deserialize)]
struct RawProjectConfig {
    name: ProjectName,
    package_manager: PackageManager,
    project_type: ProjectType,
    styles: StyleLanguage,
    test_runner: TestRunner,
    testing_library: bool,
    linter: Linter,
    husky: bool,
    ai_editor_config: bool,
}

impl From<RawProjectConfig> for ProjectConfig {
    fn from(raw: RawProjectConfig) -> Self {
        ProjectConfig::builder(raw.name)
            .package_manager(raw.package_manager)
            .project_type(raw.project_type)
            .styles(raw.styles)
            .test_runner(raw.test_runner)
            .testing_library(raw.testing_library)
            .linter(raw.linter)
            .husky(raw.husky)
            .ai_editor_config(raw.ai_editor_config)
            .build()
    }
}

impl ProjectConfig {
    pub fn builder(name: ProjectName) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(name)
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn styles(&self) -> StyleLanguage {
        self.styles
    }

    pub fn test_runner(&self) -> TestRunner {
        self.test_runner
    }

    pub fn testing_library(&self) -> bool {
        self.testing_library
    }

    pub fn linter(&self) -> Linter {
        self.linter
    }

    pub fn husky(&self) -> bool {
        self.husky
    }

    pub fn ai_editor_config(&self) -> bool {
        self.ai_editor_config
    }
}

/// Builder for [`ProjectConfig`].
///
/// Every field except the name has a default, so a builder with only a name
/// produces the same project the questionnaire's defaults would.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    name: ProjectName,
    package_manager: PackageManager,
    project_type: ProjectType,
    styles: StyleLanguage,
    test_runner: TestRunner,
    testing_library: bool,
    linter: Linter,
    husky: bool,
    ai_editor_config: bool,
}

impl ProjectConfigBuilder {
    fn new(name: ProjectName) -> Self {
        Self {
            name,
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

    pub fn package_manager(mut self, pm: PackageManager) -> Self {
        self.package_manager = pm;
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn styles(mut self, styles: StyleLanguage) -> Self {
        self.styles = styles;
        self
    }

    pub fn test_runner(mut self, runner: TestRunner) -> Self {
        self.test_runner = runner;
        self
    }

    pub fn testing_library(mut self, enabled: bool) -> Self {
        self.testing_library = enabled;
        self
    }

    pub fn linter(mut self, linter: Linter) -> Self {
        self.linter = linter;
        self
    }

    pub fn husky(mut self, enabled: bool) -> Self {
        self.husky = enabled;
        self
    }

    pub fn ai_editor_config(mut self, enabled: bool) -> Self {
        self.ai_editor_config = enabled;
        self
    }

    pub fn build(self) -> ProjectConfig {
        ProjectConfig {
            name: self.name,
            package_manager: self.package_manager,
            project_type: self.project_type,
            styles: self.styles,
            test_runner: self.test_runner,
            // Testing Library needs a runner to hook into.
            testing_library: self.testing_library && self.test_runner.is_enabled(),
            linter: self.linter,
            husky: self.husky,
            ai_editor_config: self.ai_editor_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ProjectName {
        ProjectName::try_new("demo").unwrap()
    }

    #[test]
    fn defaults_match_questionnaire() {
        let config = ProjectConfig::builder(name()).build();

        assert_eq!(config.package_manager(), PackageManager::Npm);
        assert_eq!(config.project_type(), ProjectType::Spa);
        assert_eq!(config.styles(), StyleLanguage::Css);
        assert_eq!(config.test_runner(), TestRunner::Vitest);
        assert!(config.testing_library());
        assert_eq!(config.linter(), Linter::Eslint);
        assert!(config.husky());
        assert!(config.ai_editor_config());
    }

    #[test]
    fn testing_library_forced_off_without_runner() {
        let config = ProjectConfig::builder(name())
            .test_runner(TestRunner::None)
            .testing_library(true)
            .build();

        assert!(!config.testing_library());
    }

    #[test]
    fn testing_library_kept_with_jest() {
        let config = ProjectConfig::builder(name())
            .test_runner(TestRunner::Jest)
            .testing_library(true)
            .build();

        assert!(config.testing_library());
    }

    #[test]
    fn deserialized_config_keeps_invariant() {
        let config: ProjectConfig = serde_json::from_value(serde_json::json!({
            "name": "demo",
            "package_manager": "pnpm",
            "project_type": "spa",
            "styles": "scss",
            "test_runner": "none",
            "testing_library": true,
            "linter": "none",
            "husky": false,
            "ai_editor_config": false
        }))
        .unwrap();

        assert_eq!(config.test_runner(), TestRunner::None);
        assert!(!config.testing_library());
        assert_eq!(config.package_manager(), PackageManager::Pnpm);
    }

    #[test]
    fn deserialized_config_validates_name() {
        let result = serde_json::from_value::<ProjectConfig>(serde_json::json!({
            "name": "Bad Name",
            "package_manager": "npm",
            "project_type": "spa",
            "styles": "css",
            "test_runner": "vitest",
            "testing_library": true,
            "linter": "eslint",
            "husky": true,
            "ai_editor_config": true
        }));
        assert!(result.is_err());
    }
}
