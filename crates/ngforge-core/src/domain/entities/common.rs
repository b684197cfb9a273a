use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A project name guaranteed to be a valid directory and npm package name.
///
/// Invariant: non-empty, only `[a-z0-9-]`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Fallible constructor.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if let Some(reason) = Self::violation(&name) {
            return Err(DomainError::InvalidProjectName { name, reason });
        }
        Ok(Self(name))
    }

    /// Returns why `name` is not acceptable, or `None` when it is.
    ///
    /// Used by the interactive prompt to validate input as it is typed.
    pub fn violation(name: &str) -> Option<String> {
        if name.is_empty() {
            return Some("name cannot be empty".into());
        }
        // Passed to `ng new` as a positional argument.
        if name.starts_with('-') {
            return Some("name cannot start with a hyphen".into());
        }
        name.chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
            .map(|c| format!("character '{}' is not allowed", c))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for ProjectName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kebab_case_with_digits() {
        let name = ProjectName::try_new("shop-admin-2").unwrap();
        assert_eq!(name.as_str(), "shop-admin-2");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            ProjectName::try_new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn rejects_uppercase_and_underscores() {
        assert!(ProjectName::try_new("MyApp").is_err());
        assert!(ProjectName::try_new("my_app").is_err());
        assert!(ProjectName::try_new("my app").is_err());
    }

    #[test]
    fn rejects_leading_hyphen() {
        assert!(ProjectName::try_new("--help").is_err());
        assert!(ProjectName::try_new("-").is_err());
        assert!(
            ProjectName::violation("-app")
                .unwrap()
                .contains("start with a hyphen")
        );
        assert!(ProjectName::try_new("app-").is_ok());
    }

    #[test]
    fn violation_names_the_offending_character() {
        let reason = ProjectName::violation("my.app").unwrap();
        assert!(reason.contains("'.'"));
        assert_eq!(ProjectName::violation("my-app"), None);
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ProjectName, _> = serde_json::from_str("\"demo\"");
        assert!(ok.is_ok());
        let bad: Result<ProjectName, _> = serde_json::from_str("\"Demo\"");
        assert!(bad.is_err());
    }
}
