//! The configuration questionnaire.
//!
//! Questions are asked in a fixed order. A question whose answer came from a
//! flag is skipped; without a prompter every open question takes the
//! configured default.

use std::fmt::Display;
use std::io::IsTerminal as _;

use tracing::debug;

use ngforge_core::{
    domain::{Linter, PackageManager, ProjectConfig, ProjectName, ProjectType, StyleLanguage, TestRunner},
    error::ForgeError,
};

use crate::{
    cli::NewArgs,
    config::Defaults,
    error::{CliError, CliResult},
};

/// Answers questions on behalf of the user.
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> CliResult<String>;

    /// Index into `items`.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize>;

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool>;

    /// Tell the user an answer was rejected.
    fn warn(&mut self, message: &str);
}

/// The prompter for this process, or `None` when nothing may be asked.
///
/// `--yes` and a non-terminal stdin both mean "use defaults".
pub fn terminal_prompter(yes: bool) -> CliResult<Option<Box<dyn Prompter>>> {
    if yes {
        return Ok(None);
    }
    if !std::io::stdin().is_terminal() {
        debug!("stdin is not a terminal, using configured defaults");
        return Ok(None);
    }

    #[cfg(feature = "interactive")]
    {
        let prompter: Box<dyn Prompter> = Box::new(DialoguerPrompter::new());
        Ok(Some(prompter))
    }
    #[cfg(not(feature = "interactive"))]
    {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Collect a [`ProjectConfig`] from flags, the prompter and `defaults`.
pub fn collect(
    args: &NewArgs,
    defaults: &Defaults,
    prompter: Option<&mut dyn Prompter>,
) -> CliResult<ProjectConfig> {
    let mut q = Questionnaire { prompter };

    let name = q.name(args.name.as_deref())?;
    let package_manager = q.choose(
        args.package_manager.map(PackageManager::from),
        "Package manager",
        &PackageManager::ALL,
        defaults.package_manager,
    )?;
    let project_type = q.choose(
        args.project_type.map(ProjectType::from),
        "Rendering (spa = client only, ssr = server-side rendering)",
        &ProjectType::ALL,
        defaults.project_type,
    )?;
    let styles = q.choose(
        args.style.map(StyleLanguage::from),
        "Stylesheet format",
        &StyleLanguage::ALL,
        defaults.styles,
    )?;
    let test_runner = q.choose(
        args.test_runner.map(TestRunner::from),
        "Unit test runner",
        &TestRunner::ALL,
        defaults.test_runner,
    )?;
    let testing_library = if test_runner.is_enabled() {
        q.confirm(
            args.testing_library(),
            "Add Angular Testing Library?",
            defaults.testing_library,
        )?
    } else {
        false
    };
    let linter = q.choose(
        args.linter.map(Linter::from),
        "Linter",
        &Linter::ALL,
        defaults.linter,
    )?;
    let husky = q.confirm(
        args.husky(),
        "Add Husky pre-commit hooks with lint-staged?",
        defaults.husky,
    )?;
    let ai_editor_config = q.confirm(
        args.ai_config(),
        "Add AI editor configuration (VS Code, Cursor)?",
        defaults.ai_editor_config,
    )?;

    Ok(ProjectConfig::builder(name)
        .package_manager(package_manager)
        .project_type(project_type)
        .styles(styles)
        .test_runner(test_runner)
        .testing_library(testing_library)
        .linter(linter)
        .husky(husky)
        .ai_editor_config(ai_editor_config)
        .build())
}

struct Questionnaire<'a> {
    prompter: Option<&'a mut dyn Prompter>,
}

impl Questionnaire<'_> {
    fn name(&mut self, flag: Option<&str>) -> CliResult<ProjectName> {
        if let Some(name) = flag {
            return ProjectName::try_new(name).map_err(|e| CliError::Core(ForgeError::from(e)));
        }
        let Some(prompter) = self.prompter.as_deref_mut() else {
            return Err(CliError::InvalidInput {
                message: "a project name is required when not prompting".into(),
                source: None,
            });
        };

        loop {
            let answer = prompter.input("Project name")?;
            let answer = answer.trim();
            match ProjectName::violation(answer) {
                None => {
                    return ProjectName::try_new(answer)
                        .map_err(|e| CliError::Core(ForgeError::from(e)));
                }
                Some(reason) => prompter.warn(&format!("'{answer}' is not a valid name: {reason}")),
            }
        }
    }

    fn choose<T>(&mut self, flag: Option<T>, prompt: &str, options: &[T], default: T) -> CliResult<T>
    where
        T: Copy + PartialEq + Display,
    {
        if let Some(value) = flag {
            return Ok(value);
        }
        let Some(prompter) = self.prompter.as_deref_mut() else {
            return Ok(default);
        };

        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let items: Vec<&str> = labels.iter().map(String::as_str).collect();
        let default_index = options.iter().position(|o| *o == default).unwrap_or(0);

        let index = prompter.select(prompt, &items, default_index)?;
        options.get(index).copied().ok_or_else(|| CliError::Prompt {
            message: format!("no option at index {index} for '{prompt}'"),
        })
    }

    fn confirm(&mut self, flag: Option<bool>, prompt: &str, default: bool) -> CliResult<bool> {
        if let Some(value) = flag {
            return Ok(value);
        }
        match self.prompter.as_deref_mut() {
            Some(prompter) => prompter.confirm(prompt, default),
            None => Ok(default),
        }
    }
}

// ── dialoguer ─────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use owo_colors::OwoColorize;

    use super::Prompter;
    use crate::error::{CliError, CliResult};

    /// Terminal prompts through `dialoguer`.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Default for DialoguerPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&mut self, prompt: &str) -> CliResult<String> {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .interact_text()
                .map_err(prompt_error)
        }

        fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize> {
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }

        fn warn(&mut self, message: &str) {
            eprintln!("{} {}", "\u{2717}".red().bold(), message.red());
        }
    }

    fn prompt_error(err: dialoguer::Error) -> CliError {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            other => CliError::Prompt {
                message: other.to_string(),
            },
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::cli::{LinterArg, PackageManagerArg, StyleArg, TestRunnerArg};

    enum Answer {
        Text(&'static str),
        Pick(usize),
        Yes(bool),
    }

    /// Replays canned answers and records every question.
    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
        warnings: Vec<String>,
    }

    impl Scripted {
        fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                ..Self::default()
            }
        }

        fn next(&mut self, prompt: &str) -> CliResult<Answer> {
            self.asked.push(prompt.to_string());
            self.answers.pop_front().ok_or_else(|| CliError::Prompt {
                message: format!("no scripted answer for '{prompt}'"),
            })
        }
    }

    impl Prompter for Scripted {
        fn input(&mut self, prompt: &str) -> CliResult<String> {
            match self.next(prompt)? {
                Answer::Text(t) => Ok(t.to_string()),
                _ => panic!("expected text answer for {prompt}"),
            }
        }

        fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize> {
            assert!(default < items.len());
            match self.next(prompt)? {
                Answer::Pick(i) => Ok(i),
                _ => panic!("expected pick answer for {prompt}"),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> CliResult<bool> {
            match self.next(prompt)? {
                Answer::Yes(b) => Ok(b),
                _ => panic!("expected yes/no answer for {prompt}"),
            }
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn named(name: &str) -> NewArgs {
        NewArgs {
            name: Some(name.to_string()),
            ..NewArgs::default()
        }
    }

    #[test]
    fn without_prompter_defaults_fill_every_gap() {
        let config = collect(&named("demo"), &Defaults::default(), None).unwrap();
        assert_eq!(config.name().as_str(), "demo");
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
    fn configured_defaults_are_used() {
        let defaults = Defaults {
            package_manager: PackageManager::Pnpm,
            husky: false,
            ..Defaults::default()
        };
        let config = collect(&named("demo"), &defaults, None).unwrap();
        assert_eq!(config.package_manager(), PackageManager::Pnpm);
        assert!(!config.husky());
    }

    #[test]
    fn flags_beat_defaults() {
        let args = NewArgs {
            package_manager: Some(PackageManagerArg::Yarn),
            style: Some(StyleArg::Tailwind),
            linter: Some(LinterArg::None),
            no_ai_config: true,
            ..named("demo")
        };
        let config = collect(&args, &Defaults::default(), None).unwrap();
        assert_eq!(config.package_manager(), PackageManager::Yarn);
        assert_eq!(config.styles(), StyleLanguage::Tailwind);
        assert_eq!(config.linter(), Linter::None);
        assert!(!config.ai_editor_config());
    }

    #[test]
    fn missing_name_without_prompter_is_invalid_input() {
        let err = collect(&NewArgs::default(), &Defaults::default(), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn invalid_flag_name_is_rejected() {
        let err = collect(&named("My App"), &Defaults::default(), None).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn name_question_repeats_until_valid() {
        let mut prompter = Scripted::new(vec![
            Answer::Text("My App"),
            Answer::Text(""),
            Answer::Text("  my-app  "),
            Answer::Pick(0),
            Answer::Pick(0),
            Answer::Pick(0),
            Answer::Pick(2),
            Answer::Pick(0),
            Answer::Yes(false),
            Answer::Yes(true),
        ]);

        let config =
            collect(&NewArgs::default(), &Defaults::default(), Some(&mut prompter as &mut dyn Prompter))
                .unwrap();

        assert_eq!(config.name().as_str(), "my-app");
        assert_eq!(prompter.warnings.len(), 2);
        assert_eq!(config.test_runner(), TestRunner::None);
        assert!(!config.testing_library());
        assert!(!config.husky());
        assert!(config.ai_editor_config());
        assert!(
            !prompter.asked.iter().any(|q| q.contains("Testing Library")),
            "testing library must not be asked without a runner"
        );
    }

    #[test]
    fn flagged_answers_are_not_asked() {
        let args = NewArgs {
            package_manager: Some(PackageManagerArg::Bun),
            test_runner: Some(TestRunnerArg::Jest),
            testing_library: true,
            husky: true,
            ..named("demo")
        };
        let mut prompter = Scripted::new(vec![
            Answer::Pick(1), // type
            Answer::Pick(1), // styles
            Answer::Pick(1), // linter
            Answer::Yes(false), // ai config
        ]);

        let config =
            collect(&args, &Defaults::default(), Some(&mut prompter as &mut dyn Prompter)).unwrap();

        assert_eq!(prompter.asked.len(), 4);
        assert!(!prompter.asked.iter().any(|q| q.contains("name")));
        assert!(!prompter.asked.iter().any(|q| q.contains("Package manager")));
        assert_eq!(config.package_manager(), PackageManager::Bun);
        assert_eq!(config.project_type(), ProjectType::Ssr);
        assert_eq!(config.styles(), StyleLanguage::Scss);
        assert_eq!(config.test_runner(), TestRunner::Jest);
        assert!(config.testing_library());
        assert_eq!(config.linter(), Linter::None);
        assert!(!config.ai_editor_config());
    }

    #[test]
    fn testing_library_flag_is_dropped_without_runner() {
        let args = NewArgs {
            test_runner: Some(TestRunnerArg::None),
            testing_library: true,
            ..named("demo")
        };
        let config = collect(&args, &Defaults::default(), None).unwrap();
        assert!(!config.testing_library());
    }

    #[test]
    fn yes_never_builds_a_prompter() {
        assert!(terminal_prompter(true).unwrap().is_none());
    }
}
