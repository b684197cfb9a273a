//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use ngforge_core::application::{ProgressReporter, StepId};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format` from the config file;
    /// `auto` then resolves to human on a terminal and plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Printed even in quiet mode, since it
    /// was asked for explicitly.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to render JSON output: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Reporter for step progress that matches this manager's mode.
    pub fn progress(&self) -> StepProgress {
        let mode = if self.quiet || self.is_json() {
            ProgressMode::Hidden
        } else if self.resolved_format == OutputFormat::Human && io::stderr().is_terminal() {
            ProgressMode::Spinner(new_spinner())
        } else {
            ProgressMode::Plain(Term::stdout())
        };
        StepProgress {
            mode,
            no_color: self.no_color,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

enum ProgressMode {
    Hidden,
    Plain(Term),
    Spinner(ProgressBar),
}

/// [`ProgressReporter`] for the terminal: a spinner on a TTY, one line per
/// event otherwise.
pub struct StepProgress {
    mode: ProgressMode,
    no_color: bool,
}

impl StepProgress {
    /// Stop the spinner, if any. Safe to call more than once.
    pub fn finish(&self) {
        if let ProgressMode::Spinner(spinner) = &self.mode {
            spinner.finish_and_clear();
        }
    }

    fn done_line(&self, text: &str) -> String {
        if self.no_color {
            format!("\u{2713} {text}")
        } else {
            format!("{} {text}", "\u{2713}".green().bold())
        }
    }
}

impl ProgressReporter for StepProgress {
    fn step_started(&mut self, step: StepId) {
        match &self.mode {
            ProgressMode::Hidden => {}
            ProgressMode::Plain(term) => {
                let _ = term.write_line(&format!("\u{2192} {}...", step.description()));
            }
            ProgressMode::Spinner(spinner) => {
                spinner.set_message(format!("{}...", step.description()));
            }
        }
    }

    fn step_finished(&mut self, step: StepId) {
        let line = self.done_line(step.description());
        match &self.mode {
            ProgressMode::Hidden => {}
            ProgressMode::Plain(term) => {
                let _ = term.write_line(&line);
            }
            ProgressMode::Spinner(spinner) => spinner.println(line),
        }
    }

    fn install_started(&mut self, command: &str) {
        let message = format!("Installing dependencies ({command})...");
        match &self.mode {
            ProgressMode::Hidden => {}
            ProgressMode::Plain(term) => {
                let _ = term.write_line(&format!("\u{2192} {message}"));
            }
            ProgressMode::Spinner(spinner) => spinner.set_message(message),
        }
    }
}

impl Drop for StepProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
