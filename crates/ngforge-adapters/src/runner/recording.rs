//! Command runner that records calls instead of spawning processes.

use std::sync::{Arc, Mutex};

use ngforge_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner, RunOptions},
    },
    error::{ForgeError, ForgeResult},
};

type Effect = Arc<dyn Fn(&str, &RunOptions) + Send + Sync>;

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub options: RunOptions,
}

#[derive(Default)]
struct Script {
    calls: Vec<RecordedCommand>,
    outputs: Vec<(String, String)>,
    failures: Vec<(String, String)>,
    effects: Vec<(String, Effect)>,
}

/// Test double for [`CommandRunner`].
///
/// Every call is recorded. Responses are scripted by command prefix:
/// a matching failure wins over a matching output, and unmatched commands
/// succeed with empty output. Effects let a test simulate what a command
/// would leave behind (for example the files `ng new` creates).
///
/// Clones share the same script and call log.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<Script>>,
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("calls", &self.commands())
            .finish()
    }
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` with `stdout`.
    pub fn with_output(self, prefix: &str, stdout: &str) -> Self {
        if let Ok(mut script) = self.inner.lock() {
            script.outputs.push((prefix.to_string(), stdout.to_string()));
        }
        self
    }

    /// Fail commands starting with `prefix` with exit code 1 and `stderr`.
    pub fn fail_on(self, prefix: &str, stderr: &str) -> Self {
        if let Ok(mut script) = self.inner.lock() {
            script.failures.push((prefix.to_string(), stderr.to_string()));
        }
        self
    }

    /// Run `effect` whenever a command starting with `prefix` succeeds.
    pub fn with_effect<F>(self, prefix: &str, effect: F) -> Self
    where
        F: Fn(&str, &RunOptions) + Send + Sync + 'static,
    {
        if let Ok(mut script) = self.inner.lock() {
            script.effects.push((prefix.to_string(), Arc::new(effect)));
        }
        self
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.inner
            .lock()
            .map(|script| script.calls.clone())
            .unwrap_or_default()
    }

    /// Just the command lines, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, options: &RunOptions) -> ForgeResult<CommandOutput> {
        let (failure, stdout, effects) = {
            let mut script = self.inner.lock().map_err(|_| ForgeError::Internal {
                message: "recording runner lock poisoned".into(),
            })?;
            script.calls.push(RecordedCommand {
                command: command.to_string(),
                options: options.clone(),
            });

            let failure = script
                .failures
                .iter()
                .find(|(prefix, _)| command.starts_with(prefix.as_str()))
                .map(|(_, stderr)| stderr.clone());
            let stdout = script
                .outputs
                .iter()
                .find(|(prefix, _)| command.starts_with(prefix.as_str()))
                .map(|(_, out)| out.clone())
                .unwrap_or_default();
            let effects: Vec<Effect> = script
                .effects
                .iter()
                .filter(|(prefix, _)| command.starts_with(prefix.as_str()))
                .map(|(_, effect)| Arc::clone(effect))
                .collect();
            (failure, stdout, effects)
        };

        if let Some(stderr) = failure {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                exit_code: Some(1),
                stdout: String::new(),
                stderr,
            }
            .into());
        }

        // Outside the lock so effects may inspect the runner.
        for effect in effects {
            effect(command, options);
        }

        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
        })
    }
}
