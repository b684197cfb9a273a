//! Command runner backed by the platform shell.

use std::process::{Command, Stdio};

use tracing::{debug, error, info};

use ngforge_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner, RunOptions},
    },
    error::ForgeResult,
};

/// Upper bound on the bytes kept per captured stream.
pub const MAX_CAPTURE_BYTES: usize = 10 * 1024 * 1024;

/// Runs commands through `sh -c` (`cmd /C` on Windows).
///
/// The child inherits the environment, gets no stdin, and both output
/// streams are captured. Calls block until the child exits; there is no
/// timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(line: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, options: &RunOptions) -> ForgeResult<CommandOutput> {
        if options.silent {
            debug!(command, "Probing");
        } else {
            info!("▶ {}", command);
        }

        let mut cmd = Self::command(command);
        cmd.stdin(Stdio::null());
        if let Some(dir) = &options.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            if !options.silent {
                error!(command, error = %e, "Command could not be started");
            }
            ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;

        let stdout = capture(&output.stdout);
        let stderr = capture(&output.stderr);

        if output.status.success() {
            return Ok(CommandOutput { stdout, stderr });
        }

        if !options.silent {
            error!(command, stderr = %stderr.trim_end(), "Command failed");
        }
        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            exit_code: output.status.code(),
            stdout,
            stderr,
        }
        .into())
    }
}

/// Lossy UTF-8 of the last [`MAX_CAPTURE_BYTES`] of a stream.
fn capture(bytes: &[u8]) -> String {
    let start = bytes.len().saturating_sub(MAX_CAPTURE_BYTES);
    String::from_utf8_lossy(&bytes[start..]).into_owned()
}
