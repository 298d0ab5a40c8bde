//! Invocation of the external coverage tool.

use std::process::Command;

use tracing::debug;

use crate::error::ToolError;

/// Runs an external command and returns its standard output.
///
/// Implementations are shared by every worker of the conversion pool, hence
/// the `Sync` bound.
pub trait ToolRunner: Sync {
    /// Runs `command` with `args` to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] when the command cannot be started, exits
    /// unsuccessfully, or prints output that is not UTF-8.
    fn run(&self, command: &str, args: &[String]) -> Result<String, ToolError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, command: &str, args: &[String]) -> Result<String, ToolError> {
        (**self).run(command, args)
    }
}

/// [`ToolRunner`] that spawns a child process and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl ToolRunner for CommandRunner {
    fn run(&self, command: &str, args: &[String]) -> Result<String, ToolError> {
        debug!(command, ?args, "running coverage tool");

        let output = Command::new(command)
            .args(args)
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| ToolError::NonUtf8 {
            command: command.to_string(),
            source,
        })
    }
}
