//! External process execution for postinstall hooks
//!
//! The orchestrator does not need to know what setup commands run before
//! rule preparation, so command execution sits behind a small capability
//! trait. The shell-backed implementation splits the command on whitespace
//! and runs it directly (no shell interpolation).

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{CliError, Result};

/// Executes a named command, optionally streaming its output.
#[async_trait]
pub trait CommandRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands as child processes of this one.
pub struct ShellRunner {
    /// When true, child stdout/stderr stream to this process's terminal
    pub log: bool,
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| CliError::user("empty hook command"))?;

        debug!(command, "running hook command");

        let mut cmd = Command::new(program);
        cmd.args(parts).current_dir(cwd);

        if self.log {
            let status = cmd.status().await.map_err(|e| {
                CliError::user(format!("failed to spawn {}: {}", program, e))
            })?;
            if !status.success() {
                return Err(CliError::CommandFailed {
                    command: command.to_string(),
                    code: status.code().unwrap_or(-1),
                });
            }
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::piped());
            let output = cmd.output().await.map_err(|e| {
                CliError::user(format!("failed to spawn {}: {}", program, e))
            })?;
            if !output.status.success() {
                return Err(CliError::CommandFailed {
                    command: command.to_string(),
                    code: output.status.code().unwrap_or(-1),
                });
            }
        }

        Ok(())
    }
}
