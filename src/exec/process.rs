//! Command runner backed by tokio child processes

use crate::error::{GitVarsError, GitVarsResult};
use crate::exec::runner::CommandRunner;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs commands as child processes, without a shell
///
/// The command line is split on whitespace into program and arguments.
pub struct ProcessRunner {
    cwd: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a runner that executes in the current directory
    pub fn new() -> Self {
        Self { cwd: None }
    }

    /// Run commands inside `dir` instead of the current directory
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &str, timeout: Duration) -> GitVarsResult<String> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| GitVarsError::query_failed(command, "empty command"))?;

        debug!("Executing: {}", command);

        let mut cmd = Command::new(program);
        cmd.args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }

        // Dropping the output future on expiry kills the child
        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(result) => result.map_err(|e| GitVarsError::query_failed(command, e.to_string()))?,
            Err(_) => {
                debug!("Timed out after {:?}: {}", timeout, command);
                return Err(GitVarsError::QueryTimeout {
                    command: command.to_string(),
                    timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if !stderr.is_empty() {
                stderr
            } else {
                match output.status.code() {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated by signal".to_string(),
                }
            };
            return Err(GitVarsError::query_failed(command, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
