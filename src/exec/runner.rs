//! Command runner abstraction

use crate::error::GitVarsResult;
use async_trait::async_trait;
use std::time::Duration;

/// Runs a single external command and returns its output
///
/// Implementations must return stdout trimmed of leading and trailing
/// whitespace, and fail with:
/// - `QueryFailed` when the command cannot be started or exits non-zero
/// - `QueryTimeout` when it runs longer than `timeout`
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` and return its trimmed standard output
    async fn run(&self, command: &str, timeout: Duration) -> GitVarsResult<String>;
}
