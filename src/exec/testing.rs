//! Scripted command runner for unit tests

use crate::error::{GitVarsError, GitVarsResult};
use crate::exec::runner::CommandRunner;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Canned outcome for a scripted command
#[derive(Debug, Clone)]
pub enum Reply {
    Output(String),
    Fail(String),
    Timeout,
}

/// Runner that answers from a table and counts invocations
#[derive(Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `output` (trimmed, like a real runner)
    pub fn reply(mut self, command: &str, output: &str) -> Self {
        self.replies
            .insert(command.to_string(), Reply::Output(output.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, reason: &str) -> Self {
        self.replies
            .insert(command.to_string(), Reply::Fail(reason.to_string()));
        self
    }

    pub fn time_out(mut self, command: &str) -> Self {
        self.replies.insert(command.to_string(), Reply::Timeout);
        self
    }

    /// Sleep before answering, so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer every standard git query with fixed values
    pub fn git_defaults() -> Self {
        Self::new()
            .reply("git describe --always", "v1.2.0-3-gabc1234")
            .reply("git describe --always --tags", "v1.2.0-light")
            .reply("git rev-parse --short HEAD", "abc1234")
            .reply(
                "git rev-parse HEAD",
                "abc1234def5678abc1234def5678abc1234def56",
            )
            .reply("git rev-parse --abbrev-ref HEAD", "main")
            .reply("git log -1 --pretty=%B", "Fix the thing\n\nLonger body")
            .reply("git diff --stat", "")
            .reply("git rev-parse --show-toplevel", "/home/user/projects/my-repo")
    }

    /// Every command run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `command` was run
    pub fn count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }

    pub fn total(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &str, timeout: Duration) -> GitVarsResult<String> {
        self.calls.lock().unwrap().push(command.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.replies.get(command) {
            Some(Reply::Output(out)) => Ok(out.trim().to_string()),
            Some(Reply::Fail(reason)) => Err(GitVarsError::query_failed(command, reason.clone())),
            Some(Reply::Timeout) => Err(GitVarsError::QueryTimeout {
                command: command.to_string(),
                timeout,
            }),
            None => Err(GitVarsError::query_failed(command, "unscripted command")),
        }
    }
}
