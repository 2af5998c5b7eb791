//! Repository queries
//!
//! Maps each [`VariableName`] to one git invocation and normalizes the raw
//! output into the value the resolver caches.

use crate::error::GitVarsResult;
use crate::exec::CommandRunner;
use crate::variable::{ResolvedValue, VariableName};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default per-invocation timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// How raw query output becomes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Normalize {
    /// Trimmed text as-is
    Text,
    /// `true` iff the trimmed output is non-empty
    NonEmpty,
    /// Final path segment
    BaseName,
}

/// Git arguments and normalization for a variable
fn query_for(name: VariableName) -> (&'static str, Normalize) {
    match name {
        VariableName::Describe => ("describe --always", Normalize::Text),
        VariableName::DescribeLight => ("describe --always --tags", Normalize::Text),
        VariableName::Sha1 => ("rev-parse --short HEAD", Normalize::Text),
        VariableName::Commit => ("rev-parse HEAD", Normalize::Text),
        VariableName::Branch => ("rev-parse --abbrev-ref HEAD", Normalize::Text),
        VariableName::Message => ("log -1 --pretty=%B", Normalize::Text),
        VariableName::IsDirty => ("diff --stat", Normalize::NonEmpty),
        VariableName::Repository => ("rev-parse --show-toplevel", Normalize::BaseName),
    }
}

/// Last non-empty segment of a `/` or `\` separated path
fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Executes git queries for variables
pub struct RepositoryQuery {
    runner: Arc<dyn CommandRunner>,
    program: String,
    timeout: Duration,
}

impl RepositoryQuery {
    /// Create an executor using `git` and the default timeout
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: "git".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full command line run for `name`
    pub fn command_for(&self, name: VariableName) -> String {
        let (args, _) = query_for(name);
        format!("{} {}", self.program, args)
    }

    /// Run the query mapped to `name` and normalize its output
    pub async fn query_and_normalize(&self, name: VariableName) -> GitVarsResult<ResolvedValue> {
        let (_, normalize) = query_for(name);
        let command = self.command_for(name);

        let raw = self.runner.run(&command, self.timeout).await?;
        let raw = raw.trim();

        let value = match normalize {
            Normalize::Text => ResolvedValue::Text(raw.to_string()),
            Normalize::NonEmpty => ResolvedValue::Flag(!raw.is_empty()),
            Normalize::BaseName => ResolvedValue::Text(base_name(raw).to_string()),
        };

        debug!("Queried {} = {}", name, value);
        Ok(value)
    }

    /// Same as [`query_and_normalize`](Self::query_and_normalize), dispatching on a raw name
    pub async fn query_and_normalize_str(&self, name: &str) -> GitVarsResult<ResolvedValue> {
        let name = VariableName::parse(name)?;
        self.query_and_normalize(name).await
    }
}
