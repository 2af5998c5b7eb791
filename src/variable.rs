//! Variable names and resolved values

use crate::error::{GitVarsError, GitVarsResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A git variable that can be resolved from the working tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableName {
    Describe,
    DescribeLight,
    Sha1,
    Commit,
    Branch,
    Message,
    IsDirty,
    Repository,
}

impl VariableName {
    /// Every recognized variable, in canonical order
    pub const ALL: [VariableName; 8] = [
        Self::Describe,
        Self::DescribeLight,
        Self::Sha1,
        Self::Commit,
        Self::Branch,
        Self::Message,
        Self::IsDirty,
        Self::Repository,
    ];

    /// Name as written in variable references (`git:<name>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Describe => "describe",
            Self::DescribeLight => "describeLight",
            Self::Sha1 => "sha1",
            Self::Commit => "commit",
            Self::Branch => "branch",
            Self::Message => "message",
            Self::IsDirty => "isDirty",
            Self::Repository => "repository",
        }
    }

    /// Quoted, comma-separated list of every valid name
    pub fn candidates() -> String {
        Self::ALL
            .iter()
            .map(|name| format!("'{}'", name.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a variable name, failing with the candidate list on a miss
    pub fn parse(name: &str) -> GitVarsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == name)
            .ok_or_else(|| GitVarsError::UnknownVariable {
                name: name.to_string(),
                candidates: Self::candidates(),
            })
    }
}

impl FromStr for VariableName {
    type Err = GitVarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value a variable resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Text(String),
    Flag(bool),
}

impl ResolvedValue {
    /// Borrow the text value, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    /// Get the flag value, if this is one
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ResolvedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for ResolvedValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
