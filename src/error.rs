//! Error types for gitvars
//!
//! All modules use `GitVarsResult<T>` as their return type.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for gitvars operations
pub type GitVarsResult<T> = Result<T, GitVarsError>;

/// All errors that can occur in gitvars
#[derive(Error, Debug)]
pub enum GitVarsError {
    // Variable errors
    #[error("Git variable {name} is unknown. Candidates are {candidates}")]
    UnknownVariable { name: String, candidates: String },

    #[error("No variable source handles reference: {0}")]
    UnknownSource(String),

    // Query errors
    #[error("Git query failed: {command}: {reason}")]
    QueryFailed { command: String, reason: String },

    #[error("Git query timed out after {}ms: {command}", .timeout.as_millis())]
    QueryTimeout { command: String, timeout: Duration },

    // Service document errors
    #[error("Invalid service document at {path}: {reason}")]
    ServiceInvalid { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl GitVarsError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a query failed error
    pub fn query_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error came from running a git query
    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::QueryFailed { .. } | Self::QueryTimeout { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownVariable { .. } => Some("Check the variable name for typos"),
            Self::QueryFailed { .. } => {
                Some("Run inside a git working tree with at least one commit, or pass --cwd")
            }
            Self::QueryTimeout { .. } => Some("Raise git.timeout_ms in the gitvars config"),
            Self::UnknownSource(_) => Some("Git references look like git:sha1"),
            _ => None,
        }
    }
}
