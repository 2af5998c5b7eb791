//! Configuration schema for gitvars
//!
//! Configuration is stored at `~/.config/gitvars/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Git query settings
    pub git: GitConfig,

    /// Export defaults
    pub export: ExportConfig,
}

impl Config {
    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.general.log_format.as_str(), "text" | "json") {
            return Err(format!(
                "general.log_format must be \"text\" or \"json\", got \"{}\"",
                self.general.log_format
            ));
        }
        if self.git.timeout_ms == 0 {
            return Err("git.timeout_ms must be greater than zero".to_string());
        }
        if self.git.program.trim().is_empty() || self.git.program.contains(char::is_whitespace) {
            return Err(format!(
                "git.program must be a single path without spaces, got \"{}\"",
                self.git.program
            ));
        }
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Git query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Git executable
    pub program: String,

    /// Per-query timeout in milliseconds
    pub timeout_ms: u64,
}

impl GitConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout_ms: 1000,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Service document used when --file is not given
    pub file: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("serverless.yml"),
        }
    }
}
