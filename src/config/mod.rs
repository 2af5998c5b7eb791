//! Tool configuration stored as TOML

pub mod schema;

pub use schema::Config;

use crate::error::{GitVarsError, GitVarsResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the gitvars config file
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for an explicit path (`--config` / `GITVARS_CONFIG`) or the
    /// per-user default
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        let path = explicit.unwrap_or_else(Self::default_path);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/gitvars/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gitvars")
            .join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a config file is present
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read and validate the config; a missing file yields the defaults
    pub async fn load(&self) -> GitVarsResult<Config> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(GitVarsError::io(
                    format!("reading config from {}", self.path.display()),
                    e,
                ))
            }
        };

        let config: Config = toml::from_str(&content).map_err(|e| self.invalid(e.to_string()))?;
        config.validate().map_err(|reason| self.invalid(reason))?;
        Ok(config)
    }

    /// Write the config, creating its directory first
    pub async fn save(&self, config: &Config) -> GitVarsResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| GitVarsError::ConfigDirCreate {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content).await.map_err(|e| {
            GitVarsError::io(format!("writing config to {}", self.path.display()), e)
        })?;

        info!("Configuration saved to {}", self.path.display());
        Ok(())
    }

    fn invalid(&self, reason: String) -> GitVarsError {
        GitVarsError::ConfigInvalid {
            path: self.path.clone(),
            reason,
        }
    }
}
