//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{GitVarsError, GitVarsResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

const VALID_KEYS: [&str; 4] = [
    "general.log_format",
    "git.program",
    "git.timeout_ms",
    "export.file",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> GitVarsResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config),
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) {
    let toml =
        toml::to_string_pretty(config).unwrap_or_else(|_| "Error serializing config".to_string());
    println!("{}", toml);
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> GitVarsResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if manager.exists().await && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> GitVarsResult<()> {
    let ctx = UiContext::detect();

    let config = match apply(config, key, value) {
        Ok(config) => config,
        Err(GitVarsError::User(reason)) if reason.starts_with("Unknown config key") => {
            ui::step_error_detail(&ctx, "Unknown config key", key);
            ui::remark(&ctx, &format!("Valid keys: {}", VALID_KEYS.join(", ")));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply a dot-separated key to a copy of `config`
fn apply(config: &Config, key: &str, value: &str) -> GitVarsResult<Config> {
    let mut config = config.clone();
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => config.general.log_format = value.to_string(),
        ["git", "program"] => config.git.program = value.to_string(),
        ["git", "timeout_ms"] => {
            config.git.timeout_ms = value.parse().map_err(|_| {
                GitVarsError::User(format!(
                    "Invalid timeout: {}. Use a positive number of milliseconds",
                    value
                ))
            })?
        }
        ["export", "file"] => config.export.file = PathBuf::from(value),
        _ => return Err(GitVarsError::User(format!("Unknown config key: {}", key))),
    }

    config.validate().map_err(GitVarsError::User)?;
    Ok(config)
}
