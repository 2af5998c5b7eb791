//! gitvars CLI entry point
//!
//! Loads configuration, sets up logging, and dispatches to subcommands.

use clap::Parser;
use console::style;
use gitvars::cli::{commands, Cli, Commands};
use gitvars::config::ConfigManager;
use gitvars::error::GitVarsResult;
use gitvars::ui;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status when a git query fails or times out
const QUERY_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            if e.is_query_error() {
                ExitCode::from(QUERY_FAILURE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run() -> GitVarsResult<()> {
    let cli = Cli::parse();

    // Completions need neither config nor logging
    if let Commands::Completions(args) = cli.command {
        return commands::completions(args);
    }

    let config_manager = ConfigManager::locate(cli.config.clone());
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config.general.log_format);
    ui::init_theme(&ui::UiContext::detect());

    debug!("Using config {}", config_manager.path().display());

    let repo_dir = cli.cwd.as_deref();

    match cli.command {
        Commands::Completions(_) => unreachable!("Completions handled above"),
        Commands::Get(args) => commands::get(args, &config, repo_dir).await,
        Commands::List(args) => commands::list(args, &config, repo_dir).await,
        Commands::Export(args) => commands::export(args, &config, repo_dir).await,
        Commands::Hook(args) => commands::hook(args, &config, repo_dir).await,
        Commands::Config(args) => commands::config(args, &config, &config_manager).await,
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr so stdout stays pipeable
fn init_logging(verbose: u8, format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("gitvars=warn"),
        1 => EnvFilter::new("gitvars=info"),
        _ => EnvFilter::new("gitvars=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if format == "json" {
        builder.json().init();
    } else {
        builder.with_target(false).without_time().init();
    }
}
