//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// gitvars - git metadata for serverless functions
///
/// Resolves git repository metadata (commit, branch, dirty state, ...) and
/// exports it as environment variables and tags on every function of a
/// serverless service.
#[derive(Parser, Debug)]
#[command(name = "gitvars")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GITVARS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve variable references (e.g. sha1, git:branch, env:STAGE)
    Get(GetArgs),

    /// Resolve and show every git variable
    List(ListArgs),

    /// Export git variables onto every function of a service
    Export(ExportArgs),

    /// Run the action registered for a lifecycle phase
    Hook(HookArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// References to resolve; bare names are read as git:<name>
    #[arg(required = true)]
    pub references: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Service document (defaults to export.file from config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the updated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the hook command
#[derive(Parser, Debug)]
pub struct HookArgs {
    /// Lifecycle phase (e.g. after:package:initialize)
    pub phase: String,

    /// Service document (defaults to export.file from config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the updated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., git.timeout_ms)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

/// Output format for resolved values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
