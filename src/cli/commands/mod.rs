//! CLI command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod get;
pub mod hook;
pub mod list;

pub use completions::execute as completions;
pub use config::execute as config;
pub use export::execute as export;
pub use get::execute as get;
pub use hook::execute as hook;
pub use list::execute as list;

use crate::config::Config;
use crate::exec::ProcessRunner;
use crate::query::RepositoryQuery;
use crate::resolver::Resolver;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Build the resolver for one CLI run from config and the `--cwd` flag
pub(crate) fn build_resolver(config: &Config, repo_dir: Option<&Path>) -> Arc<Resolver> {
    let mut runner = ProcessRunner::new();
    if let Some(dir) = repo_dir {
        runner = runner.with_cwd(dir);
    }

    let query = RepositoryQuery::new(Arc::new(runner))
        .with_program(config.git.program.clone())
        .with_timeout(config.git.timeout());

    Arc::new(Resolver::new(query))
}

/// Service document path: explicit flag, else the configured default
///
/// Relative paths are taken relative to `--cwd` when it is given.
pub(crate) fn service_path(
    file: Option<PathBuf>,
    config: &Config,
    repo_dir: Option<&Path>,
) -> PathBuf {
    let path = file.unwrap_or_else(|| config.export.file.clone());
    match repo_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_path_defaults_to_config() {
        let config = Config::default();
        assert_eq!(
            service_path(None, &config, None),
            PathBuf::from("serverless.yml")
        );
    }

    #[cfg(unix)]
    #[test]
    fn service_path_relative_to_cwd() {
        let config = Config::default();
        let dir = Path::new("/work/repo");
        assert_eq!(
            service_path(Some(PathBuf::from("svc.yml")), &config, Some(dir)),
            PathBuf::from("/work/repo/svc.yml")
        );
        assert_eq!(
            service_path(Some(PathBuf::from("/abs/svc.yml")), &config, Some(dir)),
            PathBuf::from("/abs/svc.yml")
        );
    }
}
