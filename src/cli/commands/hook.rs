//! Hook command - dispatch a host lifecycle phase

use crate::cli::args::HookArgs;
use crate::config::Config;
use crate::error::GitVarsResult;
use crate::hooks::HookRegistry;
use crate::service::ServiceDocument;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the hook command
pub async fn execute(args: HookArgs, config: &Config, repo_dir: Option<&Path>) -> GitVarsResult<()> {
    let registry = HookRegistry::serverless();

    if registry.action_for(&args.phase).is_none() {
        let ctx = UiContext::detect();
        ui::step_info(&ctx, &format!("Nothing registered for {}", args.phase));
        return Ok(());
    }

    let path = super::service_path(args.file, config, repo_dir);
    let mut service = ServiceDocument::load(&path).await?;
    let resolver = super::build_resolver(config, repo_dir);

    match registry.run(&args.phase, &resolver, &mut service).await? {
        Some(report) => super::export::finish(&service, &report, &path, args.dry_run).await,
        None => Ok(()),
    }
}
