//! Export command - write git variables onto every function

use crate::cli::args::ExportArgs;
use crate::config::Config;
use crate::error::GitVarsResult;
use crate::export::{export_git_variables, ExportReport};
use crate::service::ServiceDocument;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the export command
pub async fn execute(args: ExportArgs, config: &Config, repo_dir: Option<&Path>) -> GitVarsResult<()> {
    let path = super::service_path(args.file, config, repo_dir);
    let mut service = ServiceDocument::load(&path).await?;

    let resolver = super::build_resolver(config, repo_dir);
    let report = export_git_variables(&resolver, &mut service).await?;

    finish(&service, &report, &path, args.dry_run).await
}

/// Write or print the updated document and summarize the export
pub(crate) async fn finish(
    service: &ServiceDocument,
    report: &ExportReport,
    path: &Path,
    dry_run: bool,
) -> GitVarsResult<()> {
    if dry_run {
        print!("{}", service.to_yaml_string()?);
        return Ok(());
    }

    let ctx = UiContext::detect();

    if report.disabled {
        ui::step_warn_hint(
            &ctx,
            "Git variable export disabled",
            "custom.exportGitVariables is false",
        );
        return Ok(());
    }

    service.save(path).await?;

    for function in &report.functions {
        let skipped = function.skipped();
        if skipped == 0 {
            ui::step_ok(&ctx, &function.name);
        } else {
            ui::step_ok_detail(
                &ctx,
                &function.name,
                &format!("{} existing key(s) kept", skipped),
            );
        }
    }

    if report.functions.is_empty() {
        ui::step_info(&ctx, "No functions defined");
    } else {
        ui::step_ok_detail(
            &ctx,
            &format!("Exported git variables to {}", path.display()),
            &format!("{} key(s) written", report.written()),
        );
    }

    Ok(())
}
