//! Get command - resolve individual variable references

use crate::cli::args::{GetArgs, OutputFormat};
use crate::config::Config;
use crate::error::GitVarsResult;
use crate::source::{self, VariableSource, GIT_PREFIX};
use crate::ui::{self, UiContext};
use crate::variable::ResolvedValue;
use std::path::Path;

/// Execute the get command
pub async fn execute(args: GetArgs, config: &Config, repo_dir: Option<&Path>) -> GitVarsResult<()> {
    let resolver = super::build_resolver(config, repo_dir);
    let chain = source::default_chain(resolver);

    let mut resolved = Vec::with_capacity(args.references.len());
    for reference in &args.references {
        let reference = qualify(reference);
        let value = chain.get_value(&reference).await?;
        resolved.push((reference, value));
    }

    match args.format {
        OutputFormat::Plain => {
            for (_, value) in &resolved {
                println!("{}", value);
            }
        }
        OutputFormat::Json => print_json(&resolved)?,
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            for (reference, value) in &resolved {
                ui::key_value(&ctx, reference, &value.to_string());
            }
        }
    }

    Ok(())
}

/// Bare names are git variables
fn qualify(reference: &str) -> String {
    if source::split_reference(reference).is_some() {
        reference.to_string()
    } else {
        format!("{}:{}", GIT_PREFIX, reference)
    }
}

fn print_json(resolved: &[(String, ResolvedValue)]) -> GitVarsResult<()> {
    let map: serde_json::Map<String, serde_json::Value> = resolved
        .iter()
        .map(|(reference, value)| -> GitVarsResult<(String, serde_json::Value)> {
            Ok((reference.clone(), serde_json::to_value(value)?))
        })
        .collect::<GitVarsResult<_>>()?;
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}
