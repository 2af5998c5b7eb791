//! List command - show every git variable

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::GitVarsResult;
use crate::ui::{self, UiContext};
use crate::variable::{ResolvedValue, VariableName};
use console::style;
use std::path::Path;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config, repo_dir: Option<&Path>) -> GitVarsResult<()> {
    let resolver = super::build_resolver(config, repo_dir);

    let mut values = Vec::with_capacity(VariableName::ALL.len());
    for name in VariableName::ALL {
        values.push((name, resolver.resolve_variable(name).await?));
    }

    match args.format {
        OutputFormat::Table => print_table(&values),
        OutputFormat::Json => print_json(&values)?,
        OutputFormat::Plain => print_plain(&values),
    }

    Ok(())
}

fn print_table(values: &[(VariableName, ResolvedValue)]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Git variables");

    println!("{:<16} {}", style("NAME").bold(), style("VALUE").bold());
    println!("{}", "-".repeat(60));

    for (name, value) in values {
        let shown = match value.as_flag() {
            Some(true) => style("true").yellow(),
            Some(false) => style("false").green(),
            // Commit messages can span lines; the table shows the subject only
            None => style(
                value
                    .as_text()
                    .and_then(|text| text.lines().next())
                    .unwrap_or(""),
            ),
        };
        println!("{:<16} {}", name.as_str(), shown);
    }
}

fn print_json(values: &[(VariableName, ResolvedValue)]) -> GitVarsResult<()> {
    let map: serde_json::Map<String, serde_json::Value> = values
        .iter()
        .map(|(name, value)| -> GitVarsResult<(String, serde_json::Value)> {
            Ok((name.to_string(), serde_json::to_value(value)?))
        })
        .collect::<GitVarsResult<_>>()?;
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

fn print_plain(values: &[(VariableName, ResolvedValue)]) {
    for (name, value) in values {
        // Escape newlines so each variable stays on one line
        println!("{}={}", name, value.to_string().replace('\n', "\\n"));
    }
}
