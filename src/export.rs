//! Export git variables onto functions
//!
//! Resolves a fixed set of variables once and writes them into every
//! function's `environment` and `tags` maps. Keys that are already present
//! are left alone, even when their value is empty.

use crate::error::GitVarsResult;
use crate::resolver::Resolver;
use crate::service::{child_mapping, ServiceDocument};
use crate::variable::{ResolvedValue, VariableName};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, info, warn};

/// Variables exported to every function, in resolution order
pub const EXPORTED_VARIABLES: [(VariableName, &str); 5] = [
    (VariableName::Sha1, "GIT_COMMIT_SHORT"),
    (VariableName::Commit, "GIT_COMMIT_LONG"),
    (VariableName::Branch, "GIT_BRANCH"),
    (VariableName::IsDirty, "GIT_IS_DIRTY"),
    (VariableName::Repository, "GIT_REPOSITORY"),
];

/// Outcome of an export run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// True when `custom.exportGitVariables` is `false`
    pub disabled: bool,

    /// Resolved values keyed by exported name, in resolution order
    pub values: IndexMap<String, ResolvedValue>,

    /// Per-function writes, in document order
    pub functions: Vec<FunctionExport>,
}

impl ExportReport {
    fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Total number of keys written across all functions
    pub fn written(&self) -> usize {
        self.functions
            .iter()
            .map(|f| f.environment.len() + f.tags.len())
            .sum()
    }
}

/// Keys written into one function
#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionExport {
    pub name: String,
    pub environment: Vec<String>,
    pub tags: Vec<String>,
}

impl FunctionExport {
    /// Keys that were skipped because they were already set
    pub fn skipped(&self) -> usize {
        2 * EXPORTED_VARIABLES.len() - self.environment.len() - self.tags.len()
    }
}

/// Resolve the exported variables and write them onto every function
pub async fn export_git_variables(
    resolver: &Resolver,
    service: &mut ServiceDocument,
) -> GitVarsResult<ExportReport> {
    if !service.export_enabled() {
        info!("Git variable export disabled by custom.exportGitVariables");
        return Ok(ExportReport::disabled());
    }

    let mut values = IndexMap::with_capacity(EXPORTED_VARIABLES.len());
    for (name, key) in EXPORTED_VARIABLES {
        let value = resolver.resolve_variable(name).await?;
        values.insert(key.to_string(), value);
    }

    let mut functions = Vec::new();
    for (function_name, function) in service.functions_mut() {
        let mut written = FunctionExport {
            name: function_name,
            ..FunctionExport::default()
        };

        for (key, value) in &values {
            let (env, tag) = export_variable(function, key, value);
            if env {
                written.environment.push(key.clone());
            }
            if tag {
                written.tags.push(key.clone());
            }
        }

        debug!(
            "Exported {} environment and {} tag key(s) to {}",
            written.environment.len(),
            written.tags.len(),
            written.name
        );
        functions.push(written);
    }

    let report = ExportReport {
        disabled: false,
        values,
        functions,
    };
    info!(
        "Exported git variables to {} function(s), {} key(s) written",
        report.functions.len(),
        report.written()
    );
    Ok(report)
}

/// Write one variable into a function's environment and tags
///
/// Returns whether the environment and tag entries were written. A section
/// that holds something other than a mapping (say a `!Ref`) is left as is.
pub fn export_variable(function: &mut Mapping, key: &str, value: &ResolvedValue) -> (bool, bool) {
    let env = set_if_absent(function, "environment", key, value);
    let tag = set_if_absent(function, "tags", key, value);
    (env, tag)
}

fn set_if_absent(function: &mut Mapping, section: &str, key: &str, value: &ResolvedValue) -> bool {
    let Some(map) = child_mapping(function, section) else {
        warn!("{} is not a mapping, leaving {} unset", section, key);
        return false;
    };
    if map.contains_key(key) {
        return false;
    }
    map.insert(Value::String(key.to_string()), Value::String(value.to_string()));
    true
}
