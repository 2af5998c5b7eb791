//! Serverless service document
//!
//! The document is held as a plain YAML mapping. gitvars only navigates to
//! `custom.exportGitVariables` and `functions.<name>.{environment,tags}`;
//! every other key, tagged values such as `!Ref` included, is carried
//! through in its original order. Comments and anchors are not preserved
//! when a document is written back.

use crate::error::{GitVarsError, GitVarsResult};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Key under `custom` that switches the export off
pub const EXPORT_FLAG: &str = "exportGitVariables";

const CUSTOM: &str = "custom";
const FUNCTIONS: &str = "functions";

/// Root of a `serverless.yml` style document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDocument {
    root: Mapping,
}

impl ServiceDocument {
    /// Parse a document from YAML text
    ///
    /// An empty document is an empty mapping; any other non-mapping root is
    /// rejected.
    pub fn from_yaml_str(content: &str) -> GitVarsResult<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            other => Err(GitVarsError::User(format!(
                "service document must be a mapping, found {}",
                kind(&other)
            ))),
        }
    }

    /// Serialize the document back to YAML
    pub fn to_yaml_string(&self) -> GitVarsResult<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Load a document from disk
    pub async fn load(path: &Path) -> GitVarsResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| GitVarsError::io(format!("reading {}", path.display()), e))?;

        let doc = Self::from_yaml_str(&content).map_err(|e| GitVarsError::ServiceInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(
            "Loaded {} with {} function(s)",
            path.display(),
            doc.function_names().count()
        );
        Ok(doc)
    }

    /// Write the document to disk
    pub async fn save(&self, path: &Path) -> GitVarsResult<()> {
        let content = self.to_yaml_string()?;
        fs::write(path, content)
            .await
            .map_err(|e| GitVarsError::io(format!("writing {}", path.display()), e))?;
        Ok(())
    }

    /// Top-level value under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Whether the git export step should run
    ///
    /// Only an explicit boolean `false` disables it; a missing key, a
    /// missing `custom` section, or any other value leaves it on.
    pub fn export_enabled(&self) -> bool {
        let flag = self
            .root
            .get(CUSTOM)
            .and_then(Value::as_mapping)
            .and_then(|custom| custom.get(EXPORT_FLAG));
        !matches!(flag, Some(Value::Bool(false)))
    }

    /// Function names in document order
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.root
            .get(FUNCTIONS)
            .and_then(Value::as_mapping)
            .into_iter()
            .flat_map(|functions| functions.keys())
            .filter_map(Value::as_str)
    }

    /// A function entry by name
    pub fn function(&self, name: &str) -> Option<&Mapping> {
        self.root
            .get(FUNCTIONS)
            .and_then(Value::as_mapping)
            .and_then(|functions| functions.get(name))
            .and_then(Value::as_mapping)
    }

    /// Mutable function entries in document order
    ///
    /// A function declared with no body (`name:`) becomes an empty mapping.
    /// Entries that are neither a mapping nor empty are skipped.
    pub fn functions_mut(&mut self) -> Vec<(String, &mut Mapping)> {
        let Some(functions) = self.root.get_mut(FUNCTIONS).and_then(Value::as_mapping_mut) else {
            return Vec::new();
        };

        functions
            .iter_mut()
            .filter_map(|(name, body)| {
                let name = match name {
                    Value::String(s) => s.clone(),
                    other => serde_yaml::to_string(other).ok()?.trim().to_string(),
                };
                if body.is_null() {
                    *body = Value::Mapping(Mapping::new());
                }
                match body.as_mapping_mut() {
                    Some(body) => Some((name, body)),
                    None => {
                        debug!("Skipping function {}: not a mapping", name);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Child mapping under `key`, created when missing or empty
///
/// Returns `None` when the key holds something other than a mapping.
pub fn child_mapping<'a>(parent: &'a mut Mapping, key: &str) -> Option<&'a mut Mapping> {
    let slot = parent
        .entry(Value::String(key.to_string()))
        .or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Mapping(Mapping::new());
    }
    slot.as_mapping_mut()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
