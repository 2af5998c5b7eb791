//! Lifecycle hook registry
//!
//! The host calls into gitvars at named lifecycle phases. The registry is an
//! explicit table from phase name to the action run at that phase.

use crate::error::GitVarsResult;
use crate::export::{export_git_variables, ExportReport};
use crate::resolver::Resolver;
use crate::service::ServiceDocument;
use tracing::debug;

/// Phases the serverless host triggers the export on
pub const SERVERLESS_PHASES: [&str; 3] = [
    "after:package:initialize",
    "before:offline:start",
    "before:offline:start:init",
];

/// Work bound to a lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// Write git variables onto every function
    ExportGitVariables,
}

/// Ordered table of phase bindings
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    hooks: Vec<(String, HookAction)>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the serverless plugin bindings
    pub fn serverless() -> Self {
        let mut registry = Self::new();
        for phase in SERVERLESS_PHASES {
            registry.register(phase, HookAction::ExportGitVariables);
        }
        registry
    }

    /// Bind `action` to `phase`, replacing any existing binding
    pub fn register(&mut self, phase: impl Into<String>, action: HookAction) -> &mut Self {
        let phase = phase.into();
        match self.hooks.iter_mut().find(|(p, _)| *p == phase) {
            Some(entry) => entry.1 = action,
            None => self.hooks.push((phase, action)),
        }
        self
    }

    /// Action bound to `phase`, if any
    pub fn action_for(&self, phase: &str) -> Option<HookAction> {
        self.hooks
            .iter()
            .find(|(p, _)| p == phase)
            .map(|(_, action)| *action)
    }

    /// Registered phases in registration order
    pub fn phases(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(|(p, _)| p.as_str())
    }

    /// Run the action bound to `phase`
    ///
    /// Returns `None` when nothing is registered for the phase.
    pub async fn run(
        &self,
        phase: &str,
        resolver: &Resolver,
        service: &mut ServiceDocument,
    ) -> GitVarsResult<Option<ExportReport>> {
        let Some(action) = self.action_for(phase) else {
            debug!("No hook registered for {}", phase);
            return Ok(None);
        };

        debug!("Running {:?} for {}", action, phase);
        match action {
            HookAction::ExportGitVariables => {
                export_git_variables(resolver, service).await.map(Some)
            }
        }
    }
}
