//! Variable reference sources
//!
//! References have the form `<prefix>:<name>`. Sources form a chain: each one
//! handles its own prefix and forwards everything else, unchanged, to the
//! next source.

use crate::error::{GitVarsError, GitVarsResult};
use crate::resolver::Resolver;
use crate::variable::ResolvedValue;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Prefix of git variable references (`git:sha1`)
pub const GIT_PREFIX: &str = "git";

/// Prefix of process environment references (`env:STAGE`)
pub const ENV_PREFIX: &str = "env";

/// Split `prefix:rest`, if the reference has a prefix
pub fn split_reference(reference: &str) -> Option<(&str, &str)> {
    reference.split_once(':')
}

/// Something that can turn a variable reference into a value
#[async_trait]
pub trait VariableSource: Send + Sync {
    /// Resolve `reference`, or hand it to the next source
    async fn get_value(&self, reference: &str) -> GitVarsResult<ResolvedValue>;
}

/// Resolves `git:` references through a [`Resolver`]
pub struct GitVariableSource {
    resolver: Arc<Resolver>,
    delegate: Box<dyn VariableSource>,
}

impl GitVariableSource {
    pub fn new(resolver: Arc<Resolver>, delegate: Box<dyn VariableSource>) -> Self {
        Self { resolver, delegate }
    }
}

#[async_trait]
impl VariableSource for GitVariableSource {
    async fn get_value(&self, reference: &str) -> GitVarsResult<ResolvedValue> {
        match split_reference(reference) {
            Some((GIT_PREFIX, name)) => self.resolver.resolve(name).await,
            _ => {
                debug!("Delegating reference {}", reference);
                self.delegate.get_value(reference).await
            }
        }
    }
}

/// Resolves `env:` references from the process environment
pub struct EnvVariableSource {
    delegate: Box<dyn VariableSource>,
}

impl EnvVariableSource {
    pub fn new(delegate: Box<dyn VariableSource>) -> Self {
        Self { delegate }
    }
}

#[async_trait]
impl VariableSource for EnvVariableSource {
    async fn get_value(&self, reference: &str) -> GitVarsResult<ResolvedValue> {
        match split_reference(reference) {
            Some((ENV_PREFIX, name)) => std::env::var(name)
                .map(ResolvedValue::Text)
                .map_err(|_| {
                    GitVarsError::User(format!("Environment variable {} is not set", name))
                }),
            _ => self.delegate.get_value(reference).await,
        }
    }
}

/// End of the chain: every reference that reaches it is unknown
pub struct UnresolvedSource;

#[async_trait]
impl VariableSource for UnresolvedSource {
    async fn get_value(&self, reference: &str) -> GitVarsResult<ResolvedValue> {
        Err(GitVarsError::UnknownSource(reference.to_string()))
    }
}

/// The chain used by the CLI: git, then environment, then unresolved
pub fn default_chain(resolver: Arc<Resolver>) -> GitVariableSource {
    GitVariableSource::new(
        resolver,
        Box::new(EnvVariableSource::new(Box::new(UnresolvedSource))),
    )
}
