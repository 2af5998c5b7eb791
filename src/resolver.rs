//! Memoizing variable resolver
//!
//! A [`Resolver`] owns the cache for one run. Each variable is queried at
//! most once: later requests are answered from the cache, and concurrent
//! first requests for the same name wait on a single in-flight query.
//! Failed queries are not cached, so the next request tries again.

use crate::error::GitVarsResult;
use crate::query::RepositoryQuery;
use crate::variable::{ResolvedValue, VariableName};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;
use tracing::debug;

type Slot = Arc<OnceCell<ResolvedValue>>;

/// Resolves variable names through a process-scoped cache
pub struct Resolver {
    query: RepositoryQuery,
    cache: Mutex<HashMap<VariableName, Slot>>,
}

impl Resolver {
    /// Create a resolver with an empty cache
    pub fn new(query: RepositoryQuery) -> Self {
        Self {
            query,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The executor used on cache misses
    pub fn query(&self) -> &RepositoryQuery {
        &self.query
    }

    /// Resolve a variable by its reference name (e.g. `sha1`)
    pub async fn resolve(&self, name: &str) -> GitVarsResult<ResolvedValue> {
        let name = VariableName::parse(name)?;
        self.resolve_variable(name).await
    }

    /// Resolve a variable, querying git only on the first request
    pub async fn resolve_variable(&self, name: VariableName) -> GitVarsResult<ResolvedValue> {
        let slot = self.slot(name);

        if let Some(value) = slot.get() {
            debug!("Cache hit for {}", name);
            return Ok(value.clone());
        }

        let value = slot
            .get_or_try_init(|| async {
                debug!("Cache miss for {}", name);
                self.query.query_and_normalize(name).await
            })
            .await?;

        Ok(value.clone())
    }

    /// Cached value for `name`, without resolving it
    pub fn cached(&self, name: VariableName) -> Option<ResolvedValue> {
        self.lock()
            .get(&name)
            .and_then(|slot| slot.get().cloned())
    }

    /// All cached values, in canonical variable order
    pub fn snapshot(&self) -> Vec<(VariableName, ResolvedValue)> {
        let cache = self.lock();
        VariableName::ALL
            .into_iter()
            .filter_map(|name| {
                cache
                    .get(&name)
                    .and_then(|slot| slot.get().cloned())
                    .map(|value| (name, value))
            })
            .collect()
    }

    fn slot(&self, name: VariableName) -> Slot {
        self.lock().entry(name).or_default().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<VariableName, Slot>> {
        // Slots are only inserted under the lock, so a poisoned map is still consistent
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}
