//! Entity-type registry mapping names to prefixes and strategies.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::PrefixError;
use crate::strategy::IdStrategy;

/// A concurrent registry of `(entity type, prefix, strategy)` bindings for
/// identifiers of a single value type `T`.
///
/// The registry is a passive shared structure: all operations run on the
/// caller's thread and take a reader/writer lock only for the duration of the
/// map lookups. Registrations insert into the prefix and strategy maps under
/// one write-lock acquisition, so readers always observe both or neither.
///
/// Entity types are never removed; re-registering overwrites, last writer
/// wins.
pub struct Registry<T> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    prefixes: HashMap<String, String>,
    strategies: HashMap<String, Arc<dyn IdStrategy<T>>>,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                prefixes: HashMap::new(),
                strategies: HashMap::new(),
            }),
        }
    }

    /// Creates a registry seeded with an entity-type → prefix mapping.
    ///
    /// No strategies are bound yet: formatting and parsing for the seeded
    /// entity types fail with [`PrefixError::UnboundStrategy`] until
    /// [`register`](Self::register) is called for each.
    #[must_use]
    pub fn with_prefixes(prefixes: HashMap<String, String>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                prefixes,
                strategies: HashMap::new(),
            }),
        }
    }

    /// Registers or overwrites the prefix and strategy for an entity type.
    pub fn register(
        &self,
        entity_type: &str,
        prefix: &str,
        strategy: impl IdStrategy<T> + 'static,
    ) {
        let mut inner = self.write();
        inner
            .prefixes
            .insert(entity_type.to_string(), prefix.to_string());
        inner
            .strategies
            .insert(entity_type.to_string(), Arc::new(strategy));
        debug!(entity_type, prefix, "registered entity type");
    }

    /// Returns a snapshot of all registered entity types, in arbitrary order.
    #[must_use]
    pub fn entity_types(&self) -> Vec<String> {
        self.read().prefixes.keys().cloned().collect()
    }

    /// Formats `id` as a prefixed ID string for the given entity type.
    pub fn prefix_id(&self, entity_type: &str, id: &T) -> Result<String, PrefixError> {
        let inner = self.read();
        let (prefix, strategy) = inner.lookup(entity_type)?;
        Ok(strategy.attach(prefix, id))
    }

    /// Parses a prefixed ID string back into an identifier value for the
    /// given entity type.
    ///
    /// Fails with [`PrefixError::PrefixMismatch`] when `prefixed_id` does not
    /// start with the registered prefix and an underscore, and with the
    /// strategy's decode error when the remainder is not a valid encoding.
    pub fn parse_prefixed_id(&self, entity_type: &str, prefixed_id: &str) -> Result<T, PrefixError> {
        let inner = self.read();
        let (prefix, strategy) = inner.lookup(entity_type)?;

        let raw = strategy
            .detach(prefix, prefixed_id)
            .ok_or_else(|| PrefixError::PrefixMismatch {
                entity_type: entity_type.to_string(),
            })?;

        strategy.parse(raw)
    }

    /// Determines the entity type of a prefixed ID by trying every registered
    /// entity type's prefix, returning the first that detaches along with the
    /// raw remainder.
    ///
    /// Iteration order is unspecified: when the input's leading segment
    /// matches more than one registered prefix, which entity type wins is
    /// arbitrary. Returns `None` when no prefix matches.
    #[must_use]
    pub fn match_prefix(&self, prefixed_id: &str) -> Option<(String, String)> {
        let inner = self.read();
        for (entity_type, prefix) in &inner.prefixes {
            // Seeded entity types without a bound strategy cannot detach.
            let Some(strategy) = inner.strategies.get(entity_type) else {
                continue;
            };
            if let Some(raw) = strategy.detach(prefix, prefixed_id) {
                return Some((entity_type.clone(), raw.to_string()));
            }
        }
        None
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        // Strategies are stateless and both maps are mutated under one write
        // acquisition, so a poisoned lock still guards consistent state.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Inner<T> {
    fn lookup(&self, entity_type: &str) -> Result<(&str, &Arc<dyn IdStrategy<T>>), PrefixError> {
        let prefix = self
            .prefixes
            .get(entity_type)
            .ok_or_else(|| PrefixError::UnregisteredEntityType(entity_type.to_string()))?;
        let strategy = self
            .strategies
            .get(entity_type)
            .ok_or_else(|| PrefixError::UnboundStrategy(entity_type.to_string()))?;
        Ok((prefix, strategy))
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("prefixes", &self.read().prefixes)
            .finish_non_exhaustive()
    }
}
