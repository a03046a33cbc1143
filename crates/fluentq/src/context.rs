//! Per-chain evaluation context: alias bookkeeping and ancestor bindings

use fluentq_eval::{Environment, ObjectId, Value};
use std::collections::{HashMap, HashSet};

/// Immutable context threaded through a query chain
///
/// Tracks, per object instance, the ancestor alias bindings visible when
/// that object's where expression is evaluated, and the set of aliases
/// already bound anywhere in the chain. Environments are keyed by object
/// identity ([`ObjectId`]): structurally equal but distinct objects keep
/// separate entries.
///
/// Every transition returns a new context; earlier snapshots stay valid.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    environments: HashMap<ObjectId, Environment>,
    used_aliases: HashSet<String>,
}

impl QueryContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded variables for that exact object instance
    ///
    /// Returns an empty environment for unrecorded objects and for
    /// non-object values, which never carry bindings.
    pub fn environment(&self, item: &Value) -> Environment {
        item.object_id()
            .and_then(|id| self.environments.get(&id))
            .cloned()
            .unwrap_or_default()
    }

    /// New context where `info` is merged over the item's existing entry
    ///
    /// Values in `info` take precedence; keys absent from `info` keep
    /// their previously recorded values.
    pub fn with_environment(&self, item: &Value, info: Environment) -> Self {
        let mut next = self.clone();
        if let Some(id) = item.object_id() {
            next.environments.entry(id).or_default().extend(info);
        }
        next
    }

    /// Check whether an alias is already bound in this lineage
    pub fn is_used_alias(&self, alias: &str) -> bool {
        self.used_aliases.contains(alias)
    }

    /// New context with the alias recorded as bound
    ///
    /// Uniqueness is the caller's responsibility: `Query::from` checks
    /// [`is_used_alias`](Self::is_used_alias) and fails before calling this.
    pub fn with_used_alias(&self, alias: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.used_aliases.insert(alias.into());
        next
    }
}
