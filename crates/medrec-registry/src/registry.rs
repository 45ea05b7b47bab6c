use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RegistryError, RegistryResult};

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// Declared side-effect class of an operation.
///
/// The external invocation router uses this to decide how to run an
/// operation: read-only operations can be served from a single node's
/// snapshot, mutating ones must go through the ledger's write protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Queries ledger state without writing.
    ReadOnly,
    /// Writes to or deletes from the ledger.
    Mutating,
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// Handler signature: string arguments in router order, JSON result.
pub type Handler = Box<dyn Fn(&[String]) -> RegistryResult<Value> + Send + Sync>;

/// A named operation with its declared side-effect class.
pub struct Operation {
    pub name: &'static str,
    pub effect: Effect,
    handler: Handler,
}

impl Operation {
    pub fn new(name: &'static str, effect: Effect, handler: Handler) -> Self {
        Self {
            name,
            effect,
            handler,
        }
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("effect", &self.effect)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The operation table consumed by the external invocation router.
///
/// Built once at startup; keyed by operation name in a `BTreeMap` so
/// [`names`](Self::names) lists deterministically.
#[derive(Default)]
pub struct Registry {
    operations: BTreeMap<&'static str, Operation>,
}

impl Registry {
    /// Create an empty registry. Use [`crate::operations`] helpers or
    /// [`Registry::with_default_operations`] for the full surface.
    pub fn new() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// Register an operation. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(&mut self, operation: Operation) {
        self.operations.insert(operation.name, operation);
    }

    /// Returns `true` if an operation is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// The declared side-effect class of `name`, if registered.
    pub fn effect_of(&self, name: &str) -> Option<Effect> {
        self.operations.get(name).map(|op| op.effect)
    }

    /// All registered operation names, ascending.
    pub fn names(&self) -> Vec<&'static str> {
        self.operations.keys().copied().collect()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operations are registered.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Dispatch `name` with the given arguments.
    ///
    /// This is the observability boundary: outcomes are logged here with
    /// structured fields, exactly once. Handlers and repositories below do
    /// not log.
    pub fn invoke(&self, name: &str, args: &[String]) -> RegistryResult<Value> {
        let Some(op) = self.operations.get(name) else {
            warn!(operation = name, "unknown operation");
            return Err(RegistryError::UnknownOperation(name.to_string()));
        };
        match (op.handler)(args) {
            Ok(value) => {
                debug!(operation = op.name, effect = ?op.effect, "operation completed");
                Ok(value)
            }
            Err(err) => {
                if let RegistryError::Repo(repo_err) = &err {
                    warn!(
                        operation = op.name,
                        kind = repo_err.kind(),
                        key = repo_err.key(),
                        error = %err,
                        "operation failed"
                    );
                } else {
                    warn!(operation = op.name, error = %err, "operation failed");
                }
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("operation_count", &self.operations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_op() -> Operation {
        Operation::new(
            "Echo",
            Effect::ReadOnly,
            Box::new(|args| Ok(Value::String(args.join(",")))),
        )
    }

    #[test]
    fn register_and_invoke() {
        let mut registry = Registry::new();
        registry.register(echo_op());

        let value = registry
            .invoke("Echo", &["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(value, Value::String("a,b".to_string()));
    }

    #[test]
    fn unknown_operation_is_an_error() {
        let registry = Registry::new();
        let err = registry.invoke("Nope", &[]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownOperation(_)));
    }

    #[test]
    fn effect_is_queryable() {
        let mut registry = Registry::new();
        registry.register(echo_op());
        assert_eq!(registry.effect_of("Echo"), Some(Effect::ReadOnly));
        assert_eq!(registry.effect_of("Nope"), None);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = Registry::new();
        registry.register(Operation::new(
            "Zeta",
            Effect::Mutating,
            Box::new(|_| Ok(Value::Null)),
        ));
        registry.register(Operation::new(
            "Alpha",
            Effect::ReadOnly,
            Box::new(|_| Ok(Value::Null)),
        ));
        assert_eq!(registry.names(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn reregistration_replaces() {
        let mut registry = Registry::new();
        registry.register(echo_op());
        registry.register(Operation::new(
            "Echo",
            Effect::Mutating,
            Box::new(|_| Ok(Value::Null)),
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.effect_of("Echo"), Some(Effect::Mutating));
    }
}
