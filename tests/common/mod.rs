//! Shared helpers for arraykit integration tests.

use arraykit::utilities::{build_default_registry, UtilityFn};
use arraykit::Value;

/// Splits a JSON array literal into positional arguments.
pub fn args(json: serde_json::Value) -> Vec<Value> {
    match Value::from(json) {
        Value::List(items) => items,
        single => vec![single],
    }
}

/// Looks up a utility from the default registry.
pub fn utility(name: &str) -> UtilityFn {
    build_default_registry()
        .resolve(name)
        .unwrap_or_else(|e| panic!("{e}"))
}

/// Calls a registered utility with JSON arguments.
pub fn call(name: &str, json: serde_json::Value) -> Value {
    utility(name)(&args(json)).unwrap_or_else(|e| panic!("{name} failed: {e}"))
}
