//! # Arraykit Utilities
//!
//! Small pure functions over [`Value`]s, looked up by identifier through the
//! [`UtilityRegistry`].
//!
//! ## Module Structure
//!
//! - **`helpers`**: argument access and type extraction shared by all utilities
//! - **`sequences`**: ordered-sequence operations (`mergeArrays`, `indexOf`, ...)
//! - **`predicates`**: boolean checks (`hasStrawberry`, `someAdult`, `onlyString`)
//! - **`records`**: record-field operations (`filterPremium`, `sortPeople`, ...)
//!
//! Every utility uses the same [`UtilityFn`] signature: positional arguments
//! in, one value out.

use crate::errors::ArraykitError;
use crate::value::Value;
use im::HashMap;

/// Utility function type: positional arguments in, a single value out.
pub type UtilityFn = fn(args: &[Value]) -> Result<Value, ArraykitError>;

// Registry for all utilities, inspectable at runtime.
#[derive(Default, Clone)]
pub struct UtilityRegistry {
    utilities: HashMap<String, UtilityFn>,
}

impl UtilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UtilityFn> {
        self.utilities.get(name).copied()
    }

    /// Looks up a utility, failing with [`ArraykitError::UnknownUtility`].
    pub fn resolve(&self, name: &str) -> Result<UtilityFn, ArraykitError> {
        self.get(name).ok_or_else(|| ArraykitError::UnknownUtility {
            name: name.to_string(),
        })
    }

    /// Registered identifiers in sorted order.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.utilities.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn register(&mut self, name: &str, func: UtilityFn) {
        self.utilities.insert(name.to_string(), func);
    }

    pub fn remove(&mut self, name: &str) -> Option<UtilityFn> {
        self.utilities.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.utilities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }
}

pub mod helpers;
pub mod predicates;
pub mod records;
pub mod sequences;

/// Registers every standard utility with the given registry.
pub fn register_all_utilities(registry: &mut UtilityRegistry) {
    sequences::register_sequence_utilities(registry);
    predicates::register_predicate_utilities(registry);
    records::register_record_utilities(registry);
}

/// Builds the registry used by the harness entry point.
///
/// ```rust
/// use arraykit::utilities::build_default_registry;
/// let registry = build_default_registry();
/// assert!(registry.has("mergeArrays"));
/// ```
pub fn build_default_registry() -> UtilityRegistry {
    let mut registry = UtilityRegistry::new();
    register_all_utilities(&mut registry);
    registry
}
