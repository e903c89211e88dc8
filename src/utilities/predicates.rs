//! Boolean checks over sequences and arguments.
//!
//! ## Utilities Provided
//!
//! - `hasStrawberry`, `someAdult`, `onlyString`
//!
//! All results are `Value::Bool`.

use crate::utilities::helpers::{list_arg, record_field};
use crate::utilities::{UtilityFn, UtilityRegistry};
use crate::value::Value;

/// Minimum age counted as an adult.
pub const ADULT_AGE: f64 = 18.0;

/// True if the sequence holds the string "strawberry": hasStrawberry(<list>)
pub const HAS_STRAWBERRY: UtilityFn = |args| {
    let items = list_arg(args, 0, "hasStrawberry")?;
    Ok(Value::Bool(
        items.iter().any(|item| item.as_str() == Some("strawberry")),
    ))
};

/// True if any record has a numeric `age` of at least 18: someAdult(<list>)
///
/// An empty sequence has no adults.
pub const SOME_ADULT: UtilityFn = |args| {
    let people = list_arg(args, 0, "someAdult")?;
    for person in people {
        let age = record_field(person, "age", "someAdult")?;
        if age.as_number().is_some_and(|age| age >= ADULT_AGE) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
};

/// True if every positional argument is a string: onlyString(<a> <b> ...)
pub const ONLY_STRING: UtilityFn =
    |args| Ok(Value::Bool(args.iter().all(|arg| matches!(arg, Value::String(_)))));

pub fn register_predicate_utilities(registry: &mut UtilityRegistry) {
    registry.register("hasStrawberry", HAS_STRAWBERRY);
    registry.register("someAdult", SOME_ADULT);
    registry.register("onlyString", ONLY_STRING);
}
