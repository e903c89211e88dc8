//! # Utility Helper Infrastructure
//!
//! Argument access and type extraction shared by every utility. Missing
//! positional arguments read as `Nil`, the same way an absent JavaScript
//! argument reads as `undefined`.

use crate::errors::ArraykitError;
use crate::value::Value;
use im::OrdMap;

static UNDEFINED: Value = Value::Nil;

/// Returns the argument at `index`, or `Nil` when it was not supplied.
pub fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&UNDEFINED)
}

/// Trait for extracting typed views out of a [`Value`] with a consistent
/// type-mismatch error.
pub trait ExtractValue<'a, T> {
    fn extract(&'a self, utility: &str) -> Result<T, ArraykitError>;
}

impl<'a> ExtractValue<'a, &'a [Value]> for Value {
    fn extract(&'a self, utility: &str) -> Result<&'a [Value], ArraykitError> {
        self.as_list()
            .ok_or_else(|| ArraykitError::type_mismatch(utility, "List", self))
    }
}

impl<'a> ExtractValue<'a, &'a OrdMap<String, Value>> for Value {
    fn extract(&'a self, utility: &str) -> Result<&'a OrdMap<String, Value>, ArraykitError> {
        self.as_map()
            .ok_or_else(|| ArraykitError::type_mismatch(utility, "Map", self))
    }
}

impl<'a> ExtractValue<'a, &'a str> for Value {
    fn extract(&'a self, utility: &str) -> Result<&'a str, ArraykitError> {
        self.as_str()
            .ok_or_else(|| ArraykitError::type_mismatch(utility, "String", self))
    }
}

impl<'a> ExtractValue<'a, f64> for Value {
    fn extract(&'a self, utility: &str) -> Result<f64, ArraykitError> {
        self.as_number()
            .ok_or_else(|| ArraykitError::type_mismatch(utility, "Number", self))
    }
}

/// Extracts the list argument at `index`.
pub fn list_arg<'a>(
    args: &'a [Value],
    index: usize,
    utility: &str,
) -> Result<&'a [Value], ArraykitError> {
    arg(args, index).extract(utility)
}

/// Reads a record field, treating a missing field on a record as `Nil`.
/// Non-record items are a type mismatch.
pub fn record_field<'a>(
    item: &'a Value,
    key: &str,
    utility: &str,
) -> Result<&'a Value, ArraykitError> {
    let map: &OrdMap<String, Value> = item.extract(utility)?;
    Ok(map.get(key).unwrap_or(&UNDEFINED))
}

/// Converts a position into the number value the utilities return.
pub fn index_value(index: Option<usize>) -> Value {
    match index {
        Some(i) => Value::Number(i as f64),
        None => Value::Number(-1.0),
    }
}
