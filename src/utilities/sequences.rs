//! Ordered-sequence utilities.
//!
//! ## Utilities Provided
//!
//! - `mergeArrays`, `exceptFirst`, `last2Parameters`, `indexOf`, `oddIndex`
//!
//! `exceptFirst` and `last2Parameters` operate on their positional arguments
//! as a sequence and are thin wrappers over [`skip_first`] and [`take_last`].

use crate::utilities::helpers::{arg, index_value, list_arg};
use crate::utilities::{UtilityFn, UtilityRegistry};
use crate::value::Value;

// ============================================================================
// SEQUENCE HELPERS
// ============================================================================

/// All elements except the first `n`. Shorter inputs yield an empty vector.
///
/// ```rust
/// use arraykit::utilities::sequences::skip_first;
/// use arraykit::Value;
/// let items = [Value::from(1), Value::from(2), Value::from(3)];
/// assert_eq!(skip_first(&items, 2), vec![Value::from(3)]);
/// assert!(skip_first(&items, 9).is_empty());
/// ```
pub fn skip_first(items: &[Value], n: usize) -> Vec<Value> {
    items.iter().skip(n).cloned().collect()
}

/// The last `n` elements, or the whole input when it holds fewer than `n`.
///
/// ```rust
/// use arraykit::utilities::sequences::take_last;
/// use arraykit::Value;
/// let items = [Value::from(1), Value::from(2), Value::from(3)];
/// assert_eq!(take_last(&items, 2), vec![Value::from(2), Value::from(3)]);
/// assert_eq!(take_last(&items, 5).len(), 3);
/// ```
pub fn take_last(items: &[Value], n: usize) -> Vec<Value> {
    items[items.len().saturating_sub(n)..].to_vec()
}

/// Position of the first element equal to `target`.
pub fn position_of(target: &Value, items: &[Value]) -> Option<usize> {
    items.iter().position(|item| item == target)
}

fn is_odd(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_finite() && n % 2.0 != 0.0,
        _ => false,
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Concatenates two sequences: mergeArrays(<list> <list>)
pub const MERGE_ARRAYS: UtilityFn = |args| {
    let first = list_arg(args, 0, "mergeArrays")?;
    let second = list_arg(args, 1, "mergeArrays")?;
    Ok(Value::List(first.iter().chain(second).cloned().collect()))
};

/// Every positional argument but the first: exceptFirst(<a> <b> ...)
pub const EXCEPT_FIRST: UtilityFn = |args| Ok(Value::List(skip_first(args, 1)));

/// The last two positional arguments: last2Parameters(<a> <b> ...)
pub const LAST_2_PARAMETERS: UtilityFn = |args| Ok(Value::List(take_last(args, 2)));

/// Zero-based position of a value in a sequence, or -1: indexOf(<value> <list>)
///
/// Matching is strict: `1` does not match `"1"`.
pub const INDEX_OF: UtilityFn = |args| {
    let items = list_arg(args, 1, "indexOf")?;
    Ok(index_value(position_of(arg(args, 0), items)))
};

/// Position of the first odd number, or -1: oddIndex(<list>)
///
/// Non-numbers are never odd.
pub const ODD_INDEX: UtilityFn = |args| {
    let items = list_arg(args, 0, "oddIndex")?;
    Ok(index_value(items.iter().position(is_odd)))
};

pub fn register_sequence_utilities(registry: &mut UtilityRegistry) {
    registry.register("mergeArrays", MERGE_ARRAYS);
    registry.register("exceptFirst", EXCEPT_FIRST);
    registry.register("last2Parameters", LAST_2_PARAMETERS);
    registry.register("indexOf", INDEX_OF);
    registry.register("oddIndex", ODD_INDEX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(json: serde_json::Value) -> Vec<Value> {
        match Value::from(json) {
            Value::List(items) => items,
            other => vec![other],
        }
    }

    #[test]
    fn merge_arrays_preserves_order() {
        let args = values(json!([[1, 2], [3, 4]]));
        assert_eq!(MERGE_ARRAYS(&args).unwrap(), Value::from(json!([1, 2, 3, 4])));
        let empty = values(json!([[], []]));
        assert_eq!(MERGE_ARRAYS(&empty).unwrap(), Value::List(vec![]));
    }

    #[test]
    fn merge_arrays_rejects_missing_second_sequence() {
        let args = values(json!([[1, 2]]));
        let err = MERGE_ARRAYS(&args).unwrap_err();
        assert_eq!(err.to_string(), "mergeArrays: expected List, found Nil");
    }

    #[test]
    fn except_first_drops_leading_argument() {
        assert_eq!(
            EXCEPT_FIRST(&values(json!(["delfin", 2]))).unwrap(),
            Value::from(json!([2]))
        );
        assert_eq!(
            EXCEPT_FIRST(&values(json!([[], {}, 2, null]))).unwrap(),
            Value::from(json!([{}, 2, null]))
        );
        assert_eq!(EXCEPT_FIRST(&[]).unwrap(), Value::List(vec![]));
    }

    #[test]
    fn last_two_parameters_handles_short_input() {
        assert_eq!(
            LAST_2_PARAMETERS(&values(json!(["delfin", 2, 3, null, {}]))).unwrap(),
            Value::from(json!([null, {}]))
        );
        assert_eq!(
            LAST_2_PARAMETERS(&values(json!(["delfin"]))).unwrap(),
            Value::from(json!(["delfin"]))
        );
    }

    #[test]
    fn index_of_uses_sentinel_for_absent_values() {
        let haystack = json!(["delfin", "foo", "bar"]);
        let present = vec![Value::from("bar"), Value::from(haystack.clone())];
        assert_eq!(INDEX_OF(&present).unwrap(), Value::from(2));
        let absent = vec![Value::from("baz"), Value::from(haystack)];
        assert_eq!(INDEX_OF(&absent).unwrap(), Value::from(-1));
        let strict = values(json!(["1", [1, 2]]));
        assert_eq!(INDEX_OF(&strict).unwrap(), Value::from(-1));
    }

    #[test]
    fn odd_index_finds_first_odd_element() {
        assert_eq!(ODD_INDEX(&values(json!([[0, 2, 4, 8, 5]]))).unwrap(), Value::from(4));
        assert_eq!(ODD_INDEX(&values(json!([[1, 2, 4, 8, 5]]))).unwrap(), Value::from(0));
        assert_eq!(ODD_INDEX(&values(json!([[2, -4, "3"]]))).unwrap(), Value::from(-1));
        assert_eq!(ODD_INDEX(&values(json!([[2, -3]]))).unwrap(), Value::from(1));
    }
}
