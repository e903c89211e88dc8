//! The two comparison strategies a group can select.
//!
//! `Shallow` follows JavaScript's loose `==`: scalars coerce, compounds are
//! compared one level deep. `Deep` recurses through lists and records and
//! compares the scalar leaves with the same loose `==`. In both modes `NaN`
//! equals `NaN`.

use serde::Deserialize;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityMode {
    Shallow,
    #[default]
    Deep,
}

impl EqualityMode {
    pub fn compare(self, actual: &Value, expected: &Value) -> bool {
        match self {
            EqualityMode::Shallow => shallow_eq(actual, expected),
            EqualityMode::Deep => deep_eq(actual, expected),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EqualityMode::Shallow => "shallow",
            EqualityMode::Deep => "deep",
        }
    }
}

impl std::fmt::Display for EqualityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recursive structural equality with loosely compared leaves.
///
/// A compound never equals a scalar here, unlike [`loose_eq`].
///
/// ```rust
/// use arraykit::harness::equality::deep_eq;
/// use arraykit::Value;
/// assert!(deep_eq(&Value::from(0), &Value::from("0")));
/// assert!(!deep_eq(&Value::List(vec![]), &Value::from(0)));
/// ```
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_eq(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| deep_eq(x, y)))
        }
        _ if is_compound(a) || is_compound(b) => false,
        _ => loose_eq(a, b),
    }
}

/// Field-wise comparison of two compounds; everything else goes through
/// [`loose_eq`].
pub fn shallow_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| entry_eq(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| entry_eq(x, y)))
        }
        _ => loose_eq(a, b),
    }
}

// Nested compounds inside a shallow comparison fall back to deep equality.
fn entry_eq(a: &Value, b: &Value) -> bool {
    if is_compound(a) && is_compound(b) {
        deep_eq(a, b)
    } else {
        loose_eq(a, b)
    }
}

fn is_compound(value: &Value) -> bool {
    matches!(value, Value::List(_) | Value::Map(_))
}

/// JavaScript abstract equality (`==`) over scalars, except that two `NaN`s
/// are equal.
///
/// ```rust
/// use arraykit::harness::equality::loose_eq;
/// use arraykit::Value;
/// assert!(loose_eq(&Value::from("1"), &Value::from(1)));
/// assert!(loose_eq(&Value::from(true), &Value::from(1)));
/// assert!(!loose_eq(&Value::Nil, &Value::from(0)));
/// ```
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, _) | (_, Value::Nil) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loose_eq(&Value::Number(f64::from(u8::from(*x))), other)
        }
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            string_to_number(s) == *n
        }
        (compound, scalar) | (scalar, compound)
            if is_compound(compound) && !is_compound(scalar) =>
        {
            loose_eq(&Value::String(to_primitive_string(compound)), scalar)
        }
        // Two distinct compounds are never loosely equal.
        _ => false,
    }
}

// `Number("")` is 0 and unparsable text is NaN.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a value the way a JavaScript template string would: lists join
/// with commas and records become `[object Object]`.
///
/// ```rust
/// use arraykit::harness::equality::coerce_to_string;
/// use arraykit::Value;
/// assert_eq!(coerce_to_string(&Value::List(vec![1.into(), "a".into()])), "1,a");
/// assert_eq!(coerce_to_string(&Value::Nil), "undefined");
/// ```
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Nil => "undefined".to_string(),
        _ => to_primitive_string(value),
    }
}

// `String([1, [2, 3]])` is "1,2,3"; holes and nulls inside a list join as "".
fn to_primitive_string(value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_nan() => "NaN".to_string(),
        Value::Number(n) if n.is_infinite() => {
            let text = if *n > 0.0 { "Infinity" } else { "-Infinity" };
            text.to_string()
        }
        Value::Number(_) => value.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => items
            .iter()
            .map(to_primitive_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Map(_) => "[object Object]".to_string(),
    }
}
