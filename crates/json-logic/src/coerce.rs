//! Cross-type coercion and comparison helpers.
//!
//! These define how loosely-typed operands behave under `==`, `<`, `in`,
//! arithmetic and the boolean operators.

use crate::value::Value;
use std::cmp::Ordering;

/// Truthiness: only `null` and `false` are falsy.
///
/// `0`, `""` and `[]` are all truthy.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts a value to a number. Never fails: unparseable input yields NaN.
pub fn to_double(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::String(s) => parse_double(s),
        other => parse_double(&str_val(other)),
    }
}

/// Decimal and exponent forms, plus the exact spellings `Infinity` and `NaN`
/// (optionally signed). `inf`, `INFINITY` and other casings are not numbers.
fn parse_double(s: &str) -> f64 {
    let s = s.trim();
    let unsigned = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    if unsigned.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return match s {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ => f64::NAN,
        };
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// The string form of a value. See `Value`'s `Display` impl.
pub fn str_val(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose equality (`==`).
pub fn soft_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(_), _) | (_, Value::String(_)) => str_val(a) == str_val(b),
        (Value::Bool(_), _) | (_, Value::Bool(_)) => to_bool(a) == to_bool(b),
        _ => a == b,
    }
}

/// Strict equality (`===`): same variant and same content.
pub fn hard_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        _ => a == b,
    }
}

/// Numeric order when both operands are numbers, otherwise the order of
/// their string forms.
pub fn less(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x < y,
        _ => str_val(a).cmp(&str_val(b)) == Ordering::Less,
    }
}

pub fn less_or_equal(a: &Value, b: &Value) -> bool {
    less(a, b) || soft_equals(a, b)
}

/// Substring test for two strings, membership test for arrays.
pub fn contains(container: &Value, item: &Value) -> bool {
    match (container, item) {
        (Value::String(outer), Value::String(inner)) => outer.contains(inner.as_str()),
        (Value::Array(items), _) => items.iter().any(|v| v == item),
        _ => false,
    }
}
