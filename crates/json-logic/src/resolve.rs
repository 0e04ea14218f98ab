//! Dot-path variable resolution over the data context.

use crate::value::Value;

/// Walks `path` (segments separated by `.`) into `data`.
///
/// Object segments are keys; array segments must parse as a non-negative
/// index. Returns `None` as soon as a segment cannot be followed.
pub fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for step in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(step)?;
            }
            Value::Array(arr) => {
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Resolves `path` against `data`, returning `not_found` when it cannot be
/// followed. A present key holding `null` resolves to `null`.
pub fn resolve_var(data: &Value, path: &str, not_found: Value) -> Value {
    match lookup(data, path) {
        Some(v) => v.clone(),
        None => not_found,
    }
}

fn is_present(data: &Value, name: &str) -> bool {
    !matches!(lookup(data, name), None | Some(Value::Null))
}

/// Returns the names that resolve to `null`, in input order.
///
/// An absent key and a key explicitly set to `null` are indistinguishable
/// here; both count as missing.
pub fn missing<S: AsRef<str>>(data: &Value, names: &[S]) -> Vec<String> {
    let mut absent = Vec::new();
    for name in names {
        let name: &str = name.as_ref();
        if !is_present(data, name) {
            absent.push(name.to_string());
        }
    }
    absent
}

/// Single pass over `names`: returns an empty list as soon as `min` names
/// have resolved, otherwise the names seen missing along the way.
pub fn missing_some<S: AsRef<str>>(data: &Value, min: i64, names: &[S]) -> Vec<String> {
    if min < 1 {
        return Vec::new();
    }
    let mut found = 0i64;
    let mut absent = Vec::new();
    for name in names {
        let name: &str = name.as_ref();
        if is_present(data, name) {
            found += 1;
            if found >= min {
                return Vec::new();
            }
        } else {
            absent.push(name.to_string());
        }
    }
    absent
}
