//! Structural equality of JSON values.

use crate::value::{Object, Value};

/// Performs a deep equality check between two JSON values.
///
/// Arrays compare element by element. Objects compare as mappings: member
/// order is ignored, both sides must have the same member count and key set,
/// and each key resolves to its first member on either side.
///
/// The walk keeps pending pairs on a heap stack, so nesting depth is not
/// bounded by the call stack.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        let equal = match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(arr_a), Value::Array(arr_b)) => {
                pending.extend(arr_a.iter().zip(arr_b));
                arr_a.len() == arr_b.len()
            }
            (Value::Object(obj_a), Value::Object(obj_b)) => match member_pairs(obj_a, obj_b) {
                Some(pairs) => {
                    pending.extend(pairs);
                    true
                }
                None => false,
            },
            _ => false,
        };
        if !equal {
            return false;
        }
    }
    true
}

/// Compares two objects with [`deep_equal`] semantics.
pub fn object_equal(a: &Object, b: &Object) -> bool {
    match member_pairs(a, b) {
        Some(pairs) => pairs.into_iter().all(|(x, y)| deep_equal(x, y)),
        None => false,
    }
}

/// Pairs the first-match values of every key, or `None` when the member
/// counts or key sets differ.
fn member_pairs<'a>(a: &'a Object, b: &'a Object) -> Option<Vec<(&'a Value, &'a Value)>> {
    if a.len() != b.len() || b.keys().any(|key| !a.contains_key(key)) {
        return None;
    }
    a.keys()
        .map(|key| Some((a.get(key)?, b.get(key)?)))
        .collect()
}
