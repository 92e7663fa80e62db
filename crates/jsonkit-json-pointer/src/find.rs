//! Resolution of paths against a [`Value`] tree.

use jsonkit_value::Value;

use crate::types::{Reference, ReferenceKey};
use crate::{is_valid_index, JsonPointerError};

/// Parses an array index token.
///
/// A syntactically valid index too large for `usize` cannot address any
/// element, so it is reported as out of range.
pub fn parse_index(token: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidIndex);
    }
    token.parse().map_err(|_| JsonPointerError::OutOfRange)
}

/// Resolves `path` in `val`.
///
/// # Errors
///
/// - `NotFound` when an object lacks the key
/// - `InvalidIndex` when an array token is not a canonical non-negative integer
/// - `OutOfRange` when an array index is past the end, including `-`
/// - `TypeMismatch` when tokens remain at a scalar
///
/// # Example
///
/// ```
/// use jsonkit_json_pointer::{get, parse_json_pointer};
/// use jsonkit_value::{parse, Value};
///
/// let doc = parse(r#"{"foo": {"bar": 42}}"#).unwrap();
/// let path = parse_json_pointer("/foo/bar").unwrap();
/// assert_eq!(get(&doc, &path), Ok(&Value::from(42)));
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, JsonPointerError> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Object(obj) => obj.get(step).ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                if step == "-" {
                    return Err(JsonPointerError::OutOfRange);
                }
                arr.get(parse_index(step)?)
                    .ok_or(JsonPointerError::OutOfRange)?
            }
            _ => return Err(JsonPointerError::TypeMismatch),
        };
    }
    Ok(current)
}

/// Mutable counterpart of [`get`], with the same error semantics.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Object(obj) => obj.get_mut(step).ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                if step == "-" {
                    return Err(JsonPointerError::OutOfRange);
                }
                let idx = parse_index(step)?;
                arr.get_mut(idx).ok_or(JsonPointerError::OutOfRange)?
            }
            _ => return Err(JsonPointerError::TypeMismatch),
        };
    }
    Ok(current)
}

/// Resolves the insert context of `path`.
///
/// Every token but the last must resolve as with [`get`]. The last token is
/// then interpreted against its container: an object key, an array index, or
/// `-` for the slot after the last element. The target value is reported
/// when it exists; a missing target is not an error.
///
/// # Example
///
/// ```
/// use jsonkit_json_pointer::{find, parse_json_pointer, ReferenceKey};
/// use jsonkit_value::parse;
///
/// let doc = parse(r#"{"list": [1, 2]}"#).unwrap();
/// let reference = find(&doc, &parse_json_pointer("/list/-").unwrap()).unwrap();
/// assert_eq!(reference.key, Some(ReferenceKey::Index(2)));
/// assert!(reference.val.is_none());
/// ```
pub fn find<'a>(val: &'a Value, path: &[String]) -> Result<Reference<'a>, JsonPointerError> {
    let Some((last, parent_path)) = path.split_last() else {
        return Ok(Reference {
            val: Some(val),
            obj: None,
            key: None,
        });
    };
    let container = get(val, parent_path)?;
    let (key, target) = match container {
        Value::Object(obj) => (ReferenceKey::Key(last.clone()), obj.get(last)),
        Value::Array(arr) => {
            let idx = if last == "-" {
                arr.len()
            } else {
                parse_index(last)?
            };
            (ReferenceKey::Index(idx), arr.get(idx))
        }
        _ => return Err(JsonPointerError::TypeMismatch),
    };
    Ok(Reference {
        val: target,
        obj: Some(container),
        key: Some(key),
    })
}
