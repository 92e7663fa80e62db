//! JSON Merge Patch (RFC 7396).
//!
//! A merge patch is a partial document: members present in the patch
//! overwrite the target, `null` members delete, and nested objects merge
//! recursively.

use jsonkit_value::{clone, deep_equal, Object, Value};
use tracing::{debug, trace};

use crate::json_patch_diff::{DiffError, DiffOptions};

/// Applies `patch` to `target` and returns the merged document.
///
/// A non-object patch replaces the target outright. An object patch turns a
/// non-object target into an empty object first.
pub fn apply_merge_patch(target: Value, patch: &Value) -> Value {
    let merged = merge(target, patch);
    trace!(
        patch_members = patch.as_object().map_or(0, Object::len),
        "json merge patch applied"
    );
    merged
}

fn merge(target: Value, patch: &Value) -> Value {
    let Value::Object(patch_obj) = patch else {
        return clone(patch);
    };
    let mut result = match target {
        Value::Object(obj) => obj,
        _ => Object::new(),
    };
    for (key, val) in patch_obj {
        if val.is_null() {
            result.remove(key);
            continue;
        }
        if val.is_object() {
            if let Some(existing) = result.get_mut(key).filter(|v| v.is_object()) {
                let current = existing.take();
                *existing = merge(current, val);
                continue;
            }
        }
        result.insert(key.as_str(), clone(val));
    }
    Value::Object(result)
}

/// Computes the merge patch that turns `source` into `target`, with the
/// default depth bound.
///
/// Applying the result to `source` yields `target` whenever `target` holds
/// no `null` members, which a merge patch cannot express.
pub fn create_merge_patch(source: &Value, target: &Value) -> Result<Value, DiffError> {
    create_merge_patch_with_options(source, target, &DiffOptions::default())
}

/// Computes the merge patch that turns `source` into `target`.
///
/// Documents nesting deeper than `options.max_depth` fail with
/// [`DiffError::MaxDepthExceeded`].
pub fn create_merge_patch_with_options(
    source: &Value,
    target: &Value,
    options: &DiffOptions,
) -> Result<Value, DiffError> {
    let patch = create(source, target, 0, options.max_depth).inspect_err(|err| {
        debug!(error = %err, max_depth = options.max_depth, "json merge patch creation failed");
    })?;
    trace!(
        patch_members = patch.as_object().map_or(0, Object::len),
        "json merge patch created"
    );
    Ok(patch)
}

/// Copies a value the patch will carry when it fits under `depth`.
fn payload(value: &Value, depth: usize, max_depth: usize) -> Result<Value, DiffError> {
    if value.exceeds_depth(max_depth.saturating_sub(depth)) {
        return Err(DiffError::MaxDepthExceeded);
    }
    Ok(clone(value))
}

fn create(
    source: &Value,
    target: &Value,
    depth: usize,
    max_depth: usize,
) -> Result<Value, DiffError> {
    let (Value::Object(src), Value::Object(dst)) = (source, target) else {
        return payload(target, depth, max_depth);
    };
    let depth = depth + 1;
    if depth > max_depth {
        return Err(DiffError::MaxDepthExceeded);
    }
    let mut patch = Object::new();
    for (key, dst_val) in dst {
        match src.get(key) {
            Some(src_val @ Value::Object(_)) if dst_val.is_object() => {
                let nested = create(src_val, dst_val, depth, max_depth)?;
                if nested.as_object().is_some_and(|obj| !obj.is_empty()) {
                    patch.insert(key.as_str(), nested);
                }
            }
            Some(src_val) if deep_equal(src_val, dst_val) => {}
            _ => {
                patch.insert(key.as_str(), payload(dst_val, depth, max_depth)?);
            }
        }
    }
    for key in src.keys() {
        if !dst.contains_key(key) {
            patch.insert(key.as_str(), Value::Null);
        }
    }
    Ok(Value::Object(patch))
}
