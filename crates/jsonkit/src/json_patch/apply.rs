//! JSON Patch apply logic.

use jsonkit_json_pointer::{
    format_json_pointer, get, get_mut, is_child, is_path_equal, parse_index, JsonPointerError,
};
use jsonkit_value::{clone, deep_equal, Value};
use tracing::{debug, trace};

use super::types::{ApplyPatchOptions, Op, OpError, OpResult, PatchError, PatchResult};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, OpError> {
    let Some((key, parent_path)) = path.split_last() else {
        return Ok(Some(std::mem::replace(doc, value)));
    };
    match get_mut(doc, parent_path)? {
        Value::Object(obj) => Ok(obj.insert(key.as_str(), value)),
        Value::Array(arr) => {
            let idx = if key == "-" { arr.len() } else { parse_index(key)? };
            if idx > arr.len() {
                return Err(JsonPointerError::OutOfRange.into());
            }
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(JsonPointerError::TypeMismatch.into()),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Option<Value>, OpError> {
    let Some((key, parent_path)) = path.split_last() else {
        return Err(OpError::InvalidTarget);
    };
    match get_mut(doc, parent_path)? {
        Value::Object(obj) => obj
            .remove(key)
            .map(Some)
            .ok_or(JsonPointerError::NotFound.into()),
        Value::Array(arr) => {
            if key == "-" {
                return Err(JsonPointerError::OutOfRange.into());
            }
            let idx = parse_index(key)?;
            if idx >= arr.len() {
                return Err(JsonPointerError::OutOfRange.into());
            }
            Ok(Some(arr.remove(idx)))
        }
        _ => Err(JsonPointerError::TypeMismatch.into()),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, OpError> {
    let target = get_mut(doc, path)?;
    Ok(Some(std::mem::replace(target, value)))
}

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, OpError> {
    let value = clone(get(doc, from)?);
    apply_add(doc, path, value)
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, OpError> {
    if is_path_equal(path, from) || is_child(from, path) {
        return Err(OpError::MoveIntoItself);
    }
    let value = apply_remove(doc, from)?.unwrap_or_default();
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &[String], value: &Value) -> Result<Option<Value>, OpError> {
    if deep_equal(get(doc, path)?, value) {
        Ok(None)
    } else {
        Err(OpError::TestFailed)
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the value displaced by the operation: the replaced root or
/// member for `add`, the removed value for `remove`, and the overwritten
/// value for `replace`.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, OpError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, clone(value)),
        Op::Remove { path } => apply_remove(doc, path),
        Op::Replace { path, value } => apply_replace(doc, path, clone(value)),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => apply_test(doc, path, value),
    }
}

/// Apply operations in order, mutating `doc` in place.
///
/// The first failing operation aborts the sequence. This is not atomic:
/// operations applied before the failure stay applied. Use [`apply_patch`]
/// for all-or-nothing application.
pub fn apply_ops(doc: &mut Value, ops: &[Op]) -> Result<PatchResult, PatchError> {
    let mut res = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        trace!(index, op = op.op_name(), path = %format_json_pointer(op.path()), "applying patch operation");
        match apply_op(doc, op) {
            Ok(old) => res.push(OpResult { old }),
            Err(kind) => {
                let err = PatchError::Op {
                    index,
                    op: op.op_name(),
                    path: format_json_pointer(op.path()),
                    kind,
                };
                debug!(error = %err, "patch operation failed");
                return Err(err);
            }
        }
    }
    Ok(PatchResult { res })
}

/// Apply a sequence of operations with options (mutate vs. clone).
///
/// With `mutate: false` the operations run against a deep copy that
/// replaces `doc` only once all of them succeed, so a failure leaves `doc`
/// untouched. With `mutate: true` this is [`apply_ops`].
pub fn apply_patch(
    doc: &mut Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    if options.mutate {
        return apply_ops(doc, ops);
    }
    let mut working = clone(doc);
    match apply_ops(&mut working, ops) {
        Ok(result) => {
            *doc = working;
            Ok(result)
        }
        Err(err) => {
            debug!(failed_op = ?err.index(), "discarding patched copy");
            Err(err)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
