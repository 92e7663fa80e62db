//! JSON codec for JSON Patch operations.
//!
//! Converts operations to and from RFC 6902 patch documents held in a
//! [`Value`].

use jsonkit_json_pointer::{format_json_pointer, parse_json_pointer};
use jsonkit_value::{Object, Value};

use crate::json_patch::types::{Op, PatchError, Path};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn invalid(index: usize, reason: impl Into<String>) -> PatchError {
    PatchError::InvalidOp {
        index,
        reason: reason.into(),
    }
}

fn decode_str<'a>(obj: &'a Object, member: &str, index: usize) -> Result<&'a str, PatchError> {
    let v = obj
        .get(member)
        .ok_or_else(|| invalid(index, format!("missing '{member}'")))?;
    v.as_str().ok_or_else(|| {
        invalid(index, format!("'{member}' must be a string, got {}", v.type_name()))
    })
}

fn decode_path(obj: &Object, member: &str, index: usize) -> Result<Path, PatchError> {
    let pointer = decode_str(obj, member, index)?;
    parse_json_pointer(pointer).map_err(|err| invalid(index, format!("'{member}': {err}")))
}

fn decode_value(obj: &Object, op: &str, index: usize) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| invalid(index, format!("{op} requires 'value'")))
}

fn decode_op(v: &Value, index: usize) -> Result<Op, PatchError> {
    let obj = v.as_object().ok_or_else(|| {
        invalid(index, format!("operation must be an object, got {}", v.type_name()))
    })?;
    let op_str = decode_str(obj, "op", index)?;
    let path = decode_path(obj, "path", index)?;

    match op_str {
        "add" => Ok(Op::Add {
            path,
            value: decode_value(obj, op_str, index)?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: decode_value(obj, op_str, index)?,
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: decode_path(obj, "from", index)?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: decode_path(obj, "from", index)?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: decode_value(obj, op_str, index)?,
        }),
        other => Err(invalid(index, format!("unknown op: {other}"))),
    }
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to an RFC 6902 operation object.
pub fn to_json(op: &Op) -> Value {
    let mut m = Object::with_capacity(3);
    m.push("op", Value::from(op.op_name()));
    m.push("path", encode_path(op.path()));
    match op {
        Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
            m.push("value", value.clone());
        }
        Op::Copy { from, .. } | Op::Move { from, .. } => {
            m.push("from", encode_path(from));
        }
        Op::Remove { .. } => {}
    }
    Value::Object(m)
}

/// Serialize a list of operations to an RFC 6902 patch document.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single operation object.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    decode_op(v, 0)
}

/// Deserialize an RFC 6902 patch document (an array of operation objects).
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v.as_array().ok_or_else(|| PatchError::InvalidPatch {
        reason: format!("patch must be an array, got {}", v.type_name()),
    })?;
    arr.iter()
        .enumerate()
        .map(|(index, op)| decode_op(op, index))
        .collect()
}
