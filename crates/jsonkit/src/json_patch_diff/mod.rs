//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! The output is index-positional rather than a minimal edit script: array
//! elements are compared slot by slot, and only applying the patch to the
//! source is guaranteed to yield the target.
//!
//! The walk is bounded by [`DiffOptions::max_depth`]: documents nested deeper
//! fail with [`DiffError::MaxDepthExceeded`] instead of exhausting the stack.

use jsonkit_value::{clone, deep_equal, Object, Value, DEFAULT_MAX_DEPTH};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::json_patch::types::Op;

// ── Options and errors ────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiffError {
    /// A document nests arrays and objects deeper than the configured bound.
    #[error("MAX_DEPTH_EXCEEDED")]
    MaxDepthExceeded,
}

/// Options for [`diff_with_options`] and
/// [`create_merge_patch_with_options`](crate::json_merge_patch::create_merge_patch_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Maximum nesting of arrays and objects in either document. The
    /// top-level container is depth 1.
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a JSON Patch (list of operations) that transforms `src` into `dst`,
/// with the default depth bound.
pub fn diff(src: &Value, dst: &Value) -> Result<Vec<Op>, DiffError> {
    diff_with_options(src, dst, &DiffOptions::default())
}

/// Generate a JSON Patch that transforms `src` into `dst`.
pub fn diff_with_options(
    src: &Value,
    dst: &Value,
    options: &DiffOptions,
) -> Result<Vec<Op>, DiffError> {
    let mut differ = Differ {
        ops: Vec::new(),
        depth: 0,
        max_depth: options.max_depth,
    };
    match differ.diff_at_path(&[], src, dst) {
        Ok(()) => {
            trace!(ops = differ.ops.len(), "json patch diff");
            Ok(differ.ops)
        }
        Err(err) => {
            debug!(error = %err, max_depth = options.max_depth, "json patch diff failed");
            Err(err)
        }
    }
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn child_path(path: &[String], step: impl Into<String>) -> Vec<String> {
    let mut p = Vec::with_capacity(path.len() + 1);
    p.extend_from_slice(path);
    p.push(step.into());
    p
}

struct Differ {
    ops: Vec<Op>,
    /// Containers entered on the way to the current path.
    depth: usize,
    max_depth: usize,
}

impl Differ {
    fn enter(&mut self) -> Result<(), DiffError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DiffError::MaxDepthExceeded);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Copies a value that the patch will carry, once its nesting below the
    /// current depth is known to fit the bound.
    fn payload(&self, value: &Value) -> Result<Value, DiffError> {
        if value.exceeds_depth(self.max_depth.saturating_sub(self.depth)) {
            return Err(DiffError::MaxDepthExceeded);
        }
        Ok(clone(value))
    }

    fn diff_at_path(&mut self, path: &[String], src: &Value, dst: &Value) -> Result<(), DiffError> {
        match (src, dst) {
            // Member-wise ops address keys by first match, so objects with
            // duplicate keys are replaced whole.
            (Value::Object(s), Value::Object(d))
                if !s.has_duplicate_keys() && !d.has_duplicate_keys() =>
            {
                self.enter()?;
                self.diff_obj(path, s, d)?;
                self.leave();
            }
            (Value::Array(s), Value::Array(d)) => {
                self.enter()?;
                self.diff_arr(path, s, d)?;
                self.leave();
            }
            _ if deep_equal(src, dst) => {}
            _ => {
                let value = self.payload(dst)?;
                self.ops.push(Op::Replace {
                    path: path.to_vec(),
                    value,
                });
            }
        }
        Ok(())
    }

    fn diff_obj(&mut self, path: &[String], src: &Object, dst: &Object) -> Result<(), DiffError> {
        for key in src.keys() {
            if !dst.contains_key(key) {
                self.ops.push(Op::Remove {
                    path: child_path(path, key.as_str()),
                });
            }
        }
        for (key, dst_val) in dst {
            let p = child_path(path, key.as_str());
            match src.get(key) {
                None => {
                    let value = self.payload(dst_val)?;
                    self.ops.push(Op::Add { path: p, value });
                }
                Some(src_val) => self.diff_at_path(&p, src_val, dst_val)?,
            }
        }
        Ok(())
    }

    fn diff_arr(&mut self, path: &[String], src: &[Value], dst: &[Value]) -> Result<(), DiffError> {
        let overlap = src.len().min(dst.len());
        for i in 0..overlap {
            self.diff_at_path(&child_path(path, i.to_string()), &src[i], &dst[i])?;
        }
        // Remove from the end so that earlier indices stay valid.
        for i in (overlap..src.len()).rev() {
            self.ops.push(Op::Remove {
                path: child_path(path, i.to_string()),
            });
        }
        for (i, v) in dst.iter().enumerate().skip(overlap) {
            let value = self.payload(v)?;
            self.ops.push(Op::Add {
                path: child_path(path, i.to_string()),
                value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_patch::{apply_ops, to_json_patch};
    use serde_json::json;

    fn doc(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    fn assert_diff(src: serde_json::Value, dst: serde_json::Value, expected: serde_json::Value) {
        let (src, dst) = (doc(src), doc(dst));
        let ops = diff(&src, &dst).unwrap();
        assert_eq!(to_json_patch(&ops), doc(expected));
        let mut patched = src.clone();
        apply_ops(&mut patched, &ops).unwrap();
        assert_eq!(patched, dst);
    }

    #[test]
    fn equal_documents_produce_no_ops() {
        let v = doc(json!({"a": [1, {"b": null}], "c": "x"}));
        assert_eq!(diff(&v, &v.clone()), Ok(vec![]));
        // Member order alone is not a difference.
        assert_eq!(diff(&doc(json!({"a": 1, "b": 2})), &doc(json!({"b": 2, "a": 1}))), Ok(vec![]));
    }

    #[test]
    fn type_change_replaces() {
        assert_diff(json!({"a": 1}), json!([1]), json!([{"op": "replace", "path": "", "value": [1]}]));
        assert_diff(
            json!({"a": "1"}),
            json!({"a": 1}),
            json!([{"op": "replace", "path": "/a", "value": 1}]),
        );
    }

    #[test]
    fn object_members() {
        assert_diff(
            json!({"keep": 1, "gone": 2, "nested": {"x": 1}}),
            json!({"keep": 1, "nested": {"x": 2}, "new": 3}),
            json!([
                {"op": "remove", "path": "/gone"},
                {"op": "replace", "path": "/nested/x", "value": 2},
                {"op": "add", "path": "/new", "value": 3}
            ]),
        );
    }

    #[test]
    fn array_shrinks_from_the_end() {
        assert_diff(
            json!([1, 2, 3, 4]),
            json!([1, 5]),
            json!([
                {"op": "replace", "path": "/1", "value": 5},
                {"op": "remove", "path": "/3"},
                {"op": "remove", "path": "/2"}
            ]),
        );
    }

    #[test]
    fn array_grows_at_the_end() {
        assert_diff(
            json!([1]),
            json!([1, [2], {"k": 3}]),
            json!([
                {"op": "add", "path": "/1", "value": [2]},
                {"op": "add", "path": "/2", "value": {"k": 3}}
            ]),
        );
    }

    #[test]
    fn keys_are_escaped() {
        assert_diff(
            json!({"a/b": 1}),
            json!({"a/b": 2, "~": 0}),
            json!([
                {"op": "replace", "path": "/a~1b", "value": 2},
                {"op": "add", "path": "/~0", "value": 0}
            ]),
        );
    }

    fn nested_arrays(depth: usize, leaf: Value) -> Value {
        let mut v = leaf;
        for _ in 0..depth {
            v = Value::Array(vec![v]);
        }
        v
    }

    fn object_with(members: &[(&str, i64)]) -> Value {
        Value::Object(members.iter().map(|&(k, v)| (k, Value::from(v))).collect())
    }

    fn assert_sound(src: &Value, dst: &Value) -> Vec<Op> {
        let ops = diff(src, dst).unwrap();
        let mut patched = src.clone();
        apply_ops(&mut patched, &ops).unwrap();
        assert_eq!(&patched, dst);
        ops
    }

    #[test]
    fn duplicate_keys_replace_the_whole_object() {
        let src = object_with(&[("a", 1), ("a", 2)]);
        let dst = object_with(&[("a", 1)]);
        let ops = assert_sound(&src, &dst);
        assert_eq!(ops, vec![Op::Replace { path: vec![], value: dst.clone() }]);

        let ops = assert_sound(&object_with(&[]), &object_with(&[("a", 1), ("a", 2)]));
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op_name(), "replace");
    }

    #[test]
    fn duplicate_keys_below_the_root() {
        let mut src = Object::new();
        src.push("keep", Value::from(1));
        src.push("inner", object_with(&[("x", 1), ("x", 2)]));
        let mut dst = Object::new();
        dst.push("keep", Value::from(1));
        dst.push("inner", object_with(&[("x", 3)]));
        let ops = assert_sound(&Value::Object(src), &Value::Object(dst));
        assert_eq!(
            to_json_patch(&ops),
            doc(json!([{"op": "replace", "path": "/inner", "value": {"x": 3}}]))
        );
    }

    #[test]
    fn depth_bound_is_enforced() {
        let src = nested_arrays(DEFAULT_MAX_DEPTH + 1, Value::from(1));
        let dst = nested_arrays(DEFAULT_MAX_DEPTH + 1, Value::from(2));
        assert_eq!(diff(&src, &dst), Err(DiffError::MaxDepthExceeded));

        let options = DiffOptions { max_depth: DEFAULT_MAX_DEPTH + 1 };
        let ops = diff_with_options(&src, &dst, &options).unwrap();
        assert_eq!(ops.len(), 1);

        let src = nested_arrays(3, Value::from(1));
        let dst = nested_arrays(3, Value::from(2));
        let options = DiffOptions { max_depth: 2 };
        assert_eq!(diff_with_options(&src, &dst, &options), Err(DiffError::MaxDepthExceeded));
        let options = DiffOptions { max_depth: 3 };
        assert!(diff_with_options(&src, &dst, &options).is_ok());
    }

    #[test]
    fn deep_payloads_are_bounded_too() {
        let options = DiffOptions { max_depth: 3 };
        let src = doc(json!({"a": 1}));
        // Below the root object an added value may nest two more levels.
        let dst = doc(json!({"a": 1, "b": [[[1]]]}));
        assert_eq!(diff_with_options(&src, &dst, &options), Err(DiffError::MaxDepthExceeded));
        let dst = doc(json!({"a": 1, "b": [[1]]}));
        assert!(diff_with_options(&src, &dst, &options).is_ok());
        // Type changes replace with a payload as well.
        assert_eq!(
            diff_with_options(&Value::Null, &nested_arrays(4, Value::Null), &options),
            Err(DiffError::MaxDepthExceeded)
        );
    }

    #[test]
    fn very_deep_documents_fail_without_exhausting_the_stack() {
        let src = nested_arrays(200_000, Value::from(1));
        let dst = nested_arrays(200_000, Value::from(2));
        assert_eq!(diff(&src, &dst), Err(DiffError::MaxDepthExceeded));
        assert_eq!(diff(&Value::Null, &dst), Err(DiffError::MaxDepthExceeded));
        // Dropping the trees recurses once per level.
        std::mem::forget(src);
        std::mem::forget(dst);
    }

    #[test]
    fn options_from_config_text() {
        let options: DiffOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(options.max_depth, 8);
        let options: DiffOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DiffOptions::default());
    }
}
