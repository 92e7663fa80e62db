//! jsonkit - structural manipulation of JSON documents.
//!
//! Built on the [`jsonkit_value`] document model and [`jsonkit_json_pointer`]
//! path resolution:
//!
//! - [`json_patch`]: JSON Patch (RFC 6902) operations, apply engine and codec
//! - [`json_patch_diff`]: patch generation from two documents
//! - [`json_merge_patch`]: JSON Merge Patch (RFC 7396)
//!
//! ```
//! use jsonkit::json_patch::{apply_patch, from_json_patch, ApplyPatchOptions};
//! use jsonkit_value::parse;
//!
//! let mut doc = parse(r#"{"list": [1, 2]}"#).unwrap();
//! let patch = parse(r#"[{"op": "add", "path": "/list/-", "value": 3}]"#).unwrap();
//! let ops = from_json_patch(&patch).unwrap();
//! apply_patch(&mut doc, &ops, &ApplyPatchOptions::default()).unwrap();
//! assert_eq!(doc.to_string(), r#"{"list":[1,2,3]}"#);
//! ```

pub mod json_merge_patch;
pub mod json_patch;
pub mod json_patch_diff;

pub use jsonkit_json_pointer as json_pointer;
pub use jsonkit_value as value;

pub use json_merge_patch::{apply_merge_patch, create_merge_patch, create_merge_patch_with_options};
pub use json_patch::{apply_op, apply_ops, apply_patch, ApplyPatchOptions, Op, OpError, PatchError};
pub use json_patch_diff::{diff, diff_with_options, DiffError, DiffOptions};
