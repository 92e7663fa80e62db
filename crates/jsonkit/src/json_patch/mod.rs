//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! [`apply_ops`] mutates in place and stops at the first failing operation,
//! keeping the effects of the ones before it. [`apply_patch`] applies to a
//! copy by default and commits only on success.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, Op, OpError, OpResult, PatchError, PatchResult, Path};
