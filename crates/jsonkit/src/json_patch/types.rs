//! Core types for the JSON Patch module.

use jsonkit_json_pointer::JsonPointerError;
use jsonkit_value::Value;
use serde::Deserialize;
use thiserror::Error;

pub use jsonkit_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

/// Why a single operation could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("MOVE_INTO_ITSELF")]
    MoveIntoItself,
    #[error("TEST_FAILED")]
    TestFailed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Operation `index` failed; operations before it may have been applied.
    #[error("{kind} (operation {index}: {op} at \"{path}\")")]
    Op {
        index: usize,
        op: &'static str,
        path: String,
        kind: OpError,
    },
    /// Operation `index` of a patch document is malformed.
    #[error("INVALID_OP: {reason} (operation {index})")]
    InvalidOp { index: usize, reason: String },
    /// The patch document as a whole is malformed (not an array).
    #[error("INVALID_PATCH: {reason}")]
    InvalidPatch { reason: String },
}

impl PatchError {
    /// Index of the operation the error refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            PatchError::Op { index, .. } | PatchError::InvalidOp { index, .. } => Some(*index),
            PatchError::InvalidPatch { .. } => None,
        }
    }

    /// The failure kind of an [`PatchError::Op`] error.
    pub fn kind(&self) -> Option<&OpError> {
        match self {
            PatchError::Op { kind, .. } => Some(kind),
            PatchError::InvalidOp { .. } | PatchError::InvalidPatch { .. } => None,
        }
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch (RFC 6902) operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// Returns the operation name as written in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// The source path of `copy` and `move`.
    pub fn from_path(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Op::Test { .. })
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The value displaced by the operation, if any.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatchResult {
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ApplyPatchOptions {
    /// If true, apply in place: a failing operation leaves the effects of
    /// the operations before it. If false, apply to a copy and commit only
    /// when every operation succeeds.
    pub mutate: bool,
}
