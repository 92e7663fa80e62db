//! Type definitions for JSON Pointer.

use jsonkit_value::Value;

/// A single unescaped reference token.
pub type PathStep = String;

/// A JSON Pointer path: the list of reference tokens, root is empty.
pub type Path = Vec<PathStep>;

/// How the last token of a path addresses its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKey {
    /// Member name in an object.
    Key(String),
    /// Element position in an array. The `-` token maps to the array length.
    Index(usize),
}

/// The insert context of a path: the container holding the target, the key
/// into it, and the target itself if present.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<'a> {
    /// The target value. `None` when nothing is stored under `key` yet.
    pub val: Option<&'a Value>,
    /// The object or array containing the target. `None` for the root.
    pub obj: Option<&'a Value>,
    pub key: Option<ReferenceKey>,
}

impl Reference<'_> {
    pub fn is_array_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Array(_)))
    }

    pub fn is_object_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Object(_)))
    }

    /// True when the key addresses the slot one past the last array element.
    pub fn is_array_end(&self) -> bool {
        match (self.obj, &self.key) {
            (Some(Value::Array(arr)), Some(ReferenceKey::Index(idx))) => *idx == arr.len(),
            _ => false,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.key {
            Some(ReferenceKey::Index(idx)) => Some(idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_array() {
        let doc = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
        let two = Value::from(2);
        let reference = Reference {
            val: Some(&two),
            obj: Some(&doc),
            key: Some(ReferenceKey::Index(1)),
        };
        assert!(reference.is_array_reference());
        assert!(!reference.is_object_reference());
        assert!(!reference.is_array_end());
        assert_eq!(reference.index(), Some(1));
    }

    #[test]
    fn test_reference_array_end() {
        let doc = Value::from(vec![Value::from(1)]);
        let reference = Reference {
            val: None,
            obj: Some(&doc),
            key: Some(ReferenceKey::Index(1)),
        };
        assert!(reference.is_array_end());
    }
}
