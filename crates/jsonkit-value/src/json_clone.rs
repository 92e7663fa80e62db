//! Deep copy, move and swap of JSON trees.

use crate::value::Value;

/// Creates a deep clone of any JSON value.
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(key, val)| (key.clone(), clone(val)))
                .collect(),
        ),
    }
}

/// Drops the contents of `dst` and replaces them with a deep clone of `src`.
pub fn copy(dst: &mut Value, src: &Value) {
    *dst = clone(src);
}

/// Drops the contents of `dst`, transfers the tree of `src` into it without
/// copying, and leaves `Null` in `src`.
pub fn move_value(dst: &mut Value, src: &mut Value) {
    *dst = src.take();
}

/// Exchanges two trees.
pub fn swap(a: &mut Value, b: &mut Value) {
    std::mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    fn sample() -> Value {
        let mut obj = Object::new();
        obj.push("foo", Value::from(vec![Value::from(1), Value::from("two")]));
        obj.push("bar", Value::Null);
        Value::Object(obj)
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut cloned = clone(&original);
        assert_eq!(original, cloned);
        cloned.as_object_mut().unwrap().insert("bar", Value::from(true));
        assert_ne!(original, cloned);
        assert!(original.get("bar").unwrap().is_null());
    }

    #[test]
    fn test_copy_overwrites_destination() {
        let src = sample();
        let mut dst = Value::from("old");
        copy(&mut dst, &src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_move_resets_source() {
        let mut src = sample();
        let mut dst = Value::from(42);
        move_value(&mut dst, &mut src);
        assert!(src.is_null());
        assert_eq!(dst, sample());
    }

    #[test]
    fn test_swap() {
        let mut a = Value::from(1);
        let mut b = sample();
        swap(&mut a, &mut b);
        assert_eq!(a, sample());
        assert_eq!(b, Value::from(1));
    }
}
