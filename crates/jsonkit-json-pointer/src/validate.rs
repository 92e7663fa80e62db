//! Validation of JSON Pointer text.

use crate::JsonPointerError;

/// Checks that `pointer` is well-formed RFC 6901 text.
///
/// The empty string is the root. Anything else must start with `/`, and
/// every `~` must be followed by `0` or `1`.
///
/// # Example
///
/// ```
/// use jsonkit_json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/a~1b").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// validate_json_pointer("/a~2").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::PointerInvalid);
    }
    let mut bytes = pointer.bytes();
    while let Some(b) = bytes.next() {
        if b == b'~' && !matches!(bytes.next(), Some(b'0' | b'1')) {
            return Err(JsonPointerError::PointerInvalid);
        }
    }
    Ok(())
}
