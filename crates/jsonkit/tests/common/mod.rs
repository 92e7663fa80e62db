#![allow(dead_code)]

use jsonkit::json_patch::{from_json_patch, Op};
use jsonkit_value::{parse, Value};

/// Parses a JSON text fixture.
pub fn doc(text: &str) -> Value {
    parse(text).expect("fixture must parse")
}

/// Parses an RFC 6902 patch document fixture.
pub fn ops(text: &str) -> Vec<Op> {
    from_json_patch(&doc(text)).expect("patch fixture must decode")
}
