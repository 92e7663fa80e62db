//! jsonkit-value - JSON document model with a strict parser and compact serializer.
//!
//! ```
//! use jsonkit_value::{parse, stringify, Value};
//!
//! let doc = parse(r#"{ "a": [1, 2.5, "x"] }"#).unwrap();
//! assert_eq!(doc.get("a").and_then(Value::as_array).map(Vec::len), Some(3));
//! assert_eq!(stringify(&doc), r#"{"a":[1,2.5,"x"]}"#);
//! ```

mod convert;
pub mod json;
pub mod json_clone;
pub mod json_equal;
pub mod value;

pub use json::{
    parse, parse_with_options, stringify, JsonDecoder, JsonEncoder, Limits, ParseError,
    ParseOptions, DEFAULT_MAX_DEPTH,
};
pub use json_clone::{clone, copy, move_value, swap};
pub use json_equal::deep_equal;
pub use value::{Object, Value};
