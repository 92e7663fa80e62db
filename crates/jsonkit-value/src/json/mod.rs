//! JSON text codec: strict parser and compact serializer.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod limits;

pub use decoder::JsonDecoder;
pub use encoder::{stringify, JsonEncoder};
pub use error::ParseError;
pub use limits::{Limits, ParseOptions, DEFAULT_MAX_DEPTH};

use crate::value::Value;

/// Parses `text` as a single JSON value with the default options.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses `text` as a single JSON value, enforcing `options.limits`.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value, ParseError> {
    let mut decoder = JsonDecoder::new(text, options);
    decoder.decode().inspect_err(|err| {
        tracing::debug!(error = %err, offset = decoder.x, "json parse failed");
    })
}
