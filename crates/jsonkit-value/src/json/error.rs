use thiserror::Error;

/// Every way a JSON text can be rejected.
///
/// Each grammar violation maps to exactly one variant; the resource-limit
/// variants report a configured [`Limits`](super::Limits) bound being crossed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("EXPECT_VALUE")]
    ExpectValue,
    #[error("INVALID_VALUE")]
    InvalidValue,
    #[error("ROOT_NOT_SINGULAR")]
    RootNotSingular,
    #[error("NUMBER_TOO_BIG")]
    NumberTooBig,
    #[error("MISS_QUOTATION_MARK")]
    MissQuotationMark,
    #[error("INVALID_STRING_ESCAPE")]
    InvalidStringEscape,
    #[error("INVALID_STRING_CHAR")]
    InvalidStringChar,
    #[error("INVALID_UNICODE_HEX")]
    InvalidUnicodeHex,
    #[error("INVALID_UNICODE_SURROGATE")]
    InvalidUnicodeSurrogate,
    #[error("MISS_COMMA_OR_SQUARE_BRACKET")]
    MissCommaOrSquareBracket,
    #[error("MISS_KEY")]
    MissKey,
    #[error("MISS_COLON")]
    MissColon,
    #[error("MISS_COMMA_OR_CURLY_BRACKET")]
    MissCommaOrCurlyBracket,

    // ── Resource limits ───────────────────────────────────────────────────
    #[error("MAX_DEPTH_EXCEEDED")]
    MaxDepthExceeded,
    #[error("MAX_STRING_LENGTH_EXCEEDED")]
    MaxStringLengthExceeded,
    #[error("MAX_ARRAY_SIZE_EXCEEDED")]
    MaxArraySizeExceeded,
    #[error("MAX_OBJECT_SIZE_EXCEEDED")]
    MaxObjectSizeExceeded,
    #[error("MAX_TOTAL_SIZE_EXCEEDED")]
    MaxTotalSizeExceeded,
    #[error("NUMBER_RANGE_EXCEEDED")]
    NumberRangeExceeded,
}

impl ParseError {
    /// True for the variants raised by a configured limit rather than by the grammar.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            ParseError::MaxDepthExceeded
                | ParseError::MaxStringLengthExceeded
                | ParseError::MaxArraySizeExceeded
                | ParseError::MaxObjectSizeExceeded
                | ParseError::MaxTotalSizeExceeded
                | ParseError::NumberRangeExceeded
        )
    }
}
