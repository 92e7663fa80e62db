//! Resource limits and parser options.
//!
//! Untrusted input should be parsed with bounds on nesting and size so that a
//! hostile document fails fast with a dedicated [`ParseError`] instead of
//! exhausting the stack or memory.
//!
//! [`ParseError`]: super::ParseError

use serde::Deserialize;

/// Nesting depth used by [`Limits::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Bounds enforced while parsing.
///
/// Sizes count bytes of UTF-8 (strings, whole input) or members/elements
/// (objects, arrays).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum nesting of arrays and objects. The top-level container is depth 1.
    pub max_depth: usize,
    /// Maximum decoded length of any string or object key, in bytes.
    pub max_string_length: usize,
    /// Maximum number of elements in one array.
    pub max_array_size: usize,
    /// Maximum number of members in one object.
    pub max_object_size: usize,
    /// Maximum length of the whole input, in bytes.
    pub max_total_size: usize,
    /// Largest accepted absolute value of a number.
    pub max_number_magnitude: f64,
}

impl Limits {
    /// No bounds at all, not even on depth.
    ///
    /// Only appropriate for trusted input: nesting is then bounded by the
    /// call stack alone.
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_string_length: usize::MAX,
            max_array_size: usize::MAX,
            max_object_size: usize::MAX,
            max_total_size: usize::MAX,
            max_number_magnitude: f64::MAX,
        }
    }

    /// Tight bounds for documents from untrusted peers.
    pub const fn strict() -> Self {
        Self {
            max_depth: 64,
            max_string_length: 64 * 1024,
            max_array_size: 10_000,
            max_object_size: 1024,
            max_total_size: 1024 * 1024,
            // Largest integer an f64 holds exactly: 2^53 - 1.
            max_number_magnitude: 9_007_199_254_740_991.0,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ..Self::unlimited()
        }
    }
}

/// Options for [`parse_with_options`](super::parse_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub limits: Limits,
    /// Accept a single `,` before a closing `]` or `}`.
    pub allow_trailing_commas: bool,
}

impl ParseOptions {
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn allow_trailing_commas(mut self, allow: bool) -> Self {
        self.allow_trailing_commas = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(limits.max_total_size, usize::MAX);
        assert_eq!(limits.max_number_magnitude, f64::MAX);
    }

    #[test]
    fn test_strict_is_tighter_than_default() {
        let strict = Limits::strict();
        let default = Limits::default();
        assert!(strict.max_depth < default.max_depth);
        assert!(strict.max_total_size < default.max_total_size);
        assert!(strict.max_number_magnitude < default.max_number_magnitude);
    }

    #[test]
    fn test_options_from_config_text() {
        let options: ParseOptions = serde_json::from_str(
            r#"{"limits": {"max_depth": 8, "max_array_size": 3}, "allow_trailing_commas": true}"#,
        )
        .unwrap();
        assert_eq!(options.limits.max_depth, 8);
        assert_eq!(options.limits.max_array_size, 3);
        // Unspecified fields keep their defaults.
        assert_eq!(options.limits.max_object_size, usize::MAX);
        assert!(options.allow_trailing_commas);
    }
}
