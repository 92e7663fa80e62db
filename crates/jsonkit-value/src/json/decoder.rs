//! `JsonDecoder`: strict recursive-descent JSON parser producing [`Value`].
//!
//! The decoder walks the input bytes with a single cursor (`x`). Containers
//! recurse through [`JsonDecoder::read_any`]; a depth counter guards every
//! array and object so nesting is bounded by [`Limits::max_depth`] and never
//! by the call stack.

use super::error::ParseError;
use super::limits::{Limits, ParseOptions};
use crate::value::{Object, Value};

pub struct JsonDecoder<'a> {
    pub data: &'a [u8],
    /// Cursor into `data`. After a failed decode it points at (or just past)
    /// the offending byte.
    pub x: usize,
    depth: usize,
    limits: Limits,
    allow_trailing_commas: bool,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            data: input.as_bytes(),
            x: 0,
            depth: 0,
            limits: options.limits,
            allow_trailing_commas: options.allow_trailing_commas,
        }
    }

    /// Decodes the whole input as a single JSON text.
    pub fn decode(&mut self) -> Result<Value, ParseError> {
        self.x = 0;
        self.depth = 0;
        if self.data.len() > self.limits.max_total_size {
            return Err(ParseError::MaxTotalSizeExceeded);
        }
        self.skip_whitespace();
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    pub fn read_any(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.read_literal(b"null", Value::Null),
            Some(b't') => self.read_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.read_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.read_str().map(Value::String),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(b'-' | b'0'..=b'9') => self.read_num(),
            Some(_) => Err(ParseError::InvalidValue),
        }
    }

    fn read_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        let end = self.x + literal.len();
        if self.data.get(self.x..end) != Some(literal) {
            return Err(ParseError::InvalidValue);
        }
        self.x = end;
        Ok(value)
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.x += 1;
        }
    }

    pub fn read_num(&mut self) -> Result<Value, ParseError> {
        let start = self.x;

        if self.peek() == Some(b'-') {
            self.x += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.x += 1;
                // No leading zeros and no hex literals.
                if let Some(b'0'..=b'9' | b'x' | b'X') = self.peek() {
                    return Err(ParseError::InvalidValue);
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.x += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            self.skip_digits();
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.x += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.x += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            self.skip_digits();
        }

        // The grammar above only admits ASCII, so this never fails.
        let literal =
            std::str::from_utf8(&self.data[start..self.x]).map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = literal.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        if n.abs() > self.limits.max_number_magnitude {
            return Err(ParseError::NumberRangeExceeded);
        }
        Ok(Value::Number(n))
    }

    /// Reads four hex digits following `\u`.
    fn read_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(b) => (b as char).to_digit(16).ok_or(ParseError::InvalidUnicodeHex)?,
                None => return Err(ParseError::InvalidUnicodeHex),
            };
            code = (code << 4) | digit;
            self.x += 1;
        }
        Ok(code)
    }

    /// Decodes the code point of a `\u` escape whose `\u` has been consumed,
    /// pairing surrogates.
    fn read_unicode_escape(&mut self) -> Result<char, ParseError> {
        let high = self.read_hex4()?;
        let code = match high {
            0xD800..=0xDBFF => {
                if self.data.get(self.x..self.x + 2) != Some(&b"\\u"[..]) {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                self.x += 2;
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                0x10000 + (high - 0xD800) * 0x400 + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(ParseError::InvalidUnicodeSurrogate),
            _ => high,
        };
        char::from_u32(code).ok_or(ParseError::InvalidUnicodeSurrogate)
    }

    /// Reads a quoted string; the cursor must be on the opening quote.
    pub fn read_str(&mut self) -> Result<String, ParseError> {
        self.x += 1;
        let mut out = String::new();
        // Start of the current run of bytes that need no unescaping.
        let mut run = self.x;
        loop {
            let Some(b) = self.peek() else {
                return Err(ParseError::MissQuotationMark);
            };
            match b {
                b'"' => {
                    self.push_run(&mut out, run)?;
                    self.x += 1;
                    return Ok(out);
                }
                b'\\' => {
                    self.push_run(&mut out, run)?;
                    self.x += 1;
                    let Some(esc) = self.peek() else {
                        return Err(ParseError::MissQuotationMark);
                    };
                    self.x += 1;
                    let ch = match esc {
                        b'"' => '"',
                        b'\\' => '\\',
                        b'/' => '/',
                        b'b' => '\u{08}',
                        b'f' => '\u{0C}',
                        b'n' => '\n',
                        b'r' => '\r',
                        b't' => '\t',
                        b'u' => self.read_unicode_escape()?,
                        _ => return Err(ParseError::InvalidStringEscape),
                    };
                    out.push(ch);
                    self.check_string_length(out.len())?;
                    run = self.x;
                }
                0x00..=0x1F => return Err(ParseError::InvalidStringChar),
                _ => self.x += 1,
            }
        }
    }

    /// Appends `data[run..x]` to `out`.
    fn push_run(&self, out: &mut String, run: usize) -> Result<(), ParseError> {
        if run < self.x {
            // `data` came from a `&str` and the run is bounded by ASCII bytes,
            // so it is always valid UTF-8.
            let text = std::str::from_utf8(&self.data[run..self.x])
                .map_err(|_| ParseError::InvalidStringChar)?;
            out.push_str(text);
            self.check_string_length(out.len())?;
        }
        Ok(())
    }

    fn check_string_length(&self, len: usize) -> Result<(), ParseError> {
        if len > self.limits.max_string_length {
            return Err(ParseError::MaxStringLengthExceeded);
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::MaxDepthExceeded);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    pub fn read_arr(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.x += 1;
        self.skip_whitespace();
        let mut arr = Vec::new();
        if self.peek() == Some(b']') {
            self.x += 1;
            self.leave();
            return Ok(Value::Array(arr));
        }
        loop {
            arr.push(self.read_any()?);
            if arr.len() > self.limits.max_array_size {
                return Err(ParseError::MaxArraySizeExceeded);
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.x += 1;
                    self.skip_whitespace();
                    if self.allow_trailing_commas && self.peek() == Some(b']') {
                        self.x += 1;
                        break;
                    }
                }
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
        self.leave();
        Ok(Value::Array(arr))
    }

    pub fn read_obj(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.x += 1;
        self.skip_whitespace();
        let mut obj = Object::new();
        if self.peek() == Some(b'}') {
            self.x += 1;
            self.leave();
            return Ok(Value::Object(obj));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.x += 1;
            self.skip_whitespace();
            let value = self.read_any()?;
            obj.push(key, value);
            if obj.len() > self.limits.max_object_size {
                return Err(ParseError::MaxObjectSizeExceeded);
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.x += 1;
                    self.skip_whitespace();
                    if self.allow_trailing_commas && self.peek() == Some(b'}') {
                        self.x += 1;
                        break;
                    }
                }
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
        self.leave();
        Ok(Value::Object(obj))
    }
}
