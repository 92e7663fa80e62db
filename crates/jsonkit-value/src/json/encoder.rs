//! `JsonEncoder`: writes a [`Value`] as compact JSON text.
//!
//! No whitespace is inserted. Numbers use the shortest decimal form that
//! parses back to the same `f64`; strings escape exactly what the decoder
//! unescapes, plus every control character below 0x20.

use crate::value::Value;

const HEX: &[u8; 16] = b"0123456789abcdef";

pub struct JsonEncoder {
    out: String,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn encode(&mut self, value: &Value) -> String {
        self.out.clear();
        self.write_any(value);
        std::mem::take(&mut self.out)
    }

    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_str(s),
            Value::Array(arr) => {
                self.out.push('[');
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.write_any(item);
                }
                self.out.push(']');
            }
            Value::Object(obj) => {
                self.out.push('{');
                for (i, (key, val)) in obj.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.write_str(key);
                    self.out.push(':');
                    self.write_any(val);
                }
                self.out.push('}');
            }
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_number(&mut self, num: f64) {
        self.out.push_str(&format_number(num));
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.reserve(s.len() + 2);
        self.out.push('"');
        let mut run = 0;
        for (i, b) in s.bytes().enumerate() {
            let escaped = match b {
                b'"' => "\\\"",
                b'\\' => "\\\\",
                0x08 => "\\b",
                0x0C => "\\f",
                b'\n' => "\\n",
                b'\r' => "\\r",
                b'\t' => "\\t",
                0x00..=0x1F => "",
                _ => continue,
            };
            // Every escaped byte is ASCII, so `run..i` sits on char boundaries.
            self.out.push_str(&s[run..i]);
            if escaped.is_empty() {
                self.out.push_str("\\u00");
                self.out.push(HEX[(b >> 4) as usize] as char);
                self.out.push(HEX[(b & 0x0f) as usize] as char);
            } else {
                self.out.push_str(escaped);
            }
            run = i + 1;
        }
        self.out.push_str(&s[run..]);
        self.out.push('"');
    }
}

/// Formats a number in the shortest round-trip form.
///
/// Non-finite values cannot come out of the decoder; they are written as
/// `null` so the output is always valid JSON.
fn format_number(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let abs = f.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        format!("{f:e}")
    } else {
        format!("{f}")
    }
}

/// Serializes `value` as compact JSON text.
pub fn stringify(value: &Value) -> String {
    JsonEncoder::new().encode(value)
}
