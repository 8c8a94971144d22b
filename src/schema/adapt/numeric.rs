//! Lenient numeric parsing.
//!
//! Text is read up to the end of its leading numeric prefix, so `"12abc"`
//! reads as 12 and `"abc"` as 0.

use crate::value::Value;

/// The leading numeric part of `s`, after leading whitespace
///
/// Accepts an optional sign, digits, an optional fraction and an optional
/// exponent. Returns an empty string when `s` does not start with a number.
#[must_use]
pub fn numeric_prefix(s: &str) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;
    if has_digits {
        end = i;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start || has_digits {
            has_digits = true;
            end = j;
            i = j;
        }
    }

    if has_digits && i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    &s[..end]
}

fn parse_float_prefix(s: &str) -> f64 {
    numeric_prefix(s).parse::<f64>().unwrap_or(0.0)
}

fn parse_integer_prefix(s: &str) -> i64 {
    let prefix = numeric_prefix(s);
    prefix
        .parse::<i64>()
        .unwrap_or_else(|_| prefix.parse::<f64>().map_or(0, truncate))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> i64 {
    // `as` saturates at the i64 bounds and maps NaN to 0
    f.trunc() as i64
}

const fn structure_flag(is_empty: bool) -> i64 {
    if is_empty { 0 } else { 1 }
}

/// Integer reading of a value
#[must_use]
pub fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Int(i) => *i,
        Value::Float(f) => truncate(*f),
        Value::Text(s) => parse_integer_prefix(s),
        Value::Array(items) => structure_flag(items.is_empty()),
        Value::Object(map) => structure_flag(map.is_empty()),
        Value::File(_) => 1,
    }
}

/// Floating-point reading of a value
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        Value::Int(i) => *i as f64,
        Value::Text(s) => parse_float_prefix(s),
        other => to_integer(other) as f64,
    }
}
