//! Blank and filled checks.
//!
//! There are two distinct notions of emptiness here. [`is_filled`] is the
//! forms-style one: numeric zero (`0`, `"0"`, `"0.0"`) counts as blank.
//! [`reject_blanks`] only drops values that are absent or structurally empty,
//! so it keeps zero, `false` and `"0"`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::value::{Map, Value};

lazy_static! {
    /// Integer and float literals, with optional surrounding whitespace.
    static ref NUMERIC: Regex = Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$"
    )
    .unwrap();
}

/// Characters trimmed before deciding that a string is blank.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Interpret a value as a number, if it is one or looks like one.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(_) | Value::Bytes(_) => {
            let text = value.as_str()?;
            if !NUMERIC.is_match(text) {
                return None;
            }
            text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
                .parse::<f64>()
                .ok()
        }
        _ => None,
    }
}

/// Check whether a value is numeric or a numeric-looking string.
pub fn is_numeric(value: &Value) -> bool {
    as_number(value).is_some()
}

/// Check whether a value counts as filled in.
///
/// Booleans are returned as-is. Numbers and numeric strings are filled when
/// they are not zero. Anything else is filled unless it is null, an empty or
/// whitespace-only string, or an empty array/map.
pub fn is_filled(value: &Value) -> bool {
    if let Value::Bool(b) = value {
        return *b;
    }

    match as_number(value) {
        Some(number) => number != 0.0,
        None => match value {
            Value::Null => false,
            Value::String(s) => !s.trim_matches(TRIMMED).is_empty(),
            Value::Bytes(b) => b.iter().any(|byte| !TRIMMED.contains(&char::from(*byte))),
            Value::Array(arr) => !arr.is_empty(),
            Value::Map(map) => !map.is_empty(),
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) => true,
        },
    }
}

/// The negation of [`is_filled`].
pub fn is_blank(value: &Value) -> bool {
    !is_filled(value)
}

/// Check whether a value is absent or structurally empty.
///
/// Only null, the empty string and empty arrays/maps are empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Map(map) => map.is_empty(),
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) => false,
    }
}

/// Drop the entries whose value is absent or structurally empty.
///
/// Unlike [`is_filled`], zero, `false` and `"0"` are kept.
pub fn reject_blanks(map: &Map) -> Map {
    map.iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
