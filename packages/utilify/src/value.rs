//! The Value type - a dynamically typed tree.
//!
//! Every helper in this crate operates on a [`Map`] of string keys to
//! [`Value`]s. Maps keep insertion order, which is the order every helper
//! iterates in and preserves in its output.

use indexmap::IndexMap;

use crate::encode::Format;
use crate::{Error, Result};

/// Ordered map from string keys to values.
pub type Map = IndexMap<String, Value>;

/// A dynamically typed value held in a [`Map`].
///
/// # Design Notes
///
/// - Uses `IndexMap` so that iteration follows insertion order
/// - Includes `Bytes` for raw byte strings that may not be valid UTF-8
/// - Uses `i64` for integers
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Raw byte string. Not guaranteed to be valid UTF-8.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Ordered key-value map.
    Map(Map),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value can hold children (map or array).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Array(_))
    }

    /// View this value as text.
    ///
    /// `Bytes` read as text only when they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// View this value as a map.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a direct child by key (or by index, for arrays).
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::Array(arr) => arr.get(key.parse::<usize>().ok()?),
            _ => None,
        }
    }

    /// Convert a `serde_json::Value` into a Value.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    // Fallback for numbers outside i64/f64
                    Value::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert this value into a `serde_json::Value`.
    ///
    /// List-like maps become JSON arrays.
    ///
    /// # Errors
    ///
    /// Fails on `Bytes` that are not valid UTF-8 and on non-finite floats,
    /// neither of which JSON can represent.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    Error::encode(Format::JSON, format!("non-finite float {} is not encodable", f))
                })?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => serde_json::Value::String(s.to_string()),
                Err(e) => {
                    return Err(Error::encode(
                        Format::JSON,
                        format!("malformed UTF-8 in string value: {}", e),
                    ))
                }
            },
            Value::Array(arr) => serde_json::Value::Array(
                arr.iter().map(Value::to_json).collect::<Result<_>>()?,
            ),
            Value::Map(map) => map_to_json(map)?,
        })
    }
}

/// Convert a map into a `serde_json::Value`, rendering list-like maps as arrays.
pub(crate) fn map_to_json(map: &Map) -> Result<serde_json::Value> {
    if is_list_like(map) {
        return Ok(serde_json::Value::Array(
            map.values().map(Value::to_json).collect::<Result<_>>()?,
        ));
    }
    Ok(serde_json::Value::Object(
        map.iter()
            .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
            .collect::<Result<_>>()?,
    ))
}

/// Check whether a map is keyed exactly `"0"`, `"1"`, ... in order.
///
/// Encoders render such maps as sequences. The empty map is not list-like.
pub fn is_list_like(map: &Map) -> bool {
    !map.is_empty() && map.keys().enumerate().all(|(i, key)| *key == i.to_string())
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}
