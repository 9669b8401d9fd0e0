//! YAML and JSON string encoders.
//!
//! The plain encoders never fail: YAML degrades to JSON, and JSON degrades
//! to an empty string. The `try_*` variants surface the underlying error.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::value::{is_list_like, map_to_json, Map, Value};
use crate::{Error, Result};

/// Name of a text encoding, used in error messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// JSON (`json`)
    pub const JSON: Format = Format(Cow::Borrowed("json"));

    /// YAML (`yaml`)
    pub const YAML: Format = Format(Cow::Borrowed("yaml"));

    /// Get the format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default nesting limit for YAML documents.
pub const DEFAULT_YAML_MAX_DEPTH: usize = 10;

/// Default number of spaces per JSON indentation level.
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Knobs for the string encoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Deepest container nesting YAML encoding accepts. The top-level map
    /// counts as level 1.
    pub yaml_max_depth: usize,
    /// Spaces per indentation level in pretty JSON.
    pub json_indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            yaml_max_depth: DEFAULT_YAML_MAX_DEPTH,
            json_indent: DEFAULT_JSON_INDENT,
        }
    }
}

impl EncodeOptions {
    /// Create options with the default depth limit and indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deepest container level the YAML encoder accepts.
    pub fn with_yaml_max_depth(mut self, depth: usize) -> Self {
        self.yaml_max_depth = depth;
        self
    }

    /// Set the number of spaces per JSON indentation level.
    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }
}

/// Encode a map as pretty JSON, or `""` if it cannot be encoded.
pub fn to_json_str(map: &Map) -> String {
    to_json_str_with(map, &EncodeOptions::default())
}

/// [`to_json_str`] with explicit options.
pub fn to_json_str_with(map: &Map, options: &EncodeOptions) -> String {
    match try_to_json_str_with(map, options) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("JSON encoding failed, returning empty string: {}", e);
            String::new()
        }
    }
}

/// Encode a map as pretty JSON.
pub fn try_to_json_str(map: &Map) -> Result<String> {
    try_to_json_str_with(map, &EncodeOptions::default())
}

/// [`try_to_json_str`] with explicit options.
pub fn try_to_json_str_with(map: &Map, options: &EncodeOptions) -> Result<String> {
    let json = map_to_json(map)?;

    let indent = " ".repeat(options.json_indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    json.serialize(&mut serializer)
        .map_err(|e| Error::encode(Format::JSON, e.to_string()))?;

    String::from_utf8(buf).map_err(|e| Error::encode(Format::JSON, e.to_string()))
}

/// Encode a map as YAML, falling back to [`to_json_str`] on failure.
pub fn to_yaml_str(map: &Map) -> String {
    to_yaml_str_with(map, &EncodeOptions::default())
}

/// [`to_yaml_str`] with explicit options.
pub fn to_yaml_str_with(map: &Map, options: &EncodeOptions) -> String {
    match try_to_yaml_str_with(map, options) {
        Ok(yaml) => yaml,
        Err(e) => {
            log::warn!("YAML encoding failed, falling back to JSON: {}", e);
            to_json_str_with(map, options)
        }
    }
}

/// Encode a map as YAML.
pub fn try_to_yaml_str(map: &Map) -> Result<String> {
    try_to_yaml_str_with(map, &EncodeOptions::default())
}

/// [`try_to_yaml_str`] with explicit options.
///
/// # Errors
///
/// Fails when containers nest deeper than `options.yaml_max_depth`, or when
/// a `Bytes` value is not valid UTF-8.
pub fn try_to_yaml_str_with(map: &Map, options: &EncodeOptions) -> Result<String> {
    let root = Bounded {
        node: Node::Map(map),
        depth: 1,
        max_depth: options.yaml_max_depth,
    };
    serde_yaml::to_string(&root).map_err(|e| Error::encode(Format::YAML, e.to_string()))
}

enum Node<'a> {
    Value(&'a Value),
    Map(&'a Map),
}

/// Serializes a value while counting container nesting.
struct Bounded<'a> {
    node: Node<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Bounded<'a> {
    fn child(&self, value: &'a Value) -> Bounded<'a> {
        Bounded {
            node: Node::Value(value),
            depth: self.depth + 1,
            max_depth: self.max_depth,
        }
    }

    fn check_depth<E: serde::ser::Error>(&self) -> std::result::Result<(), E> {
        if self.depth > self.max_depth {
            return Err(E::custom(format!(
                "nesting depth {} exceeds the limit of {}",
                self.depth, self.max_depth
            )));
        }
        Ok(())
    }

    fn serialize_seq<S, I>(
        &self,
        serializer: S,
        len: usize,
        items: I,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
        I: Iterator<Item = &'a Value>,
    {
        self.check_depth::<S::Error>()?;
        let mut seq = serializer.serialize_seq(Some(len))?;
        for item in items {
            seq.serialize_element(&self.child(item))?;
        }
        seq.end()
    }

    fn serialize_map<S: Serializer>(
        &self,
        serializer: S,
        map: &'a Map,
    ) -> std::result::Result<S::Ok, S::Error> {
        if is_list_like(map) {
            return self.serialize_seq(serializer, map.len(), map.values());
        }
        self.check_depth::<S::Error>()?;
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map {
            out.serialize_entry(key, &self.child(value))?;
        }
        out.end()
    }
}

impl Serialize for Bounded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = match self.node {
            Node::Map(map) => return self.serialize_map(serializer, map),
            Node::Value(value) => value,
        };

        match value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => serializer.serialize_str(s),
                Err(e) => Err(S::Error::custom(format!(
                    "malformed UTF-8 in string value: {}",
                    e
                ))),
            },
            Value::Array(arr) => self.serialize_seq(serializer, arr.len(), arr.iter()),
            Value::Map(map) => self.serialize_map(serializer, map),
        }
    }
}
