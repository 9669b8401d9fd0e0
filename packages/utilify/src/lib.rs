//! Utilify: array helpers
//!
//! Stateless helpers over ordered string-keyed maps:
//! - `undot`: expand dot-notation keys into nested maps
//! - `filter_by_key_pattern`: keep entries whose key matches a pattern
//! - `is_filled` / `is_blank`: forms-style truthiness
//! - `filter_attributes_by_conditions`: keep attributes by per-key condition
//! - `reject_blanks`: drop absent or empty values
//! - `to_yaml_str` / `to_json_str`: human-readable text that never fails
//!
//! Every helper borrows its input and returns a freshly built map.
//!
//! # Example
//!
//! ```rust
//! use utilify::{to_json_str, undot, Map, Value};
//!
//! let mut dotted = Map::new();
//! dotted.insert("entity".to_string(), Value::from("Entity A"));
//! dotted.insert("entries.0.key".to_string(), Value::from("value1"));
//! dotted.insert("entries.1.key".to_string(), Value::from("value2"));
//!
//! let json = to_json_str(&undot(&dotted));
//! let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(parsed["entries"][1]["key"], "value2");
//! ```

mod blank;
mod conditions;
mod encode;
mod error;
mod pattern;
mod undot;
mod value;

pub use blank::{as_number, is_blank, is_empty_value, is_filled, is_numeric, reject_blanks};
pub use conditions::{filter_attributes_by_conditions, Condition, Conditions};
pub use encode::{
    to_json_str, to_json_str_with, to_yaml_str, to_yaml_str_with, try_to_json_str,
    try_to_json_str_with, try_to_yaml_str, try_to_yaml_str_with, EncodeOptions, Format,
    DEFAULT_JSON_INDENT, DEFAULT_YAML_MAX_DEPTH,
};
pub use error::{Error, Result};
pub use pattern::{compile_pattern, filter_by_key_matcher, filter_by_key_pattern, KeyMatcher};
pub use undot::undot;
pub use value::{is_list_like, Map, Value};

// Re-export for callers building maps and compiled patterns
pub use indexmap;
pub use regex::Regex;
