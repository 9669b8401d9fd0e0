//! Conditional attribute filtering.

use std::fmt;

use indexmap::IndexMap;

use crate::pattern::compile_pattern;
use crate::value::{Map, Value};
use crate::Result;

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Decides whether an attribute is kept.
pub enum Condition {
    /// Always keep the attribute.
    Always,
    /// Keep the attribute if its value is a string matching the pattern.
    Pattern(String),
    /// Keep the attribute if the predicate returns true for its value.
    Predicate(Box<PredicateFn>),
}

impl Condition {
    /// Build a predicate condition from a closure.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Condition::Predicate(Box::new(f))
    }

    /// Build a pattern condition.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Condition::Pattern(pattern.into())
    }

    /// Evaluate the condition against an attribute value.
    ///
    /// # Errors
    ///
    /// Fails if a `Pattern` condition does not compile.
    pub fn accepts(&self, value: &Value) -> Result<bool> {
        match self {
            Condition::Predicate(f) => Ok(f(value)),
            Condition::Always => Ok(true),
            Condition::Pattern(pattern) => {
                let regex = compile_pattern(pattern)?;
                Ok(value.as_str().is_some_and(|s| regex.is_match(s)))
            }
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "Always"),
            Condition::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Condition::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// `true` keeps the attribute unconditionally; `false` never keeps it.
impl From<bool> for Condition {
    fn from(keep: bool) -> Self {
        if keep {
            Condition::Always
        } else {
            Condition::predicate(|_| false)
        }
    }
}

impl From<&str> for Condition {
    fn from(pattern: &str) -> Self {
        Condition::Pattern(pattern.to_string())
    }
}

impl From<String> for Condition {
    fn from(pattern: String) -> Self {
        Condition::Pattern(pattern)
    }
}

/// Attribute name to condition, evaluated in insertion order.
pub type Conditions = IndexMap<String, Condition>;

/// Keep the attributes that satisfy their condition.
///
/// Conditions naming attributes that are not present are ignored, and
/// attributes without a condition are dropped. The result follows the order
/// of `filters`.
///
/// # Errors
///
/// `Error::InvalidPattern` if a pattern condition for a present attribute
/// does not compile.
///
/// ```rust
/// use utilify::{filter_attributes_by_conditions, Condition, Conditions, Map, Value};
///
/// let mut attributes = Map::new();
/// attributes.insert("username".to_string(), Value::from("user123"));
/// attributes.insert("age".to_string(), Value::from(15));
///
/// let mut filters = Conditions::new();
/// filters.insert("username".to_string(), Condition::from("^[a-z0-9]+$"));
/// filters.insert(
///     "age".to_string(),
///     Condition::predicate(|v| matches!(v, Value::Integer(n) if *n >= 18)),
/// );
///
/// let kept = filter_attributes_by_conditions(&attributes, &filters).unwrap();
/// assert_eq!(kept.len(), 1);
/// assert!(kept.contains_key("username"));
/// ```
pub fn filter_attributes_by_conditions(attributes: &Map, filters: &Conditions) -> Result<Map> {
    let mut kept = Map::new();
    for (name, condition) in filters {
        let Some(value) = attributes.get(name) else {
            continue;
        };
        if condition.accepts(value)? {
            kept.insert(name.clone(), value.clone());
        }
    }
    Ok(kept)
}
