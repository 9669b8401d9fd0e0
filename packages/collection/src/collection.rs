//! The `Collection` wrapper.

use utilify::{Conditions, EncodeOptions, Map, Result, Value};

/// An ordered string-keyed collection with the array helpers attached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    items: Map,
}

/// Build a collection from key/value pairs.
pub fn collect<K, V, I>(items: I) -> Collection
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    items
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the underlying map.
    pub fn all(&self) -> &Map {
        &self.items
    }

    /// Take the underlying map.
    pub fn into_inner(self) -> Map {
        self.items
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.items.iter()
    }

    /// See [`utilify::undot`].
    pub fn undot(&self) -> Collection {
        utilify::undot(&self.items).into()
    }

    /// See [`utilify::filter_by_key_pattern`].
    pub fn filter_by_key_pattern(&self, pattern: &str) -> Result<Collection> {
        utilify::filter_by_key_pattern(&self.items, pattern).map(Into::into)
    }

    /// See [`utilify::filter_attributes_by_conditions`].
    pub fn filter_attributes_by_conditions(&self, filters: &Conditions) -> Result<Collection> {
        utilify::filter_attributes_by_conditions(&self.items, filters).map(Into::into)
    }

    /// See [`utilify::reject_blanks`].
    pub fn reject_blanks(&self) -> Collection {
        utilify::reject_blanks(&self.items).into()
    }

    /// See [`utilify::to_yaml_str`].
    pub fn to_yaml_str(&self) -> String {
        utilify::to_yaml_str(&self.items)
    }

    /// See [`utilify::to_yaml_str_with`].
    pub fn to_yaml_str_with(&self, options: &EncodeOptions) -> String {
        utilify::to_yaml_str_with(&self.items, options)
    }

    /// See [`utilify::to_json_str`].
    pub fn to_json_str(&self) -> String {
        utilify::to_json_str(&self.items)
    }

    /// See [`utilify::to_json_str_with`].
    pub fn to_json_str_with(&self, options: &EncodeOptions) -> String {
        utilify::to_json_str_with(&self.items, options)
    }
}

impl From<Map> for Collection {
    fn from(items: Map) -> Self {
        Collection { items }
    }
}

impl From<Collection> for Map {
    fn from(collection: Collection) -> Self {
        collection.items
    }
}

impl FromIterator<(String, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
