//! Dot-notation expansion.

use crate::value::{Map, Value};

/// Expand a map with dot-notation keys into a nested map.
///
/// Keys are split on `.` and every segment but the last names an
/// intermediate container, created as an empty map when missing or when a
/// scalar sits in its place. Keys are applied in insertion order, so later
/// keys overwrite earlier ones that share a full path.
///
/// Numeric segments stay ordinary map keys; the encoders render maps keyed
/// `"0".."n-1"` as lists.
///
/// ```rust
/// use utilify::{undot, Map, Value};
///
/// let mut dotted = Map::new();
/// dotted.insert("a.b.c".to_string(), Value::from(1));
///
/// let nested = undot(&dotted);
/// let c = nested["a"].get("b").and_then(|b| b.get("c"));
/// assert_eq!(c, Some(&Value::from(1)));
/// ```
pub fn undot(dotted: &Map) -> Map {
    let mut tree = Value::map();
    for (key, value) in dotted {
        set_dotted(&mut tree, key, value.clone());
    }
    into_map(tree)
}

/// Set `value` at the dot-notation `key`, creating containers on the way.
fn set_dotted(tree: &mut Value, key: &str, value: Value) {
    let segments: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut cursor = tree;
    for segment in parents {
        cursor = entry(cursor, segment);
        if !cursor.is_container() {
            if !cursor.is_null() {
                log::debug!("Replacing scalar at {:?} of {:?} with a map", segment, key);
            }
            *cursor = Value::map();
        }
    }

    *entry(cursor, last) = value;
}

/// Get the child slot for `segment`, inserting `Null` if it does not exist.
///
/// Arrays are indexed when the segment is an index into (or one past the end
/// of) the array; otherwise the array is converted to a map keyed by index.
fn entry<'v>(container: &'v mut Value, segment: &str) -> &'v mut Value {
    let index = match &*container {
        Value::Array(arr) => array_index(segment, arr.len()),
        _ => None,
    };

    match (container, index) {
        (Value::Map(map), _) => map.entry(segment.to_string()).or_default(),
        (Value::Array(arr), Some(i)) => {
            if i == arr.len() {
                arr.push(Value::Null);
            }
            &mut arr[i]
        }
        (container, _) => {
            *container = Value::Map(into_map(std::mem::take(container)));
            entry(container, segment)
        }
    }
}

/// Parse a canonical decimal index that is at most `len`.
fn array_index(segment: &str, len: usize) -> Option<usize> {
    let index = segment.parse::<usize>().ok()?;
    (index <= len && segment == index.to_string()).then_some(index)
}

fn into_map(value: Value) -> Map {
    match value {
        Value::Map(map) => map,
        Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Map::new(),
    }
}
