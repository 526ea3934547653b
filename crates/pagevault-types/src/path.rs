//! Dotted-path accessors for nested documents.
//!
//! A path like `"hero.title"` addresses a nested field by segment. These
//! functions are the single mutation primitive for both page content and
//! site settings: every field edit produces a new document via
//! [`set_path`].

use serde_json::{Map, Value};

/// Return a new document with the value at `path` replaced.
///
/// Splits `path` on `.` and walks the document, creating empty object
/// nodes for any missing intermediate segment. An intermediate that exists
/// but is not an object (a string, array, number, ...) is replaced by an
/// empty object — there is no type checking at this layer. A non-object
/// root is likewise replaced.
///
/// The input is never mutated. Callers must treat the returned value as
/// the sole valid document going forward.
pub fn set_path(document: &Value, path: &str, value: Value) -> Value {
    let mut root = match document {
        Value::Object(map) => Value::Object(map.clone()),
        _ => Value::Object(Map::new()),
    };

    let mut segments: Vec<&str> = path.split('.').collect();
    // `split` always yields at least one segment, even for "".
    let leaf = segments.pop().unwrap_or_default();

    let mut cursor = root
        .as_object_mut()
        .expect("root was just normalized to an object");
    for segment in segments {
        let slot = cursor
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        cursor = slot
            .as_object_mut()
            .expect("slot was just normalized to an object");
    }
    cursor.insert(leaf.to_string(), value);

    root
}

/// Read the value at `path`, if every segment resolves.
///
/// Returns `None` when any segment is missing or when an intermediate
/// node is not an object.
pub fn get_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
