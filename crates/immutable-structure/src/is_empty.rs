use crate::structure::Structure;

/// Check if a structure is empty.
///
/// `null`, maps and sequences without entries, and the empty string are
/// empty. Numbers and booleans are values in their own right and never
/// empty.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use immutable_structure::{is_empty, Structure};
///
/// assert!(is_empty(&Structure::from(json!({}))));
/// assert!(!is_empty(&Structure::from(json!({"foo": "bar"}))));
/// assert!(!is_empty(&Structure::from(0)));
/// ```
pub fn is_empty(value: &Structure) -> bool {
    match value {
        Structure::Null => true,
        Structure::Map(map) => map.is_empty(),
        Structure::Seq(seq) => seq.is_empty(),
        Structure::String(s) => s.is_empty(),
        Structure::Bool(_) | Structure::Number(_) => false,
    }
}

/// Check if a map node holds a given key. Non-maps hold no keys.
pub fn has_own_property(value: &Structure, key: &str) -> bool {
    value.as_map().is_some_and(|map| map.contains_key(key))
}
