use crate::structure::{Map, Structure};

/// Creates a deep clone of a structure.
///
/// Unlike [`Clone::clone`], which shares every container, this allocates a
/// new node for each nested map and sequence. The result is equal to the
/// input but shares no allocation with it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use immutable_structure::{deep_clone, Structure};
///
/// let original = Structure::from(json!({"foo": [1, 2, 3]}));
/// let cloned = deep_clone(&original);
///
/// assert_eq!(original, cloned);
/// assert!(!original.ptr_eq(&cloned));
/// ```
pub fn deep_clone(value: &Structure) -> Structure {
    match value {
        Structure::Null => Structure::Null,
        Structure::Bool(b) => Structure::Bool(*b),
        Structure::Number(n) => Structure::Number(n.clone()),
        Structure::String(s) => Structure::String(s.clone()),
        Structure::Seq(seq) => Structure::from_seq(seq.iter().map(deep_clone).collect()),
        Structure::Map(map) => {
            let mut new_map = Map::with_capacity(map.len());
            for (key, val) in map.iter() {
                new_map.insert(key.clone(), deep_clone(val));
            }
            Structure::from_map(new_map)
        }
    }
}
