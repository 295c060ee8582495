use crate::structure::Structure;

/// Performs a deep equality check between two structures.
///
/// Identical containers short-circuit to `true` without being walked, which
/// keeps comparisons against a mostly shared copy proportional to the part
/// that actually differs. Otherwise values are compared recursively:
/// - Scalars by value (`1` and `1.0` are different numbers)
/// - Sequences element by element
/// - Maps key by key, ignoring insertion order
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use immutable_structure::{deep_equal, Structure};
///
/// let a = Structure::from(json!({"foo": [1, 2, 3]}));
/// let b = Structure::from(json!({"foo": [1, 2, 3]}));
/// let c = Structure::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Structure, b: &Structure) -> bool {
    match (a, b) {
        (Structure::Null, Structure::Null) => true,
        (Structure::Bool(a), Structure::Bool(b)) => a == b,
        (Structure::Number(a), Structure::Number(b)) => a == b,
        (Structure::String(a), Structure::String(b)) => a == b,

        (Structure::Seq(seq_a), Structure::Seq(seq_b)) => {
            if std::sync::Arc::ptr_eq(seq_a, seq_b) {
                return true;
            }
            if seq_a.len() != seq_b.len() {
                return false;
            }
            seq_a.iter().zip(seq_b.iter()).all(|(x, y)| deep_equal(x, y))
        }

        (Structure::Map(map_a), Structure::Map(map_b)) => {
            if std::sync::Arc::ptr_eq(map_a, map_b) {
                return true;
            }
            if map_a.len() != map_b.len() {
                return false;
            }
            for (key, val_a) in map_a.iter() {
                match map_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different types are never equal
        _ => false,
    }
}
