//! Merge and key-removal helpers.

use crate::structure::{Map, Structure};

/// Deep-merges `source` into `target` in place.
///
/// - map into map: every key of `source` is merged into the matching key of
///   `target`, missing keys are added
/// - sequence into sequence: merged index by index, extra elements appended
/// - anything else: `target` is replaced by `source`
///
/// Containers of `target` are copied on write, so handles held elsewhere
/// keep seeing the old tree.
pub fn merge_into(target: &mut Structure, source: &Structure) {
    if target.ptr_eq(source) {
        return;
    }
    match source {
        Structure::Map(src) if target.is_map() => {
            if let Some(dst) = target.map_mut() {
                for (key, val) in src.iter() {
                    match dst.get_mut(key) {
                        Some(existing) => merge_into(existing, val),
                        None => {
                            dst.insert(key.clone(), val.clone());
                        }
                    }
                }
            }
        }
        Structure::Seq(src) if target.is_seq() => {
            if let Some(dst) = target.seq_mut() {
                for (idx, val) in src.iter().enumerate() {
                    match dst.get_mut(idx) {
                        Some(existing) => merge_into(existing, val),
                        None => dst.push(val.clone()),
                    }
                }
            }
        }
        _ => *target = source.clone(),
    }
}

/// Returns `target` with `source` deep-merged into it. `target` is untouched.
///
/// ```
/// use serde_json::json;
/// use immutable_structure::{deep_merge, Structure};
///
/// let target = Structure::from(json!({"a": {"x": 1}, "keep": true}));
/// let merged = deep_merge(&target, &Structure::from(json!({"a": {"y": 2}})));
///
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 2}, "keep": true}));
/// assert_eq!(target, json!({"a": {"x": 1}, "keep": true}));
/// ```
pub fn deep_merge(target: &Structure, source: &Structure) -> Structure {
    let mut out = target.clone();
    merge_into(&mut out, source);
    out
}

/// Inserts every entry of `source` into `target`, overwriting on conflict.
/// Nested values are taken as they are, not merged.
pub fn shallow_merge(target: &mut Map, source: &Map) {
    for (key, val) in source.iter() {
        target.insert(key.clone(), val.clone());
    }
}

/// Removes `keys` from `target`, keeping the order of the remaining entries.
/// Returns how many keys were actually present.
pub fn omit<S: AsRef<str>>(target: &mut Map, keys: &[S]) -> usize {
    keys.iter()
        .filter(|key| target.shift_remove(key.as_ref()).is_some())
        .count()
}
