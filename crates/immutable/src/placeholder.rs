//! Placeholder stubbing.
//!
//! The applier never creates intermediate nodes, so before a deep write the
//! session makes every level along the path exist. [`fits`] is the read-only
//! pre-check; [`stub`] does the work and must only run after `fits` passed.

use std::sync::Arc;

use immutable_structure::{parse_index, Structure};

/// The shape the final slot of a path has to end up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Want {
    /// Anything; the slot is about to be replaced.
    Any,
    /// A map, created empty when the slot is absent or `null`.
    Map,
    /// A sequence, created empty when the slot is absent, `null` or `{}`.
    Seq,
}

/// Whether `path` can be stubbed in `root` and its final slot can hold
/// `want`.
///
/// Absent and `null` levels are fine since they get replaced. A scalar in
/// the way, a bad sequence index, or a final slot of the wrong shape is not.
pub(crate) fn fits<S: AsRef<str>>(root: &Structure, path: &[S], want: Want) -> bool {
    let mut current = Some(root);
    for step in path {
        current = match current {
            None | Some(Structure::Null) => None,
            Some(Structure::Map(map)) => map.get(step.as_ref()),
            Some(Structure::Seq(seq)) => match parse_index(step.as_ref()) {
                Some(idx) if idx <= seq.len() => seq.get(idx),
                _ => return false,
            },
            Some(_) => return false,
        };
    }
    match (want, current) {
        (Want::Any, _) => true,
        (_, None | Some(Structure::Null)) => true,
        (Want::Map, Some(slot)) => slot.is_map(),
        (Want::Seq, Some(Structure::Map(map))) => map.is_empty(),
        (Want::Seq, Some(slot)) => slot.is_seq(),
    }
}

/// Mutable access to one child slot, creating it as `null` when the key is
/// new or the index is one past the end.
fn slot<'a>(node: &'a mut Structure, key: &str) -> Option<&'a mut Structure> {
    match node {
        Structure::Map(map) => Some(Arc::make_mut(map).entry(key.to_owned()).or_default()),
        Structure::Seq(seq) => {
            let seq = Arc::make_mut(seq);
            let idx = parse_index(key)?;
            if idx == seq.len() {
                seq.push(Structure::Null);
            }
            seq.get_mut(idx)
        }
        _ => None,
    }
}

/// Makes every level of `path` above the final slot exist, then shapes the
/// final slot per `want`. Existing non-null values are never replaced,
/// except an empty map that is asked to become a sequence.
pub(crate) fn stub<S: AsRef<str>>(root: &mut Structure, path: &[S], want: Want) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = root;
    for step in parents {
        if node.is_null() {
            *node = Structure::new_map();
        }
        node = match slot(node, step.as_ref()) {
            Some(child) => child,
            None => return,
        };
    }
    if node.is_null() {
        *node = Structure::new_map();
    }
    if want == Want::Any {
        return;
    }
    let Some(target) = slot(node, last.as_ref()) else {
        return;
    };
    match want {
        Want::Map if target.is_null() => *target = Structure::new_map(),
        Want::Seq if target.is_null() || target.as_map().is_some_and(|m| m.is_empty()) => {
            *target = Structure::new_seq();
        }
        _ => {}
    }
}
