//! Command tree apply logic.
//!
//! Applying is two-phase: the whole tree is validated against the target
//! first, then applied. A tree that fails validation leaves the target as it
//! was, so callers never observe a half-applied update.

use std::mem;

use immutable_structure::{omit, parse_index, shallow_merge, splice, Structure};

use super::types::{merge_payload, CommandTree, Directive, UpdateError};

// ── Validation ────────────────────────────────────────────────────────────

/// Resolves one branch step of `node`. `Ok(None)` means the slot is empty
/// but addressable (a new map key, or one past the end of a sequence).
fn child<'a>(node: &'a Structure, key: &str) -> Result<Option<&'a Structure>, UpdateError> {
    match node {
        Structure::Map(map) => Ok(map.get(key)),
        Structure::Seq(seq) => {
            let idx = parse_index(key).ok_or(UpdateError::InvalidIndex)?;
            if idx > seq.len() {
                return Err(UpdateError::InvalidIndex);
            }
            Ok(seq.get(idx))
        }
        _ => Err(UpdateError::InvalidTarget),
    }
}

fn validate_directive(target: Option<&Structure>, directive: &Directive<'_>) -> Result<(), UpdateError> {
    match directive {
        Directive::Set(_) | Directive::Apply(_) => Ok(()),
        Directive::Merge(value) => {
            merge_payload(value)?;
            match target {
                Some(Structure::Map(_)) => Ok(()),
                Some(_) => Err(UpdateError::InvalidTarget),
                None => Err(UpdateError::NotFound),
            }
        }
        Directive::Push(_) | Directive::Unshift(_) | Directive::Splice(_) => match target {
            Some(Structure::Seq(_)) => Ok(()),
            Some(_) => Err(UpdateError::InvalidTarget),
            None => Err(UpdateError::NotFound),
        },
        Directive::Unset(_) => match target {
            Some(Structure::Map(_)) => Ok(()),
            Some(_) => Err(UpdateError::InvalidTarget),
            None => Err(UpdateError::NotFound),
        },
    }
}

fn validate_node(target: Option<&Structure>, tree: &CommandTree<'_>) -> Result<(), UpdateError> {
    match tree {
        CommandTree::Leaf(directive) => validate_directive(target, directive),
        CommandTree::Branch(children) => {
            let node = target.ok_or(UpdateError::NotFound)?;
            for (key, sub) in children {
                validate_node(child(node, key)?, sub)?;
            }
            Ok(())
        }
    }
}

/// Checks that `tree` can be applied to `target` without touching it.
pub fn validate(target: &Structure, tree: &CommandTree<'_>) -> Result<(), UpdateError> {
    validate_node(Some(target), tree)
}

// ── Application ───────────────────────────────────────────────────────────

// Only reached after validation; a shape mismatch here leaves the node alone.
fn apply_directive(target: Option<Structure>, directive: Directive<'_>) -> Structure {
    match directive {
        Directive::Set(value) => value,
        Directive::Apply(transform) => transform(target),
        Directive::Merge(value) => {
            let mut node = target.unwrap_or_default();
            if let (Some(src), true) = (value.as_map(), node.is_map()) {
                if !src.is_empty() {
                    if let Some(dst) = node.map_mut() {
                        shallow_merge(dst, src);
                    }
                }
            }
            node
        }
        Directive::Push(values) => {
            let mut node = target.unwrap_or_default();
            if !values.is_empty() {
                if let Some(seq) = node.seq_mut() {
                    seq.extend(values);
                }
            }
            node
        }
        Directive::Unshift(values) => {
            let mut node = target.unwrap_or_default();
            if !values.is_empty() {
                if let Some(seq) = node.seq_mut() {
                    seq.splice(0..0, values);
                }
            }
            node
        }
        Directive::Splice(ops) => {
            let mut node = target.unwrap_or_default();
            if !ops.is_empty() {
                if let Some(seq) = node.seq_mut() {
                    for op in ops {
                        splice(seq, op.start, op.delete_count, op.items);
                    }
                }
            }
            node
        }
        Directive::Unset(keys) => {
            let mut node = target.unwrap_or_default();
            let present = node
                .as_map()
                .is_some_and(|map| keys.iter().any(|k| map.contains_key(k)));
            if present {
                if let Some(map) = node.map_mut() {
                    omit(map, keys.as_slice());
                }
            }
            node
        }
    }
}

fn apply_node(target: Option<Structure>, tree: CommandTree<'_>) -> Structure {
    let children = match tree {
        CommandTree::Leaf(directive) => return apply_directive(target, directive),
        CommandTree::Branch(children) => children,
    };
    let mut node = target.unwrap_or_default();
    for (key, sub) in children {
        if let Some(map) = node.map_mut() {
            let current = map.get_mut(&key).map(mem::take);
            let next = apply_node(current, sub);
            map.insert(key, next);
        } else if let Some(seq) = node.seq_mut() {
            let Some(idx) = parse_index(&key) else {
                continue;
            };
            if idx < seq.len() {
                let current = mem::take(&mut seq[idx]);
                seq[idx] = apply_node(Some(current), sub);
            } else if idx == seq.len() {
                seq.push(apply_node(None, sub));
            }
        }
    }
    node
}

/// Applies `tree` to `target` in place.
///
/// Only the nodes on the way from the root to each directive are copied
/// (and only if they are shared); every other subtree keeps its identity.
///
/// # Errors
///
/// Returns the validation error and leaves `target` unchanged if any part
/// of the tree does not fit the target.
///
/// ```
/// use immutable_structure::Structure;
/// use immutable_update::{apply, directives, CommandTree};
/// use serde_json::json;
///
/// let original = Structure::from(json!({"a": {"list": [1]}, "b": {"c": 2}}));
/// let mut doc = original.clone();
/// apply(&mut doc, CommandTree::at(&["a", "list"], directives::push([2])).unwrap()).unwrap();
///
/// assert_eq!(doc, json!({"a": {"list": [1, 2]}, "b": {"c": 2}}));
/// assert!(doc.get("b").unwrap().ptr_eq(original.get("b").unwrap()));
/// assert_eq!(original, json!({"a": {"list": [1]}, "b": {"c": 2}}));
/// ```
pub fn apply(target: &mut Structure, tree: CommandTree<'_>) -> Result<(), UpdateError> {
    validate(target, &tree)?;
    let current = mem::take(target);
    *target = apply_node(Some(current), tree);
    Ok(())
}

/// Pure form of [`apply`]: returns the updated structure and leaves `target`
/// untouched.
pub fn update(target: &Structure, tree: CommandTree<'_>) -> Result<Structure, UpdateError> {
    let mut out = target.clone();
    apply(&mut out, tree)?;
    Ok(out)
}
