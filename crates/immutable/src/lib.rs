//! Path-addressed, copy-on-write mutations over nested structures.
//!
//! Every function here takes a state, applies one change and returns the
//! new state. The input is never modified. Nodes along the changed path are
//! copied; every other subtree of the result is the very same allocation as
//! in the input, so `ptr_eq` on an untouched branch tells a caller nothing
//! changed there. A call whose preconditions fail returns the input handle
//! itself.
//!
//! For several changes at once use [`with_mutations`], which runs them in
//! one [`Mutations`] session and copies each touched path only once.
//!
//! # Example
//!
//! ```
//! use immutable::{push_in, remove_in, with_mutations, Structure};
//! use serde_json::json;
//!
//! let state = Structure::from(json!({"user": {"tags": ["a"], "tmp": 1}, "other": {}}));
//!
//! let next = push_in(&state, &["user", "tags"], ["b"]);
//! assert_eq!(next, json!({"user": {"tags": ["a", "b"], "tmp": 1}, "other": {}}));
//! assert!(next.get("other").unwrap().ptr_eq(state.get("other").unwrap()));
//!
//! let next = with_mutations(&state, |m| {
//!     m.push_in(&["user", "tags"], ["b"]).delete_in(&["user", "tmp"]);
//! });
//! assert_eq!(next, json!({"user": {"tags": ["a", "b"]}, "other": {}}));
//!
//! // Removing a path that is not there is a no-op.
//! assert!(remove_in(&state, &["user", "missing"]).ptr_eq(&state));
//! ```

mod mutations;
mod placeholder;

pub use mutations::Mutations;

pub use immutable_path::{format_json_pointer, parse_json_pointer, Path};
pub use immutable_structure::{deep_clone, deep_equal, empty_state, is_empty, Map, Seq, Structure};
pub use immutable_update::{directives, CommandTree, Directive, SpliceOp, UpdateError};

/// Runs `f` against one session over `state` and returns the result.
///
/// Returns `state` itself when the batch left everything deep-equal.
pub fn with_mutations<F>(state: &Structure, f: F) -> Structure
where
    F: FnOnce(&mut Mutations),
{
    let mut session = Mutations::new(state);
    f(&mut session);
    session.get_state()
}

/// The canonical empty state.
pub fn clear() -> Structure {
    empty_state()
}

/// One-deep lookup. Absent and falsy values come back as `None`.
pub fn get(state: &Structure, loc: &str) -> Option<Structure> {
    state.get(loc).filter(|v| v.is_truthy()).cloned()
}

/// The value at `path`, or `None` when any step is missing or `null`.
pub fn get_in<S: AsRef<str>>(state: &Structure, path: &[S]) -> Option<Structure> {
    let found = with_mutations(state, |m| {
        m.get_in(path);
    });
    (!found.is_null()).then_some(found)
}

/// Replaces the whole state.
pub fn set(state: &Structure, value: impl Into<Structure>) -> Structure {
    with_mutations(state, |m| {
        m.set(value);
    })
}

/// Sets one top-level key.
pub fn set_key(state: &Structure, loc: &str, value: impl Into<Structure>) -> Structure {
    with_mutations(state, |m| {
        m.set_key(loc, value);
    })
}

/// Sets the value at `path`, creating intermediate maps.
pub fn set_in<S: AsRef<str>>(state: &Structure, path: &[S], value: impl Into<Structure>) -> Structure {
    with_mutations(state, |m| {
        m.set_in(path, value);
    })
}

pub fn update<F>(state: &Structure, loc: &str, f: F) -> Structure
where
    F: FnOnce(Option<Structure>) -> Structure,
{
    with_mutations(state, |m| {
        m.update(loc, f);
    })
}

pub fn update_in<S, F>(state: &Structure, path: &[S], f: F) -> Structure
where
    S: AsRef<str>,
    F: FnOnce(Structure) -> Structure,
{
    with_mutations(state, |m| {
        m.update_in(path, f);
    })
}

/// Removes a top-level key.
pub fn remove(state: &Structure, loc: &str) -> Structure {
    remove_in(state, &[loc])
}

pub fn remove_in<S: AsRef<str>>(state: &Structure, path: &[S]) -> Structure {
    with_mutations(state, |m| {
        m.delete_in(path);
    })
}

/// Deep-merges `value` into the top level.
pub fn merge(state: &Structure, value: impl Into<Structure>) -> Structure {
    with_mutations(state, |m| {
        m.merge(value);
    })
}

/// Alias of [`merge`]; every merge is deep.
pub fn merge_deep(state: &Structure, value: impl Into<Structure>) -> Structure {
    merge(state, value)
}

pub fn merge_in<S: AsRef<str>>(state: &Structure, path: &[S], value: impl Into<Structure>) -> Structure {
    with_mutations(state, |m| {
        m.merge_in(path, value);
    })
}

pub fn push<I, T>(state: &Structure, loc: &str, values: I) -> Structure
where
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    with_mutations(state, |m| {
        m.push(loc, values);
    })
}

pub fn push_in<S, I, T>(state: &Structure, path: &[S], values: I) -> Structure
where
    S: AsRef<str>,
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    with_mutations(state, |m| {
        m.push_in(path, values);
    })
}

pub fn unshift<I, T>(state: &Structure, loc: &str, values: I) -> Structure
where
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    with_mutations(state, |m| {
        m.unshift(loc, values);
    })
}

pub fn unshift_in<S, I, T>(state: &Structure, path: &[S], values: I) -> Structure
where
    S: AsRef<str>,
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    with_mutations(state, |m| {
        m.unshift_in(path, values);
    })
}

/// Removes the given indices from the sequence at `path`. Out-of-range
/// indices make the whole call a no-op.
pub fn pull_at_in<S: AsRef<str>>(state: &Structure, path: &[S], indices: &[usize]) -> Structure {
    with_mutations(state, |m| {
        m.pull_at_in(path, indices);
    })
}

pub fn splice_in<S: AsRef<str>>(state: &Structure, path: &[S], ops: Vec<SpliceOp>) -> Structure {
    with_mutations(state, |m| {
        m.splice_in(path, ops);
    })
}
