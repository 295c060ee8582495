//! The chainable mutation session.

use immutable_path::{exists, format_json_pointer};
use immutable_structure::{deep_equal, empty_state, is_empty, merge_into, parse_index, pull_at, Structure};
use immutable_update::{apply, directives, CommandTree, Directive, SpliceOp};

use crate::placeholder::{self, Want};

/// A copy-on-write mutation session over one source structure.
///
/// The session keeps the source it was created from and a working tree that
/// starts out sharing everything with it. Each operation replaces the nodes
/// along its path and leaves every other subtree shared. Operations whose
/// preconditions fail change nothing. [`Mutations::get_state`] hands back the
/// source itself when the working tree ends up deep-equal to it.
///
/// ```
/// use immutable::{Mutations, Structure};
/// use serde_json::json;
///
/// let state = Structure::from(json!({"todos": [], "meta": {"owner": "ann"}}));
/// let mut session = Mutations::new(&state);
/// session
///     .push("todos", ["write docs"])
///     .set_in(&["meta", "dirty"], true);
/// let next = session.get_state();
///
/// assert_eq!(next, json!({"todos": ["write docs"], "meta": {"owner": "ann", "dirty": true}}));
/// assert_eq!(state, json!({"todos": [], "meta": {"owner": "ann"}}));
/// ```
#[derive(Debug, Clone)]
pub struct Mutations {
    original: Structure,
    working: Structure,
}

impl Mutations {
    pub fn new(state: &Structure) -> Self {
        Self {
            original: state.clone(),
            working: state.clone(),
        }
    }

    /// The current working tree.
    pub fn working(&self) -> &Structure {
        &self.working
    }

    /// Whether the working tree differs from the source.
    pub fn is_modified(&self) -> bool {
        !deep_equal(&self.working, &self.original)
    }

    /// Finishes the session.
    ///
    /// Returns the source handle when nothing observable changed, so callers
    /// can detect a no-op with [`Structure::ptr_eq`].
    pub fn get_state(self) -> Structure {
        if deep_equal(&self.working, &self.original) {
            self.original
        } else {
            self.working
        }
    }

    fn run(&mut self, op: &'static str, tree: CommandTree<'_>) {
        tracing::trace!(op, depth = tree.depth(), "applying command tree");
        if let Err(err) = apply(&mut self.working, tree) {
            tracing::warn!(op, %err, "command tree rejected, state left unchanged");
        }
    }

    /// Stubs `path` for `want` and applies `directive` at its end.
    fn write_in<S: AsRef<str>>(&mut self, op: &'static str, path: &[S], want: Want, directive: Directive<'_>) -> &mut Self {
        if path.is_empty() {
            tracing::debug!(op, "empty path, nothing to do");
            return self;
        }
        if !placeholder::fits(&self.working, path, want) {
            tracing::debug!(op, path = %format_json_pointer(path), "location cannot hold the value");
            return self;
        }
        placeholder::stub(&mut self.working, path, want);
        self.run(op, CommandTree::along(path, directive));
        self
    }

    /// Narrows the working tree to the value at `path`, or `null` when there
    /// is none.
    pub fn get_in<S: AsRef<str>>(&mut self, path: &[S]) -> &mut Self {
        self.working = immutable_path::get_in(&self.working, path)
            .cloned()
            .unwrap_or_default();
        self
    }

    /// Replaces the working tree with the canonical empty map.
    pub fn clear(&mut self) -> &mut Self {
        self.working = empty_state();
        self
    }

    /// Replaces the whole working tree. Setting a deep-equal value is a no-op.
    pub fn set(&mut self, value: impl Into<Structure>) -> &mut Self {
        let value = value.into();
        if deep_equal(&self.working, &value) {
            tracing::debug!(op = "set", "value unchanged");
            return self;
        }
        self.run("set", CommandTree::root(directives::set(value)));
        self
    }

    /// Sets one top-level key. An empty key is a no-op.
    pub fn set_key(&mut self, loc: &str, value: impl Into<Structure>) -> &mut Self {
        if loc.is_empty() {
            tracing::debug!(op = "set_key", "empty key, nothing to do");
            return self;
        }
        self.write_in("set_key", &[loc], Want::Any, directives::set(value))
    }

    /// Sets the value at `path`, creating missing intermediate maps.
    pub fn set_in<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<Structure>) -> &mut Self {
        self.write_in("set_in", path, Want::Any, directives::set(value))
    }

    /// Replaces the top-level `loc` with `f(current)`.
    ///
    /// `f` gets `None` when `loc` is absent. Does nothing while the working
    /// tree is empty or not a container. On a sequence `loc` must be an
    /// index no greater than its length.
    pub fn update<F>(&mut self, loc: &str, f: F) -> &mut Self
    where
        F: FnOnce(Option<Structure>) -> Structure,
    {
        let addressable = match &self.working {
            Structure::Map(map) => !map.is_empty(),
            Structure::Seq(seq) => parse_index(loc).is_some_and(|idx| !seq.is_empty() && idx <= seq.len()),
            _ => false,
        };
        if !addressable {
            tracing::debug!(op = "update", loc, "nothing to update");
            return self;
        }
        self.run("update", CommandTree::along(&[loc], directives::apply(f)));
        self
    }

    /// Replaces the value at `path` with `f(current)`. Does nothing unless
    /// `path` already resolves to a value.
    pub fn update_in<S, F>(&mut self, path: &[S], f: F) -> &mut Self
    where
        S: AsRef<str>,
        F: FnOnce(Structure) -> Structure,
    {
        if path.is_empty() || !exists(&self.working, path) {
            tracing::debug!(op = "update_in", path = %format_json_pointer(path), "location not found");
            return self;
        }
        let directive = directives::apply(move |current| f(current.unwrap_or_default()));
        self.run("update_in", CommandTree::along(path, directive));
        self
    }

    /// Deep-merges `value` into the top level of the working tree.
    ///
    /// Only a map (onto a map or `null`) or a sequence (onto a sequence) is
    /// merged; any other pairing leaves the state alone.
    pub fn merge(&mut self, value: impl Into<Structure>) -> &mut Self {
        let value = value.into();
        let mergeable = match &value {
            Structure::Map(_) => self.working.is_map() || self.working.is_null(),
            Structure::Seq(_) => self.working.is_seq(),
            _ => false,
        };
        if !mergeable {
            tracing::debug!(
                op = "merge",
                kind = value.type_name(),
                into = self.working.type_name(),
                "nothing to merge"
            );
            return self;
        }
        tracing::trace!(op = "merge", "merging into the root");
        merge_into(&mut self.working, &value);
        self
    }

    /// Same as [`Mutations::merge`], which is always deep.
    pub fn merge_deep(&mut self, value: impl Into<Structure>) -> &mut Self {
        self.merge(value)
    }

    /// Inserts the keys of a map into the map at `path`, creating it if
    /// needed. Does nothing when the location holds something other than a
    /// map.
    pub fn merge_in<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<Structure>) -> &mut Self {
        let value = value.into();
        if !value.is_map() {
            tracing::debug!(op = "merge_in", kind = value.type_name(), "only maps can be merged");
            return self;
        }
        self.write_in("merge_in", path, Want::Map, directives::merge(value))
    }

    /// Appends to the sequence at the top-level `loc`.
    pub fn push<I, T>(&mut self, loc: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Structure>,
    {
        self.push_in(&[loc], values)
    }

    /// Appends to the sequence at `path`, creating it when the slot is empty.
    /// Any other value in the slot is left alone.
    pub fn push_in<S, I, T>(&mut self, path: &[S], values: I) -> &mut Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: Into<Structure>,
    {
        self.write_in("push_in", path, Want::Seq, directives::push(values))
    }

    /// Prepends to the sequence at the top-level `loc`.
    pub fn unshift<I, T>(&mut self, loc: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Structure>,
    {
        self.unshift_in(&[loc], values)
    }

    /// Prepends to the sequence at `path`, keeping the order of `values`.
    pub fn unshift_in<S, I, T>(&mut self, path: &[S], values: I) -> &mut Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: Into<Structure>,
    {
        self.write_in("unshift_in", path, Want::Seq, directives::unshift(values))
    }

    /// Runs splice steps on the sequence at `path`.
    pub fn splice_in<S: AsRef<str>>(&mut self, path: &[S], ops: Vec<SpliceOp>) -> &mut Self {
        let is_seq = immutable_path::get_in(&self.working, path).is_some_and(Structure::is_seq);
        if !is_seq {
            tracing::debug!(op = "splice_in", path = %format_json_pointer(path), "not a sequence");
            return self;
        }
        self.run("splice_in", CommandTree::along(path, directives::splice(ops)));
        self
    }

    /// Removes the given indices from the sequence at `path`.
    ///
    /// Does nothing unless the location holds a sequence and every index is
    /// in range.
    pub fn pull_at_in<S: AsRef<str>>(&mut self, path: &[S], indices: &[usize]) -> &mut Self {
        let Some(seq) = immutable_path::get_in(&self.working, path).and_then(Structure::as_seq) else {
            tracing::debug!(op = "pull_at_in", path = %format_json_pointer(path), "not a sequence");
            return self;
        };
        if indices.is_empty() || indices.iter().any(|&idx| idx >= seq.len()) {
            tracing::debug!(op = "pull_at_in", ?indices, len = seq.len(), "index out of range");
            return self;
        }
        let mut remaining = seq.clone();
        pull_at(&mut remaining, indices);
        let remaining = Structure::from_seq(remaining);
        if path.is_empty() {
            self.set(remaining)
        } else {
            self.set_in(path, remaining)
        }
    }

    /// Removes the value at `path`.
    ///
    /// Only the last step is removed: ancestors stay in place even when they
    /// end up empty. Removing from a sequence shifts the later elements down.
    pub fn delete_in<S: AsRef<str>>(&mut self, path: &[S]) -> &mut Self {
        if is_empty(&self.working) {
            tracing::debug!(op = "delete_in", "state is empty");
            return self;
        }
        let Some((last, parent_path)) = path.split_last() else {
            tracing::debug!(op = "delete_in", "empty path, nothing to do");
            return self;
        };
        if !exists(&self.working, path) {
            tracing::debug!(op = "delete_in", path = %format_json_pointer(path), "location not found");
            return self;
        }
        let last = last.as_ref();
        let directive = match immutable_path::get(&self.working, parent_path) {
            Some(Structure::Seq(_)) => match immutable_structure::parse_index(last) {
                Some(idx) => directives::splice(vec![SpliceOp::remove(idx as isize, 1)]),
                None => return self,
            },
            Some(Structure::Map(_)) => directives::unset(&[last]),
            _ => return self,
        };
        self.run("delete_in", CommandTree::along(parent_path, directive));
        self
    }
}
