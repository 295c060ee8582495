//! Core types for the update module: directives, command trees and errors.

use std::fmt;

use immutable_structure::{Map, Structure};
use indexmap::IndexMap;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// A branch step names a child that does not exist. The applier never
    /// creates intermediate nodes.
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    /// The node at the location has the wrong shape for the directive.
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

// ── Directive ─────────────────────────────────────────────────────────────

/// A one-shot transform carried by [`Directive::Apply`]. Receives the current
/// value, or `None` when the location is empty.
pub type Transform<'a> = Box<dyn FnOnce(Option<Structure>) -> Structure + 'a>;

/// One `[start, delete_count, ...items]` step of a splice.
#[derive(Debug, Clone, PartialEq)]
pub struct SpliceOp {
    pub start: isize,
    pub delete_count: usize,
    pub items: Vec<Structure>,
}

impl SpliceOp {
    pub fn new(start: isize, delete_count: usize, items: Vec<Structure>) -> Self {
        Self {
            start,
            delete_count,
            items,
        }
    }

    /// A splice step that only removes.
    pub fn remove(start: isize, delete_count: usize) -> Self {
        Self::new(start, delete_count, Vec::new())
    }
}

impl From<(isize, usize)> for SpliceOp {
    fn from((start, delete_count): (isize, usize)) -> Self {
        SpliceOp::remove(start, delete_count)
    }
}

/// A single intended change at one location.
pub enum Directive<'a> {
    /// Replace the target entirely. The target may be absent.
    Set(Structure),
    /// Insert the keys of a map into a map target.
    Merge(Structure),
    /// Append to a sequence target.
    Push(Vec<Structure>),
    /// Prepend to a sequence target, keeping the items' relative order.
    Unshift(Vec<Structure>),
    /// Replace the target with `transform(target)`.
    Apply(Transform<'a>),
    /// Run splice steps, in order, on a sequence target.
    Splice(Vec<SpliceOp>),
    /// Remove keys from a map target. Missing keys are ignored.
    Unset(Vec<String>),
}

impl Directive<'_> {
    /// The directive's tag.
    pub fn name(&self) -> &'static str {
        match self {
            Directive::Set(_) => "set",
            Directive::Merge(_) => "merge",
            Directive::Push(_) => "push",
            Directive::Unshift(_) => "unshift",
            Directive::Apply(_) => "apply",
            Directive::Splice(_) => "splice",
            Directive::Unset(_) => "unset",
        }
    }
}

impl fmt::Debug for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Set(v) => f.debug_tuple("Set").field(v).finish(),
            Directive::Merge(v) => f.debug_tuple("Merge").field(v).finish(),
            Directive::Push(v) => f.debug_tuple("Push").field(v).finish(),
            Directive::Unshift(v) => f.debug_tuple("Unshift").field(v).finish(),
            Directive::Apply(_) => f.write_str("Apply(<fn>)"),
            Directive::Splice(v) => f.debug_tuple("Splice").field(v).finish(),
            Directive::Unset(v) => f.debug_tuple("Unset").field(v).finish(),
        }
    }
}

// ── Command tree ──────────────────────────────────────────────────────────

/// A tree shaped like the target whose leaves are directives.
#[derive(Debug)]
pub enum CommandTree<'a> {
    Branch(IndexMap<String, CommandTree<'a>>),
    Leaf(Directive<'a>),
}

impl<'a> CommandTree<'a> {
    /// A directive applied to the root itself.
    pub fn root(directive: Directive<'a>) -> Self {
        CommandTree::Leaf(directive)
    }

    /// A chain of single-key branches along `path`, ending in `directive`.
    ///
    /// Returns `None` for the empty path; use [`CommandTree::root`] there.
    ///
    /// ```
    /// use immutable_update::{directives, CommandTree};
    ///
    /// let tree = CommandTree::at(&["a", "b"], directives::set(1)).unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// assert!(CommandTree::at::<&str>(&[], directives::set(1)).is_none());
    /// ```
    pub fn at<S: AsRef<str>>(path: &[S], directive: Directive<'a>) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        Some(Self::along(path, directive))
    }

    /// Like [`CommandTree::at`], but the empty path yields a root leaf.
    pub fn along<S: AsRef<str>>(path: &[S], directive: Directive<'a>) -> Self {
        let mut node = CommandTree::Leaf(directive);
        for step in path.iter().rev() {
            let mut children = IndexMap::with_capacity(1);
            children.insert(step.as_ref().to_owned(), node);
            node = CommandTree::Branch(children);
        }
        node
    }

    /// Number of branch levels above the deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            CommandTree::Leaf(_) => 0,
            CommandTree::Branch(children) => {
                1 + children.values().map(CommandTree::depth).max().unwrap_or(0)
            }
        }
    }
}

impl<'a> From<Directive<'a>> for CommandTree<'a> {
    fn from(directive: Directive<'a>) -> Self {
        CommandTree::Leaf(directive)
    }
}

/// Shape check used by the applier for `Merge` payloads.
pub(crate) fn merge_payload(value: &Structure) -> Result<&Map, UpdateError> {
    value
        .as_map()
        .ok_or_else(|| UpdateError::InvalidOp(format!("merge expects a map, got {}", value.type_name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_builds_chain() {
        let tree = CommandTree::at(&["a", "b", "c"], Directive::Set(1.into())).unwrap();
        let CommandTree::Branch(level1) = &tree else {
            panic!("expected branch");
        };
        let CommandTree::Branch(level2) = &level1["a"] else {
            panic!("expected branch");
        };
        let CommandTree::Branch(level3) = &level2["b"] else {
            panic!("expected branch");
        };
        assert!(matches!(&level3["c"], CommandTree::Leaf(Directive::Set(_))));
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_along_empty_path_is_root() {
        let tree = CommandTree::along::<&str>(&[], Directive::Unset(vec![]));
        assert!(matches!(tree, CommandTree::Leaf(Directive::Unset(_))));
        assert_eq!(CommandTree::along(&["x"], Directive::Unset(vec![])).depth(), 1);
    }

    #[test]
    fn test_directive_names() {
        assert_eq!(Directive::Unset(vec![]).name(), "unset");
        assert_eq!(Directive::Apply(Box::new(|v: Option<Structure>| v.unwrap_or_default())).name(), "apply");
        assert_eq!(format!("{:?}", Directive::Apply(Box::new(|_: Option<Structure>| Structure::Null))), "Apply(<fn>)");
    }

    #[test]
    fn test_splice_op_from_pair() {
        assert_eq!(SpliceOp::from((2isize, 1usize)), SpliceOp::new(2, 1, vec![]));
    }
}
