//! Key paths into immutable structures.
//!
//! A path is a sequence of string keys, descended one per step from the
//! root. Paths can also be written as [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! strings.
//!
//! # Example
//!
//! ```
//! use immutable_path::{exists, format_json_pointer, get_in, parse_json_pointer};
//! use immutable_structure::Structure;
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = Structure::from(serde_json::json!({"foo": {"bar": 42, "nil": null}}));
//! assert_eq!(get_in(&doc, &path), Some(&Structure::from(42)));
//! assert!(!exists(&doc, &["foo", "nil"]));
//! ```

use immutable_structure::Structure;
use thiserror::Error;

pub mod types;
pub use types::{to_path, Path, PathStep};

pub mod pointer;
pub use pointer::{
    escape_component, format_json_pointer, parse_json_pointer, try_parse_json_pointer, unescape_component,
    validate_json_pointer,
};

/// Whether the path addresses the root itself.
pub fn is_root<S: AsRef<str>>(path: &[S]) -> bool {
    path.is_empty()
}

/// Check if `child` lies strictly below `parent`.
///
/// ```
/// use immutable_path::is_child;
///
/// assert!(is_child(&["foo"], &["foo", "bar"]));
/// assert!(!is_child(&["foo", "bar"], &["foo"]));
/// assert!(!is_child(&["foo"], &["foo"]));
/// ```
pub fn is_child<S: AsRef<str>, T: AsRef<str>>(parent: &[S], child: &[T]) -> bool {
    parent.len() < child.len() && is_prefix(parent, child)
}

/// Step-by-step path equality.
pub fn is_path_equal<S: AsRef<str>, T: AsRef<str>>(p1: &[S], p2: &[T]) -> bool {
    p1.len() == p2.len() && is_prefix(p1, p2)
}

fn is_prefix<S: AsRef<str>, T: AsRef<str>>(prefix: &[S], path: &[T]) -> bool {
    prefix
        .iter()
        .zip(path.iter())
        .all(|(a, b)| a.as_ref() == b.as_ref())
}

/// The path one step up.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
///
/// ```
/// use immutable_path::parent;
///
/// assert_eq!(parent(&["foo", "bar"]).unwrap(), vec!["foo"]);
/// assert!(parent::<&str>(&[]).is_err());
/// ```
pub fn parent<S: AsRef<str>>(path: &[S]) -> Result<Path, PathError> {
    match path.split_last() {
        Some((_, init)) => Ok(to_path(init)),
        None => Err(PathError::NoParent),
    }
}

/// Descend `path` from `root`, returning whatever sits at the end.
///
/// Unlike [`get_in`], a stored `null` is returned as `Some(Null)`.
pub fn get<'a, S: AsRef<str>>(root: &'a Structure, path: &[S]) -> Option<&'a Structure> {
    let mut current = root;
    for step in path {
        current = current.get(step.as_ref())?;
    }
    Some(current)
}

/// Read-at-path.
///
/// Descends key by key. An absent step, a scalar in the way, or a `null`
/// anywhere along the path (including the final value) means not found.
/// The returned reference borrows `root`; clone it to get a cheap shared
/// handle.
pub fn get_in<'a, S: AsRef<str>>(root: &'a Structure, path: &[S]) -> Option<&'a Structure> {
    let mut current = root;
    for step in path {
        current = current.get(step.as_ref())?;
        if current.is_null() {
            return None;
        }
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

/// Whether `path` resolves to a non-null value in `root`.
pub fn exists<S: AsRef<str>>(root: &Structure, path: &[S]) -> bool {
    get_in(root, path).is_some()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
}
