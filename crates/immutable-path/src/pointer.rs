//! JSON Pointer ([RFC 6901](https://tools.ietf.org/html/rfc6901)) strings as
//! paths.

use crate::{Path, PathError};

/// Deepest path a checked parse accepts.
pub const MAX_DEPTH: usize = 256;

/// Turns one pointer token back into a key: `~1` becomes `/`, `~0` becomes
/// `~`. A `~` followed by anything else is kept as is.
///
/// ```
/// use immutable_path::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('0') => {
                chars.next();
                out.push('~');
            }
            Some('1') => {
                chars.next();
                out.push('/');
            }
            _ => out.push('~'),
        }
    }
    out
}

/// Turns a key into a pointer token.
///
/// ```
/// use immutable_path::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    out
}

/// Splits a pointer into keys. `""` is the root; anything else has its
/// first character dropped (it should be `/`, see [`try_parse_json_pointer`]).
///
/// ```
/// use immutable_path::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    let mut chars = pointer.chars();
    match chars.next() {
        None => Path::new(),
        Some(_) => chars.as_str().split('/').map(unescape_component).collect(),
    }
}

/// Joins keys into a pointer.
///
/// ```
/// use immutable_path::format_json_pointer;
///
/// assert_eq!(format_json_pointer::<&str>(&[]), "");
/// assert_eq!(format_json_pointer(&["foo", "a/b"]), "/foo/a~1b");
/// ```
pub fn format_json_pointer<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|key| format!("/{}", escape_component(key.as_ref())))
        .collect()
}

/// Checks that a pointer is either the root (`""`) or absolute.
pub fn validate_json_pointer(pointer: &str) -> Result<(), PathError> {
    if pointer.is_empty() || pointer.starts_with('/') {
        Ok(())
    } else {
        Err(PathError::PointerInvalid)
    }
}

/// [`parse_json_pointer`] with checks.
///
/// # Errors
///
/// [`PathError::PointerInvalid`] for a relative pointer,
/// [`PathError::PathTooLong`] past [`MAX_DEPTH`] keys.
///
/// ```
/// use immutable_path::{try_parse_json_pointer, PathError};
///
/// assert_eq!(try_parse_json_pointer("/a/0").unwrap(), vec!["a", "0"]);
/// assert_eq!(try_parse_json_pointer("a/0"), Err(PathError::PointerInvalid));
/// ```
pub fn try_parse_json_pointer(pointer: &str) -> Result<Path, PathError> {
    validate_json_pointer(pointer)?;
    if pointer.matches('/').count() > MAX_DEPTH {
        return Err(PathError::PathTooLong);
    }
    Ok(parse_json_pointer(pointer))
}
