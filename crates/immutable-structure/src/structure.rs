//! The [`Structure`] tree type.
//!
//! Containers are reference counted. Cloning a `Structure` never copies a
//! subtree, it only shares it; writers go through [`Structure::map_mut`] /
//! [`Structure::seq_mut`], which copy a node only when somebody else still
//! holds it (copy-on-write).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::Number;

/// An object-like node: string keys, insertion order preserved.
pub type Map = IndexMap<String, Structure>;

/// An ordered, integer-indexed node.
pub type Seq = Vec<Structure>;

static EMPTY_STATE: Lazy<Structure> = Lazy::new(|| Structure::Map(Arc::new(Map::new())));

/// Returns the canonical empty map.
///
/// Every call hands out a handle to the same allocation, so callers can use
/// [`Structure::ptr_eq`] to recognise it.
///
/// ```
/// use immutable_structure::empty_state;
///
/// assert!(empty_state().ptr_eq(&empty_state()));
/// ```
pub fn empty_state() -> Structure {
    EMPTY_STATE.clone()
}

/// A node of a nested key-value tree.
#[derive(Clone, Default)]
pub enum Structure {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Arc<Seq>),
    Map(Arc<Map>),
}

impl Structure {
    /// Wraps a map into a fresh node.
    pub fn from_map(map: Map) -> Self {
        Structure::Map(Arc::new(map))
    }

    /// Wraps a vector into a fresh node.
    pub fn from_seq(seq: Seq) -> Self {
        Structure::Seq(Arc::new(seq))
    }

    /// A freshly allocated empty map (never the shared [`empty_state`]).
    pub fn new_map() -> Self {
        Self::from_map(Map::new())
    }

    /// A freshly allocated empty sequence.
    pub fn new_seq() -> Self {
        Self::from_seq(Seq::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Structure::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Structure::Map(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Structure::Seq(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Structure::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Seq> {
        match self {
            Structure::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Structure::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Structure::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Structure::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Structure::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Structure::Null => "null",
            Structure::Bool(_) => "boolean",
            Structure::Number(_) => "number",
            Structure::String(_) => "string",
            Structure::Seq(_) => "sequence",
            Structure::Map(_) => "map",
        }
    }

    /// Looks up one step below this node.
    ///
    /// Maps are indexed by key, sequences by a decimal index. Scalars have no
    /// children.
    pub fn get(&self, key: &str) -> Option<&Structure> {
        match self {
            Structure::Map(map) => map.get(key),
            Structure::Seq(seq) => parse_index(key).and_then(|idx| seq.get(idx)),
            _ => None,
        }
    }

    /// Mutable access to one child, copying this node first if it is shared.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Structure> {
        match self {
            Structure::Map(map) => Arc::make_mut(map).get_mut(key),
            Structure::Seq(seq) => {
                let idx = parse_index(key)?;
                Arc::make_mut(seq).get_mut(idx)
            }
            _ => None,
        }
    }

    /// Copy-on-write access to the map behind this node.
    pub fn map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Structure::Map(map) => Some(Arc::make_mut(map)),
            _ => None,
        }
    }

    /// Copy-on-write access to the sequence behind this node.
    pub fn seq_mut(&mut self) -> Option<&mut Seq> {
        match self {
            Structure::Seq(seq) => Some(Arc::make_mut(seq)),
            _ => None,
        }
    }

    /// Reference identity.
    ///
    /// Containers are identical when they share one allocation. Scalars have
    /// no identity of their own and compare by value.
    pub fn ptr_eq(&self, other: &Structure) -> bool {
        match (self, other) {
            (Structure::Map(a), Structure::Map(b)) => Arc::ptr_eq(a, b),
            (Structure::Seq(a), Structure::Seq(b)) => Arc::ptr_eq(a, b),
            (Structure::Map(_), _) | (Structure::Seq(_), _) => false,
            (_, Structure::Map(_)) | (_, Structure::Seq(_)) => false,
            (a, b) => crate::deep_equal(a, b),
        }
    }

    /// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are
    /// falsy, every container is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Structure::Null => false,
            Structure::Bool(b) => *b,
            Structure::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
            Structure::String(s) => !s.is_empty(),
            Structure::Seq(_) | Structure::Map(_) => true,
        }
    }
}

/// Parses a sequence index: plain decimal digits, no sign, no leading zero.
pub fn parse_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    key.parse().ok()
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        crate::deep_equal(self, other)
    }
}

impl fmt::Debug for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Null => f.write_str("Null"),
            Structure::Bool(b) => write!(f, "{b:?}"),
            Structure::Number(n) => write!(f, "{n}"),
            Structure::String(s) => write!(f, "{s:?}"),
            Structure::Seq(seq) => f.debug_list().entries(seq.iter()).finish(),
            Structure::Map(map) => f.debug_map().entries(map.iter()).finish(),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

// ── Conversions from Rust values ──────────────────────────────────────────

impl From<bool> for Structure {
    fn from(b: bool) -> Self {
        Structure::Bool(b)
    }
}

impl From<i64> for Structure {
    fn from(n: i64) -> Self {
        Structure::Number(n.into())
    }
}

impl From<i32> for Structure {
    fn from(n: i32) -> Self {
        Structure::Number(n.into())
    }
}

impl From<u64> for Structure {
    fn from(n: u64) -> Self {
        Structure::Number(n.into())
    }
}

impl From<usize> for Structure {
    fn from(n: usize) -> Self {
        Structure::Number((n as u64).into())
    }
}

impl From<f64> for Structure {
    /// Non-finite floats have no representation and become `Null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Structure::Null, Structure::Number)
    }
}

impl From<&str> for Structure {
    fn from(s: &str) -> Self {
        Structure::String(s.to_owned())
    }
}

impl From<String> for Structure {
    fn from(s: String) -> Self {
        Structure::String(s)
    }
}

impl From<Map> for Structure {
    fn from(map: Map) -> Self {
        Structure::from_map(map)
    }
}

impl<T: Into<Structure>> From<Vec<T>> for Structure {
    fn from(items: Vec<T>) -> Self {
        Structure::from_seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Structure>> From<Option<T>> for Structure {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Structure::Null, Into::into)
    }
}

impl<K: Into<String>> FromIterator<(K, Structure)> for Structure {
    fn from_iter<I: IntoIterator<Item = (K, Structure)>>(iter: I) -> Self {
        Structure::from_map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Structure> for Structure {
    fn from_iter<I: IntoIterator<Item = Structure>>(iter: I) -> Self {
        Structure::from_seq(iter.into_iter().collect())
    }
}
