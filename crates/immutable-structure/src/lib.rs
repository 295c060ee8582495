//! immutable-structure - the tree type behind the `immutable` mutation API.
//!
//! A [`Structure`] is a nested value made of maps (string keys, insertion
//! order preserved), sequences and JSON-like scalars. Container nodes are
//! reference counted, so cloning a handle shares the whole subtree and two
//! handles can be compared for identity with [`Structure::ptr_eq`].
//!
//! Alongside the type this crate provides the generic helpers the mutation
//! layer is built on: deep clone, deep equality, deep and shallow merge, key
//! omission, and sequence pull-at/splice.

pub mod clone;
pub mod convert;
pub mod equal;
pub mod is_empty;
pub mod merge;
pub mod splice;
pub mod structure;

// Re-exports for convenience
pub use clone::deep_clone;
pub use equal::deep_equal;
pub use is_empty::{has_own_property, is_empty};
pub use merge::{deep_merge, merge_into, omit, shallow_merge};
pub use splice::{pull_at, splice};
pub use structure::{empty_state, parse_index, Map, Seq, Structure};
