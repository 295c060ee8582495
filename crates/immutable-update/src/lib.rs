//! Declarative updates for immutable structures.
//!
//! A [`CommandTree`] mirrors the shape of the target down to the locations
//! that change; each leaf holds a [`Directive`] saying what to do there.
//! [`update`] returns a new structure with the directives applied, copying
//! only the nodes along the changed paths. Everything else is shared with
//! the input.
//!
//! # Directives
//!
//! `set`, `merge`, `push`, `unshift`, `apply`, `splice`, `unset`. Builders
//! for each live in [`directives`].
//!
//! The applier never creates intermediate nodes: every branch step must name
//! an existing child (or, for `set` and `apply`, the leaf slot may be empty).

pub mod apply;
pub mod directives;
pub mod types;

pub use apply::{apply, update, validate};
pub use types::{CommandTree, Directive, SpliceOp, Transform, UpdateError};
