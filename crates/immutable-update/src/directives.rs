//! Directive builders.
//!
//! Each builder wraps its one argument in the matching [`Directive`] without
//! looking at it; shape checks happen when the directive is applied.

use immutable_structure::Structure;

use crate::types::{Directive, SpliceOp};

/// Replace the target entirely.
pub fn set(value: impl Into<Structure>) -> Directive<'static> {
    Directive::Set(value.into())
}

/// Merge the keys of a map into the target.
pub fn merge(value: impl Into<Structure>) -> Directive<'static> {
    Directive::Merge(value.into())
}

/// Push all the items onto the end of the target sequence.
pub fn push<I, T>(values: I) -> Directive<'static>
where
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    Directive::Push(values.into_iter().map(Into::into).collect())
}

/// Put all the items at the front of the target sequence.
pub fn unshift<I, T>(values: I) -> Directive<'static>
where
    I: IntoIterator<Item = T>,
    T: Into<Structure>,
{
    Directive::Unshift(values.into_iter().map(Into::into).collect())
}

/// Pass the current value to `transform` and store what it returns.
pub fn apply<'a, F>(transform: F) -> Directive<'a>
where
    F: FnOnce(Option<Structure>) -> Structure + 'a,
{
    Directive::Apply(Box::new(transform))
}

/// Splice the target sequence, one `[start, delete_count, ...items]` step at
/// a time.
pub fn splice(ops: Vec<SpliceOp>) -> Directive<'static> {
    Directive::Splice(ops)
}

/// Remove keys from the target map.
pub fn unset<S: AsRef<str>>(keys: &[S]) -> Directive<'static> {
    Directive::Unset(keys.iter().map(|k| k.as_ref().to_owned()).collect())
}
