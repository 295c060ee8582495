//! Sequence removal helpers.

use crate::structure::{Seq, Structure};

/// Removes the elements at `indices` and returns them in index order.
///
/// Duplicate indices count once; indices past the end are ignored. The
/// remaining elements keep their relative order.
///
/// ```
/// use immutable_structure::{pull_at, Structure};
///
/// let mut seq: Vec<Structure> = vec!["a".into(), "b".into(), "c".into(), "d".into()];
/// let pulled = pull_at(&mut seq, &[3, 1]);
///
/// assert_eq!(pulled, vec![Structure::from("b"), Structure::from("d")]);
/// assert_eq!(seq, vec![Structure::from("a"), Structure::from("c")]);
/// ```
pub fn pull_at(seq: &mut Seq, indices: &[usize]) -> Vec<Structure> {
    let mut sorted: Vec<usize> = indices.iter().copied().filter(|&i| i < seq.len()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut pulled: Vec<Structure> = sorted.iter().rev().map(|&i| seq.remove(i)).collect();
    pulled.reverse();
    pulled
}

/// `Array.prototype.splice` on a sequence.
///
/// A negative `start` counts from the end; `start` is clamped into
/// `0..=len` and `delete_count` to what is left after it. Returns the
/// removed elements.
pub fn splice(seq: &mut Seq, start: isize, delete_count: usize, items: Vec<Structure>) -> Vec<Structure> {
    let len = seq.len();
    let start = if start < 0 {
        len.saturating_sub(start.unsigned_abs())
    } else {
        (start as usize).min(len)
    };
    let end = start + delete_count.min(len - start);
    seq.splice(start..end, items).collect()
}
