//! Type definitions for key paths.

/// A single step of a path: a map key, or a decimal index when the step
/// meets a sequence.
pub type PathStep = String;

/// An ordered sequence of steps from the root. Empty means the root itself.
pub type Path = Vec<PathStep>;

/// Converts borrowed steps into an owned [`Path`].
///
/// ```
/// use immutable_path::to_path;
///
/// assert_eq!(to_path(&["a", "0"]), vec!["a".to_string(), "0".to_string()]);
/// ```
pub fn to_path<S: AsRef<str>>(steps: &[S]) -> Path {
    steps.iter().map(|s| s.as_ref().to_owned()).collect()
}
