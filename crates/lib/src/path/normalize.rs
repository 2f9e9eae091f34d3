//! Path normalization.
//!
//! Turns a relative key expression such as `a/./b/../c` into a canonical full
//! key anchored at a map location.

use crate::constants::{CURRENT_SEGMENT, PARENT_SEGMENT, SEPARATOR};

use super::PathError;

/// Returns `true` if `path` is a valid location or full key.
///
/// Valid paths are either empty (the root) or start with the separator and do
/// not end with it.
pub(crate) fn is_well_formed(path: &str) -> bool {
    path.is_empty() || (path.starts_with(SEPARATOR) && !path.ends_with(SEPARATOR))
}

/// Validates a map location.
///
/// # Errors
/// Returns [`PathError::InvalidLocation`] if the location is non-empty and
/// either does not start with the separator or ends with one.
pub fn check_location(location: &str) -> Result<(), PathError> {
    if is_well_formed(location) {
        return Ok(());
    }

    tracing::error!(location, "Encountered malformed map location");
    Err(PathError::InvalidLocation {
        location: location.to_string(),
        reason: format!("locations must start with '{SEPARATOR}' and must not end with it"),
    })
}

/// Normalizes `key` relative to `location` into a full key.
///
/// Empty segments are skipped, `.` is dropped and `..` removes the most recent
/// segment of `key`. A `..` with nothing left to remove is ignored, so a key
/// can never climb above `location`.
///
/// # Examples
///
/// ```rust
/// # use ctxmap::path::normalize;
/// assert_eq!(normalize("", "a/./b/../c")?, "/a/c");
/// assert_eq!(normalize("", "../a")?, "/a");
/// assert_eq!(normalize("/solver", "//max_iter/")?, "/solver/max_iter");
/// assert_eq!(normalize("/solver", "..")?, "/solver");
/// # Ok::<(), ctxmap::path::PathError>(())
/// ```
///
/// # Errors
/// Returns an internal [`PathError`] if `location` is malformed or the result
/// violates the path key invariant.
pub fn normalize(location: &str, key: &str) -> Result<String, PathError> {
    check_location(location)?;

    let mut segments: Vec<&str> = Vec::new();
    for segment in key.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match segment {
            CURRENT_SEGMENT => {}
            PARENT_SEGMENT => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut result = String::with_capacity(
        location.len() + segments.iter().map(|s| s.len() + 1).sum::<usize>(),
    );
    result.push_str(location);
    for segment in &segments {
        result.push(SEPARATOR);
        result.push_str(segment);
    }

    if !is_well_formed(&result) {
        tracing::error!(location, key, result = %result, "Normalization produced a malformed key");
        return Err(PathError::MalformedResult {
            location: location.to_string(),
            key: key.to_string(),
            result,
        });
    }

    tracing::trace!(location, key, full_key = %result, "Normalized key");
    Ok(result)
}

/// Strips `prefix` and the separator following it from `full_key`.
///
/// `full_key` is expected to lie in the subtree of `prefix`. The prefix entry
/// itself maps to the empty string.
///
/// ```rust
/// # use ctxmap::path::relative_key;
/// assert_eq!(relative_key("/a", "/a"), "");
/// assert_eq!(relative_key("/a", "/a/x/y"), "x/y");
/// assert_eq!(relative_key("", "/a"), "a");
/// ```
pub fn relative_key<'k>(prefix: &str, full_key: &'k str) -> &'k str {
    let rest = full_key.strip_prefix(prefix).unwrap_or(full_key);
    rest.strip_prefix(SEPARATOR).unwrap_or(rest)
}

/// Appends a relative key taken from a stored entry to a full key.
///
/// Stored keys are canonical, so the relative key needs no further
/// normalization. An empty relative key maps onto `base` itself.
pub(crate) fn join_relative(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    let mut joined = String::with_capacity(base.len() + relative.len() + 1);
    joined.push_str(base);
    joined.push(SEPARATOR);
    joined.push_str(relative);
    joined
}
