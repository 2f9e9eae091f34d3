//! Key ordering for path keys.
//!
//! Keys are compared byte by byte, except that the separator sorts before every
//! other byte. With this rule a path and all of its descendants occupy one
//! contiguous run of the ordered container: `/a`, `/a/b` and `/a/b/c` sort
//! next to each other and all of them before `/a_b`.

use std::{cmp::Ordering, fmt};

use crate::constants::{SEPARATOR, SEPARATOR_BYTE};

use super::{PathError, normalize::is_well_formed};

/// Compares two path strings under the separator-first ordering.
///
/// # Examples
///
/// ```rust
/// # use ctxmap::path::compare_paths;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_paths("/a/b", "/a_b"), Ordering::Less);
/// assert_eq!(compare_paths("/a", "/a/b"), Ordering::Less);
/// assert_eq!(compare_paths("/a/b", "/a/b"), Ordering::Equal);
/// ```
pub fn compare_paths(x: &str, y: &str) -> Ordering {
    compare_path_bytes(x.as_bytes(), y.as_bytes())
}

/// Returns `true` if `x` sorts strictly before `y` under [`compare_paths`].
pub fn path_less(x: &str, y: &str) -> bool {
    compare_paths(x, y) == Ordering::Less
}

/// Byte-level form of [`compare_paths`].
///
/// Works on arbitrary byte slices so the range finder can compare against a
/// truncated key without caring about UTF-8 boundaries.
pub(crate) fn compare_path_bytes(x: &[u8], y: &[u8]) -> Ordering {
    for (&lhs, &rhs) in x.iter().zip(y.iter()) {
        match (lhs == SEPARATOR_BYTE, rhs == SEPARATOR_BYTE) {
            (true, true) => continue,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => match lhs.cmp(&rhs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
    x.len().cmp(&y.len())
}

/// A key of the ordered container, ordered by [`compare_paths`].
///
/// `PathKey` does not implement `Borrow<str>`: the ordering of `str` differs
/// from the path ordering, so lookups always go through a `PathKey`.
///
/// Keys are only built from full keys, either by the normalizer or through
/// the checked [`PathKey::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathKey(String);

impl PathKey {
    /// Wraps a key produced by the normalizer.
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a key from a full key such as `/solver/max_iter`.
    ///
    /// # Errors
    /// Returns [`PathError::MalformedKey`] if `key` is non-empty and either
    /// does not start with the separator, ends with one, or contains an empty,
    /// `.` or `..` segment.
    pub fn parse(key: &str) -> Result<Self, PathError> {
        if is_canonical(key) {
            return Ok(Self::new(key));
        }
        Err(PathError::MalformedKey {
            key: key.to_string(),
        })
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Ord for PathKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_paths(&self.0, &other.0)
    }
}

impl PartialOrd for PathKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<str> for PathKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PathKey {
    type Error = PathError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        Self::parse(key)
    }
}

/// A canonical full key has no empty, `.` or `..` segments.
fn is_canonical(key: &str) -> bool {
    is_well_formed(key)
        && key
            .split(SEPARATOR)
            .skip(1)
            .all(|segment| !matches!(segment, "" | "." | ".."))
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
