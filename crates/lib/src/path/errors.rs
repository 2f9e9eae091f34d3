//! Error types for path handling.
//!
//! Path normalization accepts any relative key, so its failures are
//! structural: a location or a normalization result that breaks the path key
//! invariant. Both indicate a bug in the calling code rather than bad input.
//! The only input error is a malformed full key passed to `PathKey::parse`.

use thiserror::Error;

/// Structured error types for path operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A map location does not start with the separator or ends with one.
    #[error("Internal error: invalid location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// Normalization produced a key that does not start with the separator or ends with one.
    #[error("Internal error: normalizing '{key}' under '{location}' produced malformed key '{result}'")]
    MalformedResult {
        location: String,
        key: String,
        result: String,
    },

    /// A full key handed to [`PathKey::parse`](super::PathKey::parse) is not canonical.
    #[error("Malformed path key '{key}'")]
    MalformedKey { key: String },
}

impl PathError {
    /// Check if this error signals a broken internal invariant.
    ///
    /// A rejected [`PathKey::parse`](super::PathKey::parse) input is bad
    /// input, not a broken invariant.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PathError::InvalidLocation { .. } | PathError::MalformedResult { .. }
        )
    }

    /// Check if this error is a rejected full key.
    pub fn is_malformed_key(&self) -> bool {
        matches!(self, PathError::MalformedKey { .. })
    }

    /// Get the location or key involved in the failure.
    pub fn location(&self) -> &str {
        match self {
            PathError::InvalidLocation { location, .. }
            | PathError::MalformedResult { location, .. } => location,
            PathError::MalformedKey { key } => key,
        }
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
