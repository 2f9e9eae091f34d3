//! Error types for typed value access.

use thiserror::Error;

/// Structured error types for value conversions.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The stored value has a different type than the one requested.
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValueError {
    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
