//! Error types for map operations.
//!
//! Path problems are reported through [`PathError`](crate::path::PathError)
//! and type problems through [`ValueError`](crate::value::ValueError); this
//! module covers lookups and access to the shared storage.

use thiserror::Error;

/// Structured error types for map operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No entry is stored under the requested key
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// The shared storage is borrowed in a way that conflicts with the operation
    #[error("Storage of map at '{location}' is already borrowed")]
    StorageBusy { location: String },
}

impl MapError {
    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapError::KeyNotFound { .. })
    }

    /// Check if this error is a borrow conflict on the shared storage
    pub fn is_storage_busy(&self) -> bool {
        matches!(self, MapError::StorageBusy { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
