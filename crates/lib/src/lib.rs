//!
//! ctxmap: a hierarchical map keyed by filesystem-like paths.
//!
//! All data lives in one flat ordered container whose keys are paths such as
//! `/solver/max_iter`. The container can be used as a whole through the root
//! map, or through views anchored at any subpath which behave like maps of
//! their own while sharing the same storage.
//!
//! ## Core Concepts
//!
//! * **Paths (`path`)**: Keys are normalized (`.`, `..` and redundant separators
//!   are collapsed) relative to the location of the map they are used with. The
//!   key ordering sorts the separator first, so every subtree is one contiguous
//!   range of the container.
//! * **Maps and views (`map::CtxMap`)**: The root map owns a fresh container; views
//!   share it. Clearing a view only removes the view's subtree. Cloning the root
//!   deep-copies everything, cloning a view extracts its subtree into a new root.
//! * **Values (`value::Value`)**: The default dynamically typed payload with typed
//!   access through `TryFrom<&Value>`.
//!
//! ```rust
//! use ctxmap::CtxMap;
//!
//! let mut params = CtxMap::new();
//! params.update_entries([("solver/max_iter", 100), ("solver/tol", 1)])?;
//!
//! let mut solver = params.view("solver")?;
//! solver.insert("method", "cg")?;
//!
//! assert_eq!(params.at::<String>("solver/method")?, "cg");
//! assert_eq!(solver.keys(), vec!["max_iter", "method", "tol"]);
//! # Ok::<(), ctxmap::Error>(())
//! ```

pub mod constants;
pub mod map;
pub mod path;
pub mod value;

pub use map::CtxMap;
pub use value::Value;

/// Result type used throughout the ctxmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ctxmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured map errors from the map module
    #[error(transparent)]
    Map(map::MapError),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Map(_) => "map",
            Error::Value(_) => "value",
        }
    }

    /// Check if this error signals a broken internal invariant.
    ///
    /// These errors point at a bug in the calling code, not at bad input.
    pub fn is_internal_error(&self) -> bool {
        match self {
            Error::Path(path_err) => path_err.is_internal(),
            _ => false,
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch on value access.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a borrow conflict on shared storage.
    pub fn is_storage_busy(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_storage_busy(),
            _ => false,
        }
    }
}
