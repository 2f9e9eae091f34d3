//! Path keys: ordering, normalization and subtree ranges.
//!
//! Every entry of a [`CtxMap`](crate::CtxMap) is stored under a full path key
//! such as `/solver/max_iter`. This module provides the three pieces the map
//! is built from:
//!
//! - [`compare_paths`] / [`PathKey`] - the ordering of the container, which
//!   sorts the separator before every other character
//! - [`normalize`] - turns a relative key like `a/../b` into a full key
//!   anchored at a location
//! - [`subtree_range`] - the contiguous run of container entries belonging
//!   to one subtree
//!
//! # Path syntax
//!
//! A full key is either empty (the root) or a sequence of `/segment` parts
//! with non-empty segments. Relative keys may contain `.` and `..` segments
//! and redundant separators; all of these are collapsed by [`normalize`].
//!
//! ```rust
//! use ctxmap::path::{normalize, path_less};
//!
//! assert_eq!(normalize("/a", "b//c/.")?, "/a/b/c");
//! assert!(path_less("/a/b", "/a_b"));
//! # Ok::<(), ctxmap::path::PathError>(())
//! ```

pub mod errors;
mod key;
mod normalize;
mod range;

pub use errors::PathError;
pub use key::{PathKey, compare_paths, path_less};
pub use normalize::{check_location, normalize, relative_key};
pub use range::{SubtreeRange, is_past_subtree, subtree_range};

pub(crate) use normalize::join_relative;
pub(crate) use range::subtree_keys;
