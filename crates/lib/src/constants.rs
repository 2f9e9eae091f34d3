//! Constants used throughout the ctxmap library.
//!
//! This module provides central definitions for the path syntax and the
//! textual dump format.

/// Character separating the segments of a path key.
pub const SEPARATOR: char = '/';

/// Byte form of [`SEPARATOR`], used by the key ordering.
pub const SEPARATOR_BYTE: u8 = b'/';

/// Path segment referring to the current location.
pub const CURRENT_SEGMENT: &str = ".";

/// Path segment referring to the parent of the current location.
pub const PARENT_SEGMENT: &str = "..";

/// Column separator placed between key and value when dumping a map.
pub const DUMP_SEPARATOR: &str = "  :  ";
