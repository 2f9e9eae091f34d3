//! Subtree range lookup over the ordered container.
//!
//! A subtree starts at the lower bound of its root key. It ends at the first
//! key whose leading `len(start) + 1` bytes sort after `start + "/"`, which
//! admits `start` itself and every `start/...` descendant while rejecting
//! siblings like `start_extra` that only share a textual prefix.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, btree_map},
    ops::Bound,
};

use crate::constants::SEPARATOR;

use super::{PathKey, key::compare_path_bytes};

/// Returns `true` if `key` sorts past the subtree rooted at `start`.
///
/// Only meaningful for keys at or after the lower bound of `start`. The root
/// subtree (empty `start`) contains every key.
pub fn is_past_subtree(start: &str, key: &str) -> bool {
    subtree_boundary(start).is_some_and(|boundary| is_past_boundary(&boundary, key))
}

/// The `start + "/"` boundary of a subtree, or `None` for the root.
fn subtree_boundary(start: &str) -> Option<String> {
    if start.is_empty() {
        return None;
    }

    let mut boundary = String::with_capacity(start.len() + 1);
    boundary.push_str(start);
    boundary.push(SEPARATOR);
    Some(boundary)
}

fn is_past_boundary(boundary: &str, key: &str) -> bool {
    let key = key.as_bytes();
    let truncated = &key[..key.len().min(boundary.len())];
    compare_path_bytes(boundary.as_bytes(), truncated) == Ordering::Less
}

/// Lazy iterator over the entries of one subtree of the container.
///
/// Wraps the container's range iterator and stops at the first key outside
/// the subtree.
#[derive(Debug)]
pub struct SubtreeRange<'a, V> {
    inner: btree_map::Range<'a, PathKey, V>,
    /// `start + "/"`; `None` for the root subtree.
    boundary: Option<String>,
    done: bool,
}

impl<V> SubtreeRange<'_, V> {
    fn is_past(&self, key: &PathKey) -> bool {
        self.boundary
            .as_deref()
            .is_some_and(|boundary| is_past_boundary(boundary, key.as_str()))
    }
}

impl<'a, V> Iterator for SubtreeRange<'a, V> {
    type Item = (&'a PathKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some((key, value)) if !self.is_past(key) => Some((key, value)),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Returns the entries of `container` forming the subtree of `start`.
///
/// `start` must be a canonical full key; the empty key selects the whole
/// container.
pub fn subtree_range<'a, V>(
    container: &'a BTreeMap<PathKey, V>,
    start: &str,
) -> SubtreeRange<'a, V> {
    let lower = PathKey::new(start);
    SubtreeRange {
        inner: container.range((Bound::Included(lower), Bound::Unbounded)),
        boundary: subtree_boundary(start),
        done: false,
    }
}

/// Collects the keys of the subtree of `start`, in container order.
pub(crate) fn subtree_keys<V>(container: &BTreeMap<PathKey, V>, start: &str) -> Vec<PathKey> {
    subtree_range(container, start)
        .map(|(key, _)| key.clone())
        .collect()
}
