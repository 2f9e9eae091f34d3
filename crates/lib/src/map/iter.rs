//! Iteration over the entries of a map or view.
//!
//! The container lives behind a `RefCell`, so iteration happens in two steps:
//! [`CtxMap::entries`](super::CtxMap::entries) hands out an [`Entries`] guard
//! holding the shared borrow, and [`Entries::iter`] walks the subtree lazily,
//! stripping the guard's prefix from every key on the fly.

use std::{cell::Ref, fmt};

use crate::path::{SubtreeRange, relative_key, subtree_range};

use super::Container;

/// A borrowed subtree of a map, ready to be iterated.
///
/// While an `Entries` guard is alive the shared storage cannot be modified;
/// writes through any map sharing the storage fail with
/// [`MapError::StorageBusy`](super::MapError::StorageBusy).
pub struct Entries<'a, V> {
    container: Ref<'a, Container<V>>,
    prefix: String,
}

impl<'a, V> Entries<'a, V> {
    pub(super) fn new(container: Ref<'a, Container<V>>, prefix: String) -> Self {
        Self { container, prefix }
    }

    /// The full key the entry keys are relative to.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns an iterator over the entries of the subtree.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: subtree_range(&*self.container, &self.prefix),
            prefix: &self.prefix,
        }
    }

    /// Number of entries in the subtree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the subtree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'e, V> IntoIterator for &'e Entries<'_, V> {
    type Item = Entry<'e, V>;
    type IntoIter = Iter<'e, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for Entries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key, entry.value)))
            .finish()
    }
}

/// Iterator over the entries of a subtree, yielding relative keys.
#[derive(Debug)]
pub struct Iter<'a, V> {
    inner: SubtreeRange<'a, V>,
    prefix: &'a str,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(full_key, value)| Entry {
            key: relative_key(self.prefix, full_key.as_str()),
            full_key: full_key.as_str(),
            value,
        })
    }
}

/// One entry of a subtree.
#[derive(Debug)]
pub struct Entry<'a, V> {
    key: &'a str,
    full_key: &'a str,
    value: &'a V,
}

impl<'a, V> Entry<'a, V> {
    /// The key relative to the iterated subtree. The subtree root itself has
    /// the empty key.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The full key under which the entry is stored.
    pub fn full_key(&self) -> &'a str {
        self.full_key
    }

    /// The stored value.
    pub fn value(&self) -> &'a V {
        self.value
    }
}

impl<V> Clone for Entry<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Entry<'_, V> {}
