//! The path-keyed map and its views.
//!
//! A [`CtxMap`] is a pair of a location and a handle to a shared, ordered
//! container. The root map has the empty location and sees every entry. A
//! view created with [`CtxMap::view`] shares the same container but is
//! anchored at a subpath, so `/solver/max_iter` in the root is `max_iter` in
//! the view at `/solver`. Writes through any of them are visible through all
//! of them immediately.
//!
//! # Copy semantics
//!
//! Cloning is asymmetric:
//!
//! - cloning the root deep-copies the whole container and keeps every full key
//! - cloning a view extracts its subtree into a fresh root, rebasing every key
//!   onto the view's location
//!
//! ```rust
//! use ctxmap::CtxMap;
//!
//! let mut root = CtxMap::new();
//! root.update_entries([("/a", 1), ("/a/x", 3), ("/b", 2)])?;
//!
//! let view = root.view("a")?;
//! assert_eq!(view.keys(), vec!["", "x"]);
//!
//! let extracted = view.clone();
//! assert!(extracted.is_root());
//! assert!(!extracted.shares_storage_with(&root));
//! assert_eq!(extracted.at::<i64>("x")?, 3);
//! # Ok::<(), ctxmap::Error>(())
//! ```

pub mod errors;
mod iter;

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::BTreeMap,
    fmt,
    rc::Rc,
};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

pub use errors::MapError;
pub use iter::{Entries, Entry, Iter};

use crate::{
    Result,
    constants::DUMP_SEPARATOR,
    path::{PathKey, join_relative, normalize, relative_key, subtree_keys, subtree_range},
    value::{Value, ValueError},
};

/// The ordered container shared by a root map and its views.
pub(crate) type Container<V> = BTreeMap<PathKey, V>;

/// A hierarchical map keyed by filesystem-like paths.
///
/// See the [module documentation](self) for the relation between the root
/// map and its views.
pub struct CtxMap<V = Value> {
    /// Full key this map is anchored at; empty for the root.
    location: String,
    container: Rc<RefCell<Container<V>>>,
}

impl CtxMap<Value> {
    /// Creates an empty root map with its own container.
    ///
    /// Maps over other value types are created with [`Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root map from `(key, value)` pairs.
    pub fn from_entries<I, K, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Into<Value>,
    {
        let mut map = Self::new();
        map.update_entries(entries)?;
        Ok(map)
    }
}

impl<V> CtxMap<V> {
    /// The full key this map is anchored at. Empty for the root.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns `true` if this map is the root of its container.
    pub fn is_root(&self) -> bool {
        self.location.is_empty()
    }

    /// Returns `true` if both maps operate on the same container.
    pub fn shares_storage_with(&self, other: &CtxMap<V>) -> bool {
        Rc::ptr_eq(&self.container, &other.container)
    }

    /// Returns a view anchored at `path`, relative to this map.
    ///
    /// The view shares the container. `path` does not need to exist.
    pub fn view(&self, path: &str) -> Result<Self> {
        Ok(Self {
            location: self.full_key(path)?,
            container: Rc::clone(&self.container),
        })
    }

    /// Normalizes `key` relative to this map's location.
    pub fn full_key(&self, key: &str) -> Result<String> {
        Ok(normalize(&self.location, key)?)
    }

    /// Borrows the container for reading.
    ///
    /// Mutable borrows never outlive a single method call, so this cannot
    /// conflict.
    fn storage(&self) -> Ref<'_, Container<V>> {
        self.container.borrow()
    }

    fn storage_mut(&self) -> Result<RefMut<'_, Container<V>>> {
        self.container.try_borrow_mut().map_err(|_| {
            MapError::StorageBusy {
                location: self.location.clone(),
            }
            .into()
        })
    }

    /// Returns the entries of this map, keyed relative to its location.
    pub fn entries(&self) -> Entries<'_, V> {
        Entries::new(self.storage(), self.location.clone())
    }

    /// Returns the entries below `path`, keyed relative to `path`.
    pub fn entries_at(&self, path: &str) -> Result<Entries<'_, V>> {
        let prefix = self.full_key(path)?;
        Ok(Entries::new(self.storage(), prefix))
    }

    /// Number of entries visible through this map.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if no entries are visible through this map.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Snapshot of the relative keys visible through this map, in order.
    pub fn keys(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry.key().to_string())
            .collect()
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn exists(&self, key: &str) -> Result<bool> {
        let full_key = PathKey::new(self.full_key(key)?);
        Ok(self.storage().contains_key(&full_key))
    }

    /// Borrows the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`MapError::KeyNotFound`] if there is no such entry.
    pub fn value_raw(&self, key: &str) -> Result<Ref<'_, V>> {
        let full_key = PathKey::new(self.full_key(key)?);
        Ref::filter_map(self.storage(), |container| container.get(&full_key)).map_err(|_| {
            MapError::KeyNotFound {
                key: full_key.into_string(),
            }
            .into()
        })
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: &str, value: impl Into<V>) -> Result<Option<V>> {
        let full_key = PathKey::new(self.full_key(key)?);
        Ok(self.storage_mut()?.insert(full_key, value.into()))
    }

    /// Stores `value` under `key` unless an entry already exists.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_default(&mut self, key: &str, value: impl Into<V>) -> Result<bool> {
        let full_key = PathKey::new(self.full_key(key)?);
        let mut storage = self.storage_mut()?;
        if storage.contains_key(&full_key) {
            return Ok(false);
        }
        storage.insert(full_key, value.into());
        Ok(true)
    }

    /// Removes the single entry stored under `key` and returns its value.
    ///
    /// Entries below `key` are left alone; use [`view`](Self::view) and
    /// [`clear`](Self::clear) to drop a whole subtree.
    pub fn erase(&mut self, key: &str) -> Result<Option<V>> {
        let full_key = PathKey::new(self.full_key(key)?);
        Ok(self.storage_mut()?.remove(&full_key))
    }

    /// Assigns each `(key, value)` pair, overwriting existing entries.
    ///
    /// Keys are normalized relative to this map's location. Either all keys
    /// are valid and every pair is stored, or nothing is written.
    pub fn update_entries<I, K, T>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Into<V>,
    {
        let resolved = entries
            .into_iter()
            .map(|(key, value)| -> Result<(PathKey, V)> {
                Ok((PathKey::new(self.full_key(key.as_ref())?), value.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut storage = self.storage_mut()?;
        for (full_key, value) in resolved {
            storage.insert(full_key, value);
        }
        Ok(())
    }

    /// Removes every entry visible through this map.
    ///
    /// On the root this empties the whole container. On a view only the
    /// view's subtree is removed; entries outside it are kept.
    pub fn clear(&mut self) -> Result<()> {
        let mut storage = self.storage_mut()?;
        if self.is_root() {
            let removed = storage.len();
            storage.clear();
            debug!(removed, "Cleared root map");
            return Ok(());
        }

        let keys = subtree_keys(&*storage, &self.location);
        for key in &keys {
            storage.remove(key);
        }
        debug!(location = %self.location, removed = keys.len(), "Cleared view");
        Ok(())
    }
}

impl<V: Clone> CtxMap<V> {
    /// Returns a copy of the value stored under `key`.
    pub fn get_cloned(&self, key: &str) -> Result<V> {
        Ok(V::clone(&*self.value_raw(key)?))
    }

    /// Extracts the subtree at `path` into a new, independent root map.
    ///
    /// Keys are rebased onto `path`: the entry at `path` itself ends up under
    /// the empty key of the new map.
    pub fn submap(&self, path: &str) -> Result<Self> {
        Ok(self.view(path)?.clone())
    }

    /// Merges all entries of `other` into this map below `key`.
    ///
    /// Each entry of `other` is stored at `key/<relative key in other>`.
    /// Colliding entries are overwritten, all others are kept.
    pub fn update(&mut self, key: &str, other: &CtxMap<V>) -> Result<()> {
        let target = self.full_key(key)?;

        if self.shares_storage_with(other) {
            // Source and target live in the same RefCell: snapshot first.
            let snapshot: Vec<(PathKey, V)> = other
                .entries()
                .iter()
                .map(|entry| {
                    (
                        PathKey::new(join_relative(&target, entry.key())),
                        entry.value().clone(),
                    )
                })
                .collect();
            let merged = snapshot.len();
            self.storage_mut()?.extend(snapshot);
            debug!(destination = %target, merged, "Merged map sharing storage");
            return Ok(());
        }

        let source = other.storage();
        let mut storage = self.storage_mut()?;
        let mut merged = 0usize;
        for (full_key, value) in subtree_range(&*source, &other.location) {
            let key = join_relative(&target, relative_key(&other.location, full_key.as_str()));
            storage.insert(PathKey::new(key), value.clone());
            merged += 1;
        }
        debug!(destination = %target, merged, "Merged map");
        Ok(())
    }

    /// Merges all entries of `other` into this map below `key`, consuming
    /// `other`.
    ///
    /// Values are moved when `other` holds the last handle to its container
    /// and copied otherwise.
    pub fn update_owned(&mut self, key: &str, other: CtxMap<V>) -> Result<()> {
        let CtxMap {
            location,
            container,
        } = other;

        let mut source = match Rc::try_unwrap(container) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => {
                let other = CtxMap {
                    location,
                    container: shared,
                };
                return self.update(key, &other);
            }
        };

        let target = self.full_key(key)?;
        let mut storage = self.storage_mut()?;
        let keys = subtree_keys(&source, &location);
        let merged = keys.len();
        for full_key in keys {
            if let Some(value) = source.remove(&full_key) {
                let key = join_relative(&target, relative_key(&location, full_key.as_str()));
                storage.insert(PathKey::new(key), value);
            }
        }
        debug!(destination = %target, merged, "Moved entries into map");
        Ok(())
    }

    /// Merges all entries of `other` into this map at its own location.
    pub fn merge(&mut self, other: &CtxMap<V>) -> Result<()> {
        self.update("", other)
    }
}

impl CtxMap<Value> {
    /// Returns the value under `key` converted to `T`.
    ///
    /// # Errors
    /// Returns [`MapError::KeyNotFound`] if there is no such entry and
    /// [`ValueError::TypeMismatch`] if the stored value is not a `T`.
    pub fn at<T>(&self, key: &str) -> Result<T>
    where
        T: for<'v> TryFrom<&'v Value, Error = ValueError>,
    {
        let value = self.value_raw(key)?;
        Ok(T::try_from(&*value)?)
    }

    /// Like [`at`](Self::at), but returns `default` if there is no entry
    /// under `key`. A stored value of the wrong type is still an error.
    pub fn at_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: for<'v> TryFrom<&'v Value, Error = ValueError>,
    {
        if !self.exists(key)? {
            return Ok(default);
        }
        self.at(key)
    }

    /// Returns the type name of the value stored under `key`.
    pub fn type_name_of(&self, key: &str) -> Result<&'static str> {
        Ok(self.value_raw(key)?.type_name())
    }
}

impl<V> Default for CtxMap<V> {
    fn default() -> Self {
        Self {
            location: String::new(),
            container: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }
}

impl<V: Clone> Clone for CtxMap<V> {
    /// Copies the map.
    ///
    /// The root is deep-copied with all full keys preserved. A view is
    /// extracted into a fresh root with its keys rebased onto the view's
    /// location.
    fn clone(&self) -> Self {
        let storage = self.storage();
        let container: Container<V> = if self.is_root() {
            (*storage).clone()
        } else {
            subtree_range(&*storage, &self.location)
                .map(|(full_key, value)| {
                    let key = join_relative("", relative_key(&self.location, full_key.as_str()));
                    (PathKey::new(key), value.clone())
                })
                .collect()
        };
        drop(storage);
        debug!(
            location = %self.location,
            entries = container.len(),
            "Copied map into new container"
        );

        Self {
            location: String::new(),
            container: Rc::new(RefCell::new(container)),
        }
    }
}

impl<V: fmt::Display> fmt::Display for CtxMap<V> {
    /// Dumps one `key  :  value` line per entry, keys padded to the widest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        let width = entries
            .iter()
            .map(|entry| entry.key().chars().count())
            .max()
            .unwrap_or(0);

        for entry in &entries {
            writeln!(
                f,
                "{:<width$}{DUMP_SEPARATOR}{}",
                entry.key(),
                entry.value()
            )?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for CtxMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtxMap")
            .field("location", &self.location)
            .field("entries", &self.entries())
            .finish()
    }
}

impl<V: Serialize> Serialize for CtxMap<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();
        let mut map = serializer.serialize_map(None)?;
        for entry in &entries {
            map.serialize_entry(entry.key(), entry.value())?;
        }
        map.end()
    }
}
