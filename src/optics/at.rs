//! At optics for inserting and removing by key.
//!
//! [`At`] gives a [`Lens`] onto the presence of a key. For maps the focus is
//! `Option<V>`: setting `Some(value)` inserts or replaces, setting `None`
//! removes. For sets the focus is `bool`: `true` inserts, `false` removes.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use optica::optics::{At, Lens};
//!
//! let key = BTreeMap::<&str, i32>::at("key");
//!
//! let map = key.set(BTreeMap::new(), Some(42));
//! assert_eq!(key.get(&map), Some(42));
//!
//! let map = key.set(map, None);
//! assert!(map.is_empty());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::lens::Lens;

/// A trait for containers that support insertion and removal by key through a
/// lens.
pub trait At<K>: Sized {
    /// The focus type: `Option<V>` for maps, `bool` for sets.
    type Value;

    /// The Lens type returned by [`At::at`].
    type AtLens: Lens<Self, Self::Value>;

    /// Returns a Lens focusing on the presence of `key`.
    fn at(key: K) -> Self::AtLens;
}

/// Returns the [`At`] lens of `T` for `key`.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use optica::optics::{at, Lens};
///
/// let admin = at::<HashSet<&str>, _>("admin");
/// let roles = admin.set(HashSet::new(), true);
///
/// assert!(roles.contains("admin"));
/// assert!(admin.get(&roles));
/// ```
#[must_use]
pub fn at<T: At<K>, K>(key: K) -> T::AtLens {
    T::at(key)
}

keyed_optic! {
    /// A Lens onto the optional value under a key of a `BTreeMap`.
    BTreeMapAt<K, V> { key: K }
}

impl<K: Ord + Clone, V: Clone> Lens<BTreeMap<K, V>, Option<V>> for BTreeMapAt<K, V> {
    fn get(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: Option<V>) -> BTreeMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K: Ord + Clone, V: Clone> At<K> for BTreeMap<K, V> {
    type Value = Option<V>;
    type AtLens = BTreeMapAt<K, V>;

    fn at(key: K) -> Self::AtLens {
        BTreeMapAt::new(key)
    }
}

keyed_optic! {
    /// A Lens onto the optional value under a key of a `HashMap`.
    HashMapAt<K, V, H> { key: K }
}

impl<K, V, H> Lens<HashMap<K, V, H>, Option<V>> for HashMapAt<K, V, H>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher,
{
    fn get(&self, source: &HashMap<K, V, H>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V, H>, value: Option<V>) -> HashMap<K, V, H> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K, V, H> At<K> for HashMap<K, V, H>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher,
{
    type Value = Option<V>;
    type AtLens = HashMapAt<K, V, H>;

    fn at(key: K) -> Self::AtLens {
        HashMapAt::new(key)
    }
}

keyed_optic! {
    /// A Lens onto the membership of an element in a `BTreeSet`.
    BTreeSetAt<K> { key: K }
}

impl<K: Ord + Clone> Lens<BTreeSet<K>, bool> for BTreeSetAt<K> {
    fn get(&self, source: &BTreeSet<K>) -> bool {
        source.contains(&self.key)
    }

    fn set(&self, mut source: BTreeSet<K>, value: bool) -> BTreeSet<K> {
        if value {
            source.insert(self.key.clone());
        } else {
            source.remove(&self.key);
        }
        source
    }
}

impl<K: Ord + Clone> At<K> for BTreeSet<K> {
    type Value = bool;
    type AtLens = BTreeSetAt<K>;

    fn at(key: K) -> Self::AtLens {
        BTreeSetAt::new(key)
    }
}

keyed_optic! {
    /// A Lens onto the membership of an element in a `HashSet`.
    HashSetAt<K, H> { key: K }
}

impl<K, H> Lens<HashSet<K, H>, bool> for HashSetAt<K, H>
where
    K: Eq + Hash + Clone,
    H: BuildHasher,
{
    fn get(&self, source: &HashSet<K, H>) -> bool {
        source.contains(&self.key)
    }

    fn set(&self, mut source: HashSet<K, H>, value: bool) -> HashSet<K, H> {
        if value {
            source.insert(self.key.clone());
        } else {
            source.remove(&self.key);
        }
        source
    }
}

impl<K, H> At<K> for HashSet<K, H>
where
    K: Eq + Hash + Clone,
    H: BuildHasher,
{
    type Value = bool;
    type AtLens = HashSetAt<K, H>;

    fn at(key: K) -> Self::AtLens {
        HashSetAt::new(key)
    }
}
