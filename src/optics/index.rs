//! Index optics for positional and keyed access.
//!
//! [`Index`] gives an [`Optional`] focusing on the element at an index or key.
//! A missing index is ordinary focus absence: `get_option` returns `None` and
//! `set` hands the container back unchanged. `Index` never inserts; use
//! [`At`](super::At) for that.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Index, Optional};
//!
//! let second = Vec::<i32>::index(1);
//!
//! assert_eq!(second.get_option(&vec![1, 2, 3]), Some(2));
//! assert_eq!(second.set(vec![1, 2, 3], 20), vec![1, 20, 3]);
//!
//! assert_eq!(second.get_option(&vec![1]), None);
//! assert_eq!(second.set(vec![1], 20), vec![1]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::optional::Optional;

/// A trait for containers whose elements can be focused by index.
pub trait Index<I>: Sized {
    /// The element type.
    type Element;

    /// The Optional type returned by [`Index::index`].
    type IndexOptional: Optional<Self, Self::Element>;

    /// Returns an Optional focusing on the element at `index`.
    fn index(index: I) -> Self::IndexOptional;
}

/// Returns the [`Index`] optional of `T` at `index`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use optica::optics::{index, Optional};
///
/// let scores = BTreeMap::from([("alice", 3), ("bob", 5)]);
/// let bob = index::<BTreeMap<&str, i32>, _>("bob");
///
/// assert_eq!(bob.modify(scores, |score| score + 1)[&"bob"], 6);
/// ```
#[must_use]
pub fn index<T: Index<I>, I>(index: I) -> T::IndexOptional {
    T::index(index)
}

keyed_optic! {
    /// An Optional focusing on one position of a `Vec`.
    VecIndex<T> { index: usize }
}

impl<T: Clone> Optional<Vec<T>, T> for VecIndex<T> {
    fn get_option(&self, source: &Vec<T>) -> Option<T> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }
}

impl<T: Clone> Index<usize> for Vec<T> {
    type Element = T;
    type IndexOptional = VecIndex<T>;

    fn index(index: usize) -> Self::IndexOptional {
        VecIndex::new(index)
    }
}

/// An Optional focusing on the `char` at a character position of a `String`.
#[derive(Debug, Clone, Copy)]
pub struct StringIndex {
    index: usize,
}

impl StringIndex {
    /// Creates an Optional focusing on character position `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Optional<String, char> for StringIndex {
    fn get_option(&self, source: &String) -> Option<char> {
        source.chars().nth(self.index)
    }

    fn set(&self, source: String, value: char) -> String {
        if self.index >= source.chars().count() {
            return source;
        }
        source
            .chars()
            .enumerate()
            .map(|(position, character)| if position == self.index { value } else { character })
            .collect()
    }
}

impl Index<usize> for String {
    type Element = char;
    type IndexOptional = StringIndex;

    fn index(index: usize) -> Self::IndexOptional {
        StringIndex::new(index)
    }
}

keyed_optic! {
    /// An Optional focusing on the value stored under a key of a `BTreeMap`.
    BTreeMapIndex<K, V> { key: K }
}

impl<K: Ord, V: Clone> Optional<BTreeMap<K, V>, V> for BTreeMapIndex<K, V> {
    fn get_option(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: V) -> BTreeMap<K, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }
}

impl<K: Ord, V: Clone> Index<K> for BTreeMap<K, V> {
    type Element = V;
    type IndexOptional = BTreeMapIndex<K, V>;

    fn index(key: K) -> Self::IndexOptional {
        BTreeMapIndex::new(key)
    }
}

keyed_optic! {
    /// An Optional focusing on the value stored under a key of a `HashMap`.
    HashMapIndex<K, V, H> { key: K }
}

impl<K, V, H> Optional<HashMap<K, V, H>, V> for HashMapIndex<K, V, H>
where
    K: Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    fn get_option(&self, source: &HashMap<K, V, H>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V, H>, value: V) -> HashMap<K, V, H> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }
}

impl<K, V, H> Index<K> for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    type Element = V;
    type IndexOptional = HashMapIndex<K, V, H>;

    fn index(key: K) -> Self::IndexOptional {
        HashMapIndex::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(10))]
    #[case(2, Some(30))]
    #[case(3, None)]
    fn vec_index_get_option(#[case] position: usize, #[case] expected: Option<i32>) {
        assert_eq!(Vec::<i32>::index(position).get_option(&vec![10, 20, 30]), expected);
    }

    #[test]
    fn vec_index_set_out_of_range_is_noop() {
        let index = Vec::<i32>::index(5);
        assert_eq!(index.set(vec![1, 2], 9), vec![1, 2]);
        assert_eq!(index.modify(vec![1, 2], |x| x + 1), vec![1, 2]);
    }

    #[test]
    fn string_index_uses_char_positions() {
        let index = String::index(1);
        assert_eq!(index.get_option(&"día".to_string()), Some('í'));
        assert_eq!(index.set("día".to_string(), 'i'), "dia");
        assert_eq!(String::index(3).set("día".to_string(), 'x'), "día");
    }

    #[test]
    fn btreemap_index_does_not_insert() {
        let map = BTreeMap::from([("a", 1)]);
        let missing = BTreeMap::<&str, i32>::index("b");
        assert_eq!(missing.get_option(&map), None);
        assert_eq!(missing.set(map.clone(), 2), map);
        assert_eq!(BTreeMap::<&str, i32>::index("a").set(map, 7), BTreeMap::from([("a", 7)]));
    }

    #[test]
    fn hashmap_index_updates_existing_key() {
        let map: HashMap<String, i32> = HashMap::from([("x".to_string(), 1)]);
        let x = HashMap::<String, i32>::index("x".to_string());
        assert_eq!(x.modify(map, |value| value * 5).get("x"), Some(&5));
    }

    #[test]
    fn debug_shows_the_index() {
        assert_eq!(format!("{:?}", Vec::<u8>::index(4)), "VecIndex { index: 4 }");
    }
}
