//! Traversals over the elements whose index satisfies a predicate.
//!
//! [`FilterIndex::filter_index`] is the many-focus counterpart of
//! [`Index`](super::Index): instead of one index it takes a predicate on
//! indices (positions for sequences, keys for maps) and focuses every element
//! whose index passes. Elements are visited in the container's traversal
//! order, and elements that are filtered out are left in place.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{FilterIndex, Traversal};
//!
//! let even_positions = Vec::<char>::filter_index(|index: &usize| index % 2 == 0);
//!
//! assert_eq!(even_positions.get_all(vec!['a', 'b', 'c', 'd']), vec!['a', 'c']);
//! assert_eq!(
//!     even_positions.modify(vec!['a', 'b', 'c'], |c| c.to_ascii_uppercase()),
//!     vec!['A', 'b', 'C']
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::traversal::Traversal;
use crate::typeclass::Applicative;

/// A trait for containers whose elements can be selected by an index
/// predicate.
pub trait FilterIndex<I>: Sized {
    /// The element type.
    type Element;

    /// The Traversal type returned by [`FilterIndex::filter_index`].
    type FilterTraversal<P>: Traversal<Self, Self::Element>
    where
        P: Fn(&I) -> bool;

    /// Returns a Traversal focusing on every element whose index satisfies
    /// `predicate`.
    fn filter_index<P>(predicate: P) -> Self::FilterTraversal<P>
    where
        P: Fn(&I) -> bool;
}

/// Returns the [`FilterIndex`] traversal of `T` for `predicate`.
#[must_use]
pub fn filter_index<T, I, P>(predicate: P) -> T::FilterTraversal<P>
where
    T: FilterIndex<I>,
    P: Fn(&I) -> bool,
{
    T::filter_index(predicate)
}

keyed_optic! {
    /// A Traversal over the elements of a `Vec` whose position satisfies a
    /// predicate.
    VecFilterIndex<T, P> { predicate: P }
}

impl<T, P> Traversal<Vec<T>, T> for VecFilterIndex<T, P>
where
    P: Fn(&usize) -> bool,
{
    fn traverse<F, Function>(&self, source: Vec<T>, mut function: Function) -> F::WithType<Vec<T>>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        let capacity = source.len();
        source.into_iter().enumerate().fold(
            F::pure(Vec::with_capacity(capacity)),
            |accumulator, (position, element)| {
                let element = if (self.predicate)(&position) {
                    function(element)
                } else {
                    F::pure(element)
                };
                F::map2(accumulator, element, |mut elements, element| {
                    elements.push(element);
                    elements
                })
            },
        )
    }
}

impl<T> FilterIndex<usize> for Vec<T> {
    type Element = T;
    type FilterTraversal<P>
        = VecFilterIndex<T, P>
    where
        P: Fn(&usize) -> bool;

    fn filter_index<P>(predicate: P) -> Self::FilterTraversal<P>
    where
        P: Fn(&usize) -> bool,
    {
        VecFilterIndex::new(predicate)
    }
}

keyed_optic! {
    /// A Traversal over the characters of a `String` whose character position
    /// satisfies a predicate.
    StringFilterIndex<P> { predicate: P }
}

impl<P> Traversal<String, char> for StringFilterIndex<P>
where
    P: Fn(&usize) -> bool,
{
    fn traverse<F, Function>(&self, source: String, mut function: Function) -> F::WithType<String>
    where
        F: Applicative,
        Function: FnMut(char) -> F::WithType<char>,
    {
        source.chars().enumerate().fold(
            F::pure(String::with_capacity(source.len())),
            |accumulator, (position, character)| {
                let character = if (self.predicate)(&position) {
                    function(character)
                } else {
                    F::pure(character)
                };
                F::map2(accumulator, character, |mut text, character| {
                    text.push(character);
                    text
                })
            },
        )
    }
}

impl FilterIndex<usize> for String {
    type Element = char;
    type FilterTraversal<P>
        = StringFilterIndex<P>
    where
        P: Fn(&usize) -> bool;

    fn filter_index<P>(predicate: P) -> Self::FilterTraversal<P>
    where
        P: Fn(&usize) -> bool,
    {
        StringFilterIndex::new(predicate)
    }
}

keyed_optic! {
    /// A Traversal over the values of a `BTreeMap` whose key satisfies a
    /// predicate, in key order.
    BTreeMapFilterIndex<K, V, P> { predicate: P }
}

impl<K, V, P> Traversal<BTreeMap<K, V>, V> for BTreeMapFilterIndex<K, V, P>
where
    K: Ord,
    P: Fn(&K) -> bool,
{
    fn traverse<F, Function>(
        &self,
        source: BTreeMap<K, V>,
        mut function: Function,
    ) -> F::WithType<BTreeMap<K, V>>
    where
        F: Applicative,
        Function: FnMut(V) -> F::WithType<V>,
    {
        source
            .into_iter()
            .fold(F::pure(BTreeMap::new()), |accumulator, (key, value)| {
                let value = if (self.predicate)(&key) {
                    function(value)
                } else {
                    F::pure(value)
                };
                F::map2(accumulator, value, move |mut map, value| {
                    map.insert(key, value);
                    map
                })
            })
    }
}

impl<K: Ord, V> FilterIndex<K> for BTreeMap<K, V> {
    type Element = V;
    type FilterTraversal<P>
        = BTreeMapFilterIndex<K, V, P>
    where
        P: Fn(&K) -> bool;

    fn filter_index<P>(predicate: P) -> Self::FilterTraversal<P>
    where
        P: Fn(&K) -> bool,
    {
        BTreeMapFilterIndex::new(predicate)
    }
}

keyed_optic! {
    /// A Traversal over the values of a `HashMap` whose key satisfies a
    /// predicate, in the map's iteration order.
    HashMapFilterIndex<K, V, H, P> { predicate: P }
}

impl<K, V, H, P> Traversal<HashMap<K, V, H>, V> for HashMapFilterIndex<K, V, H, P>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
    P: Fn(&K) -> bool,
{
    fn traverse<F, Function>(
        &self,
        source: HashMap<K, V, H>,
        mut function: Function,
    ) -> F::WithType<HashMap<K, V, H>>
    where
        F: Applicative,
        Function: FnMut(V) -> F::WithType<V>,
    {
        let capacity = source.len();
        source.into_iter().fold(
            F::pure(HashMap::with_capacity_and_hasher(capacity, H::default())),
            |accumulator, (key, value)| {
                let value = if (self.predicate)(&key) {
                    function(value)
                } else {
                    F::pure(value)
                };
                F::map2(accumulator, value, move |mut map, value| {
                    map.insert(key, value);
                    map
                })
            },
        )
    }
}

impl<K, V, H> FilterIndex<K> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    type Element = V;
    type FilterTraversal<P>
        = HashMapFilterIndex<K, V, H, P>
    where
        P: Fn(&K) -> bool;

    fn filter_index<P>(predicate: P) -> Self::FilterTraversal<P>
    where
        P: Fn(&K) -> bool,
    {
        HashMapFilterIndex::new(predicate)
    }
}
