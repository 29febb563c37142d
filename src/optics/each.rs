//! Each combinator for element-wise traversal of containers.
//!
//! This module provides the [`Each`] trait and implementations for common
//! container types, enabling element-wise traversal operations.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Each, Traversal};
//!
//! let traversal = Vec::<i32>::each();
//!
//! assert_eq!(traversal.get_all(vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
//! assert_eq!(traversal.modify(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
//! ```
//!
//! # Standard Library Types
//!
//! - [`Vec<T>`]: every element, front to back
//! - [`String`]: every `char`
//! - [`BTreeMap<K, V>`]: every value, in key order
//! - [`HashMap<K, V>`]: every value, in the map's iteration order
//! - [`Option<T>`]: the contained value, if present
//! - [`Result<T, E>`]: the `Ok` value
//! - [`Either<L, R>`]: the `Right` value

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::traversal::Traversal;
use crate::control::Either;
use crate::typeclass::Applicative;

/// A trait for types that support element-wise traversal.
///
/// Types implementing this trait can provide a Traversal that focuses on
/// all of their elements.
pub trait Each: Sized {
    /// The element type.
    type Element;

    /// The traversal type for this container.
    type EachTraversal: Traversal<Self, Self::Element>;

    /// Returns a Traversal that focuses on all elements.
    fn each() -> Self::EachTraversal;
}

/// Returns the [`Each`] traversal of `T`.
///
/// # Example
///
/// ```
/// use optica::optics::{each, Traversal};
///
/// assert_eq!(each::<Option<i32>>().get_all(Some(3)), vec![3]);
/// ```
#[must_use]
pub fn each<T: Each>() -> T::EachTraversal {
    T::each()
}

stateless_optic! {
    /// A Traversal for `Vec<T>`.
    VecEach<T>
}

impl<T> Traversal<Vec<T>, T> for VecEach<T> {
    fn traverse<F, Function>(&self, source: Vec<T>, mut function: Function) -> F::WithType<Vec<T>>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        let capacity = source.len();
        source
            .into_iter()
            .fold(F::pure(Vec::with_capacity(capacity)), |accumulator, element| {
                F::map2(accumulator, function(element), |mut elements, element| {
                    elements.push(element);
                    elements
                })
            })
    }
}

impl<T> Each for Vec<T> {
    type Element = T;
    type EachTraversal = VecEach<T>;

    fn each() -> Self::EachTraversal {
        VecEach::new()
    }
}

/// A Traversal over the characters of a `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringEach;

impl Traversal<String, char> for StringEach {
    fn traverse<F, Function>(&self, source: String, mut function: Function) -> F::WithType<String>
    where
        F: Applicative,
        Function: FnMut(char) -> F::WithType<char>,
    {
        source
            .chars()
            .fold(F::pure(String::with_capacity(source.len())), |accumulator, character| {
                F::map2(accumulator, function(character), |mut text, character| {
                    text.push(character);
                    text
                })
            })
    }
}

impl Each for String {
    type Element = char;
    type EachTraversal = StringEach;

    fn each() -> Self::EachTraversal {
        StringEach
    }
}

stateless_optic! {
    /// A Traversal over the values of a `BTreeMap`, in key order.
    BTreeMapEach<K, V>
}

impl<K: Ord, V> Traversal<BTreeMap<K, V>, V> for BTreeMapEach<K, V> {
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
                F::map2(accumulator, function(value), move |mut map, value| {
                    map.insert(key, value);
                    map
                })
            })
    }
}

impl<K: Ord, V> Each for BTreeMap<K, V> {
    type Element = V;
    type EachTraversal = BTreeMapEach<K, V>;

    fn each() -> Self::EachTraversal {
        BTreeMapEach::new()
    }
}

stateless_optic! {
    /// A Traversal over the values of a `HashMap`.
    ///
    /// The visiting order is the map's iteration order, which is unspecified
    /// but fixed for a given map.
    HashMapEach<K, V, H>
}

impl<K, V, H> Traversal<HashMap<K, V, H>, V> for HashMapEach<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
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
                F::map2(accumulator, function(value), move |mut map, value| {
                    map.insert(key, value);
                    map
                })
            },
        )
    }
}

impl<K, V, H> Each for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    type Element = V;
    type EachTraversal = HashMapEach<K, V, H>;

    fn each() -> Self::EachTraversal {
        HashMapEach::new()
    }
}

stateless_optic! {
    /// A Traversal for `Option<T>`.
    ///
    /// This traversal focuses on the contained value, if present.
    OptionEach<T>
}

impl<T> Traversal<Option<T>, T> for OptionEach<T> {
    fn traverse<F, Function>(
        &self,
        source: Option<T>,
        mut function: Function,
    ) -> F::WithType<Option<T>>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        match source {
            Some(value) => F::fmap(function(value), Some),
            None => F::pure(None),
        }
    }
}

impl<T> Each for Option<T> {
    type Element = T;
    type EachTraversal = OptionEach<T>;

    fn each() -> Self::EachTraversal {
        OptionEach::new()
    }
}

stateless_optic! {
    /// A Traversal for `Result<T, E>`.
    ///
    /// This traversal focuses on the Ok value, if present.
    ResultEach<T, E>
}

impl<T, E> Traversal<Result<T, E>, T> for ResultEach<T, E> {
    fn traverse<F, Function>(
        &self,
        source: Result<T, E>,
        mut function: Function,
    ) -> F::WithType<Result<T, E>>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        match source {
            Ok(value) => F::fmap(function(value), Ok),
            Err(error) => F::pure(Err(error)),
        }
    }
}

impl<T, E> Each for Result<T, E> {
    type Element = T;
    type EachTraversal = ResultEach<T, E>;

    fn each() -> Self::EachTraversal {
        ResultEach::new()
    }
}

stateless_optic! {
    /// A Traversal for `Either<L, R>`, focusing on the `Right` value.
    EitherEach<L, R>
}

impl<L, R> Traversal<Either<L, R>, R> for EitherEach<L, R> {
    fn traverse<F, Function>(
        &self,
        source: Either<L, R>,
        mut function: Function,
    ) -> F::WithType<Either<L, R>>
    where
        F: Applicative,
        Function: FnMut(R) -> F::WithType<R>,
    {
        match source {
            Either::Right(value) => F::fmap(function(value), Either::Right),
            Either::Left(value) => F::pure(Either::Left(value)),
        }
    }
}

impl<L, R> Each for Either<L, R> {
    type Element = R;
    type EachTraversal = EitherEach<L, R>;

    fn each() -> Self::EachTraversal {
        EitherEach::new()
    }
}
