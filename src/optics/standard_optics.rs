//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for the standard library's
//! products and sums (`Option`, `Result`, [`Either`], pairs) and the trivial
//! optics of each kind.
//!
//! Every constructor returns a value that is `Clone`, and `Send + Sync`
//! whenever its captured values are.

use super::iso::{FunctionIso, Iso};
use super::lens::{FunctionLens, Lens};
use super::optional::{FunctionOptional, Optional};
use super::prism::{FunctionPrism, Prism};
use super::traversal::Traversal;
use crate::control::Either;
use crate::typeclass::Applicative;

/// Creates a Lens whose focus is the whole source.
///
/// It is the unit of lens composition.
///
/// # Example
///
/// ```
/// use optica::optics::{identity_lens, Lens};
///
/// let identity = identity_lens::<i32>();
/// assert_eq!(identity.get(&42), 42);
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub fn identity_lens<S: Clone>() -> impl Lens<S, S> + Clone {
    FunctionLens::new(|source: &S| source.clone(), |_: S, value: S| value)
}

/// Creates a Lens focusing on whichever side of an `Either<S, S>` is present.
///
/// Setting keeps the side.
///
/// # Example
///
/// ```
/// use optica::control::Either;
/// use optica::optics::{codiagonal, Lens};
///
/// let either = codiagonal::<i32>();
/// assert_eq!(either.get(&Either::Left(3)), 3);
/// assert_eq!(either.set(Either::Right(3), 4), Either::Right(4));
/// ```
#[must_use]
pub fn codiagonal<S: Clone>() -> impl Lens<Either<S, S>, S> + Clone {
    FunctionLens::new(
        |source: &Either<S, S>| match source {
            Either::Left(value) | Either::Right(value) => value.clone(),
        },
        |source: Either<S, S>, value: S| match source {
            Either::Left(_) => Either::Left(value),
            Either::Right(_) => Either::Right(value),
        },
    )
}

/// Creates a Lens focusing on the first component of a pair.
#[must_use]
pub fn first_lens<A: Clone, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(
        |(first, _): &(A, B)| first.clone(),
        |(_, second): (A, B), first: A| (first, second),
    )
}

/// Creates a Lens focusing on the second component of a pair.
///
/// # Example
///
/// ```
/// use optica::optics::{second_lens, Lens};
///
/// let second = second_lens::<&str, i32>();
/// assert_eq!(second.modify(("a", 1), |x| x + 1), ("a", 2));
/// ```
#[must_use]
pub fn second_lens<A, B: Clone>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(
        |(_, second): &(A, B)| second.clone(),
        |(first, _): (A, B), second: B| (first, second),
    )
}

/// Creates a Prism focusing on the value of a `Some`.
///
/// # Example
///
/// ```
/// use optica::optics::{some_prism, Prism};
///
/// let some = some_prism::<i32>();
/// assert_eq!(some.preview(Some(1)), Some(1));
/// assert_eq!(some.preview(None), None);
/// assert_eq!(some.reverse_get(2), Some(2));
/// ```
#[must_use]
pub fn some_prism<A>() -> impl Prism<Option<A>, A> + Clone {
    FunctionPrism::new(
        |source: Option<A>| match source {
            Some(value) => Either::Right(value),
            None => Either::Left(None),
        },
        |value: A| Some(value),
    )
}

/// Creates a Prism focusing on the value of an `Ok`.
///
/// # Example
///
/// ```
/// use optica::optics::{ok_prism, Prism};
///
/// let ok = ok_prism::<i32, String>();
/// assert_eq!(ok.modify(Ok(1), |x| x + 1), Ok(2));
/// assert_eq!(ok.modify(Err("e".to_string()), |x| x + 1), Err("e".to_string()));
/// ```
#[must_use]
pub fn ok_prism<T, E>() -> impl Prism<Result<T, E>, T> + Clone {
    FunctionPrism::new(
        |source: Result<T, E>| match source {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(Err(error)),
        },
        |value: T| Ok(value),
    )
}

/// Creates a Prism focusing on the error of an `Err`.
#[must_use]
pub fn err_prism<T, E>() -> impl Prism<Result<T, E>, E> + Clone {
    FunctionPrism::new(
        |source: Result<T, E>| match source {
            Err(error) => Either::Right(error),
            Ok(value) => Either::Left(Ok(value)),
        },
        |error: E| Err(error),
    )
}

/// Creates a Prism focusing on the value of an `Either::Left`.
#[must_use]
pub fn left_prism<L, R>() -> impl Prism<Either<L, R>, L> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(Either::Right(value)),
        },
        |value: L| Either::Left(value),
    )
}

/// Creates a Prism focusing on the value of an `Either::Right`.
#[must_use]
pub fn right_prism<L, R>() -> impl Prism<Either<L, R>, R> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Right(value) => Either::Right(value),
            Either::Left(value) => Either::Left(Either::Left(value)),
        },
        |value: R| Either::Right(value),
    )
}

/// Creates a Prism that matches exactly `value`, with `()` as its focus.
///
/// # Example
///
/// ```
/// use optica::optics::{only, Prism};
///
/// let zero = only(0);
/// assert!(zero.is_match(&0));
/// assert!(!zero.is_match(&1));
/// assert_eq!(zero.reverse_get(()), 0);
/// ```
#[must_use]
pub fn only<A: PartialEq + Clone>(value: A) -> impl Prism<A, ()> + Clone {
    let expected = value.clone();
    FunctionPrism::new(
        move |source: A| {
            if source == expected {
                Either::Right(())
            } else {
                Either::Left(source)
            }
        },
        move |()| value.clone(),
    )
}

/// Creates an Optional that never finds a focus.
///
/// # Example
///
/// ```
/// use optica::optics::{void_optional, Optional};
///
/// let nothing = void_optional::<i32, String>();
/// assert_eq!(nothing.get_option(&1), None);
/// assert_eq!(nothing.set(1, "x".to_string()), 1);
/// ```
#[must_use]
pub fn void_optional<S, A>() -> impl Optional<S, A> + Clone {
    FunctionOptional::new(|_: &S| None, |source: S, _: A| source)
}

/// Creates an Optional that focuses the value itself when it satisfies
/// `predicate`.
///
/// Lawful only when every value set through it also satisfies `predicate`.
///
/// # Example
///
/// ```
/// use optica::optics::{filter_optional, Optional};
///
/// let positive = filter_optional(|x: &i32| *x > 0);
/// assert_eq!(positive.get_option(&5), Some(5));
/// assert_eq!(positive.modify(-5, |x| x * 2), -5);
/// assert_eq!(positive.modify(5, |x| x * 2), 10);
/// ```
#[must_use]
pub fn filter_optional<A, P>(predicate: P) -> impl Optional<A, A> + Clone
where
    A: Clone,
    P: Fn(&A) -> bool + Clone,
{
    let setter_predicate = predicate.clone();
    FunctionOptional::new(
        move |source: &A| predicate(source).then(|| source.clone()),
        move |source: A, value: A| {
            if setter_predicate(&source) {
                value
            } else {
                source
            }
        },
    )
}

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use optica::optics::{identity_iso, Iso};
///
/// let identity = identity_iso::<i32>();
///
/// assert_eq!(identity.get(42), 42);
/// assert_eq!(identity.reverse_get(42), 42);
/// ```
#[must_use]
pub fn identity_iso<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|value: T| value, |value: T| value)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use optica::optics::{swap_iso, Iso};
///
/// let swap = swap_iso::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// let swapped = swap.get(pair.clone());
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap.reverse_get(swapped), pair);
/// ```
#[must_use]
pub fn swap_iso<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

stateless_optic! {
    /// The traversal returned by [`identity_traversal`].
    IdentityTraversal<S>
}

impl<S> Traversal<S, S> for IdentityTraversal<S> {
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(S) -> F::WithType<S>,
    {
        function(source)
    }
}

/// Creates a Traversal with the whole source as its single focus.
#[must_use]
pub const fn identity_traversal<S>() -> impl Traversal<S, S> + Clone {
    IdentityTraversal::new()
}

stateless_optic! {
    /// The traversal returned by [`void_traversal`].
    VoidTraversal<S, A>
}

impl<S, A> Traversal<S, A> for VoidTraversal<S, A> {
    fn traverse<F, Function>(&self, source: S, _function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        F::pure(source)
    }
}

/// Creates a Traversal with no focus. Every operation returns the source
/// unchanged.
///
/// # Example
///
/// ```
/// use optica::optics::{void_traversal, Traversal};
///
/// let nothing = void_traversal::<Vec<i32>, i32>();
/// assert!(nothing.is_empty(vec![1, 2]));
/// assert_eq!(nothing.set(vec![1, 2], 0), vec![1, 2]);
/// ```
#[must_use]
pub const fn void_traversal<S, A>() -> impl Traversal<S, A> + Clone {
    VoidTraversal::new()
}

stateless_optic! {
    /// The traversal returned by [`codiagonal_traversal`].
    CodiagonalTraversal<S>
}

impl<S> Traversal<Either<S, S>, S> for CodiagonalTraversal<S> {
    fn traverse<F, Function>(
        &self,
        source: Either<S, S>,
        mut function: Function,
    ) -> F::WithType<Either<S, S>>
    where
        F: Applicative,
        Function: FnMut(S) -> F::WithType<S>,
    {
        match source {
            Either::Left(value) => F::fmap(function(value), Either::Left),
            Either::Right(value) => F::fmap(function(value), Either::Right),
        }
    }
}

/// Creates a Traversal focusing on whichever side of an `Either<S, S>` is
/// present.
#[must_use]
pub const fn codiagonal_traversal<S>() -> impl Traversal<Either<S, S>, S> + Clone {
    CodiagonalTraversal::new()
}

stateless_optic! {
    /// The traversal returned by [`both`].
    BothTraversal<A>
}

impl<A> Traversal<(A, A), A> for BothTraversal<A> {
    fn traverse<F, Function>(
        &self,
        (first, second): (A, A),
        mut function: Function,
    ) -> F::WithType<(A, A)>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        let first = function(first);
        F::product(first, function(second))
    }
}

/// Creates a Traversal focusing on both components of a homogeneous pair,
/// first then second.
///
/// # Example
///
/// ```
/// use optica::optics::{both, Traversal};
///
/// assert_eq!(both::<i32>().modify((1, 2), |x| x * 10), (10, 20));
/// assert_eq!(both::<i32>().get_all((1, 2)), vec![1, 2]);
/// ```
#[must_use]
pub const fn both<A>() -> impl Traversal<(A, A), A> + Clone {
    BothTraversal::new()
}

/// The traversal returned by [`from_lenses`].
#[derive(Debug, Clone)]
struct LensesTraversal<L1, L2> {
    first: L1,
    second: L2,
}

impl<S, A, L1, L2> Traversal<S, A> for LensesTraversal<L1, L2>
where
    L1: Lens<S, A>,
    L2: Lens<S, A>,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        let first = function(self.first.get(&source));
        let second = function(self.second.get(&source));
        F::map2(first, second, |first, second| {
            self.second.set(self.first.set(source, first), second)
        })
    }
}

/// Creates a Traversal visiting the focus of `first`, then the focus of
/// `second`.
///
/// Lawful only when the two lenses focus on disjoint parts of the source.
///
/// # Example
///
/// ```
/// use optica::optics::{from_lenses, Traversal};
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Range { start: i32, end: i32 }
///
/// let bounds = from_lenses(lens!(Range, start), lens!(Range, end));
/// let shifted = bounds.modify(Range { start: 1, end: 5 }, |x| x + 10);
///
/// assert_eq!(shifted, Range { start: 11, end: 15 });
/// ```
#[must_use]
pub fn from_lenses<S, A, L1, L2>(first: L1, second: L2) -> impl Traversal<S, A> + Clone
where
    L1: Lens<S, A> + Clone,
    L2: Lens<S, A> + Clone,
{
    LensesTraversal { first, second }
}
