//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism selects a single variant of an enum. Matching is total: a source
//! built from another variant is handed back as `Left(source)` by
//! [`Prism::get_or_modify`], and a source built from the focused variant yields
//! `Right(value)`. Because the focused variant can always be rebuilt with
//! [`Prism::reverse_get`], a Prism is stronger than an [`Optional`].
//!
//! | `self` | `other` | result |
//! |---|---|---|
//! | Prism | Prism | [`ComposedPrism`] |
//! | Prism | Iso | [`ComposedPrism`] |
//! | Prism | Lens | [`ComposedOptional`] |
//! | Prism | Optional | [`ComposedOptional`] |
//! | Prism | Traversal | [`ComposedTraversal`] |
//!
//! # Laws
//!
//! 1. **`ReverseGetGet` Law**: Building then matching recovers the value.
//!    ```text
//!    prism.get_or_modify(prism.reverse_get(value)) == Either::Right(value)
//!    ```
//!
//! 2. **`PartialRoundTrip` Law**: A matched value rebuilds its source.
//!    ```text
//!    if let Either::Right(value) = prism.get_or_modify(source.clone()) {
//!        prism.reverse_get(value) == source
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::control::Either;
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape { Circle(f64), Square(f64) }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.get_or_modify(Shape::Circle(1.0)), Either::Right(1.0));
//! assert_eq!(circle.get_or_modify(Shape::Square(2.0)), Either::Left(Shape::Square(2.0)));
//! assert_eq!(circle.reverse_get(3.0), Shape::Circle(3.0));
//! ```

use std::marker::PhantomData;

use super::iso::{Iso, IsoAsPrism};
use super::lens::Lens;
use super::optional::{ComposedOptional, LensAsOptional, Optional, PrismAsOptional};
use super::traversal::{ComposedTraversal, PrismAsTraversal, Traversal};
use crate::control::Either;

/// A Prism focuses on one variant of a sum type.
///
/// # Type Parameters
///
/// - `S`: The sum type
/// - `A`: The value carried by the focused variant
pub trait Prism<S, A> {
    /// Matches the source against the focused variant.
    ///
    /// # Returns
    ///
    /// `Right(value)` if the variant matches, `Left(source)` (unchanged)
    /// otherwise
    fn get_or_modify(&self, source: S) -> Either<S, A>;

    /// Builds the source from a value of the focused variant.
    fn reverse_get(&self, value: A) -> S;

    /// Matches a borrowed source. The source is cloned before matching.
    fn get_option(&self, source: &S) -> Option<A>
    where
        S: Clone,
    {
        self.preview(source.clone())
    }

    /// Matches an owned source, discarding it on a mismatch.
    fn preview(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Applies `function` to the focus if the variant matches, otherwise
    /// returns the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{some_prism, Prism};
    ///
    /// let some = some_prism::<i32>();
    /// assert_eq!(some.modify(Some(2), |n| n + 1), Some(3));
    /// assert_eq!(some.modify(None, |n| n + 1), None);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_or_modify(source) {
            Either::Right(value) => self.reverse_get(function(value)),
            Either::Left(source) => source,
        }
    }

    /// Applies `function` to the focus, returning `None` on a mismatch.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview(source)
            .map(|value| self.reverse_get(function(value)))
    }

    /// Replaces the focus if the variant matches. A mismatching source is
    /// returned unchanged; use [`reverse_get`](Prism::reverse_get) to build a
    /// value of the focused variant unconditionally.
    fn set(&self, source: S, value: A) -> S {
        self.modify(source, |_| value)
    }

    /// Replaces the focus, returning `None` on a mismatch.
    fn set_option(&self, source: S, value: A) -> Option<S> {
        self.modify_option(source, |_| value)
    }

    /// Returns `true` if the source is of the focused variant.
    fn is_match(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.get_option(source).is_some()
    }

    /// Returns `true` if the source is of another variant.
    fn is_empty(&self, source: &S) -> bool
    where
        S: Clone,
    {
        !self.is_match(source)
    }

    /// Returns `true` if the variant matches and the focus satisfies
    /// `predicate`.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        S: Clone,
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_some_and(|value| predicate(&value))
    }

    /// Returns `true` if the variant does not match or the focus satisfies
    /// `predicate`.
    fn all<P>(&self, source: &S, predicate: P) -> bool
    where
        S: Clone,
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_none_or(|value| predicate(&value))
    }

    /// Returns the focus if the variant matches and it satisfies `predicate`.
    fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        S: Clone,
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).filter(|value| predicate(value))
    }

    /// Lifts this prism to the left side of an `Either`:
    /// `Either<S, C>` to `Either<A, C>`. A `Right(c)` always matches.
    fn left(self) -> PrismLeft<Self>
    where
        Self: Sized,
    {
        PrismLeft { prism: self }
    }

    /// Lifts this prism to the right side of an `Either`:
    /// `Either<C, S>` to `Either<C, A>`. A `Left(c)` always matches.
    fn right(self) -> PrismRight<Self>
    where
        Self: Sized,
    {
        PrismRight { prism: self }
    }

    /// Carries an extra component through the prism: `(S, C)` to `(A, C)`.
    fn first(self) -> PrismFirst<Self>
    where
        Self: Sized,
    {
        PrismFirst { prism: self }
    }

    /// Carries an extra component through the prism: `(C, S)` to `(C, A)`.
    fn second(self) -> PrismSecond<Self>
    where
        Self: Sized,
    {
        PrismSecond { prism: self }
    }

    /// Views this prism as an optional.
    fn to_optional(self) -> PrismAsOptional<Self>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Views this prism as a traversal with zero or one focus.
    fn to_traversal(self) -> PrismAsTraversal<Self>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }

    /// Composes this prism with another prism.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{ok_prism, some_prism, Prism};
    ///
    /// let ok_some = ok_prism::<Option<i32>, String>().compose(some_prism::<i32>());
    ///
    /// assert_eq!(ok_some.preview(Ok(Some(1))), Some(1));
    /// assert_eq!(ok_some.preview(Ok(None)), None);
    /// assert_eq!(ok_some.reverse_get(2), Ok(Some(2)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens. The result is an Optional.
    fn compose_lens<B, L>(
        self,
        lens: L,
    ) -> ComposedOptional<PrismAsOptional<Self>, LensAsOptional<L>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), LensAsOptional::new(lens))
    }

    /// Composes this prism with an optional.
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<PrismAsOptional<Self>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), optional)
    }

    /// Composes this prism with an iso, which is still a prism.
    fn compose_iso<B, I>(self, iso: I) -> ComposedPrism<Self, IsoAsPrism<I>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedPrism::new(self, IsoAsPrism::new(iso))
    }

    /// Composes this prism with a traversal.
    fn compose_traversal<B, T>(self, traversal: T) -> ComposedTraversal<PrismAsTraversal<Self>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(PrismAsTraversal::new(self), traversal)
    }
}

/// A prism implemented using a matching function and a constructor.
///
/// The `prism!` macro and `#[derive(Prisms)]` generate a `FunctionPrism`
/// internally.
///
/// # Example
///
/// ```
/// use optica::control::Either;
/// use optica::optics::{FunctionPrism, Prism};
///
/// let positive = FunctionPrism::new(
///     |n: i32| if n > 0 { Either::Right(n.unsigned_abs()) } else { Either::Left(n) },
///     |n: u32| i32::try_from(n).unwrap_or(i32::MAX),
/// );
///
/// assert_eq!(positive.preview(5), Some(5));
/// assert_eq!(positive.preview(-5), None);
/// ```
pub struct FunctionPrism<S, A, G, R>
where
    G: Fn(S) -> Either<S, A>,
    R: Fn(A) -> S,
{
    matcher: G,
    constructor: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, R> FunctionPrism<S, A, G, R>
where
    G: Fn(S) -> Either<S, A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism`.
    ///
    /// # Arguments
    ///
    /// * `matcher` - Returns `Right(value)` for the focused variant and hands
    ///   any other source back as `Left(source)`
    /// * `constructor` - Builds the focused variant from its value
    #[must_use]
    pub const fn new(matcher: G, constructor: R) -> Self {
        Self {
            matcher,
            constructor,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Prism<S, A> for FunctionPrism<S, A, G, R>
where
    G: Fn(S) -> Either<S, A>,
    R: Fn(A) -> S,
{
    fn get_or_modify(&self, source: S) -> Either<S, A> {
        (self.matcher)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.constructor)(value)
    }
}

impl<S, A, G, R> Clone for FunctionPrism<S, A, G, R>
where
    G: Fn(S) -> Either<S, A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            constructor: self.constructor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionPrism<S, A, G, R>
where
    G: Fn(S) -> Either<S, A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The outer prism
/// - `P2`: The inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<S, B> {
        match self.first.get_or_modify(source) {
            Either::Right(intermediate) => self
                .second
                .get_or_modify(intermediate)
                .map_left(|intermediate| self.first.reverse_get(intermediate)),
            Either::Left(source) => Either::Left(source),
        }
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism lifted over the left side of an `Either`.
#[derive(Debug, Clone)]
pub struct PrismLeft<P> {
    prism: P,
}

impl<S, A, C, P> Prism<Either<S, C>, Either<A, C>> for PrismLeft<P>
where
    P: Prism<S, A>,
{
    fn get_or_modify(&self, source: Either<S, C>) -> Either<Either<S, C>, Either<A, C>> {
        match source {
            Either::Left(inner) => self
                .prism
                .get_or_modify(inner)
                .bimap(Either::Left, Either::Left),
            Either::Right(other) => Either::Right(Either::Right(other)),
        }
    }

    fn reverse_get(&self, value: Either<A, C>) -> Either<S, C> {
        value.map_left(|inner| self.prism.reverse_get(inner))
    }
}

/// A prism lifted over the right side of an `Either`.
#[derive(Debug, Clone)]
pub struct PrismRight<P> {
    prism: P,
}

impl<S, A, C, P> Prism<Either<C, S>, Either<C, A>> for PrismRight<P>
where
    P: Prism<S, A>,
{
    fn get_or_modify(&self, source: Either<C, S>) -> Either<Either<C, S>, Either<C, A>> {
        match source {
            Either::Right(inner) => self
                .prism
                .get_or_modify(inner)
                .bimap(Either::Right, Either::Right),
            Either::Left(other) => Either::Right(Either::Left(other)),
        }
    }

    fn reverse_get(&self, value: Either<C, A>) -> Either<C, S> {
        value.map_right(|inner| self.prism.reverse_get(inner))
    }
}

/// A prism over `(S, C)` that passes `C` through.
#[derive(Debug, Clone)]
pub struct PrismFirst<P> {
    prism: P,
}

impl<S, A, C, P> Prism<(S, C), (A, C)> for PrismFirst<P>
where
    P: Prism<S, A>,
{
    fn get_or_modify(&self, source: (S, C)) -> Either<(S, C), (A, C)> {
        let (inner, extra) = source;
        match self.prism.get_or_modify(inner) {
            Either::Right(value) => Either::Right((value, extra)),
            Either::Left(inner) => Either::Left((inner, extra)),
        }
    }

    fn reverse_get(&self, value: (A, C)) -> (S, C) {
        (self.prism.reverse_get(value.0), value.1)
    }
}

/// A prism over `(C, S)` that passes `C` through.
#[derive(Debug, Clone)]
pub struct PrismSecond<P> {
    prism: P,
}

impl<S, A, C, P> Prism<(C, S), (C, A)> for PrismSecond<P>
where
    P: Prism<S, A>,
{
    fn get_or_modify(&self, source: (C, S)) -> Either<(C, S), (C, A)> {
        let (extra, inner) = source;
        match self.prism.get_or_modify(inner) {
            Either::Right(value) => Either::Right((extra, value)),
            Either::Left(inner) => Either::Left((extra, inner)),
        }
    }

    fn reverse_get(&self, value: (C, A)) -> (C, S) {
        (value.0, self.prism.reverse_get(value.1))
    }
}

/// Creates a prism for a single-field tuple variant of an enum.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, Variant)
/// prism!(EnumType<T>, Variant)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Message { Text(String), Ping }
///
/// let text = prism!(Message, Text);
///
/// assert_eq!(text.preview(Message::Text("hi".into())), Some("hi".to_string()));
/// assert_eq!(text.preview(Message::Ping), None);
/// assert_eq!(text.set(Message::Ping, "ignored".into()), Message::Ping);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}
