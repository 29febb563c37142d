//! Lens optics for focusing on a mandatory part of a structure.
//!
//! A Lens is an optic that provides get/set access to a field within a larger
//! structure. Lenses are composable, allowing access to deeply nested fields,
//! and compose with every other optic kind:
//!
//! | `self` | `other` | result |
//! |---|---|---|
//! | Lens | Lens | [`ComposedLens`] |
//! | Lens | Iso | [`ComposedLens`] |
//! | Lens | Prism | [`ComposedOptional`] |
//! | Lens | Optional | [`ComposedOptional`] |
//! | Lens | Traversal | [`ComposedTraversal`] |
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::iso::{Iso, IsoAsLens};
use super::optional::{ComposedOptional, LensAsOptional, Optional, PrismAsOptional};
use super::prism::Prism;
use super::traversal::{ComposedTraversal, LensAsTraversal, Traversal};
use crate::control::Either;

/// A Lens focuses on exactly one part of a larger structure.
///
/// `get` hands back an owned copy of the focus, so a lens may focus on a value
/// that is computed rather than stored (see [`Iso::to_lens`]).
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub trait Lens<S, A> {
    /// Gets the focused value.
    fn get(&self, source: &S) -> A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// Every part of `source` other than the focus is preserved.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused field
    ///
    /// # Returns
    ///
    /// A new source with the focused field updated
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// This is `set(source, function(get(&source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Modifies the focused field with a function that only borrows the
    /// current value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(&self.get(&source));
        self.set(source, new_value)
    }

    /// Returns `true` if the focus satisfies `predicate`.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        predicate(&self.get(source))
    }

    /// Returns the focus if it satisfies `predicate`.
    fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        Some(self.get(source)).filter(|value| predicate(value))
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// `get` is `other.get(self.get(s))` and `set(s, b)` is
    /// `self.set(s, other.set(self.get(s), b))`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism. The focus may now be absent, so the
    /// result is an Optional.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), PrismAsOptional::new(prism))
    }

    /// Composes this lens with an optional.
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<LensAsOptional<Self>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), optional)
    }

    /// Composes this lens with an iso, which is still a lens.
    fn compose_iso<B, I>(self, iso: I) -> ComposedLens<Self, IsoAsLens<I>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedLens::new(self, IsoAsLens::new(iso))
    }

    /// Composes this lens with a traversal.
    fn compose_traversal<B, T>(self, traversal: T) -> ComposedTraversal<LensAsTraversal<Self>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(LensAsTraversal::new(self), traversal)
    }

    /// Joins two lenses with the same focus into a lens over `Either<S, S2>`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::control::Either;
    /// use optica::optics::{first_lens, second_lens, Lens};
    ///
    /// let number = first_lens::<i32, char>().choice(second_lens::<bool, i32>());
    ///
    /// assert_eq!(number.get(&Either::Left((1, 'a'))), 1);
    /// assert_eq!(number.set(Either::Right((true, 2)), 5), Either::Right((true, 5)));
    /// ```
    fn choice<S2, L>(self, other: L) -> ChoiceLens<Self, L>
    where
        Self: Sized,
        L: Lens<S2, A>,
    {
        ChoiceLens::new(self, other)
    }

    /// Pairs this lens with another one, giving a lens from `(S, S2)` to
    /// `(A, B)`.
    fn split<S2, B, L>(self, other: L) -> SplitLens<Self, L>
    where
        Self: Sized,
        L: Lens<S2, B>,
    {
        SplitLens::new(self, other)
    }

    /// Carries an extra component through the lens: `(S, C)` to `(A, C)`.
    fn first(self) -> LensFirst<Self>
    where
        Self: Sized,
    {
        LensFirst { lens: self }
    }

    /// Carries an extra component through the lens: `(C, S)` to `(C, A)`.
    fn second(self) -> LensSecond<Self>
    where
        Self: Sized,
    {
        LensSecond { lens: self }
    }

    /// Views this lens as an optional whose focus is always present.
    fn to_optional(self) -> LensAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }

    /// Views this lens as a traversal with exactly one focus.
    fn to_traversal(self) -> LensAsTraversal<Self>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The `lens!` macro and
/// `#[derive(Lenses)]` generate a `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens over `Either<S1, S2>` built from one lens per side.
#[derive(Debug, Clone)]
pub struct ChoiceLens<L1, L2> {
    left: L1,
    right: L2,
}

impl<L1, L2> ChoiceLens<L1, L2> {
    /// Creates a lens that dispatches on the side of the `Either`.
    #[must_use]
    pub const fn new(left: L1, right: L2) -> Self {
        Self { left, right }
    }
}

impl<S1, S2, A, L1, L2> Lens<Either<S1, S2>, A> for ChoiceLens<L1, L2>
where
    L1: Lens<S1, A>,
    L2: Lens<S2, A>,
{
    fn get(&self, source: &Either<S1, S2>) -> A {
        match source {
            Either::Left(left) => self.left.get(left),
            Either::Right(right) => self.right.get(right),
        }
    }

    fn set(&self, source: Either<S1, S2>, value: A) -> Either<S1, S2> {
        match source {
            Either::Left(left) => Either::Left(self.left.set(left, value)),
            Either::Right(right) => Either::Right(self.right.set(right, value)),
        }
    }
}

/// A lens over pairs built from two independent lenses.
#[derive(Debug, Clone)]
pub struct SplitLens<L1, L2> {
    first: L1,
    second: L2,
}

impl<L1, L2> SplitLens<L1, L2> {
    /// Creates a lens focusing on both components of a pair at once.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self { first, second }
    }
}

impl<S1, S2, A, B, L1, L2> Lens<(S1, S2), (A, B)> for SplitLens<L1, L2>
where
    L1: Lens<S1, A>,
    L2: Lens<S2, B>,
{
    fn get(&self, source: &(S1, S2)) -> (A, B) {
        (self.first.get(&source.0), self.second.get(&source.1))
    }

    fn set(&self, source: (S1, S2), value: (A, B)) -> (S1, S2) {
        (
            self.first.set(source.0, value.0),
            self.second.set(source.1, value.1),
        )
    }
}

/// A lens that leaves the second component of a pair untouched.
#[derive(Debug, Clone)]
pub struct LensFirst<L> {
    lens: L,
}

impl<S, A, C, L> Lens<(S, C), (A, C)> for LensFirst<L>
where
    L: Lens<S, A>,
    C: Clone,
{
    fn get(&self, source: &(S, C)) -> (A, C) {
        (self.lens.get(&source.0), source.1.clone())
    }

    fn set(&self, source: (S, C), value: (A, C)) -> (S, C) {
        (self.lens.set(source.0, value.0), value.1)
    }
}

/// A lens that leaves the first component of a pair untouched.
#[derive(Debug, Clone)]
pub struct LensSecond<L> {
    lens: L,
}

impl<S, A, C, L> Lens<(C, S), (C, A)> for LensSecond<L>
where
    L: Lens<S, A>,
    C: Clone,
{
    fn get(&self, source: &(C, S)) -> (C, A) {
        (source.0.clone(), self.lens.get(&source.1))
    }

    fn set(&self, source: (C, S), value: (C, A)) -> (C, S) {
        (value.0, self.lens.set(source.1, value.1))
    }
}

/// Creates a lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type. The field type must implement `Clone`, because
/// `get` returns an owned copy.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(x_lens.set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:tt) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:tt) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:tt) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
