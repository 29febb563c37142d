//! Optional optics for focusing on a value that may or may not exist.
//!
//! An Optional generalizes both Lens and Prism: the focus can be absent, and
//! unlike a Prism the whole cannot be rebuilt from the focus alone. It is the
//! result of composing a Lens with a Prism (in either order).
//!
//! Absence is an ordinary value. `get_option` answers `None`, and `set` or
//! `modify` on an absent focus hand the source back unchanged.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) {
//!        optional.set(source.clone(), value) == source
//!    }
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.is_present(&source) {
//!        optional.get_option(&optional.set(source, value.clone())) == Some(value)
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, Optional};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Slot { Filled(i32), Empty }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { slot: Slot }
//!
//! let optional = lens!(Container, slot).compose_prism(prism!(Slot, Filled));
//!
//! let filled = Container { slot: Slot::Filled(42) };
//! assert_eq!(optional.get_option(&filled), Some(42));
//!
//! let empty = Container { slot: Slot::Empty };
//! assert_eq!(optional.get_option(&empty), None);
//! assert_eq!(optional.set(empty.clone(), 7), empty);
//! ```

use std::marker::PhantomData;

use super::iso::{Iso, IsoAsLens};
use super::lens::Lens;
use super::prism::Prism;
use super::traversal::{ComposedTraversal, OptionalAsTraversal, Traversal};
use crate::control::Either;

/// An Optional focuses on a value that may or may not exist.
///
/// Implementors provide [`get_option`](Optional::get_option) and
/// [`set`](Optional::set); `set` must leave the source untouched when the focus
/// is absent.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Gets the focused element if it is present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused element. Returns `source` unchanged when the focus
    /// is absent.
    fn set(&self, source: S, value: A) -> S;

    /// Splits the source into its focus (`Right`) or hands the source back
    /// (`Left`) when nothing is focused.
    fn get_or_modify(&self, source: S) -> Either<S, A> {
        match self.get_option(&source) {
            Some(value) => Either::Right(value),
            None => Either::Left(source),
        }
    }

    /// Modifies the focused element if present, otherwise returns the original
    /// source.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{filter_optional, Optional};
    ///
    /// let even = filter_optional(|n: &i32| n % 2 == 0);
    ///
    /// assert_eq!(even.modify(4, |n| n * 3), 12);
    /// assert_eq!(even.modify(5, |n| n * 3), 5);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Modifies the focused element, returning `None` if it is absent.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The function to apply to the focused element
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the element is present, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_option(&source)
            .map(|value| self.set(source, function(value)))
    }

    /// Sets the focused element, returning `None` if it is absent.
    fn set_option(&self, source: S, value: A) -> Option<S> {
        self.modify_option(source, |_| value)
    }

    /// Returns `true` if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Returns `true` if the focused element is absent.
    fn is_empty(&self, source: &S) -> bool {
        !self.is_present(source)
    }

    /// Returns `true` if the focus is present and satisfies `predicate`.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_some_and(|value| predicate(&value))
    }

    /// Returns `true` if the focus is absent or satisfies `predicate`.
    fn all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_none_or(|value| predicate(&value))
    }

    /// Returns the focus if it is present and satisfies `predicate`.
    fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).filter(|value| predicate(value))
    }

    /// Joins two optionals with the same focus type into an optional over
    /// `Either<S, S2>`.
    fn choice<S2, O>(self, other: O) -> ChoiceOptional<Self, O>
    where
        Self: Sized,
        O: Optional<S2, A>,
    {
        ChoiceOptional::new(self, other)
    }

    /// Carries an extra component through the optional: `(S, C)` to `(A, C)`.
    fn first(self) -> OptionalFirst<Self>
    where
        Self: Sized,
    {
        OptionalFirst { optional: self }
    }

    /// Carries an extra component through the optional: `(C, S)` to `(C, A)`.
    fn second(self) -> OptionalSecond<Self>
    where
        Self: Sized,
    {
        OptionalSecond { optional: self }
    }

    /// Views this optional as a traversal with zero or one focus.
    fn to_traversal(self) -> OptionalAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }

    /// Composes this optional with another optional.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Composes this optional with a lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(lens))
    }

    /// Composes this optional with a prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }

    /// Composes this optional with an iso.
    fn compose_iso<B, I>(self, iso: I) -> ComposedOptional<Self, LensAsOptional<IsoAsLens<I>>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(IsoAsLens::new(iso)))
    }

    /// Composes this optional with a traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<OptionalAsTraversal<Self>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(OptionalAsTraversal::new(self), traversal)
    }
}

/// An optional implemented using a partial getter and a setter.
///
/// The setter is only called when the getter finds a focus, so it may assume
/// the focus exists.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionOptional, Optional};
///
/// let head = FunctionOptional::new(
///     |values: &Vec<i32>| values.first().copied(),
///     |mut values: Vec<i32>, value: i32| {
///         values[0] = value;
///         values
///     },
/// );
///
/// assert_eq!(head.get_option(&vec![1, 2]), Some(1));
/// assert_eq!(head.set(vec![1, 2], 9), vec![9, 2]);
/// assert_eq!(head.set(Vec::new(), 9), Vec::<i32>::new());
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional` from a partial getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if (self.getter)(&source).is_some() {
            (self.setter)(source, value)
        } else {
            source
        }
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match (self.getter)(&source) {
            Some(value) => (self.setter)(source, function(value)),
            None => source,
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// An optional composed of two optionals.
///
/// # Type Parameters
///
/// - `O1`: The outer optional
/// - `O2`: The inner optional
/// - `A`: The intermediate type (target of O1, source of O2)
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        self.modify(source, |_| value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(B) -> B,
    {
        let updated = self
            .first
            .get_option(&source)
            .and_then(|intermediate| self.second.modify_option(intermediate, function));
        match updated {
            Some(intermediate) => self.first.set(source, intermediate),
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedOptional<O1, O2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as an optional whose focus is always present.
#[derive(Debug, Clone)]
pub struct LensAsOptional<L> {
    lens: L,
}

impl<L> LensAsOptional<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, A, L> Optional<S, A> for LensAsOptional<L>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }

    fn get_or_modify(&self, source: S) -> Either<S, A> {
        Either::Right(self.lens.get(&source))
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.lens.modify(source, function)
    }
}

/// A prism viewed as an optional.
///
/// `get_option` borrows its source, so it clones the source before handing it
/// to the prism. `get_or_modify`, `set` and `modify` go straight to the prism.
#[derive(Debug, Clone)]
pub struct PrismAsOptional<P> {
    prism: P,
}

impl<P> PrismAsOptional<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, A, P> Optional<S, A> for PrismAsOptional<P>
where
    P: Prism<S, A>,
    S: Clone,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.set(source, value)
    }

    fn get_or_modify(&self, source: S) -> Either<S, A> {
        self.prism.get_or_modify(source)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

/// An optional over `Either<S1, S2>` built from one optional per side.
#[derive(Debug, Clone)]
pub struct ChoiceOptional<O1, O2> {
    left: O1,
    right: O2,
}

impl<O1, O2> ChoiceOptional<O1, O2> {
    /// Creates an optional that dispatches on the side of the `Either`.
    #[must_use]
    pub const fn new(left: O1, right: O2) -> Self {
        Self { left, right }
    }
}

impl<S1, S2, A, O1, O2> Optional<Either<S1, S2>, A> for ChoiceOptional<O1, O2>
where
    O1: Optional<S1, A>,
    O2: Optional<S2, A>,
{
    fn get_option(&self, source: &Either<S1, S2>) -> Option<A> {
        match source {
            Either::Left(left) => self.left.get_option(left),
            Either::Right(right) => self.right.get_option(right),
        }
    }

    fn set(&self, source: Either<S1, S2>, value: A) -> Either<S1, S2> {
        match source {
            Either::Left(left) => Either::Left(self.left.set(left, value)),
            Either::Right(right) => Either::Right(self.right.set(right, value)),
        }
    }
}

/// An optional over `(S, C)` that leaves `C` to the caller.
#[derive(Debug, Clone)]
pub struct OptionalFirst<O> {
    optional: O,
}

impl<S, A, C, O> Optional<(S, C), (A, C)> for OptionalFirst<O>
where
    O: Optional<S, A>,
    C: Clone,
{
    fn get_option(&self, source: &(S, C)) -> Option<(A, C)> {
        self.optional
            .get_option(&source.0)
            .map(|value| (value, source.1.clone()))
    }

    fn set(&self, source: (S, C), value: (A, C)) -> (S, C) {
        if self.optional.is_present(&source.0) {
            (self.optional.set(source.0, value.0), value.1)
        } else {
            source
        }
    }
}

/// An optional over `(C, S)` that leaves `C` to the caller.
#[derive(Debug, Clone)]
pub struct OptionalSecond<O> {
    optional: O,
}

impl<S, A, C, O> Optional<(C, S), (C, A)> for OptionalSecond<O>
where
    O: Optional<S, A>,
    C: Clone,
{
    fn get_option(&self, source: &(C, S)) -> Option<(C, A)> {
        self.optional
            .get_option(&source.1)
            .map(|value| (source.0.clone(), value))
    }

    fn set(&self, source: (C, S), value: (C, A)) -> (C, S) {
        if self.optional.is_present(&source.1) {
            (value.0, self.optional.set(source.1, value.1))
        } else {
            source
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lens, prism};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Slot {
        Filled(i32),
        Empty,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Container {
        slot: Slot,
        label: String,
    }

    fn container(slot: Slot) -> Container {
        Container {
            slot,
            label: "box".to_string(),
        }
    }

    fn filled() -> impl Optional<Container, i32> {
        lens!(Container, slot).compose_prism(prism!(Slot, Filled))
    }

    fn head() -> impl Optional<Vec<i32>, i32> {
        FunctionOptional::new(
            |values: &Vec<i32>| values.first().copied(),
            |mut values: Vec<i32>, value: i32| {
                values[0] = value;
                values
            },
        )
    }

    #[rstest]
    #[case(Slot::Filled(3), Some(3))]
    #[case(Slot::Empty, None)]
    fn lens_then_prism_get_option(#[case] slot: Slot, #[case] expected: Option<i32>) {
        assert_eq!(filled().get_option(&container(slot)), expected);
    }

    #[test]
    fn set_on_absent_focus_is_identity() {
        let empty = container(Slot::Empty);
        assert_eq!(filled().set(empty.clone(), 10), empty);
        assert_eq!(filled().set_option(empty, 10), None);
    }

    #[test]
    fn modify_rewrites_only_the_focus() {
        let updated = filled().modify(container(Slot::Filled(4)), |n| n + 1);
        assert_eq!(updated, container(Slot::Filled(5)));
    }

    #[test]
    fn get_or_modify_returns_source_on_absence() {
        let empty = container(Slot::Empty);
        assert_eq!(filled().get_or_modify(empty.clone()), Either::Left(empty));
    }

    #[test]
    fn function_optional_never_calls_setter_when_absent() {
        assert_eq!(head().set(Vec::new(), 1), Vec::<i32>::new());
        assert_eq!(head().modify_option(vec![2, 3], |n| n * 10), Some(vec![20, 3]));
    }

    #[rstest]
    #[case(vec![4], true, true)]
    #[case(vec![3], false, false)]
    #[case(vec![], false, true)]
    fn exists_and_all(#[case] values: Vec<i32>, #[case] exists: bool, #[case] all: bool) {
        let even = |n: &i32| n % 2 == 0;
        assert_eq!(head().exists(&values, even), exists);
        assert_eq!(head().all(&values, even), all);
    }

    #[test]
    fn compose_with_optional_chains_absence() {
        let first_of_first = FunctionOptional::new(
            |values: &Vec<Vec<i32>>| values.first().cloned(),
            |mut values: Vec<Vec<i32>>, value: Vec<i32>| {
                values[0] = value;
                values
            },
        )
        .compose(head());

        assert_eq!(first_of_first.get_option(&vec![vec![1, 2], vec![3]]), Some(1));
        assert_eq!(first_of_first.get_option(&vec![vec![], vec![3]]), None);
        assert_eq!(
            first_of_first.modify(vec![vec![1, 2], vec![3]], |n| n - 1),
            vec![vec![0, 2], vec![3]]
        );
        assert_eq!(
            first_of_first.set(vec![Vec::new(), vec![3]], 9),
            vec![Vec::new(), vec![3]]
        );
    }

    #[test]
    fn choice_and_first() {
        let either_head = head().choice(head());
        let right: Either<Vec<i32>, Vec<i32>> = Either::Right(vec![7]);
        assert_eq!(either_head.get_option(&right), Some(7));

        let tagged = head().first();
        assert_eq!(tagged.get_option(&(vec![1], 'x')), Some((1, 'x')));
        assert_eq!(tagged.set((vec![1], 'x'), (2, 'y')), (vec![2], 'y'));
        assert_eq!(tagged.set((Vec::new(), 'x'), (2, 'y')), (Vec::new(), 'x'));
    }

    #[test]
    fn second_reads_right_component() {
        let tagged = head().second();
        assert_eq!(tagged.get_option(&("k", vec![5, 6])), Some(("k", 5)));
    }
}
