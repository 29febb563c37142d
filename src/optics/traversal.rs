//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal generalizes Lens and Optional to any number of foci. It is
//! defined by a single operation, [`Traversal::traverse`], which runs an
//! effectful function over every focus and rebuilds the structure inside the
//! effect. The effect is any [`Applicative`] brand, and effects are combined
//! with `map2` in structural order (depth-first, left-to-right), never with a
//! monadic bind: a traversal with `n` foci combines exactly `n` effects.
//!
//! Everything else is `traverse` run in a particular effect:
//!
//! | operation | effect |
//! |---|---|
//! | [`modify`](Traversal::modify), [`set`](Traversal::set) | [`IdentityEffect`] |
//! | [`fold_map`](Traversal::fold_map), [`get_all`](Traversal::get_all), [`length`](Traversal::length), ... | [`ConstEffect`] |
//! | [`traverse_option`](Traversal::traverse_option) | [`OptionEffect`] |
//! | [`traverse_result`](Traversal::traverse_result) | [`ResultEffect`] |
//!
//! # Laws
//!
//! 1. **Identity Law**: `traversal.modify(source, |x| x) == source`
//! 2. **Composition Law**:
//!    ```text
//!    traversal.modify(traversal.modify(source, f), g)
//!        == traversal.modify(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Each, Traversal};
//!
//! let each = Vec::<i32>::each();
//!
//! assert_eq!(each.get_all(vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(each.modify(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
//!
//! // Effects short-circuit on the leftmost failure.
//! let checked = each.traverse_result(vec![1, -2, -3], |x| {
//!     if x > 0 { Ok(x) } else { Err(x) }
//! });
//! assert_eq!(checked, Err(-2));
//! ```

use std::marker::PhantomData;

use super::iso::{Iso, IsoAsPrism};
use super::lens::Lens;
use super::optional::Optional;
use super::prism::Prism;
use crate::control::Either;
use crate::typeclass::{
    All, Any, Applicative, Const, ConstEffect, First, Identity, IdentityEffect, Last, Monoid,
    OptionEffect, ResultEffect, Sum,
};

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A> {
    /// Runs `function` over every focus in structural order, combining the
    /// effects with `F::map2`, and rebuilds the source inside the effect.
    ///
    /// # Type Parameters
    ///
    /// - `F`: The effect brand (see [`crate::typeclass`])
    /// - `Function`: The effectful function applied to each focus
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Each, Traversal};
    /// use optica::typeclass::WriterEffect;
    ///
    /// let (log, doubled) = Vec::<i32>::each().traverse::<WriterEffect<Vec<i32>>, _>(
    ///     vec![1, 2, 3],
    ///     |x| (vec![x], x * 2),
    /// );
    ///
    /// assert_eq!(log, vec![1, 2, 3]);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn traverse<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>;

    /// Applies `function` to every focus.
    fn modify<Function>(&self, source: S, mut function: Function) -> S
    where
        Function: FnMut(A) -> A,
    {
        self.traverse::<IdentityEffect, _>(source, |value| Identity(function(value)))
            .into_inner()
    }

    /// Replaces every focus with `value`.
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Maps every focus into a monoid and combines the results left-to-right.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Each, Traversal};
    /// use optica::typeclass::Sum;
    ///
    /// let total = Vec::<i32>::each().fold_map(vec![1, 2, 3], Sum);
    /// assert_eq!(total, Sum(6));
    /// ```
    fn fold_map<M, Function>(&self, source: S, mut function: Function) -> M
    where
        M: Monoid,
        Function: FnMut(A) -> M,
    {
        self.traverse::<ConstEffect<M>, _>(source, |value| Const::new(function(value)))
            .into_inner()
    }

    /// Collects every focus in traversal order, duplicates included.
    fn get_all(&self, source: S) -> Vec<A> {
        self.fold_map(source, |value| vec![value])
    }

    /// Folds the foci from the left, starting with `initial`.
    fn fold<B, Function>(&self, source: S, initial: B, function: Function) -> B
    where
        Function: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Combines every focus with its own monoid.
    fn combine_all(&self, source: S) -> A
    where
        A: Monoid,
    {
        self.fold_map(source, |value| value)
    }

    /// Counts the foci.
    fn length(&self, source: S) -> usize {
        self.fold_map(source, |_| Sum(1_usize)).into_inner()
    }

    /// Returns `true` if there is no focus.
    fn is_empty(&self, source: S) -> bool {
        self.fold_map(source, |_| All(false)).into_inner()
    }

    /// Returns `true` if there is at least one focus.
    fn non_empty(&self, source: S) -> bool {
        !self.is_empty(source)
    }

    /// Returns the first focus.
    fn head_option(&self, source: S) -> Option<A> {
        self.fold_map(source, |value| First(Some(value))).into_inner()
    }

    /// Returns the last focus.
    fn last_option(&self, source: S) -> Option<A> {
        self.fold_map(source, |value| Last(Some(value))).into_inner()
    }

    /// Returns `true` if any focus satisfies `predicate`.
    fn exists<P>(&self, source: S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_map(source, |value| Any(predicate(&value)))
            .into_inner()
    }

    /// Returns `true` if every focus satisfies `predicate`.
    fn for_all<P>(&self, source: S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_map(source, |value| All(predicate(&value)))
            .into_inner()
    }

    /// Returns the first focus satisfying `predicate`.
    ///
    /// Once a focus matches, `predicate` is not called again and the
    /// remaining foci are dropped as they are reached.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Each, Traversal};
    ///
    /// let mut calls = 0;
    /// let found = Vec::<i32>::each().find(vec![1, 4, 6, 8], |x| {
    ///     calls += 1;
    ///     x % 2 == 0
    /// });
    ///
    /// assert_eq!(found, Some(4));
    /// assert_eq!(calls, 2);
    /// ```
    fn find<P>(&self, source: S, mut predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        let mut found = false;
        self.fold_map(source, |value| {
            if found || !predicate(&value) {
                First(None)
            } else {
                found = true;
                First(Some(value))
            }
        })
        .into_inner()
    }

    /// Runs a fallible function over every focus, stopping at the first
    /// `None`.
    fn traverse_option<Function>(&self, source: S, function: Function) -> Option<S>
    where
        Function: FnMut(A) -> Option<A>,
    {
        self.traverse::<OptionEffect, _>(source, function)
    }

    /// Runs a fallible function over every focus, keeping the leftmost error.
    fn traverse_result<E, Function>(&self, source: S, function: Function) -> Result<S, E>
    where
        Function: FnMut(A) -> Result<A, E>,
    {
        self.traverse::<ResultEffect<E>, _>(source, function)
    }

    /// Composes this traversal with another one. For each outer focus in
    /// order, all of its inner foci are visited in order.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Composes this traversal with a lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, LensAsTraversal::new(lens))
    }

    /// Composes this traversal with a prism.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{some_prism, Each, Traversal};
    ///
    /// let present = Vec::<Option<i32>>::each().compose_prism(some_prism::<i32>());
    /// assert_eq!(present.modify(vec![Some(2), None, Some(3)], |x| x * 3), vec![Some(6), None, Some(9)]);
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> ComposedTraversal<Self, PrismAsTraversal<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, PrismAsTraversal::new(prism))
    }

    /// Composes this traversal with an optional.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<O>, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedTraversal::new(self, OptionalAsTraversal::new(optional))
    }

    /// Composes this traversal with an iso.
    fn compose_iso<B, I>(
        self,
        iso: I,
    ) -> ComposedTraversal<Self, PrismAsTraversal<IsoAsPrism<I>>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedTraversal::new(self, PrismAsTraversal::new(IsoAsPrism::new(iso)))
    }

    /// Joins two traversals with the same focus type into a traversal over
    /// `Either<S, S2>`.
    fn choice<S2, T>(self, other: T) -> ChoiceTraversal<Self, T>
    where
        Self: Sized,
        T: Traversal<S2, A>,
    {
        ChoiceTraversal::new(self, other)
    }

    /// Restricts this traversal to the foci satisfying `predicate`.
    ///
    /// The result is only lawful if the functions run through it preserve
    /// `predicate`.
    fn filtered<P>(self, predicate: P) -> FilteredTraversal<Self, P>
    where
        Self: Sized,
        P: Fn(&A) -> bool,
    {
        FilteredTraversal::new(self, predicate)
    }
}

/// A traversal composed of two traversals.
///
/// # Type Parameters
///
/// - `T1`: The outer traversal
/// - `T2`: The inner traversal
/// - `A`: The intermediate type (target of T1, source of T2)
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn() -> A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(B) -> F::WithType<B>,
    {
        self.first.traverse::<F, _>(source, |intermediate| {
            self.second.traverse::<F, _>(intermediate, &mut function)
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedTraversal<T1, T2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as a traversal with exactly one focus.
#[derive(Debug, Clone)]
pub struct LensAsTraversal<L> {
    lens: L,
}

impl<L> LensAsTraversal<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, A, L> Traversal<S, A> for LensAsTraversal<L>
where
    L: Lens<S, A>,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        let focus = self.lens.get(&source);
        F::fmap(function(focus), |value| self.lens.set(source, value))
    }
}

/// A prism viewed as a traversal with zero or one focus.
#[derive(Debug, Clone)]
pub struct PrismAsTraversal<P> {
    prism: P,
}

impl<P> PrismAsTraversal<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, A, P> Traversal<S, A> for PrismAsTraversal<P>
where
    P: Prism<S, A>,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        match self.prism.get_or_modify(source) {
            Either::Right(value) => {
                F::fmap(function(value), |value| self.prism.reverse_get(value))
            }
            Either::Left(source) => F::pure(source),
        }
    }
}

/// An optional viewed as a traversal with zero or one focus.
#[derive(Debug, Clone)]
pub struct OptionalAsTraversal<O> {
    optional: O,
}

impl<O> OptionalAsTraversal<O> {
    /// Wraps an optional.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self { optional }
    }
}

impl<S, A, O> Traversal<S, A> for OptionalAsTraversal<O>
where
    O: Optional<S, A>,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        match self.optional.get_option(&source) {
            Some(value) => F::fmap(function(value), |value| self.optional.set(source, value)),
            None => F::pure(source),
        }
    }
}

/// A traversal over `Either<S1, S2>` built from one traversal per side.
#[derive(Debug, Clone)]
pub struct ChoiceTraversal<T1, T2> {
    left: T1,
    right: T2,
}

impl<T1, T2> ChoiceTraversal<T1, T2> {
    /// Creates a traversal that dispatches on the side of the `Either`.
    #[must_use]
    pub const fn new(left: T1, right: T2) -> Self {
        Self { left, right }
    }
}

impl<S1, S2, A, T1, T2> Traversal<Either<S1, S2>, A> for ChoiceTraversal<T1, T2>
where
    T1: Traversal<S1, A>,
    T2: Traversal<S2, A>,
{
    fn traverse<F, Function>(
        &self,
        source: Either<S1, S2>,
        function: Function,
    ) -> F::WithType<Either<S1, S2>>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        match source {
            Either::Left(left) => F::fmap(self.left.traverse::<F, _>(left, function), Either::Left),
            Either::Right(right) => {
                F::fmap(self.right.traverse::<F, _>(right, function), Either::Right)
            }
        }
    }
}

/// A traversal restricted to the foci that satisfy a predicate.
///
/// Foci that fail the predicate are kept in place, untouched, without running
/// the effectful function on them.
pub struct FilteredTraversal<T, P> {
    traversal: T,
    predicate: P,
}

impl<T, P> FilteredTraversal<T, P> {
    /// Restricts `traversal` to the foci satisfying `predicate`.
    #[must_use]
    pub const fn new(traversal: T, predicate: P) -> Self {
        Self {
            traversal,
            predicate,
        }
    }
}

impl<S, A, T, P> Traversal<S, A> for FilteredTraversal<T, P>
where
    T: Traversal<S, A>,
    P: Fn(&A) -> bool,
{
    fn traverse<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        self.traversal.traverse::<F, _>(source, |value| {
            if (self.predicate)(&value) {
                function(value)
            } else {
                F::pure(value)
            }
        })
    }
}

impl<T: Clone, P: Clone> Clone for FilteredTraversal<T, P> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for FilteredTraversal<T, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FilteredTraversal")
            .field("traversal", &self.traversal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{Each, some_prism};
    use crate::typeclass::WriterEffect;
    use crate::{lens, prism};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Team {
        name: String,
        scores: Vec<i32>,
    }

    fn teams() -> Vec<Team> {
        vec![
            Team {
                name: "a".to_string(),
                scores: vec![1, 2],
            },
            Team {
                name: "b".to_string(),
                scores: vec![],
            },
            Team {
                name: "c".to_string(),
                scores: vec![3],
            },
        ]
    }

    fn all_scores() -> impl Traversal<Vec<Team>, i32> {
        Vec::<Team>::each()
            .compose_lens(lens!(Team, scores))
            .compose(Vec::<i32>::each())
    }

    #[test]
    fn composed_traversal_flattens_in_order() {
        assert_eq!(all_scores().get_all(teams()), vec![1, 2, 3]);
        assert_eq!(all_scores().length(teams()), 3);
    }

    #[test]
    fn composed_modify_keeps_shape() {
        let updated = all_scores().modify(teams(), |score| score * 10);
        let scores: Vec<Vec<i32>> = updated.into_iter().map(|team| team.scores).collect();
        assert_eq!(scores, vec![vec![10, 20], vec![], vec![30]]);
    }

    #[test]
    fn writer_effect_records_visit_order() {
        let (log, _) = all_scores()
            .traverse::<WriterEffect<Vec<i32>>, _>(teams(), |score| (vec![score], score));
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], Some(vec![1, 2, 3]))]
    #[case(vec![1, 0, 3], None)]
    fn traverse_option_short_circuits(#[case] input: Vec<i32>, #[case] expected: Option<Vec<i32>>) {
        let each = Vec::<i32>::each();
        assert_eq!(each.traverse_option(input, |x| (x != 0).then_some(x)), expected);
    }

    #[test]
    fn traverse_result_keeps_leftmost_error() {
        let each = Vec::<i32>::each();
        let result = each.traverse_result(vec![1, -2, -3], |x| {
            if x > 0 { Ok(x) } else { Err(format!("bad {x}")) }
        });
        assert_eq!(result, Err("bad -2".to_string()));
    }

    #[rstest]
    #[case(vec![], true, None, None)]
    #[case(vec![4, 5, 6], false, Some(4), Some(6))]
    fn summaries(
        #[case] input: Vec<i32>,
        #[case] empty: bool,
        #[case] head: Option<i32>,
        #[case] last: Option<i32>,
    ) {
        let each = Vec::<i32>::each();
        assert_eq!(each.is_empty(input.clone()), empty);
        assert_eq!(each.non_empty(input.clone()), !empty);
        assert_eq!(each.head_option(input.clone()), head);
        assert_eq!(each.last_option(input), last);
    }

    #[test]
    fn find_stops_calling_predicate_after_match() {
        let mut seen = Vec::new();
        let found = Vec::<i32>::each().find(vec![1, 3, 4, 5, 6], |x| {
            seen.push(*x);
            x % 2 == 0
        });
        assert_eq!(found, Some(4));
        assert_eq!(seen, vec![1, 3, 4]);
    }

    #[test]
    fn exists_for_all_fold_and_combine() {
        let each = Vec::<String>::each();
        let words = vec!["ab".to_string(), "cd".to_string()];

        assert!(each.exists(words.clone(), |word| word == "cd"));
        assert!(!each.for_all(words.clone(), |word| word.len() > 2));
        assert_eq!(each.fold(words.clone(), 0, |total, word| total + word.len()), 4);
        assert_eq!(each.combine_all(words), "abcd");
    }

    #[test]
    fn set_replaces_every_focus() {
        assert_eq!(Vec::<char>::each().set(vec!['a', 'b'], 'z'), vec!['z', 'z']);
    }

    #[test]
    fn compose_prism_passes_absent_entries_through() {
        let present = Vec::<Option<i32>>::each().compose_prism(some_prism::<i32>());
        assert_eq!(
            present.modify(vec![Some(2), None, Some(3)], |x| x * 3),
            vec![Some(6), None, Some(9)]
        );
    }

    #[test]
    fn prism_as_traversal_has_zero_or_one_focus() {
        #[derive(Clone, PartialEq, Debug)]
        enum Token {
            Number(i64),
            Word(String),
        }

        let numbers = crate::optics::Prism::to_traversal(prism!(Token, Number));
        assert_eq!(numbers.get_all(Token::Number(7)), vec![7]);
        assert!(numbers.is_empty(Token::Word("x".to_string())));
    }

    #[test]
    fn choice_traverses_the_present_side() {
        let either_each = Vec::<i32>::each().choice(Option::<i32>::each());
        let left: Either<Vec<i32>, Option<i32>> = Either::Left(vec![1, 2]);
        let right: Either<Vec<i32>, Option<i32>> = Either::Right(Some(3));

        assert_eq!(either_each.modify(left, |x| x + 1), Either::Left(vec![2, 3]));
        assert_eq!(either_each.get_all(right), vec![3]);
    }

    #[test]
    fn filtered_leaves_other_foci_untouched() {
        let evens = Vec::<i32>::each().filtered(|x| x % 2 == 0);
        assert_eq!(evens.modify(vec![1, 2, 3, 4], |x| x * 10), vec![1, 20, 3, 40]);
        assert_eq!(evens.get_all(vec![1, 2, 3, 4]), vec![2, 4]);
    }

    #[test]
    fn lens_as_traversal_has_one_focus() {
        let name = crate::optics::Lens::to_traversal(lens!(Team, name));
        assert_eq!(name.get_all(teams().remove(0)), vec!["a".to_string()]);
    }
}
