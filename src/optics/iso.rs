//! Iso optics for lossless conversions between two types.
//!
//! An Iso is the strongest optic: `get` and `reverse_get` are total and undo
//! each other. Every Iso is also a Lens (see [`Iso::to_lens`]) and a Prism
//! (see [`Iso::to_prism`]), so it composes with every other optic kind.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use optica::optics::Iso;
//! use optica::iso;
//!
//! let chars = iso!(
//!     |text: String| text.chars().collect::<Vec<char>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>()
//! );
//!
//! assert_eq!(chars.get("ab".to_string()), vec!['a', 'b']);
//! assert_eq!(chars.modify("ab".to_string(), |mut c| { c.reverse(); c }), "ba");
//! ```

use std::marker::PhantomData;

use super::lens::{ComposedLens, Lens};
use super::optional::{ComposedOptional, LensAsOptional, Optional};
use super::prism::{ComposedPrism, Prism};
use super::traversal::{ComposedTraversal, PrismAsTraversal, Traversal};
use crate::control::Either;

/// An Iso converts losslessly between `S` and `A`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
pub trait Iso<S, A> {
    /// Converts the source to the target.
    fn get(&self, source: S) -> A;

    /// Converts the target back to the source.
    fn reverse_get(&self, value: A) -> S;

    /// Converts to `A`, applies `function`, and converts back.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Swaps the direction of this iso.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{swap_iso, Iso};
    ///
    /// let reversed = swap_iso::<i32, char>().reverse();
    /// assert_eq!(reversed.get(('a', 1)), (1, 'a'));
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this iso with another iso.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Views this iso as a lens.
    fn to_lens(self) -> IsoAsLens<Self>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this iso as a prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }

    /// Views this iso as an optional that is always present.
    fn to_optional(self) -> LensAsOptional<IsoAsLens<Self>>
    where
        Self: Sized,
    {
        LensAsOptional::new(IsoAsLens::new(self))
    }

    /// Views this iso as a traversal with exactly one focus.
    fn to_traversal(self) -> PrismAsTraversal<IsoAsPrism<Self>>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(IsoAsPrism::new(self))
    }

    /// Composes this iso with a lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedLens<IsoAsLens<Self>, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(IsoAsLens::new(self), lens)
    }

    /// Composes this iso with a prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedPrism<IsoAsPrism<Self>, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(IsoAsPrism::new(self), prism)
    }

    /// Composes this iso with an optional.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<LensAsOptional<IsoAsLens<Self>>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(IsoAsLens::new(self)), optional)
    }

    /// Composes this iso with a traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<PrismAsTraversal<IsoAsPrism<Self>>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(PrismAsTraversal::new(IsoAsPrism::new(self)), traversal)
    }
}

/// An iso implemented using a pair of conversion functions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The forward conversion
/// - `Rg`: The backward conversion
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso`. The two functions must be inverses of
    /// each other.
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> std::fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

/// An iso with its two directions swapped.
#[derive(Debug, Clone)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an iso, swapping its directions.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

/// An iso composed of two isos.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn() -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new composed iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An iso viewed as a lens.
///
/// `get` works on a borrowed source, so the source is cloned before it is
/// converted. `set` ignores the old source entirely.
#[derive(Debug, Clone)]
pub struct IsoAsLens<I> {
    iso: I,
}

impl<I> IsoAsLens<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Lens<S, A> for IsoAsLens<I>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.iso.modify(source, function)
    }
}

/// An iso viewed as a prism that always matches.
#[derive(Debug, Clone)]
pub struct IsoAsPrism<I> {
    iso: I,
}

impl<I> IsoAsPrism<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Prism<S, A> for IsoAsPrism<I>
where
    I: Iso<S, A>,
{
    fn get_or_modify(&self, source: S) -> Either<S, A> {
        Either::Right(self.iso.get(source))
    }

    fn reverse_get(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

/// Creates an Iso from get and `reverse_get` functions.
///
/// # Syntax
///
/// ```text
/// iso!(get_function, reverse_get_function)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Iso;
/// use optica::iso;
///
/// let celsius = iso!(
///     |kelvin: f64| kelvin - 273.15,
///     |celsius: f64| celsius + 273.15
/// );
///
/// assert!((celsius.get(300.0) - 26.85).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr $(,)?) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
