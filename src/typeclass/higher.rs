//! Higher-Kinded Type emulation through brands and Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot be
//! generic over "a type constructor such as `Option<_>`". This module works
//! around the limitation with *brands*: zero-sized marker types that name a
//! type constructor and expose its application through a GAT.
//!
//! ```text
//! OptionEffect::WithType<i32>      == Option<i32>
//! ResultEffect<E>::WithType<i32>   == Result<i32, E>
//! IdentityEffect::WithType<i32>    == Identity<i32>
//! ```
//!
//! Because the brand, not the applied type, carries the trait implementations,
//! generic code such as [`Traversal::traverse`](crate::optics::Traversal::traverse)
//! can be written once and instantiated for every effect.
//!
//! # Example
//!
//! ```rust
//! use optica::typeclass::{OptionEffect, TypeConstructor};
//!
//! fn empty<F: TypeConstructor>() -> Option<F::WithType<i32>> {
//!     None
//! }
//!
//! let nothing: Option<Option<i32>> = empty::<OptionEffect>();
//! assert_eq!(nothing, None);
//! ```

use std::marker::PhantomData;

/// A trait representing a type constructor, named by a brand.
///
/// # Associated Types
///
/// - `WithType<A>`: The type constructor applied to `A`.
///
/// # Laws
///
/// Implementations carry no data and are never instantiated; the brand exists
/// only at the type level.
pub trait TypeConstructor {
    /// The type constructor applied to `A`.
    ///
    /// For example, for [`OptionEffect`], `WithType<String>` is `Option<String>`.
    type WithType<A>;
}

// =============================================================================
// Brands
// =============================================================================

/// Brand for [`Option`]: an effect that may produce no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionEffect;

/// Brand for [`Result<_, E>`]: an effect that may fail with an `E`.
///
/// Combination keeps the leftmost error.
pub struct ResultEffect<E>(PhantomData<fn() -> E>);

/// Brand for [`Either<L, _>`](crate::control::Either): right-biased choice.
///
/// Combination keeps the leftmost `Left`.
pub struct EitherEffect<L>(PhantomData<fn() -> L>);

/// Brand for [`Identity`](super::Identity): no effect at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityEffect;

/// Brand for the writer effect `(W, _)`: a value paired with an accumulated log.
///
/// Combination appends the logs left-to-right, which makes the order in which
/// effects were combined observable.
pub struct WriterEffect<W>(PhantomData<fn() -> W>);

impl TypeConstructor for OptionEffect {
    type WithType<A> = Option<A>;
}

impl<E> TypeConstructor for ResultEffect<E> {
    type WithType<A> = Result<A, E>;
}

#[cfg(feature = "control")]
impl<L> TypeConstructor for EitherEffect<L> {
    type WithType<A> = crate::control::Either<L, A>;
}

impl TypeConstructor for IdentityEffect {
    type WithType<A> = super::Identity<A>;
}

impl<W> TypeConstructor for WriterEffect<W> {
    type WithType<A> = (W, A);
}
