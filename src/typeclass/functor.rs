//! Functor type class - mapping over effect carriers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Functor, OptionEffect};
//!
//! assert_eq!(OptionEffect::fmap(Some(2), |x| x * 10), Some(20));
//! assert_eq!(OptionEffect::fmap(None::<i32>, |x| x * 10), None);
//! ```

use super::constant::{Const, ConstEffect};
use super::higher::{
    EitherEffect, IdentityEffect, OptionEffect, ResultEffect, TypeConstructor, WriterEffect,
};
use super::identity::Identity;

/// A type class for effect carriers whose value can be transformed.
///
/// The trait is implemented on the brand (see [`TypeConstructor`]), so the
/// carrier is passed as `Self::WithType<A>`.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the carrier, keeping its effect.
    fn fmap<A, B, F>(fa: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        F: FnOnce(A) -> B;

    /// Replaces the value inside the carrier with `value`.
    fn replace<A, B>(fa: Self::WithType<A>, value: B) -> Self::WithType<B> {
        Self::fmap(fa, |_| value)
    }
}

impl Functor for OptionEffect {
    fn fmap<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}

impl<E> Functor for ResultEffect<E> {
    fn fmap<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}

#[cfg(feature = "control")]
impl<L> Functor for EitherEffect<L> {
    fn fmap<A, B, F>(
        fa: crate::control::Either<L, A>,
        function: F,
    ) -> crate::control::Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map_right(function)
    }
}

impl Functor for IdentityEffect {
    fn fmap<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(fa.0))
    }
}

impl<M> Functor for ConstEffect<M> {
    fn fmap<A, B, F>(fa: Const<M, A>, _function: F) -> Const<M, B>
    where
        F: FnOnce(A) -> B,
    {
        fa.retag()
    }
}

impl<W> Functor for WriterEffect<W> {
    fn fmap<A, B, F>(fa: (W, A), function: F) -> (W, B)
    where
        F: FnOnce(A) -> B,
    {
        let (log, value) = fa;
        (log, function(value))
    }
}
