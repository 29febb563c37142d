//! Applicative type class - lifting values and combining independent effects.
//!
//! `Applicative` is the minimum structure a traversal needs: `pure` lifts a
//! value that carries no effect and `map2` merges two effectful values. A
//! traversal never sequences with monadic bind, so the number of effects it
//! combines is exactly the number of foci, merged left-to-right.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map2(F::pure(()), fa, |(), a| a) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::map2(F::pure(a), F::pure(b), f) == F::pure(f(a, b))
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! F::product(F::product(fa, fb), fc) ~ F::product(fa, F::product(fb, fc))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Applicative, OptionEffect, ResultEffect};
//!
//! assert_eq!(OptionEffect::map2(Some(1), Some(2), |x, y| x + y), Some(3));
//!
//! let first_error: Result<i32, &str> =
//!     ResultEffect::<&str>::map2(Err("first"), Err("second"), |x: i32, y: i32| x + y);
//! assert_eq!(first_error, Err("first"));
//! ```

use super::constant::{Const, ConstEffect};
use super::functor::Functor;
use super::higher::{EitherEffect, IdentityEffect, OptionEffect, ResultEffect, WriterEffect};
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A type class for effect carriers that can lift pure values and combine
/// independent effects.
///
/// Only `pure` and `map2` are required; everything else is derived.
pub trait Applicative: Functor {
    /// Lifts a value into the carrier without any effect.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Combines two carriers, the effect of `fa` first, then applies `function`
    /// to both values.
    fn map2<A, B, C, F>(
        fa: Self::WithType<A>,
        fb: Self::WithType<B>,
        function: F,
    ) -> Self::WithType<C>
    where
        F: FnOnce(A, B) -> C;

    /// Combines three carriers left-to-right.
    fn map3<A, B, C, D, F>(
        fa: Self::WithType<A>,
        fb: Self::WithType<B>,
        fc: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map2(Self::product(fa, fb), fc, |(a, b), c| function(a, b, c))
    }

    /// Pairs the values of two carriers.
    fn product<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<(A, B)> {
        Self::map2(fa, fb, |a, b| (a, b))
    }

    /// Applies a function held in a carrier to a value held in another.
    fn apply<A, B, F>(ff: Self::WithType<F>, fa: Self::WithType<A>) -> Self::WithType<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map2(ff, fa, |function, a| function(a))
    }

    /// Turns a sequence of carriers into a carrier of a `Vec`, combining the
    /// effects in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::{Applicative, OptionEffect};
    ///
    /// assert_eq!(OptionEffect::sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
    /// assert_eq!(OptionEffect::sequence(vec![Some(1), None]), None);
    /// ```
    fn sequence<A, I>(carriers: I) -> Self::WithType<Vec<A>>
    where
        I: IntoIterator<Item = Self::WithType<A>>,
    {
        carriers
            .into_iter()
            .fold(Self::pure(Vec::new()), |accumulator, carrier| {
                Self::map2(accumulator, carrier, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

impl Applicative for OptionEffect {
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (fa, fb) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<E> Applicative for ResultEffect<E> {
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

#[cfg(feature = "control")]
impl<L> Applicative for EitherEffect<L> {
    fn pure<A>(value: A) -> crate::control::Either<L, A> {
        crate::control::Either::Right(value)
    }

    fn map2<A, B, C, F>(
        fa: crate::control::Either<L, A>,
        fb: crate::control::Either<L, B>,
        function: F,
    ) -> crate::control::Either<L, C>
    where
        F: FnOnce(A, B) -> C,
    {
        use crate::control::Either;

        match (fa, fb) {
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Either::Left(left), _) | (Either::Right(_), Either::Left(left)) => Either::Left(left),
        }
    }
}

impl Applicative for IdentityEffect {
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    fn map2<A, B, C, F>(fa: Identity<A>, fb: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(fa.0, fb.0))
    }
}

impl<M: Monoid> Applicative for ConstEffect<M> {
    fn pure<A>(_value: A) -> Const<M, A> {
        Const::new(M::empty())
    }

    fn map2<A, B, C, F>(fa: Const<M, A>, fb: Const<M, B>, _function: F) -> Const<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Const::new(fa.into_inner().combine(fb.into_inner()))
    }
}

impl<W: Monoid> Applicative for WriterEffect<W> {
    fn pure<A>(value: A) -> (W, A) {
        (W::empty(), value)
    }

    fn map2<A, B, C, F>(fa: (W, A), fb: (W, B), function: F) -> (W, C)
    where
        F: FnOnce(A, B) -> C,
    {
        let (first_log, a) = fa;
        let (second_log, b) = fb;
        (first_log.combine(second_log), function(a, b))
    }
}
