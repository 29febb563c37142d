//! Type class traits backing the optics.
//!
//! This module provides the effect abstractions that
//! [`Traversal::traverse`](crate::optics::Traversal::traverse) is written
//! against, together with the algebraic structures used to summarise foci:
//!
//! - [`Functor`]: Mapping over an effect carrier
//! - [`Applicative`]: Lifting pure values and combining independent effects
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). Each
//! effect is named by a *brand* implementing [`TypeConstructor`], whose GAT
//! `WithType<A>` is the carrier applied to `A`:
//!
//! | Brand | Carrier |
//! |---|---|
//! | [`IdentityEffect`] | [`Identity<A>`] |
//! | [`OptionEffect`] | `Option<A>` |
//! | [`ResultEffect<E>`] | `Result<A, E>` |
//! | [`EitherEffect<L>`] | `Either<L, A>` |
//! | [`ConstEffect<M>`] | [`Const<M, A>`] |
//! | [`WriterEffect<W>`] | `(W, A)` |
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Applicative, Monoid, Semigroup, Sum, WriterEffect};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//!
//! let logged = WriterEffect::<String>::map2(
//!     ("a".to_string(), 1),
//!     ("b".to_string(), 2),
//!     |x, y| x + y,
//! );
//! assert_eq!(logged, ("ab".to_string(), 3));
//! ```

mod applicative;
mod constant;
mod functor;
mod higher;
mod identity;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use constant::{Const, ConstEffect};
pub use functor::Functor;
pub use higher::{
    EitherEffect, IdentityEffect, OptionEffect, ResultEffect, TypeConstructor, WriterEffect,
};
pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, First, Last, Max, Min, Product, Sum};
