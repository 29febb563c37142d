//! Control structures used across the optics.
//!
//! - [`Either`]: A value that can be one of two types. It is the result of
//!   `get_or_modify` and the source of `choice` combinators.
//!
//! # Examples
//!
//! ```rust
//! use optica::control::Either;
//!
//! let value: Either<i32, String> = Either::Left(42);
//! assert_eq!(value.map_left(|n| n + 1).left(), Some(43));
//! ```

mod either;

pub use either::Either;
