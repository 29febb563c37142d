//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the result type of
//! [`Prism::get_or_modify`](crate::optics::Prism::get_or_modify): `Right`
//! carries the focus and `Left` hands the untouched source back. It is also the
//! source type of every `choice` combinator.
//!
//! # Examples
//!
//! ```rust
//! use optica::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let result = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Right` is the "interesting" case: mapping and the
/// [`EitherEffect`](crate::typeclass::EitherEffect) applicative act on it and
/// pass `Left` through untouched.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::control::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Right("x").right(), Some("x"));
    /// assert_eq!(Either::<i32, &str>::Left(1).right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies `function` to a left value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a right value.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<A> Either<A, A> {
    /// Extracts the value of an `Either` whose two sides share a type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::control::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::Left(3).merge(), 3);
    /// ```
    #[inline]
    pub fn merge(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

/// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

/// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(4), Either::Left(8))]
    #[case(Either::Right("ab"), Either::Right(2))]
    fn bimap_maps_the_present_side(
        #[case] input: Either<i32, &'static str>,
        #[case] expected: Either<i32, usize>,
    ) {
        assert_eq!(input.bimap(|x| x * 2, str::len), expected);
    }

    #[rstest]
    #[case(Either::Left(1), (Some(1), None))]
    #[case(Either::Right('r'), (None, Some('r')))]
    fn into_options_splits(
        #[case] input: Either<i32, char>,
        #[case] expected: (Option<i32>, Option<char>),
    ) {
        assert_eq!(input.into_options(), expected);
    }

    #[test]
    fn swap_exchanges_variants() {
        let left: Either<i32, String> = Either::Left(42);
        assert_eq!(left.swap(), Either::Right(42));
    }

    #[test]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("error".to_string()));
    }

    #[test]
    fn debug_names_the_variant() {
        let right: Either<(), u8> = Either::Right(7);
        assert_eq!(format!("{right:?}"), "Right(7)");
    }
}
