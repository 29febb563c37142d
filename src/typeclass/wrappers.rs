//! Newtype wrappers selecting a particular `Semigroup` / `Monoid`.
//!
//! The same focus type can be summarised in different ways by
//! [`Traversal::fold_map`](crate::optics::Traversal::fold_map): its count with
//! [`Sum`], its first focus with [`First`], a universal check with [`All`], and
//! so on.
//!
//! | Wrapper | combine | identity |
//! |---|---|---|
//! | [`Sum`] | `a + b` | `A::default()` |
//! | [`Product`] | `a * b` | `1` |
//! | [`Max`] | larger | (semigroup only) |
//! | [`Min`] | smaller | (semigroup only) |
//! | [`First`] | leftmost `Some` | `First(None)` |
//! | [`Last`] | rightmost `Some` | `Last(None)` |
//! | [`All`] | `a && b` | `All(true)` |
//! | [`Any`] | `a \|\| b` | `Any(false)` |

macro_rules! wrapper {
    ($(#[$attribute:meta])* $name:ident<$parameter:ident>($inner:ty)) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<$parameter>(pub $inner);

        impl<$parameter> $name<$parameter> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }
    };
    ($(#[$attribute:meta])* $name:ident($inner:ty)) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the inner value.
            #[inline]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }
    };
}

wrapper!(
    /// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    ///
    /// ```rust
    /// use optica::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)).into_inner(), 8);
    /// ```
    Sum<A>(A)
);

wrapper!(
    /// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product<A>(A)
);

wrapper!(
    /// Keeps the larger of two values.
    Max<A>(A)
);

wrapper!(
    /// Keeps the smaller of two values.
    Min<A>(A)
);

wrapper!(
    /// Keeps the leftmost present value.
    First<A>(Option<A>)
);

wrapper!(
    /// Keeps the rightmost present value.
    Last<A>(Option<A>)
);

wrapper!(
    /// Boolean conjunction.
    All(bool)
);

wrapper!(
    /// Boolean disjunction.
    Any(bool)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_into_inner_round_trip() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(First::new(Some('a')).into_inner(), Some('a'));
        assert!(All::new(true).into_inner());
        assert!(!Any::new(false).into_inner());
    }

    #[test]
    fn default_sum_is_zero() {
        assert_eq!(Sum::<u32>::default(), Sum(0));
    }
}
