//! Monoid type class - semigroups with an identity element.
//!
//! The identity element is what a traversal with no focus folds to: the
//! summary of "nothing" under [`ConstEffect`](super::ConstEffect).
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a          // left identity
//! a.combine(T::empty()) == a          // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, First, Last, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::Monoid;
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::new());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3], 6)]
    fn sum_combine_all(#[case] values: Vec<i32>, #[case] expected: i32) {
        let total = Sum::combine_all(values.into_iter().map(Sum));
        assert_eq!(total, Sum(expected));
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![true, true], true)]
    #[case(vec![true, false], false)]
    fn all_combine_all(#[case] values: Vec<bool>, #[case] expected: bool) {
        assert_eq!(All::combine_all(values.into_iter().map(All)), All(expected));
    }

    #[test]
    fn product_identity_is_one() {
        assert_eq!(Product::<i64>::empty(), Product(1));
        assert!(Product::<u8>::empty().combine(Product(9)) == Product(9));
    }

    proptest! {
        #[test]
        fn prop_vec_identity(values in prop::collection::vec(any::<i16>(), 0..10)) {
            prop_assert_eq!(Vec::empty().combine(values.clone()), values.clone());
            prop_assert_eq!(values.clone().combine(Vec::empty()), values);
        }

        #[test]
        fn prop_first_identity(value in proptest::option::of(any::<i32>())) {
            prop_assert_eq!(First::empty().combine(First(value)), First(value));
            prop_assert_eq!(First(value).combine(First::empty()), First(value));
        }
    }
}
