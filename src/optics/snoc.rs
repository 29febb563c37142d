//! Snoc prisms: a sequence viewed as everything but its last element and the
//! last element.
//!
//! # Examples
//!
//! ```
//! use optica::control::Either;
//! use optica::optics::{Prism, Snoc};
//!
//! let snoc = Vec::<i32>::snoc();
//!
//! assert_eq!(snoc.get_or_modify(vec![1, 2, 3]), Either::Right((vec![1, 2], 3)));
//! assert_eq!(snoc.reverse_get((vec![1], 2)), vec![1, 2]);
//! assert_eq!(vec![4, 5].last_option(), Some(5));
//! ```

use super::prism::Prism;
use crate::control::Either;

/// A trait for sequences that can be split into an initial part and a last
/// element.
pub trait Snoc: Sized {
    /// The element type.
    type Element;

    /// The Prism type returned by [`Snoc::snoc`].
    type SnocPrism: Prism<Self, (Self, Self::Element)>;

    /// Returns a Prism splitting off the last element.
    fn snoc() -> Self::SnocPrism;

    /// Returns everything but the last element, if the sequence is non-empty.
    fn init_option(self) -> Option<Self> {
        Self::snoc().preview(self).map(|(init, _)| init)
    }

    /// Returns the last element, if any.
    fn last_option(self) -> Option<Self::Element> {
        Self::snoc().preview(self).map(|(_, last)| last)
    }
}

stateless_optic! {
    /// A Prism splitting a `Vec` into its initial part and its last element.
    VecSnoc<T>
}

impl<T> Prism<Vec<T>, (Vec<T>, T)> for VecSnoc<T> {
    fn get_or_modify(&self, mut source: Vec<T>) -> Either<Vec<T>, (Vec<T>, T)> {
        match source.pop() {
            Some(last) => Either::Right((source, last)),
            None => Either::Left(source),
        }
    }

    fn reverse_get(&self, (mut init, last): (Vec<T>, T)) -> Vec<T> {
        init.push(last);
        init
    }
}

impl<T> Snoc for Vec<T> {
    type Element = T;
    type SnocPrism = VecSnoc<T>;

    fn snoc() -> Self::SnocPrism {
        VecSnoc::new()
    }
}

/// A Prism splitting a `String` into its initial part and its last `char`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSnoc;

impl Prism<String, (String, char)> for StringSnoc {
    fn get_or_modify(&self, mut source: String) -> Either<String, (String, char)> {
        match source.pop() {
            Some(last) => Either::Right((source, last)),
            None => Either::Left(source),
        }
    }

    fn reverse_get(&self, (mut init, last): (String, char)) -> String {
        init.push(last);
        init
    }
}

impl Snoc for String {
    type Element = char;
    type SnocPrism = StringSnoc;

    fn snoc() -> Self::SnocPrism {
        StringSnoc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", None, None)]
    #[case("a", Some(""), Some('a'))]
    #[case("añ", Some("a"), Some('ñ'))]
    fn string_init_and_last(
        #[case] input: &str,
        #[case] init: Option<&str>,
        #[case] last: Option<char>,
    ) {
        assert_eq!(input.to_string().init_option().as_deref(), init);
        assert_eq!(input.to_string().last_option(), last);
    }

    #[test]
    fn snoc_set_replaces_last() {
        let snoc = Vec::<i32>::snoc();
        assert_eq!(snoc.set(vec![1, 2, 3], (vec![9], 8)), vec![9, 8]);
        assert_eq!(snoc.set(vec![], (vec![9], 8)), Vec::<i32>::new());
    }

    #[test]
    fn snoc_round_trips() {
        let snoc = String::snoc();
        assert_eq!(
            snoc.get_or_modify(snoc.reverse_get(("ab".to_string(), 'c'))),
            Either::Right(("ab".to_string(), 'c'))
        );
    }
}
