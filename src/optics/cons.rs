//! Cons prisms: a sequence viewed as its first element and the rest.
//!
//! [`Cons::cons`] is a [`Prism`] from a sequence to `(head, tail)`. It does not
//! match an empty sequence, and `reverse_get` prepends.
//!
//! # Examples
//!
//! ```
//! use optica::control::Either;
//! use optica::optics::{Cons, Prism};
//!
//! let cons = Vec::<i32>::cons();
//!
//! assert_eq!(cons.get_or_modify(vec![1, 2, 3]), Either::Right((1, vec![2, 3])));
//! assert_eq!(cons.get_or_modify(vec![]), Either::Left(vec![]));
//! assert_eq!(cons.reverse_get((0, vec![1])), vec![0, 1]);
//! ```

use super::prism::Prism;
use crate::control::Either;

/// A trait for sequences that can be split into a first element and the rest.
pub trait Cons: Sized {
    /// The element type.
    type Element;

    /// The Prism type returned by [`Cons::cons`].
    type ConsPrism: Prism<Self, (Self::Element, Self)>;

    /// Returns a Prism splitting off the first element.
    fn cons() -> Self::ConsPrism;

    /// Returns the first element, if any.
    fn first_option(self) -> Option<Self::Element> {
        Self::cons().preview(self).map(|(head, _)| head)
    }

    /// Returns everything but the first element, if the sequence is non-empty.
    fn tail_option(self) -> Option<Self> {
        Self::cons().preview(self).map(|(_, tail)| tail)
    }
}

stateless_optic! {
    /// A Prism splitting a `Vec` into its first element and the rest.
    VecCons<T>
}

impl<T> Prism<Vec<T>, (T, Vec<T>)> for VecCons<T> {
    fn get_or_modify(&self, mut source: Vec<T>) -> Either<Vec<T>, (T, Vec<T>)> {
        if source.is_empty() {
            Either::Left(source)
        } else {
            let head = source.remove(0);
            Either::Right((head, source))
        }
    }

    fn reverse_get(&self, (head, mut tail): (T, Vec<T>)) -> Vec<T> {
        tail.insert(0, head);
        tail
    }
}

impl<T> Cons for Vec<T> {
    type Element = T;
    type ConsPrism = VecCons<T>;

    fn cons() -> Self::ConsPrism {
        VecCons::new()
    }
}

/// A Prism splitting a `String` into its first `char` and the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCons;

impl Prism<String, (char, String)> for StringCons {
    fn get_or_modify(&self, source: String) -> Either<String, (char, String)> {
        let mut characters = source.chars();
        match characters.next() {
            Some(head) => Either::Right((head, characters.as_str().to_owned())),
            None => Either::Left(String::new()),
        }
    }

    fn reverse_get(&self, (head, mut tail): (char, String)) -> String {
        tail.insert(0, head);
        tail
    }
}

impl Cons for String {
    type Element = char;
    type ConsPrism = StringCons;

    fn cons() -> Self::ConsPrism {
        StringCons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], None, None)]
    #[case(vec![7], Some(7), Some(vec![]))]
    #[case(vec![1, 2, 3], Some(1), Some(vec![2, 3]))]
    fn vec_first_and_tail(
        #[case] input: Vec<i32>,
        #[case] first: Option<i32>,
        #[case] tail: Option<Vec<i32>>,
    ) {
        assert_eq!(input.clone().first_option(), first);
        assert_eq!(input.tail_option(), tail);
    }

    #[test]
    fn string_cons_splits_on_char_boundary() {
        let cons = String::cons();
        assert_eq!(
            cons.get_or_modify("ñandu".to_string()),
            Either::Right(('ñ', "andu".to_string()))
        );
        assert_eq!(cons.reverse_get(('¡', "hola".to_string())), "¡hola");
        assert_eq!(String::new().first_option(), None);
    }

    #[test]
    fn cons_modify_rewrites_head() {
        let cons = Vec::<i32>::cons();
        assert_eq!(cons.modify(vec![1, 2], |(head, tail)| (head * 10, tail)), vec![10, 2]);
        assert_eq!(cons.modify(vec![], |(head, tail)| (head * 10, tail)), Vec::<i32>::new());
    }

    #[test]
    fn cons_round_trips() {
        let cons = Vec::<char>::cons();
        let built = cons.reverse_get(('a', vec!['b']));
        assert_eq!(cons.get_or_modify(built), Either::Right(('a', vec!['b'])));
    }
}
