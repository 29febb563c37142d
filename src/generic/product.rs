//! Labeled heterogeneous lists: the product half of the generic
//! representation.
//!
//! A struct with fields `x: i32` and `y: String` is represented as
//!
//! ```text
//! And { name: "x", value: i32, rest: And { name: "y", value: String, rest: Done } }
//! ```

use super::shape::{Labels, Representation};
use crate::optics::{FunctionLens, Lens};

/// The empty product. Terminates every [`And`] chain and represents unit
/// structs and unit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Done;

/// A named field followed by the rest of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct And<V, Rest> {
    /// The field name, or its position for tuple fields.
    pub name: &'static str,
    /// The field value.
    pub value: V,
    /// The remaining fields.
    pub rest: Rest,
}

/// Operations shared by every product representation.
pub trait HList: Sized {
    /// The number of fields.
    const LEN: usize;

    /// Appends the field names, in declaration order, to `names`.
    fn collect_names(&self, names: &mut Vec<&'static str>);

    /// Returns the number of fields.
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` for the empty product.
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Returns the field names in declaration order.
    fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        self.collect_names(&mut names);
        names
    }

    /// Puts a new field in front of this product.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::generic::{Done, HList};
    ///
    /// let point = Done.push("y", 2).push("x", 1);
    /// assert_eq!(point.field_names(), vec!["x", "y"]);
    /// assert_eq!(point.value, 1);
    /// ```
    fn push<V>(self, name: &'static str, value: V) -> And<V, Self> {
        And::new(name, value, self)
    }
}

impl HList for Done {
    const LEN: usize = 0;

    fn collect_names(&self, _names: &mut Vec<&'static str>) {}
}

impl<V, Rest: HList> HList for And<V, Rest> {
    const LEN: usize = 1 + Rest::LEN;

    fn collect_names(&self, names: &mut Vec<&'static str>) {
        names.push(self.name);
        self.rest.collect_names(names);
    }
}

impl<V, Rest> And<V, Rest> {
    /// Creates a field cell.
    #[must_use]
    pub const fn new(name: &'static str, value: V, rest: Rest) -> Self {
        Self { name, value, rest }
    }

    /// Returns the value of the first field.
    pub const fn head(&self) -> &V {
        &self.value
    }

    /// Returns the remaining fields.
    pub const fn tail(&self) -> &Rest {
        &self.rest
    }

    /// Returns a Lens focusing on the value of the first field.
    ///
    /// Setting keeps the field name.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::generic::{And, Done};
    /// use optica::optics::Lens;
    ///
    /// let cell = And::new("x", 1, Done);
    /// assert_eq!(And::<i32, Done>::value_lens().set(cell, 5).value, 5);
    /// ```
    #[must_use]
    pub fn value_lens() -> impl Lens<Self, V> + Clone
    where
        V: Clone,
    {
        FunctionLens::new(
            |cell: &Self| cell.value.clone(),
            |cell: Self, value: V| Self { value, ..cell },
        )
    }

    /// Returns a Lens focusing on the remaining fields.
    #[must_use]
    pub fn rest_lens() -> impl Lens<Self, Rest> + Clone
    where
        Rest: Clone,
    {
        FunctionLens::new(
            |cell: &Self| cell.rest.clone(),
            |cell: Self, rest: Rest| Self { rest, ..cell },
        )
    }
}

impl Representation for Done {
    fn labels(&self) -> Labels {
        Labels::Product(Vec::new())
    }
}

impl<V, Rest: HList> Representation for And<V, Rest> {
    fn labels(&self) -> Labels {
        Labels::Product(self.field_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Point = And<i32, And<String, Done>>;

    fn point() -> Point {
        Done.push("label", "origin".to_string()).push("x", 0)
    }

    #[test]
    fn field_names_follow_declaration_order() {
        assert_eq!(point().field_names(), vec!["x", "label"]);
        assert_eq!(point().len(), 2);
        assert!(Done.is_empty());
    }

    #[test]
    fn head_and_tail() {
        let point = point();
        assert_eq!(*point.head(), 0);
        assert_eq!(point.tail().value, "origin");
    }

    #[rstest]
    #[case(0, 7)]
    #[case(-3, 4)]
    fn value_lens_keeps_the_name(#[case] start: i32, #[case] expected: i32) {
        let lens = Point::value_lens();
        let updated = lens.modify(And { value: start, ..point() }, |x| x + 7);
        assert_eq!(updated.value, expected);
        assert_eq!(updated.name, "x");
    }

    #[test]
    fn rest_lens_composes_into_later_fields() {
        let label = Point::rest_lens().compose(And::<String, Done>::value_lens());
        assert_eq!(label.get(&point()), "origin");
        assert_eq!(label.set(point(), "home".to_string()).rest.value, "home");
    }
}
