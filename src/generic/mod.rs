//! Generic sum-of-products representation.
//!
//! Every struct is a product of named fields and every enum is a sum of named
//! cases. This module provides a structural encoding of both so code can be
//! written once against the shape of a type instead of against the type:
//!
//! - [`And`] / [`Done`]: a labeled heterogeneous list of fields
//! - [`Sum`] / [`Void`]: a labeled choice between cases
//! - [`Generic`]: the mapping between a concrete type and its encoding
//! - [`Shape`]: the field or case names a type declares, checked at runtime
//!   by [`Generic::checked_from_generic`] against the [`Labels`] a
//!   representation carries
//!
//! `#[derive(Generic)]` writes the mapping for a type, so the encoding cannot
//! drift from the declaration. The mapping is an isomorphism, exposed as an
//! optic by [`generic_iso`].
//!
//! # Example
//!
//! ```
//! use optica::generic::{generic_iso, And, Done, Generic, Shape};
//! use optica::optics::{Iso, Lens};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Generic for Point {
//!     type Repr = And<i32, And<i32, Done>>;
//!
//!     const SHAPE: Shape = Shape::product("Point", &["x", "y"]);
//!
//!     fn to_generic(self) -> Self::Repr {
//!         And::new("x", self.x, And::new("y", self.y, Done))
//!     }
//!
//!     fn from_generic(repr: Self::Repr) -> Self {
//!         Self { x: repr.value, y: repr.rest.value }
//!     }
//! }
//!
//! let x = generic_iso::<Point>().compose_lens(And::<i32, And<i32, Done>>::value_lens());
//! assert_eq!(x.set(Point { x: 1, y: 2 }, 5), Point { x: 5, y: 2 });
//! ```

mod product;
mod shape;
mod sum;

pub use product::{And, Done, HList};
pub use shape::{Labels, Representation, Shape, ShapeError, ShapeKind};
pub use sum::{Coproduct, Sum, Void};

use crate::optics::{FunctionIso, Iso};

/// A type with a structural sum-of-products representation.
///
/// `from_generic(to_generic(value)) == value` must hold for every value, and
/// `to_generic(from_generic(repr)) == repr` for every representation whose
/// labels match [`Generic::SHAPE`].
pub trait Generic: Sized {
    /// The structural encoding of `Self`.
    type Repr: Representation;

    /// The field names or case names `Self` declares, in declaration order.
    const SHAPE: Shape;

    /// Encodes a value.
    fn to_generic(self) -> Self::Repr;

    /// Decodes a representation. Labels are not inspected.
    fn from_generic(repr: Self::Repr) -> Self;

    /// Checks the labels of `repr` against [`Generic::SHAPE`].
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] when the labels carried by `repr` do not
    /// match the declared fields or cases.
    fn validate_shape(repr: &Self::Repr) -> Result<(), ShapeError> {
        Self::SHAPE.validate(&repr.labels())
    }

    /// Decodes a representation after checking its labels.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] when the representation was built for a
    /// different declaration of `Self`.
    fn checked_from_generic(repr: Self::Repr) -> Result<Self, ShapeError> {
        Self::validate_shape(&repr)?;
        Ok(Self::from_generic(repr))
    }
}

/// Returns the isomorphism between `T` and its generic representation.
#[must_use]
pub fn generic_iso<T: Generic>() -> impl Iso<T, T::Repr> + Clone {
    FunctionIso::new(T::to_generic, T::from_generic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Lens;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    enum Light {
        Red,
        Blinking(u8),
    }

    type LightRepr = Sum<Done, Sum<And<u8, Done>, Void>>;

    impl Generic for Light {
        type Repr = LightRepr;

        const SHAPE: Shape = Shape::sum("Light", &["Red", "Blinking"], &[&[], &["0"]]);

        fn to_generic(self) -> Self::Repr {
            match self {
                Self::Red => Sum::this("Red", Done),
                Self::Blinking(rate) => Sum::That(Sum::this("Blinking", And::new("0", rate, Done))),
            }
        }

        fn from_generic(repr: Self::Repr) -> Self {
            match repr {
                Sum::This { .. } => Self::Red,
                Sum::That(Sum::This { value, .. }) => Self::Blinking(value.value),
                Sum::That(Sum::That(void)) => match void {},
            }
        }
    }

    #[rstest]
    #[case(Light::Red)]
    #[case(Light::Blinking(3))]
    fn round_trips(#[case] light: Light) {
        let iso = generic_iso::<Light>();
        assert_eq!(iso.reverse_get(iso.get(light.clone())), light);
    }

    #[test]
    fn checked_decode_rejects_unknown_cases() {
        let stale: LightRepr = Sum::That(Sum::this("Flashing", And::new("0", 1, Done)));
        assert_eq!(
            Light::checked_from_generic(stale),
            Err(ShapeError::UnknownCase {
                type_name: "Light",
                expected: vec!["Red", "Blinking"],
                found: "Flashing".to_string(),
            })
        );
    }

    #[rstest]
    #[case(Sum::this("Blinking", Done))]
    #[case(Sum::That(Sum::this("Red", And::new("0", 1, Done))))]
    fn checked_decode_rejects_cases_at_the_wrong_position(#[case] stale: LightRepr) {
        assert!(matches!(
            Light::checked_from_generic(stale),
            Err(ShapeError::MisplacedCase { type_name: "Light", .. })
        ));
    }

    #[test]
    fn checked_decode_rejects_stale_case_fields() {
        let stale: LightRepr = Sum::That(Sum::this("Blinking", And::new("rate", 1, Done)));
        assert_eq!(
            Light::checked_from_generic(stale),
            Err(ShapeError::CaseMismatch {
                type_name: "Light",
                case: "Blinking",
                expected: vec!["0"],
                found: vec!["rate"],
            })
        );
    }

    #[test]
    fn checked_decode_accepts_matching_labels() {
        let repr = Light::Blinking(2).to_generic();
        assert_eq!(Light::checked_from_generic(repr), Ok(Light::Blinking(2)));
    }

    #[test]
    fn lens_through_the_representation() {
        #[derive(Debug, Clone, PartialEq)]
        struct Label {
            text: String,
        }

        impl Generic for Label {
            type Repr = And<String, Done>;

            const SHAPE: Shape = Shape::product("Label", &["text"]);

            fn to_generic(self) -> Self::Repr {
                And::new("text", self.text, Done)
            }

            fn from_generic(repr: Self::Repr) -> Self {
                Self { text: repr.value }
            }
        }

        let text = generic_iso::<Label>().compose_lens(And::<String, Done>::value_lens());
        let label = Label { text: "a".to_string() };
        assert_eq!(text.get(&label), "a");
        assert_eq!(text.modify(label, |text| text + "b").text, "ab");
    }
}
