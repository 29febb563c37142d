//! Structural shapes and their runtime validation.
//!
//! A [`Shape`] records what a type looks like structurally: the field names
//! of a product, in declaration order, or the case names of a sum, in
//! declaration order. Every [`Generic`](super::Generic) type carries its shape
//! as a constant, and a representation can be checked against it before it is
//! turned back into a concrete value.

use thiserror::Error;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A struct: every field is present.
    Product,
    /// An enum: exactly one case is present.
    Sum,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => formatter.write_str("product"),
            Self::Sum => formatter.write_str("sum"),
        }
    }
}

/// The structural description of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The name of the described type.
    pub type_name: &'static str,
    /// Whether the type is a product or a sum.
    pub kind: ShapeKind,
    /// Field names for a product, case names for a sum.
    pub labels: &'static [&'static str],
    /// For a sum, the field names of each case, aligned with `labels`.
    /// Empty for a product.
    pub case_fields: &'static [&'static [&'static str]],
}

/// The labels a representation actually carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Labels {
    /// Every field name of a product, in order.
    Product(Vec<&'static str>),
    /// The active case of a sum.
    Case {
        /// How many `That` layers lead to the case.
        index: usize,
        /// The case name.
        name: &'static str,
        /// The field names of the case payload, in order.
        fields: Vec<&'static str>,
    },
}

impl Labels {
    /// Moves a case one position further down the sum.
    #[must_use]
    pub fn shifted(self) -> Self {
        match self {
            Self::Case {
                index,
                name,
                fields,
            } => Self::Case {
                index: index + 1,
                name,
                fields,
            },
            product @ Self::Product(_) => product,
        }
    }
}

/// The error returned when a representation does not fit a shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A product representation whose field names differ from the declared
    /// ones.
    #[error("{type_name}: expected fields {expected:?}, found {found:?}")]
    Mismatch {
        /// The type being rebuilt.
        type_name: &'static str,
        /// The declared field names.
        expected: Vec<&'static str>,
        /// The field names carried by the representation.
        found: Vec<&'static str>,
    },
    /// A sum representation whose case name is not one of the declared cases.
    #[error("{type_name}: unknown case {found:?}, expected one of {expected:?}")]
    UnknownCase {
        /// The type being rebuilt.
        type_name: &'static str,
        /// The declared case names.
        expected: Vec<&'static str>,
        /// The case name carried by the representation.
        found: String,
    },
    /// A declared case name found at a position that decodes as another case.
    #[error("{type_name}: case {found:?} at position {index}, where {declared:?} is declared")]
    MisplacedCase {
        /// The type being rebuilt.
        type_name: &'static str,
        /// The case name carried by the representation.
        found: &'static str,
        /// The position of the case in the representation.
        index: usize,
        /// The case declared at that position, if any.
        declared: Option<&'static str>,
    },
    /// A case whose payload field names differ from the declared ones.
    #[error("{type_name}::{case}: expected fields {expected:?}, found {found:?}")]
    CaseMismatch {
        /// The type being rebuilt.
        type_name: &'static str,
        /// The case name.
        case: &'static str,
        /// The declared field names of the case.
        expected: Vec<&'static str>,
        /// The field names carried by the representation.
        found: Vec<&'static str>,
    },
}

impl Shape {
    /// Describes a product with the given field names.
    #[must_use]
    pub const fn product(type_name: &'static str, fields: &'static [&'static str]) -> Self {
        Self {
            type_name,
            kind: ShapeKind::Product,
            labels: fields,
            case_fields: &[],
        }
    }

    /// Describes a sum with the given case names and, for each case, its
    /// field names.
    #[must_use]
    pub const fn sum(
        type_name: &'static str,
        cases: &'static [&'static str],
        case_fields: &'static [&'static [&'static str]],
    ) -> Self {
        Self {
            type_name,
            kind: ShapeKind::Sum,
            labels: cases,
            case_fields,
        }
    }

    /// Checks the labels observed on a representation against this shape.
    ///
    /// A product matches when it lists exactly the declared fields, in order.
    /// A sum matches when its case is declared at the position it occupies
    /// and the case payload lists exactly the declared fields of that case.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::Mismatch`] for a product whose fields differ
    /// - [`ShapeError::UnknownCase`] for a case that is not declared
    /// - [`ShapeError::MisplacedCase`] for a declared case at another position
    /// - [`ShapeError::CaseMismatch`] for a case whose fields differ
    ///
    /// # Example
    ///
    /// ```
    /// use optica::generic::{Labels, Shape, ShapeError};
    ///
    /// let point = Shape::product("Point", &["x", "y"]);
    /// assert!(point.validate(&Labels::Product(vec!["x", "y"])).is_ok());
    /// assert!(matches!(
    ///     point.validate(&Labels::Product(vec!["y", "x"])),
    ///     Err(ShapeError::Mismatch { type_name: "Point", .. })
    /// ));
    ///
    /// let direction = Shape::sum("Direction", &["Up", "Down"], &[&[], &[]]);
    /// let misplaced = Labels::Case { index: 0, name: "Down", fields: vec![] };
    /// assert!(matches!(
    ///     direction.validate(&misplaced),
    ///     Err(ShapeError::MisplacedCase { declared: Some("Up"), .. })
    /// ));
    /// ```
    pub fn validate(&self, found: &Labels) -> Result<(), ShapeError> {
        match self.check(found) {
            Ok(()) => {
                tracing::debug!(type_name = self.type_name, kind = %self.kind, "shape validated");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(
                    type_name = self.type_name,
                    expected = ?self.labels,
                    found = ?found,
                    %error,
                    "shape mismatch"
                );
                Err(error)
            }
        }
    }

    fn check(&self, found: &Labels) -> Result<(), ShapeError> {
        match (self.kind, found) {
            (ShapeKind::Product, Labels::Product(fields)) if self.labels == fields.as_slice() => {
                Ok(())
            }
            (ShapeKind::Product, Labels::Product(fields)) => Err(ShapeError::Mismatch {
                type_name: self.type_name,
                expected: self.labels.to_vec(),
                found: fields.clone(),
            }),
            (
                ShapeKind::Sum,
                Labels::Case {
                    index,
                    name,
                    fields,
                },
            ) => self.check_case(*index, *name, fields),
            (ShapeKind::Product, Labels::Case { name, .. }) => Err(ShapeError::Mismatch {
                type_name: self.type_name,
                expected: self.labels.to_vec(),
                found: vec![*name],
            }),
            (ShapeKind::Sum, Labels::Product(fields)) => Err(ShapeError::UnknownCase {
                type_name: self.type_name,
                expected: self.labels.to_vec(),
                found: fields.join(", "),
            }),
        }
    }

    fn check_case(
        &self,
        index: usize,
        name: &'static str,
        fields: &[&'static str],
    ) -> Result<(), ShapeError> {
        if !self.labels.contains(&name) {
            return Err(ShapeError::UnknownCase {
                type_name: self.type_name,
                expected: self.labels.to_vec(),
                found: name.to_string(),
            });
        }
        let declared = self.labels.get(index).copied();
        if declared != Some(name) {
            return Err(ShapeError::MisplacedCase {
                type_name: self.type_name,
                found: name,
                index,
                declared,
            });
        }
        let expected = self.case_fields.get(index).copied().unwrap_or_default();
        if expected != fields {
            return Err(ShapeError::CaseMismatch {
                type_name: self.type_name,
                case: name,
                expected: expected.to_vec(),
                found: fields.to_vec(),
            });
        }
        Ok(())
    }
}

/// A value of the generic representation that can report the labels it
/// carries.
pub trait Representation {
    /// The field names of a product, or the position, name and field names
    /// of the active case of a sum.
    fn labels(&self) -> Labels;
}
