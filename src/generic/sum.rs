//! Labeled choices: the sum half of the generic representation.
//!
//! An enum with cases `Circle(f64)` and `Square(f64)` is represented as
//!
//! ```text
//! Sum<And<f64, Done>, Sum<And<f64, Done>, Void>>
//! ```
//!
//! where `This` holds the first case and `That` defers to the remaining ones.

use super::product::HList;
use super::shape::{Labels, Representation};
use crate::control::Either;
use crate::optics::{FunctionPrism, Prism};

/// The empty sum. It has no values, so it terminates every [`Sum`] chain and
/// represents enums without variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Void {}

/// Either the first case of a sum, or one of the remaining cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sum<V, Rest> {
    /// The first case, with its name.
    This {
        /// The case name.
        name: &'static str,
        /// The case payload.
        value: V,
    },
    /// One of the remaining cases.
    That(Rest),
}

/// Operations shared by every sum representation.
pub trait Coproduct: Sized {
    /// The number of cases.
    const CASES: usize;

    /// Returns the name of the case this value is in.
    fn case_name(&self) -> &'static str;

    /// Returns the position of the case this value is in.
    fn index(&self) -> usize;
}

impl Coproduct for Void {
    const CASES: usize = 0;

    fn case_name(&self) -> &'static str {
        match *self {}
    }

    fn index(&self) -> usize {
        match *self {}
    }
}

impl<V, Rest: Coproduct> Coproduct for Sum<V, Rest> {
    const CASES: usize = 1 + Rest::CASES;

    fn case_name(&self) -> &'static str {
        match self {
            Self::This { name, .. } => *name,
            Self::That(rest) => rest.case_name(),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::This { .. } => 0,
            Self::That(rest) => 1 + rest.index(),
        }
    }
}

impl<V, Rest> Sum<V, Rest> {
    /// Creates a value in the first case.
    #[must_use]
    pub const fn this(name: &'static str, value: V) -> Self {
        Self::This { name, value }
    }

    /// Collapses the sum with one function per branch.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::generic::{Sum, Void};
    ///
    /// let shape: Sum<f64, Sum<(f64, f64), Void>> = Sum::this("Circle", 1.5);
    /// let description = shape.fold(
    ///     |name, radius| format!("{name} {radius}"),
    ///     |_| "other".to_string(),
    /// );
    /// assert_eq!(description, "Circle 1.5");
    /// ```
    pub fn fold<T, OnThis, OnThat>(self, on_this: OnThis, on_that: OnThat) -> T
    where
        OnThis: FnOnce(&'static str, V) -> T,
        OnThat: FnOnce(Rest) -> T,
    {
        match self {
            Self::This { name, value } => on_this(name, value),
            Self::That(rest) => on_that(rest),
        }
    }

    /// Returns a Prism focusing on the payload of the first case, named
    /// `name` when rebuilt.
    #[must_use]
    pub fn this_prism(name: &'static str) -> impl Prism<Self, V> + Clone {
        FunctionPrism::new(
            |source: Self| match source {
                Self::This { value, .. } => Either::Right(value),
                that @ Self::That(_) => Either::Left(that),
            },
            move |value: V| Self::This { name, value },
        )
    }

    /// Returns a Prism focusing on the remaining cases.
    #[must_use]
    pub fn that_prism() -> impl Prism<Self, Rest> + Clone {
        FunctionPrism::new(
            |source: Self| match source {
                Self::That(rest) => Either::Right(rest),
                this @ Self::This { .. } => Either::Left(this),
            },
            |rest: Rest| Self::That(rest),
        )
    }
}

impl Representation for Void {
    fn labels(&self) -> Labels {
        match *self {}
    }
}

/// Reports the position of the active case together with its name and the
/// field names of its payload.
impl<V: HList, Rest: Representation> Representation for Sum<V, Rest> {
    fn labels(&self) -> Labels {
        match self {
            Self::This { name, value } => Labels::Case {
                index: 0,
                name: *name,
                fields: value.field_names(),
            },
            Self::That(rest) => rest.labels().shifted(),
        }
    }
}
