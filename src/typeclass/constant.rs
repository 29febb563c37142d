//! The constant functor and its effect brand.
//!
//! `Const<M, A>` stores an `M` and only pretends to hold an `A`. Mapping over it
//! does nothing, and combining two of them combines their `M` values with the
//! monoid. Traversing a structure with [`ConstEffect<M>`] therefore never
//! rebuilds the structure; it only accumulates a summary of the foci, which is
//! how `fold_map` and `get_all` are derived from `traverse`.

use std::fmt;
use std::marker::PhantomData;

use super::TypeConstructor;

/// A value of type `M` tagged with a phantom type `A`.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Const;
///
/// let summary: Const<Vec<i32>, String> = Const::new(vec![1, 2]);
/// assert_eq!(summary.into_inner(), vec![1, 2]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Const<M, A> {
    value: M,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<fn() -> A>,
}

impl<M, A> Const<M, A> {
    /// Creates a new `Const` holding `value`.
    #[inline]
    pub const fn new(value: M) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn into_inner(self) -> M {
        self.value
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn as_inner(&self) -> &M {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<M, B> {
        Const::new(self.value)
    }
}

impl<M: Clone, A> Clone for Const<M, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: PartialEq, A> PartialEq for Const<M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Eq, A> Eq for Const<M, A> {}

impl<M: fmt::Debug, A> fmt::Debug for Const<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Brand for [`Const<M, _>`].
///
/// It is an [`Applicative`](super::Applicative) whenever `M` is a
/// [`Monoid`](super::Monoid).
pub struct ConstEffect<M>(PhantomData<fn() -> M>);

impl<M> TypeConstructor for ConstEffect<M> {
    type WithType<A> = Const<M, A>;
}
