//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the carrier of [`IdentityEffect`](super::IdentityEffect). A
//! traversal run with it performs no effect at all, which is how
//! [`Traversal::modify`](crate::optics::Traversal::modify) and
//! [`Traversal::set`](crate::optics::Traversal::set) are defined.

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[case(-7)]
    fn into_inner_returns_wrapped_value(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[test]
    fn from_wraps_value() {
        let wrapped: Identity<&str> = "text".into();
        assert_eq!(wrapped.as_inner(), &"text");
    }
}
