//! Identity wrapper - the chain that never fails.
//!
//! `Identity` holds exactly one value and `bind` always applies the given
//! function. It has no failure state: a panic in the bound function reaches
//! the caller untouched.

use std::fmt;

/// Wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monadex::Identity;
///
/// let result = Identity::new(5)
///     .bind(|n| n * 2)
///     .bind(|n| n.to_string());
/// assert_eq!(result.into_inner(), "10");
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Applies `function` to the wrapped value and wraps the result.
    ///
    /// The function is always invoked, default values included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::Identity;
    ///
    /// assert_eq!(Identity::new(0).bind(|n| n + 1), Identity::new(1));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
