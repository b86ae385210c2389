//! Functor type class - mapping over container values.
//!
//! `fmap` transforms the wrapped value while keeping the container's shape.
//! Unlike the inherent `bind` family it is purely structural: an
//! `Actual(0)` is mapped like any other `Actual`, so the laws below hold.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadex::typeclass::Functor;
//! use monadex::Maybe;
//!
//! let transformed: Maybe<String> = Maybe::wrap(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Actual("5".to_string()));
//!
//! // `fmap` does not short-circuit on the default value.
//! assert_eq!(Maybe::wrap(0).fmap(|n| n + 1), Maybe::Actual(1));
//! ```

use super::higher::TypeConstructor;
use crate::either::Either;
use crate::identity::Identity;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::typeclass::Functor;
    /// use monadex::Identity;
    ///
    /// assert_eq!(Identity::new(5).fmap(|n| n * 2), Identity::new(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::typeclass::Functor;
    /// use monadex::Maybe;
    ///
    /// let name = Maybe::wrap("hello".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Maybe::Actual(5));
    /// // name is still available here
    /// assert!(name.is_actual());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// ```rust
    /// use monadex::typeclass::Functor;
    /// use monadex::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(5).void(), Maybe::Actual(()));
    /// assert_eq!(Maybe::<i32>::Nothing.void(), Maybe::Nothing);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.into_inner()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Actual(value) => Maybe::Actual(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

// =============================================================================
// Either<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Either<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::GoodPath(value) => Either::GoodPath(function(value)),
            Self::BadPath(cause) => Either::BadPath(cause),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::GoodPath(value) => Either::GoodPath(function(value)),
            Self::BadPath(cause) => Either::BadPath(cause.clone()),
        }
    }
}
