//! Monad type class - sequencing computations within a context.
//!
//! `flat_map` chains a step whose result decides the next step. The
//! instances here are the lawful ones: `flat_map` checks only the
//! container's shape, never whether the value is a default value. The
//! default-aware chaining is the inherent `bind` family on each type.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadex::typeclass::Monad;
//! use monadex::Maybe;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::wrap("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::wrap(n * 2));
//! assert_eq!(result, Maybe::Actual(84));
//! ```

use super::applicative::Applicative;
use crate::either::Either;
use crate::identity::Identity;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::typeclass::Monad;
    /// use monadex::Either;
    ///
    /// let checked: Either<u32, &str> = Either::wrap(7_u32)
    ///     .flat_map(|n| if n % 2 == 1 { Either::GoodPath(n) } else { Either::BadPath("even") });
    /// assert_eq!(checked, Either::GoodPath(7));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, after `Option::and_then` and `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// ```rust
    /// use monadex::typeclass::Monad;
    /// use monadex::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(5).then(Maybe::wrap("next")), Maybe::Actual("next"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::wrap("next")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Actual(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Either<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Either<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(T) -> Either<B, E>,
    {
        match self {
            Self::GoodPath(value) => function(value),
            Self::BadPath(cause) => Either::BadPath(cause),
        }
    }
}
