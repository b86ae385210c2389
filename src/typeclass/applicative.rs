//! Applicative type class - combining independent wrapped values.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value,
//! and `map2`/`map3`, which combine several wrapped values with one function.
//! For `Maybe` a single `Nothing` makes the result `Nothing`; for `Either`
//! the first bad path (left to right) supplies the cause.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadex::typeclass::Applicative;
//! use monadex::Maybe;
//!
//! let width = Maybe::wrap(3);
//! let height = Maybe::wrap(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Maybe::Actual(12));
//! ```

use super::functor::Functor;
use crate::either::Either;
use crate::identity::Identity;
use crate::maybe::Maybe;

/// A type class for functors that can lift values and combine wrapped values.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// ```rust
    /// use monadex::typeclass::Applicative;
    /// use monadex::Maybe;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted, Maybe::Actual(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring both to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring both to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// ```rust
    /// use monadex::typeclass::Applicative;
    /// use monadex::Identity;
    ///
    /// let function = Identity::new(|n: i32| n + 1);
    /// assert_eq!(function.apply(Identity::new(1)), Identity::new(2));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity::new(function(
            self.into_inner(),
            second.into_inner(),
            third.into_inner(),
        ))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Actual(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Actual(first), Maybe::Actual(second)) => Maybe::Actual(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Actual(first), Maybe::Actual(second), Maybe::Actual(third)) => {
                Maybe::Actual(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Either<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Either<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, E> {
        Either::GoodPath(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<B, E>, function: F) -> Either<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::GoodPath(first), Either::GoodPath(second)) => {
                Either::GoodPath(function(first, second))
            }
            (Self::BadPath(cause), _) | (Self::GoodPath(_), Either::BadPath(cause)) => {
                Either::BadPath(cause)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<B, E>, third: Either<C, E>, function: F) -> Either<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.map2(second, |first, second| (first, second))
            .map2(third, |(first, second), third| function(first, second, third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<B, E>) -> Either<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
