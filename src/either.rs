//! Either - a result whose chain remembers why it stopped.
//!
//! `Either<T, E>` is either `GoodPath(value)` or `BadPath(cause)`. Binding a
//! function over it follows these rules:
//!
//! | current state                  | bound function | result                            |
//! |--------------------------------|----------------|-----------------------------------|
//! | `GoodPath(v)`, `v` not default | invoked        | `GoodPath(f(v))`                  |
//! | `GoodPath(v)`, `f` fails       | invoked        | `BadPath(failure)`                |
//! | `GoodPath(default)`            | skipped        | `BadPath(BindError::DefaultValue)`|
//! | `BadPath(e)`                   | skipped        | `BadPath(e)`, same cause          |
//!
//! Once on the bad path every later bind passes the cause through untouched,
//! so the first failure is what comes out at the end of the chain.
//!
//! The error type defaults to [`Cause`], which accepts any
//! `std::error::Error` and hands it back through [`Cause::downcast_ref`].
//!
//! # Examples
//!
//! ```rust
//! use monadex::Either;
//!
//! let result: Either<String> = Either::wrap(5)
//!     .bind(|n| n * 2)
//!     .bind(|n| n.to_string());
//! assert_eq!(result, Either::GoodPath("10".to_string()));
//!
//! let result: Either<i32> = Either::wrap("5x").try_bind(|text| text.parse::<i32>());
//! assert_eq!(
//!     result.cause().map(ToString::to_string),
//!     Some("invalid digit found in string".to_string())
//! );
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::default_value::DefaultValue;
use crate::error::{BindError, Cause};
use crate::maybe::Maybe;
use crate::trace::{debug_event, trace_event};

/// A value on the good path, or the cause that knocked the chain off it.
///
/// # Type Parameters
///
/// * `T` - The type of the value
/// * `E` - The type of the cause, [`Cause`] unless stated otherwise
///
/// # Equality
///
/// `BadPath` values compare through `E`. With the default [`Cause`] that is
/// identity: a cause equals its clones, but two chains that each fail on a
/// default value produce distinct causes and compare unequal. Use
/// [`Cause::downcast_ref`] to match on the error itself.
///
/// # Examples
///
/// ```rust
/// use monadex::{BindError, Either};
///
/// let result: Either<u32, BindError> = Either::wrap(0_u32).bind(|n| n + 1);
/// assert_eq!(
///     result,
///     Either::BadPath(BindError::DefaultValue { type_name: "u32" })
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<T, E = Cause> {
    /// A value; the chain so far has succeeded.
    GoodPath(T),
    /// The captured failure; the value stands for the default value of `T`.
    BadPath(E),
}

impl<T, E> Either<T, E> {
    // =========================================================================
    // Construction and Type Checking
    // =========================================================================

    /// Wraps `value` on the good path, even when it is the default value.
    #[inline]
    pub const fn wrap(value: T) -> Self {
        Self::GoodPath(value)
    }

    /// Starts on the bad path with `cause`.
    #[inline]
    pub fn fail(cause: impl Into<E>) -> Self {
        Self::BadPath(cause.into())
    }

    /// Returns `true` if this is `GoodPath`.
    #[inline]
    pub const fn is_good_path(&self) -> bool {
        matches!(self, Self::GoodPath(_))
    }

    /// Returns `true` if this is `BadPath`.
    #[inline]
    pub const fn is_bad_path(&self) -> bool {
        matches!(self, Self::BadPath(_))
    }

    // =========================================================================
    // Value and Cause Extraction
    // =========================================================================

    /// Borrows the value, if on the good path.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::GoodPath(value) => Some(value),
            Self::BadPath(_) => None,
        }
    }

    /// Borrows the cause, if on the bad path.
    #[inline]
    pub const fn cause(&self) -> Option<&E> {
        match self {
            Self::GoodPath(_) => None,
            Self::BadPath(cause) => Some(cause),
        }
    }

    /// Consumes the `Either`, returning the cause if on the bad path.
    #[inline]
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::GoodPath(_) => None,
            Self::BadPath(cause) => Some(cause),
        }
    }

    /// Returns the value, or `fallback` on the bad path.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::GoodPath(value) => value,
            Self::BadPath(_) => fallback,
        }
    }

    /// Converts into a `Result`.
    ///
    /// ```rust
    /// use monadex::Either;
    ///
    /// let either: Either<i32, &str> = Either::wrap(1);
    /// assert_eq!(either.into_result(), Ok(1));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::GoodPath(value) => Ok(value),
            Self::BadPath(cause) => Err(cause),
        }
    }

    /// Converts into a [`Maybe`], dropping the cause.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::GoodPath(value) => Maybe::Actual(value),
            Self::BadPath(_) => Maybe::Nothing,
        }
    }

    /// Transforms the cause, leaving a good path untouched.
    ///
    /// ```rust
    /// use monadex::Either;
    ///
    /// let either: Either<i32, &str> = Either::BadPath("short");
    /// assert_eq!(either.map_cause(str::len), Either::BadPath(5));
    /// ```
    #[inline]
    pub fn map_cause<G, F>(self, function: F) -> Either<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::GoodPath(value) => Either::GoodPath(value),
            Self::BadPath(cause) => Either::BadPath(function(cause)),
        }
    }

    /// Iterates over the value, if on the good path.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }
}

// =============================================================================
// Bind Operations
// =============================================================================

impl<T, E> Either<T, E>
where
    T: DefaultValue,
    E: From<BindError>,
{
    /// Applies `function` to the value and wraps the result.
    ///
    /// A bad path is passed through with its cause unchanged. A good path
    /// holding the default value of `T` turns into
    /// `BadPath(BindError::DefaultValue)`. In both cases `function` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::{BindError, Either};
    ///
    /// let result: Either<String> = Either::wrap(5).bind(|n| n * 2).bind(|n| n.to_string());
    /// assert_eq!(result.unwrap_or_default(), "10");
    ///
    /// let result: Either<i32> = Either::wrap(0).bind(|n| n * 2);
    /// assert!(result.cause().unwrap().is::<BindError>());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_bindable() {
            Ok(value) => Either::GoodPath(function(value)),
            Err(cause) => Either::BadPath(cause),
        }
    }

    /// Like [`bind`](Self::bind), for a function that can fail.
    ///
    /// An `Err(error)` from `function` becomes `BadPath(error.into())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::Either;
    /// use std::num::ParseIntError;
    ///
    /// let result: Either<i32> = Either::wrap("x").try_bind(|text| text.parse::<i32>());
    /// assert!(result.cause().unwrap().is::<ParseIntError>());
    /// ```
    pub fn try_bind<U, G, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Result<U, G>,
        G: Into<E>,
    {
        let value = match self.into_bindable() {
            Ok(value) => value,
            Err(cause) => return Either::BadPath(cause),
        };
        match function(value) {
            Ok(result) => Either::GoodPath(result),
            Err(error) => {
                debug_event!(
                    type_name = std::any::type_name::<T>(),
                    "Either::try_bind captured a failure"
                );
                Either::BadPath(error.into())
            }
        }
    }

    /// Like [`bind`](Self::bind), but a panic inside `function` becomes
    /// `BadPath(BindError::Panicked)` carrying the panic message.
    ///
    /// The panic hook still runs. State captured by `function` may be left
    /// half-updated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::{BindError, Either};
    ///
    /// let result: Either<i32, BindError> =
    ///     Either::wrap(5).bind_catching(|_| -> i32 { panic!("boom") });
    /// assert_eq!(
    ///     result,
    ///     Either::BadPath(BindError::Panicked { message: "boom".to_string() })
    /// );
    /// ```
    pub fn bind_catching<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let value = match self.into_bindable() {
            Ok(value) => value,
            Err(cause) => return Either::BadPath(cause),
        };
        match catch_unwind(AssertUnwindSafe(move || function(value))) {
            Ok(result) => Either::GoodPath(result),
            Err(payload) => {
                let error = BindError::panicked(&*payload);
                debug_event!(%error, "Either::bind_catching captured a panic");
                Either::BadPath(error.into())
            }
        }
    }

    pub(crate) fn into_bindable(self) -> Result<T, E> {
        match self {
            Self::GoodPath(value) if !value.is_default() => Ok(value),
            Self::GoodPath(_) => {
                debug_event!(
                    type_name = std::any::type_name::<T>(),
                    "Either bind short-circuited on a default value"
                );
                Err(BindError::default_value::<T>().into())
            }
            Self::BadPath(cause) => {
                trace_event!("Either bind passed the cause through");
                Err(cause)
            }
        }
    }
}

impl<T: Default, E> Either<T, E> {
    /// Returns the value, or the default value of `T` on the bad path.
    ///
    /// The cause is reached through [`cause`](Self::cause), not here.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::GoodPath(value) => value,
            Self::BadPath(_) => T::default(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Either<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodPath(value) => formatter.debug_tuple("GoodPath").field(value).finish(),
            Self::BadPath(cause) => formatter.debug_tuple("BadPath").field(cause).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Either<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodPath(value) => write!(formatter, "GoodPath({value})"),
            Self::BadPath(cause) => write!(formatter, "BadPath({cause})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Either<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::GoodPath(value),
            Err(cause) => Self::BadPath(cause),
        }
    }
}

impl<T, E> From<Either<T, E>> for Result<T, E> {
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        either.into_result()
    }
}

impl<T, E> IntoIterator for Either<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}
