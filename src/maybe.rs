//! Maybe - an optional value whose chain stops silently.
//!
//! `Maybe<T>` is either `Actual(value)` or `Nothing`. Binding a function
//! over it skips the function when there is nothing to work with:
//!
//! - the `Maybe` is already `Nothing`, or
//! - the held value is the default value of its type (see [`DefaultValue`]).
//!
//! When the bound function fails (an `Err` from [`Maybe::try_bind`], a panic
//! inside [`Maybe::bind_catching`]) the chain collapses to `Nothing` and the
//! failure is dropped. `Maybe` answers "is there a value", nothing more; use
//! [`Either`] to keep the cause.
//!
//! # Examples
//!
//! ```rust
//! use monadex::Maybe;
//!
//! let length = Maybe::wrap("hello").bind(|text| text.len());
//! assert_eq!(length, Maybe::Actual(5));
//!
//! // The empty string is the default `&str`, so the function never runs.
//! let length = Maybe::wrap("").bind(|text| text.len());
//! assert_eq!(length, Maybe::Nothing);
//!
//! // Failures are swallowed.
//! let parsed = Maybe::wrap("forty-two").try_bind(|text| text.parse::<i32>());
//! assert_eq!(parsed, Maybe::Nothing);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::default_value::DefaultValue;
use crate::either::Either;
use crate::trace::{debug_event, trace_event};

/// An optional value: `Actual(T)` or `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadex::Maybe;
///
/// let price = Maybe::wrap(250_u32)
///     .bind(|cents| cents * 2)
///     .bind(|cents| format!("${}.{:02}", cents / 100, cents % 100));
/// assert_eq!(price.unwrap_or_default(), "$5.00");
/// ```
///
/// Ordering follows `Option`: `Nothing` sorts before any `Actual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value; stands for the default value of `T`.
    Nothing,
    /// A present value.
    Actual(T),
}

impl<T> Maybe<T> {
    /// Wraps `value` as `Actual`, even when it is the default value.
    #[inline]
    pub const fn wrap(value: T) -> Self {
        Self::Actual(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if this is `Actual`.
    #[inline]
    pub const fn is_actual(&self) -> bool {
        matches!(self, Self::Actual(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the held value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Actual(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Actual(value) => Maybe::Actual(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the held value, or `fallback` for `Nothing`.
    ///
    /// ```rust
    /// use monadex::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(3).value_or(7), 3);
    /// assert_eq!(Maybe::<i32>::Nothing.value_or(7), 7);
    /// ```
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Actual(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Actual(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into an [`Either`], using `cause` when there is no value.
    ///
    /// ```rust
    /// use monadex::{Cause, Either, Maybe};
    ///
    /// let cause = Cause::msg("missing");
    /// let either: Either<i32> = Maybe::Nothing.ok_or(cause.clone());
    /// assert_eq!(either, Either::BadPath(cause));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, cause: E) -> Either<T, E> {
        match self {
            Self::Actual(value) => Either::GoodPath(value),
            Self::Nothing => Either::BadPath(cause),
        }
    }

    /// Iterates over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }
}

impl<T: DefaultValue> Maybe<T> {
    /// Applies `function` to the held value and wraps the result.
    ///
    /// Returns `Nothing` without calling `function` when `self` is `Nothing`
    /// or holds the default value of `T`. The result of `function` is always
    /// wrapped as `Actual`, even when it is itself a default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(2).bind(|n| n - 2), Maybe::Actual(0));
    /// assert_eq!(Maybe::wrap(0).bind(|n| n - 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_bindable() {
            Some(value) => Maybe::Actual(function(value)),
            None => Maybe::Nothing,
        }
    }

    /// Like [`bind`](Self::bind), for a function that can fail.
    ///
    /// An `Err` returned by `function` yields `Nothing`; the error is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::Maybe;
    ///
    /// let port = Maybe::wrap("8080").try_bind(|text| text.parse::<u16>());
    /// assert_eq!(port, Maybe::Actual(8080));
    ///
    /// let port = Maybe::wrap("http").try_bind(|text| text.parse::<u16>());
    /// assert_eq!(port, Maybe::Nothing);
    /// ```
    pub fn try_bind<U, E, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let Some(value) = self.into_bindable() else {
            return Maybe::Nothing;
        };
        match function(value) {
            Ok(result) => Maybe::Actual(result),
            Err(_) => {
                debug_event!(
                    type_name = std::any::type_name::<T>(),
                    "Maybe::try_bind discarded a failure"
                );
                Maybe::Nothing
            }
        }
    }

    /// Like [`bind`](Self::bind), but a panic inside `function` yields
    /// `Nothing` instead of unwinding into the caller.
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    /// State captured by `function` may be left half-updated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadex::Maybe;
    ///
    /// let result = Maybe::wrap(vec![1, 2, 3]).bind_catching(|items| items[10]);
    /// assert_eq!(result, Maybe::Nothing);
    /// ```
    pub fn bind_catching<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        let Some(value) = self.into_bindable() else {
            return Maybe::Nothing;
        };
        match catch_unwind(AssertUnwindSafe(move || function(value))) {
            Ok(result) => Maybe::Actual(result),
            Err(_) => {
                debug_event!(
                    type_name = std::any::type_name::<T>(),
                    "Maybe::bind_catching discarded a panic"
                );
                Maybe::Nothing
            }
        }
    }

    pub(crate) fn into_bindable(self) -> Option<T> {
        match self {
            Self::Actual(value) if !value.is_default() => Some(value),
            Self::Actual(_) => {
                debug_event!(
                    type_name = std::any::type_name::<T>(),
                    "Maybe bind short-circuited on a default value"
                );
                None
            }
            Self::Nothing => {
                trace_event!("Maybe bind passed Nothing through");
                None
            }
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the held value, or the default value of `T` for `Nothing`.
    ///
    /// ```rust
    /// use monadex::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(5).unwrap_or_default(), 5);
    /// assert_eq!(Maybe::<i32>::Nothing.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Actual)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual(value) => write!(formatter, "Actual({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

// `Maybe` has the wire shape of `Option`, so a nested `Maybe<Option<T>>`
// cannot tell `Actual(None)` from `Nothing`: both are written as `null` and
// read back as `Nothing`.

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // Wrap and accessors
    // =========================================================================

    #[rstest]
    fn wrap_keeps_default_value_as_actual() {
        assert_eq!(Maybe::wrap(0), Maybe::Actual(0));
        assert_eq!(Maybe::wrap(String::new()), Maybe::Actual(String::new()));
    }

    #[rstest]
    fn unwrap_or_default_on_nothing_returns_default() {
        assert_eq!(Maybe::<String>::Nothing.unwrap_or_default(), "");
    }

    #[rstest]
    fn value_borrows_actual() {
        let maybe = Maybe::wrap(String::from("kept"));
        assert_eq!(maybe.value().map(String::as_str), Some("kept"));
        assert!(maybe.is_actual());
        assert!(Maybe::<u8>::nothing().is_nothing());
    }

    #[rstest]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some(3)), Maybe::Actual(3));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
        assert_eq!(Option::from(Maybe::Actual(3)), Some(3));
    }

    #[rstest]
    fn ordering_matches_option() {
        assert!(Maybe::Nothing < Maybe::Actual(i32::MIN));
        assert!(Maybe::Actual(1) < Maybe::Actual(2));

        let mut values = vec![Maybe::Actual(3), Maybe::Nothing, Maybe::Actual(-1)];
        values.sort();
        assert_eq!(values, vec![Maybe::Nothing, Maybe::Actual(-1), Maybe::Actual(3)]);

        let options: Vec<Option<i32>> = values.into_iter().map(Option::from).collect();
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(options, sorted);
    }

    #[rstest]
    fn iteration_yields_at_most_one_item() {
        assert_eq!(Maybe::wrap(9).into_iter().collect::<Vec<_>>(), vec![9]);
        assert_eq!(Maybe::<i32>::Nothing.iter().count(), 0);
    }

    #[rstest]
    fn display_names_the_variant() {
        assert_eq!(Maybe::wrap(1).to_string(), "Actual(1)");
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
    }

    // =========================================================================
    // Bind
    // =========================================================================

    #[rstest]
    #[case(Maybe::Actual(4), Maybe::Actual(8))]
    #[case(Maybe::Actual(0), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn bind_doubles_only_non_default_values(
        #[case] input: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(input.bind(|n| n * 2), expected);
    }

    #[rstest]
    fn bind_wraps_default_result_as_actual() {
        assert_eq!(Maybe::wrap(3).bind(|_| 0), Maybe::Actual(0));
    }

    #[rstest]
    fn bind_skips_function_on_default_value() {
        let calls = Cell::new(0);
        let result = Maybe::wrap(String::new()).bind(|text| {
            calls.set(calls.get() + 1);
            text.len()
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn bind_skips_function_on_nothing() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.bind(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn try_bind_discards_error() {
        let result: Maybe<i32> = Maybe::wrap(1).try_bind(|_| Err::<i32, _>("lost"));
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn try_bind_keeps_success() {
        let result = Maybe::wrap("12").try_bind(|text| text.parse::<i32>());
        assert_eq!(result, Maybe::Actual(12));
    }

    #[rstest]
    fn bind_catching_turns_panic_into_nothing() {
        let result = Maybe::wrap(1).bind_catching(|_| -> i32 { panic!("boom") });
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn bind_catching_keeps_success() {
        assert_eq!(Maybe::wrap(2).bind_catching(|n| n + 1), Maybe::Actual(3));
    }

    #[rstest]
    fn nothing_stays_nothing_across_chain() {
        let calls = Cell::new(0);
        let count = |n: i32| {
            calls.set(calls.get() + 1);
            n + 1
        };
        let result = Maybe::wrap(1)
            .try_bind(|_| Err::<i32, _>(()))
            .bind(count)
            .bind(count)
            .bind(count);
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn ok_or_converts_to_either() {
        let either: Either<i32, &str> = Maybe::wrap(5).ok_or("missing");
        assert_eq!(either, Either::GoodPath(5));
    }
}
