//! `chain!` - step-by-step binding with the same short-circuit rules as `bind`.
//!
//! # Syntax
//!
//! - `bind pattern = wrapper;` - takes the value out of `wrapper` and runs the
//!   rest of the block with it
//! - `let pattern = expression;` - plain binding
//! - `wrapper` - the final step, already wrapped
//!
//! Each `bind` step goes through [`ChainStep`], so it stops exactly where the
//! inherent `bind` would: `Maybe` on `Nothing` or a default value, `Either` on
//! a bad path or a default value (recording `BindError::DefaultValue`).
//! `Identity` never stops.
//!
//! # Examples
//!
//! ```rust
//! use monadex::{chain, Maybe};
//!
//! let total = chain! {
//!     bind x = Maybe::wrap(5);
//!     bind y = Maybe::wrap(10);
//!     let z = x + y;
//!     Maybe::wrap(z * 2)
//! };
//! assert_eq!(total, Maybe::Actual(30));
//!
//! let total = chain! {
//!     bind x = Maybe::wrap(0);
//!     Maybe::wrap(x + 1)
//! };
//! assert_eq!(total, Maybe::Nothing);
//! ```
//!
//! ```rust
//! use monadex::{chain, Cause, Either};
//!
//! let out_of_stock = Cause::msg("no stock");
//! let failure = out_of_stock.clone();
//! let result: Either<u32> = chain! {
//!     bind price = Either::wrap(120_u32);
//!     bind stock = Either::<u32>::BadPath(failure);
//!     Either::wrap(price * stock)
//! };
//! assert_eq!(result, Either::BadPath(out_of_stock));
//! ```

use crate::default_value::DefaultValue;
use crate::either::Either;
use crate::error::BindError;
use crate::identity::Identity;
use crate::maybe::Maybe;

/// A wrapper whose value can be handed to a function returning the same kind
/// of wrapper, under the wrapper's own short-circuit rules.
///
/// This is the step `chain!` expands to. Unlike
/// `Monad::flat_map`, it honors the default-value check.
pub trait ChainStep: Sized {
    /// The wrapped value.
    type Value;

    /// The same wrapper around a `U`.
    type Wrapped<U>;

    /// Runs `function` on the value, or returns the short-circuited wrapper
    /// without calling it.
    fn chain_step<U, F>(self, function: F) -> Self::Wrapped<U>
    where
        F: FnOnce(Self::Value) -> Self::Wrapped<U>;
}

impl<A> ChainStep for Identity<A> {
    type Value = A;
    type Wrapped<U> = Identity<U>;

    #[inline]
    fn chain_step<U, F>(self, function: F) -> Identity<U>
    where
        F: FnOnce(A) -> Identity<U>,
    {
        function(self.into_inner())
    }
}

impl<T: DefaultValue> ChainStep for Maybe<T> {
    type Value = T;
    type Wrapped<U> = Maybe<U>;

    #[inline]
    fn chain_step<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.into_bindable().map_or(Maybe::Nothing, function)
    }
}

impl<T: DefaultValue, E: From<BindError>> ChainStep for Either<T, E> {
    type Value = T;
    type Wrapped<U> = Either<U, E>;

    #[inline]
    fn chain_step<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        match self.into_bindable() {
            Ok(value) => function(value),
            Err(cause) => Either::BadPath(cause),
        }
    }
}

/// Binds wrapped values one step at a time: `bind pattern = wrapper;` steps,
/// `let pattern = expression;` bindings, then a final wrapped expression.
///
/// Every `bind` step follows [`ChainStep`], so default values short-circuit.
#[macro_export]
macro_rules! chain {
    (bind $pattern:pat_param = $wrapper:expr ; $($rest:tt)+) => {
        $crate::ChainStep::chain_step($wrapper, move |$pattern| $crate::chain!($($rest)+))
    };

    (let $pattern:pat_param = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::chain!($($rest)+)
    }};

    ($last:expr) => {
        $last
    };
}
