//! # monadex
//!
//! Identity, Maybe and Either wrappers with default-aware bind chaining.
//!
//! ## Overview
//!
//! - [`Identity`]: wraps a value; `bind` always applies the function.
//! - [`Maybe`]: `Actual` or `Nothing`; `bind` stops silently on a default
//!   value or a failure and forgets why.
//! - [`Either`]: `GoodPath` or `BadPath`; `bind` stops on a default value or a
//!   failure and carries the cause to the end of the chain.
//! - [`DefaultValue`]: the "is this the default value" predicate both
//!   short-circuiting wrappers rely on.
//! - [`chain!`]: step-by-step binding over any of the three, with the same
//!   short-circuit rules as `bind`.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Functor, Applicative, Monad instances
//! - `serde`: Serialize/Deserialize for `Identity` and `Maybe`
//! - `tracing`: debug/trace events when a chain leaves or stays off the good path
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadex::prelude::*;
//!
//! let doubled: Either<String> = Either::wrap(5).bind(|n| n * 2).bind(|n| n.to_string());
//! assert_eq!(doubled, Either::GoodPath("10".to_string()));
//!
//! let length = Maybe::wrap("").bind(|text| text.len());
//! assert_eq!(length, Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monadex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::ChainStep;
    pub use crate::default_value::DefaultValue;
    pub use crate::either::Either;
    pub use crate::error::{BindError, Cause};
    pub use crate::identity::Identity;
    pub use crate::maybe::Maybe;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

mod chain;
mod default_value;
mod either;
mod error;
mod identity;
mod maybe;
mod trace;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use chain::ChainStep;
pub use default_value::DefaultValue;
pub use either::Either;
pub use error::{BindError, Cause};
pub use identity::Identity;
pub use maybe::Maybe;

// The wrappers hold no shared state of their own.
static_assertions::assert_impl_all!(Identity<String>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_impl_all!(Either<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Cause: Send, Sync, Clone);
