//! Type class traits for the wrapper types.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the wrapped value
//! - [`Applicative`]: Lifting values and combining independent wrappers
//! - [`Monad`]: Sequencing dependent computations
//!
//! `Identity`, `Maybe` and `Either` implement all of them. These instances
//! follow the laws and look only at the container's shape; the
//! default-value short-circuiting lives in the inherent `bind` methods.
//!
//! # Examples
//!
//! ```rust
//! use monadex::typeclass::{Applicative, Functor, Monad};
//! use monadex::{Either, Maybe};
//!
//! let total = Maybe::wrap(2).map2(Maybe::wrap(3), |a, b| a + b);
//! assert_eq!(total, Maybe::Actual(5));
//!
//! let label: Either<String, &str> = Either::wrap(5)
//!     .flat_map(|n| Either::GoodPath(n * 2))
//!     .fmap(|n| format!("#{n}"));
//! assert_eq!(label, Either::GoodPath("#10".to_string()));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
