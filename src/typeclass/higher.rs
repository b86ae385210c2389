//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` and `Either<_, E>` as type
//! constructors directly. [`TypeConstructor`] works around this with a GAT
//! that re-applies the same constructor to a different inner type, which is
//! what `Functor`, `Applicative` and `Monad` are written against.

use crate::either::Either;
use crate::identity::Identity;
use crate::maybe::Maybe;

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use monadex::typeclass::TypeConstructor;
/// use monadex::Maybe;
///
/// fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let cleared: Maybe<String> = reset(Maybe::wrap(42));
/// assert_eq!(cleared, Maybe::Nothing);
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// For `Either<i32, E>` this is `Either<B, E>`: the cause type is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Either<T, E> {
    type Inner = T;
    type WithType<B> = Either<B, E>;
}
