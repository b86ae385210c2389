//! Failure causes produced and carried by the bind chains.
//!
//! - [`BindError`]: failures raised by the chaining machinery itself
//!   (binding a default value, a bound function panicking).
//! - [`Cause`]: a cheap-to-clone, type-erased error. It is the default error
//!   type of [`Either`](crate::Either), so any `std::error::Error` can travel
//!   down a chain and be recovered later with [`Cause::downcast_ref`].

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised by the bind operations themselves.
///
/// # Examples
///
/// ```rust
/// use monadex::BindError;
///
/// let error = BindError::default_value::<i32>();
/// assert_eq!(error.to_string(), "cannot bind the default value of `i32`");
///
/// let error = BindError::Panicked { message: "boom".to_string() };
/// assert_eq!(error.to_string(), "bound function panicked: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The value reaching `bind` was the default value of its type.
    #[error("cannot bind the default value of `{type_name}`")]
    DefaultValue {
        /// Name of the type whose default value was bound.
        type_name: &'static str,
    },
    /// The bound function panicked and the panic was caught.
    #[error("bound function panicked: {message}")]
    Panicked {
        /// The panic message, or `"Unknown panic"` for non-string payloads.
        message: String,
    },
}

impl BindError {
    /// Builds a [`BindError::DefaultValue`] naming `T`.
    #[inline]
    pub fn default_value<T: ?Sized>() -> Self {
        Self::DefaultValue {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn panicked(payload: &(dyn Any + Send)) -> Self {
        Self::Panicked {
            message: panic_message(payload),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

/// A shared, type-erased failure cause.
///
/// Cloning a `Cause` shares the underlying error instead of copying it, so a
/// cause threaded through a chain stays the very same instance. Equality is
/// identity: two causes are equal when they wrap the same captured error.
///
/// # Examples
///
/// ```rust
/// use monadex::Cause;
/// use std::num::ParseIntError;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let cause = Cause::from(parse_error.clone());
///
/// assert_eq!(cause.downcast_ref::<ParseIntError>(), Some(&parse_error));
/// assert_eq!(cause.clone(), cause);
/// assert_ne!(Cause::msg("boom"), Cause::msg("boom"));
/// ```
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wraps an error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Builds a cause from a plain message.
    ///
    /// ```rust
    /// use monadex::Cause;
    ///
    /// assert_eq!(Cause::msg("boom").to_string(), "boom");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Returns the underlying error as `E`, if that is its concrete type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if the underlying error is an `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.0.is::<E>()
    }

    /// Borrows the underlying error.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Returns `true` if both causes share the same captured error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.as_error()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}
