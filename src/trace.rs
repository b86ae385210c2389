//! Logging hooks for chain transitions.
//!
//! With the `tracing` feature these forward to `tracing`; without it they
//! expand to nothing and the arguments are never evaluated.

macro_rules! debug_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($argument)*);
        }
    };
}

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
