//! Diagnostics hooks.
//!
//! Events are forwarded to [`tracing`](https://docs.rs/tracing) when the
//! `tracing` feature is enabled and compiled out otherwise. The library never
//! installs a subscriber.

/// Emits a `debug` level event.
macro_rules! debug_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!(target: "mapbuilder", $($argument)*);
        }
    };
}

/// Emits a `trace` level event.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "mapbuilder", $($argument)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
