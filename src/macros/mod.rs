//! Internal macros.
//!
//! [`trace_event!`] forwards to the matching `tracing` macro when the `tracing`
//! feature is enabled and expands to nothing otherwise, so halt points can be
//! instrumented without sprinkling `cfg` attributes through every stage.

/// Emits a `tracing` event at the given level.
///
/// ```text
/// trace_event!(debug, left = 3, right = 5, "zip_eq length mismatch");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}
