//! Conditional logging macros.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macro;
//! without it, the macro expands to a no-op so the codec carries no logging
//! overhead at all.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
