//! Logging macros forwarding to [`defmt`] when the `defmt` feature is enabled.
#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! __trace {
    ($($arg:tt)*) => {{
        ::defmt::trace!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! __debug {
    ($($arg:tt)*) => {{
        ::defmt::debug!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! __warn {
    ($($arg:tt)*) => {{
        ::defmt::warn!($($arg)*);
    }};
}

// No-op variants still evaluate their arguments.

#[cfg(not(feature = "defmt"))]
macro_rules! __trace {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! __debug {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! __warn {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

pub(crate) use __debug as debug;
pub(crate) use __trace as trace;
pub(crate) use __warn as warn;
