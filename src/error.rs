//! Error types for the fallible conversions of the crate.
//!
//! The core operations (construction, views, canonicalization) are total
//! and never return an error. Only narrowing conversions and writes of
//! untyped byte slices into a view can fail.

use thiserror::Error;

/// Errors returned by fallible `U512` and `NativeView` conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value does not fit into {bits} bits")]
    Overflow { bits: u32 },

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
