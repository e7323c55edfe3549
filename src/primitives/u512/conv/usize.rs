//! Conversions between `U512` and `usize`
//!
//! Rust supports no target where `usize` is wider than 64 bits, so a
//! `usize` always fits in the least significant limb.

use crate::error::{Error, Result};
use crate::primitives::u512::core::U512;

/// Converts a `usize` into a `U512`, zero-extending it.
impl From<usize> for U512 {
    fn from(value: usize) -> Self {
        U512::from_word(value as u64)
    }
}

/// Attempts to convert a `U512` into a `usize`.
///
/// The conversion succeeds only if the value fits within the platform's
/// `usize` width.
impl TryFrom<U512> for usize {
    type Error = Error;

    fn try_from(value: U512) -> Result<Self> {
        value.narrow(usize::BITS).map(|word| word as usize)
    }
}
