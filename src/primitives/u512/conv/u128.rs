//! Conversions between `U512` and 128-bit integers
//!
//! A `u128` spans the two least significant limbs.

use crate::error::{Error, Result};
use crate::primitives::u512::core::{LIMBS, U512};

/// Attempts to convert a `U512` into a `u128`.
///
/// The conversion succeeds only if the upper 384 bits are zero.
impl TryFrom<U512> for u128 {
    type Error = Error;

    fn try_from(value: U512) -> Result<Self> {
        let (high, low) = value.0.split_at(LIMBS - 2);

        if high.iter().any(|&limb| limb != 0) {
            return Err(Error::Overflow { bits: u128::BITS });
        }

        Ok((u128::from(low[0]) << 64) | u128::from(low[1]))
    }
}

/// Converts a `u128` into a `U512`, zero-extending the upper 384 bits.
impl From<u128> for U512 {
    fn from(value: u128) -> Self {
        U512::from_words(0, 0, 0, 0, 0, 0, (value >> 64) as u64, value as u64)
    }
}
