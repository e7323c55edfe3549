//! Conversions between `U512` and 64-bit integer representations
//!
//! A `u64` maps onto the least significant limb. An array of eight `u64`
//! maps onto the limbs in most significant first order, matching
//! [`U512::from_words`].

use crate::error::{Error, Result};
use crate::primitives::u512::core::{LIMBS, U512};

/// Converts a `U512` into eight 64-bit words, most significant first.
impl From<U512> for [u64; LIMBS] {
    fn from(value: U512) -> Self {
        value.to_words()
    }
}

/// Converts eight 64-bit words, most significant first, into a `U512`.
impl From<[u64; LIMBS]> for U512 {
    fn from(value: [u64; LIMBS]) -> Self {
        U512(value)
    }
}

/// Attempts to convert a `U512` into a `u64`.
///
/// The conversion succeeds only if the upper 448 bits are zero.
impl TryFrom<U512> for u64 {
    type Error = Error;

    fn try_from(value: U512) -> Result<Self> {
        value.narrow(u64::BITS)
    }
}

/// Converts a `u64` into a `U512` (see [`U512::from_word`]).
impl From<u64> for U512 {
    fn from(value: u64) -> Self {
        U512::from_word(value)
    }
}
