//! 512-bit unsigned integer primitive
//!
//! This module defines a fixed-size 512-bit unsigned integer type (`U512`).
//!
//! It is designed as a **simple, explicit value type**, not as a big-integer
//! arithmetic library. It can be constructed, viewed in the host's native
//! memory layout (see [`NativeView`]) and canonicalized into big-endian
//! bytes (see [`BigEndianBytes`]).
//!
//! The internal representation is eight 64-bit limbs, most significant
//! first. It never depends on the host's byte order.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

use crate::error::{Error, Result};

use super::canonical::{BigEndianBytes, to_big_endian_bytes};
use super::view::{NativeView, as_view};

/// Number of 64-bit limbs in a `U512`.
pub(crate) const LIMBS: usize = 8;

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as eight `u64` limbs in **most significant first**
/// order, so `limbs[0]` holds bits 448..512 and `limbs[7]` bits 0..64.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u64; LIMBS]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; LIMBS]);

    /// The value one.
    pub const ONE: Self = Self::from_word(1);

    /// The maximum representable value (2⁵¹² − 1).
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Widens a single 64-bit word into a 512-bit value.
    ///
    /// All bits above bit 63 are zero.
    pub const fn from_word(word: u64) -> Self {
        Self([0, 0, 0, 0, 0, 0, 0, word])
    }

    /// Composes a 512-bit value from eight 64-bit words.
    ///
    /// `a` is the most significant word and `h` the least significant, so the
    /// result equals `a·2⁴⁴⁸ + b·2³⁸⁴ + … + g·2⁶⁴ + h`. This order is fixed and
    /// independent of the host platform.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_words(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64) -> Self {
        Self([a, b, c, d, e, f, g, h])
    }

    /// Returns the eight limbs, most significant first.
    ///
    /// This is the exact inverse of [`U512::from_words`] and does not involve
    /// memory layout.
    pub const fn to_words(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Returns the least significant limb if the value fits into `bits` bits.
    pub(crate) fn narrow(&self, bits: u32) -> Result<u64> {
        let (high, low) = self.0.split_at(LIMBS - 1);
        let low = low[0];

        if high.iter().any(|&limb| limb != 0) || (bits < u64::BITS && low >> bits != 0) {
            return Err(Error::Overflow { bits });
        }

        Ok(low)
    }

    /// Materializes the value in the host's native memory layout.
    ///
    /// See [`as_view`].
    pub fn as_view(&self) -> NativeView {
        as_view(*self)
    }

    /// Returns the canonical big-endian bytes of the value.
    ///
    /// See [`to_big_endian_bytes`].
    pub fn to_be_bytes(&self) -> BigEndianBytes {
        to_big_endian_bytes(*self)
    }
}

impl Display for U512 {
    /// Formats the canonical bytes as colon-separated uppercase hexadecimal.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_be_bytes(), f)
    }
}

impl LowerHex for U512 {
    /// Formats the value as 128 lowercase hexadecimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for limb in self.0 {
            write!(f, "{:016x}", limb)?;
        }

        Ok(())
    }
}

impl UpperHex for U512 {
    /// Formats the value as 128 uppercase hexadecimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for limb in self.0 {
            write!(f, "{:016X}", limb)?;
        }

        Ok(())
    }
}
