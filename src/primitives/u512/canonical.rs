//! Big-endian canonicalization of `U512`
//!
//! [`to_big_endian_bytes`] turns a `U512` into 64 bytes ordered most
//! significant byte first, whatever the host's native byte order. The
//! output is meant for hashing, wire serialization and comparison against
//! other canonicalized values.
//!
//! The conversion is **one-way**. [`BigEndianBytes`] is a distinct type from
//! the native-order [`NativeView`](super::NativeView) and cannot be turned back into either a
//! `U512` or a view. Writing canonical bytes into a view on a little-endian
//! host would silently reverse the value.

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::os::is_little_endian;
use crate::primitives::u512::core::U512;
use crate::primitives::u512::view::{BYTES, as_view};

/// A `U512` encoded as 64 bytes, most significant byte first.
///
/// Byte `0` is the most significant byte and byte `63` the least
/// significant, on every platform. Ordering of two `BigEndianBytes`
/// values matches the numeric ordering of the integers they encode.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigEndianBytes([u8; BYTES]);

/// Canonicalizes `value` into big-endian byte order.
///
/// The value is first materialized in native layout. On a little-endian
/// host the native bytes are reversed end to end; on a big-endian host they
/// are already in the canonical order and are copied as is.
pub fn to_big_endian_bytes(value: U512) -> BigEndianBytes {
    let native = as_view(value);

    if !is_little_endian() {
        return BigEndianBytes(*native.bytes());
    }

    let mut out = [0u8; BYTES];

    for (o, &b) in out.iter_mut().zip(native.bytes().iter().rev()) {
        *o = b;
    }

    BigEndianBytes(out)
}

impl BigEndianBytes {
    /// Borrows the canonical bytes.
    pub const fn as_bytes(&self) -> &[u8; BYTES] {
        &self.0
    }

    /// Consumes the wrapper and returns the canonical bytes.
    pub const fn into_inner(self) -> [u8; BYTES] {
        self.0
    }
}

impl Display for BigEndianBytes {
    /// Formats the bytes as colon-separated uppercase hexadecimal.
    ///
    /// Each byte is printed as two uppercase hexadecimal characters,
    /// separated by `:` for readability.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl Debug for BigEndianBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigEndianBytes").field(&self.0).finish()
    }
}

impl Index<usize> for BigEndianBytes {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for BigEndianBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8; BYTES]> for BigEndianBytes {
    fn as_ref(&self) -> &[u8; BYTES] {
        &self.0
    }
}

impl From<BigEndianBytes> for [u8; BYTES] {
    fn from(value: BigEndianBytes) -> Self {
        value.0
    }
}

impl From<U512> for BigEndianBytes {
    fn from(value: U512) -> Self {
        to_big_endian_bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_limb_encoding() {
        let value = U512::from_words(
            0x0001_0203_0405_0607,
            0x0809_0A0B_0C0D_0E0F,
            0x1011_1213_1415_1617,
            0x1819_1A1B_1C1D_1E1F,
            0x2021_2223_2425_2627,
            0x2829_2A2B_2C2D_2E2F,
            0x3031_3233_3435_3637,
            0x3839_3A3B_3C3D_3E3F,
        );

        let bytes = to_big_endian_bytes(value);

        for i in 0..BYTES {
            assert_eq!(bytes[i], i as u8);
        }
    }

    #[test]
    fn display_is_colon_separated() {
        let s = to_big_endian_bytes(U512::from_word(0xAB)).to_string();

        assert_eq!(s.len(), 64 * 2 + 63);
        assert!(s.starts_with("00:00:"));
        assert!(s.ends_with(":00:AB"));
    }
}
