//! Conversions between `U512` and 8-, 16- and 32-bit integers
//!
//! The small widths share one implementation: widening goes through
//! [`U512::from_word`] and narrowing checks the upper bits of the least
//! significant limb.

use crate::error::{Error, Result};
use crate::primitives::u512::core::U512;

macro_rules! small_int_conv {
    ($($t:ty),*) => {
        $(
            /// Zero-extends the value into a `U512`.
            impl From<$t> for U512 {
                fn from(value: $t) -> Self {
                    U512::from_word(u64::from(value))
                }
            }

            /// Fails with [`Error::Overflow`] if any bit above the target
            /// width is set.
            impl TryFrom<U512> for $t {
                type Error = Error;

                fn try_from(value: U512) -> Result<Self> {
                    // `narrow` has checked that the word fits.
                    value.narrow(<$t>::BITS).map(|word| word as $t)
                }
            }
        )*
    };
}

small_int_conv!(u8, u16, u32);
