//! Native-layout views of a `U512`
//!
//! A [`NativeView`] holds the 64 bytes a 512-bit integer would occupy in
//! the host's memory, and exposes them under three shapes:
//! - one 512-bit value,
//! - eight 64-bit words,
//! - sixty-four bytes.
//!
//! All shapes are typed accessors over the same buffer. Writing one shape
//! and reading another is a raw reinterpretation in native byte order, not
//! a conversion. The position of a given word or byte relative to the
//! 512-bit value therefore differs between little- and big-endian hosts.
//!
//! **Warning:** the word and byte shapes are not portable. Feeding them back
//! into [`U512::from_words`] only gives the original value if the caller
//! accounts for the native order (see [`crate::os::is_little_endian`]).
//! For a portable byte sequence use
//! [`to_big_endian_bytes`](super::to_big_endian_bytes).

use std::fmt::{self, Debug, Formatter};

use crate::error::{Error, Result};
use crate::primitives::u512::core::{LIMBS, U512};

/// Size of a `U512` in bytes.
pub(crate) const BYTES: usize = 64;

const WORD_BYTES: usize = 8;

/// Maps a native word slot to the index of the limb stored there.
///
/// A little-endian host stores the least significant limb at the lowest
/// address, a big-endian host the most significant one.
const fn limb_at_slot(slot: usize) -> usize {
    if cfg!(target_endian = "little") {
        LIMBS - 1 - slot
    } else {
        slot
    }
}

/// The bits of a `U512` in native memory layout, viewable as one 512-bit
/// value, eight words or sixty-four bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NativeView {
    buf: [u8; BYTES],
}

/// Materializes `value` in the host's native memory layout.
///
/// The three shapes of the returned view are raw reinterpretations of the
/// same 512 bits. On a little-endian host byte `0` is the least significant
/// byte of `value`; on a big-endian host it is the most significant one.
pub fn as_view(value: U512) -> NativeView {
    let mut view = NativeView::zeroed();
    view.set_wide(value);
    view
}

impl NativeView {
    /// A view whose three shapes are all zero.
    pub const fn zeroed() -> Self {
        Self { buf: [0u8; BYTES] }
    }

    /// Builds a view by writing the byte shape.
    pub const fn from_bytes(bytes: [u8; BYTES]) -> Self {
        Self { buf: bytes }
    }

    /// Builds a view by writing the word shape.
    pub fn from_words(words: [u64; LIMBS]) -> Self {
        let mut view = Self::zeroed();
        view.set_words(words);
        view
    }

    /// Reads the 512-bit shape.
    ///
    /// On the host that produced the buffer this is the exact inverse of
    /// [`as_view`].
    pub fn wide(&self) -> U512 {
        let mut limbs = [0u64; LIMBS];

        for (slot, word) in self.words().into_iter().enumerate() {
            limbs[limb_at_slot(slot)] = word;
        }

        U512(limbs)
    }

    /// Writes the 512-bit shape.
    pub fn set_wide(&mut self, value: U512) {
        for slot in 0..LIMBS {
            self.set_word(slot, value.0[limb_at_slot(slot)]);
        }
    }

    /// Reads the word shape, in native storage order.
    pub fn words(&self) -> [u64; LIMBS] {
        let mut out = [0u64; LIMBS];

        for (o, chunk) in out.iter_mut().zip(self.buf.chunks_exact(WORD_BYTES)) {
            let mut word = [0u8; WORD_BYTES];
            word.copy_from_slice(chunk);
            *o = u64::from_ne_bytes(word);
        }

        out
    }

    /// Writes the word shape, in native storage order.
    pub fn set_words(&mut self, words: [u64; LIMBS]) {
        for (chunk, w) in self.buf.chunks_exact_mut(WORD_BYTES).zip(words) {
            chunk.copy_from_slice(&w.to_ne_bytes());
        }
    }

    /// Reads the word at native slot `index`.
    ///
    /// # Panics
    /// If `index >= 8`.
    pub fn word(&self, index: usize) -> u64 {
        let start = index * WORD_BYTES;
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.buf[start..start + WORD_BYTES]);
        u64::from_ne_bytes(word)
    }

    /// Writes the word at native slot `index`.
    ///
    /// # Panics
    /// If `index >= 8`.
    pub fn set_word(&mut self, index: usize, word: u64) {
        let start = index * WORD_BYTES;
        self.buf[start..start + WORD_BYTES].copy_from_slice(&word.to_ne_bytes());
    }

    /// Reads the byte shape, in native storage order.
    pub const fn bytes(&self) -> &[u8; BYTES] {
        &self.buf
    }

    /// Writes the byte shape, in native storage order.
    pub fn set_bytes(&mut self, bytes: [u8; BYTES]) {
        self.buf = bytes;
    }

    /// Reads the byte at native offset `index`.
    ///
    /// # Panics
    /// If `index >= 64`.
    pub fn byte(&self, index: usize) -> u8 {
        self.buf[index]
    }

    /// Writes the byte at native offset `index`.
    ///
    /// # Panics
    /// If `index >= 64`.
    pub fn set_byte(&mut self, index: usize, byte: u8) {
        self.buf[index] = byte;
    }
}

/// Provides a manual `Default` implementation for `NativeView`.
///
/// `Default` is not implemented for arrays longer than 32 elements, so it
/// cannot be derived for the 64-byte buffer. The default view is all zero.
impl Default for NativeView {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Debug for NativeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeView")
            .field("words", &self.words())
            .field("bytes", &self.buf)
            .finish()
    }
}

impl From<U512> for NativeView {
    fn from(value: U512) -> Self {
        as_view(value)
    }
}

/// Writes the byte shape from an untyped slice.
///
/// The slice must be exactly 64 bytes long and is taken in native order.
impl TryFrom<&[u8]> for NativeView {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; BYTES] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: BYTES,
            actual: value.len(),
        })?;

        Ok(Self::from_bytes(bytes))
    }
}
