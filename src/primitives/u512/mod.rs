//! 512-bit unsigned integer primitive
//!
//! This module defines the `U512` type together with its two byte-level
//! representations:
//! - [`NativeView`]: the host's native memory layout, viewable as one
//!   512-bit value, eight words or sixty-four bytes (platform-dependent);
//! - [`BigEndianBytes`]: 64 bytes, most significant first (portable,
//!   one-way).
//!
//! Typical use cases include:
//! - cryptographic hash outputs and inputs
//! - identifiers serialized on the wire
//! - inspecting how the host lays out wide integers

mod canonical;
mod conv;
mod core;
mod view;

pub use self::canonical::{BigEndianBytes, to_big_endian_bytes};
pub use self::core::U512;
pub use self::view::{NativeView, as_view};
