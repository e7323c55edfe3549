//! Primitive types
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full-featured
//! big-integer libraries.
//!
//! Current primitives include:
//! - `U512`: a fixed-size 512-bit unsigned integer
//! - `NativeView`: the native-layout view of a `U512`
//! - `BigEndianBytes`: the canonical big-endian encoding of a `U512`

mod u512;

pub use u512::{BigEndianBytes, NativeView, U512, as_view, to_big_endian_bytes};
