//! Host platform facts
//!
//! This module gathers the properties of the host that the rest of the
//! crate must observe rather than assume. Higher-level code asks this layer
//! instead of hard-coding platform behavior, which keeps the primitives
//! portable.
//!
//! Current capabilities:
//! - native byte order detection (cached for the process lifetime)

mod endian;

pub use endian::{Endianness, is_little_endian, probe_little_endian};
