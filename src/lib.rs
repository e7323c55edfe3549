//! Fixed-width 512-bit unsigned integers with reliable byte-level views
//!
//! This crate provides a 512-bit unsigned integer value and the machinery
//! to decompose it into smaller fixed-size pieces regardless of the host
//! platform's native byte order.
//!
//! The focus is on a **correct, platform-independent mapping** between the
//! 512-bit value and its bytes, rather than on arithmetic. Arithmetic is
//! deliberately not provided.
//!
//! # Module overview
//!
//! - `os`
//!   Host platform facts. Detects, once per process, whether the host
//!   stores multi-byte integers little-endian.
//!
//! - `primitives`
//!   The `U512` value type and its two byte-level representations:
//!   `NativeView` exposes the same bits as one 512-bit value, eight
//!   64-bit words or sixty-four bytes in the host's native layout, and
//!   `BigEndianBytes` is the portable, most-significant-byte-first
//!   encoding produced by `to_big_endian_bytes`.
//!
//! - `debug`
//!   Diagnostic dump of a value's native layout, emitted through `tracing`
//!   and compiled out of release builds.
//!
//! # Native versus canonical bytes
//!
//! The word and byte shapes of a `NativeView` depend on the host. Only
//! `BigEndianBytes` has a fixed order, and the conversion into it is
//! one-way: there is no constructor from canonical bytes back to a `U512`.
//! The two byte representations are distinct types so that one cannot be
//! passed where the other is expected.
//!
//! ```
//! use uint512::U512;
//!
//! let value = U512::from_words(0, 0, 0, 0, 0, 0, 0, 1);
//! let bytes = value.to_be_bytes();
//!
//! assert_eq!(value, U512::from_word(1));
//! assert_eq!(bytes[63], 1);
//! assert!(bytes.as_bytes()[..63].iter().all(|&b| b == 0));
//! ```
//!
//! # Design goals
//!
//! - No heap allocations and no `unsafe`
//! - Minimal and explicit APIs
//! - No runtime failure in the core operations

mod error;

pub mod debug;
pub mod os;
pub mod primitives;

pub use debug::debug_dump;
pub use error::{Error, Result};
pub use os::is_little_endian;
pub use primitives::{BigEndianBytes, NativeView, U512, as_view, to_big_endian_bytes};
