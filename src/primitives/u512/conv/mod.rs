//! Conversions between `U512` and native integer widths.
//!
//! Widening conversions are infallible and zero-extend the input. Narrowing
//! conversions succeed only if every bit above the target width is zero.
//! None of these conversions depend on the host's byte order.

mod u128;
mod u64;
mod u8;
mod usize;
