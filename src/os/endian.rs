//! Native byte order detection
//!
//! The host stores multi-byte integers either most significant byte first
//! (big-endian) or least significant byte first (little-endian). The order
//! is determined at runtime by a probe and cached in a process-wide cell,
//! so the probe runs at most once.

use std::sync::OnceLock;

static LITTLE_ENDIAN: OnceLock<bool> = OnceLock::new();

/// Runs the byte order probe without consulting the cache.
///
/// A 16-bit integer holding the value one is laid out in native order and
/// its lowest-address byte is inspected: `0` means the most significant
/// byte comes first (big-endian), anything else means little-endian.
pub fn probe_little_endian() -> bool {
    let probe: u16 = 1;
    probe.to_ne_bytes()[0] != 0
}

/// Returns `true` if the host stores multi-byte integers little-endian.
///
/// The first call runs [`probe_little_endian`]; every later call returns
/// the cached result. Concurrent first calls are safe: the cell stores a
/// single value and every caller observes it.
pub fn is_little_endian() -> bool {
    *LITTLE_ENDIAN.get_or_init(probe_little_endian)
}

/// Byte order of multi-byte integers in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte at the lowest address.
    Little,
    /// Most significant byte at the lowest address.
    Big,
}

impl Endianness {
    /// Byte order of the host, as reported by [`is_little_endian`].
    pub fn native() -> Self {
        if is_little_endian() {
            Self::Little
        } else {
            Self::Big
        }
    }

    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_agrees_with_target() {
        assert_eq!(probe_little_endian(), cfg!(target_endian = "little"));
    }

    #[test]
    fn cache_matches_probe() {
        assert_eq!(is_little_endian(), probe_little_endian());
        assert_eq!(LITTLE_ENDIAN.get(), Some(&probe_little_endian()));
    }

    #[test]
    fn opposite_is_involution() {
        for e in [Endianness::Little, Endianness::Big] {
            assert_eq!(e.opposite().opposite(), e);
            assert_ne!(e.opposite(), e);
        }
    }
}
