//! Diagnostic dump of a `U512`
//!
//! [`debug_dump`] reports how the host lays out a value: the detected byte
//! order, the eight native words and the sixty-four native bytes, each in
//! native storage order. The report is emitted as a `tracing` event at
//! `DEBUG` level under the `uint512::debug` target; installing a subscriber
//! is left to the application.
//!
//! Builds without `debug_assertions` compile `debug_dump` to an empty
//! function unless the `force-debug-dump` feature is enabled.
//! [`DebugReport`] is available in every build.

use std::fmt::{self, Display, Formatter};

use crate::os::is_little_endian;
use crate::primitives::{NativeView, U512, as_view};

/// Whether [`debug_dump`] emits anything in this build.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "force-debug-dump"));

/// Snapshot of a value's native layout, labelled for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct DebugReport<'a> {
    label: &'a str,
    little_endian: bool,
    view: NativeView,
}

impl<'a> DebugReport<'a> {
    pub fn new(label: &'a str, value: &U512) -> Self {
        Self {
            label,
            little_endian: is_little_endian(),
            view: as_view(*value),
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn little_endian(&self) -> bool {
        self.little_endian
    }

    pub fn view(&self) -> &NativeView {
        &self.view
    }
}

impl Display for DebugReport<'_> {
    /// Three lines: the byte order, then the words, then the bytes.
    ///
    /// ```text
    /// little-endian? true
    /// debug <label> u64[1 0 0 0 0 0 0 0]
    /// debug <label> u8[1 0 0 ... 0]
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "little-endian? {}", self.little_endian)?;

        write!(f, "debug {} u64[", self.label)?;
        write_joined(f, self.view.words().iter())?;
        writeln!(f, "]")?;

        write!(f, "debug {} u8[", self.label)?;
        write_joined(f, self.view.bytes().iter())?;
        write!(f, "]")
    }
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: impl Iterator<Item = T>) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }

        write!(f, "{item}")?;
    }

    Ok(())
}

/// Emits a [`DebugReport`] for `value` to the `tracing` diagnostic sink.
#[cfg(any(debug_assertions, feature = "force-debug-dump"))]
pub fn debug_dump(label: &str, value: &U512) {
    let report = DebugReport::new(label, value);

    tracing::debug!(
        target: "uint512::debug",
        label,
        little_endian = report.little_endian(),
        "\n{report}"
    );
}

/// Release builds: does nothing.
#[cfg(not(any(debug_assertions, feature = "force-debug-dump")))]
#[inline(always)]
pub fn debug_dump(_label: &str, _value: &U512) {}
