//! Fixed-width register cell.
//!
//! A [`ComponentValue`] is a named unsigned cell tagged with a bit width. The width only
//! drives two things: how many hex digits `render_hex` prints, and the mask used when the
//! register file is configured to truncate writes.

use crate::common::constants::{HEX_DIGITS_8, HEX_DIGITS_12, HEX_DIGITS_WIDE};

/// A named register cell with a bit-width tag.
///
/// `update` performs no range checking; a value wider than `bits` is stored as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentValue {
    name: &'static str,
    bits: u8,
    value: u64,
}

impl ComponentValue {
    /// Creates a zeroed cell.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name (e.g. `"AC"`).
    /// * `bits` - Architectural width in bits.
    pub const fn new(name: &'static str, bits: u8) -> Self {
        Self {
            name,
            bits,
            value: 0,
        }
    }

    /// Display name of the register.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Architectural width in bits.
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Current raw value.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Overwrites the value unconditionally.
    pub const fn update(&mut self, new_value: u64) {
        self.value = new_value;
    }

    /// Mask covering `bits` low-order bits.
    pub const fn mask(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Number of hex digits `render_hex` pads to.
    ///
    /// Only 12-bit and 8-bit cells get their own width; every other width shares the
    /// 10-digit format, so a 16-bit register prints the same way as a 40-bit one.
    pub const fn hex_digits(&self) -> usize {
        match self.bits {
            12 => HEX_DIGITS_12,
            8 => HEX_DIGITS_8,
            _ => HEX_DIGITS_WIDE,
        }
    }

    /// Renders the value as zero-padded uppercase hex with a `0x` prefix.
    ///
    /// Values wider than the digit count are printed in full, never truncated.
    pub fn render_hex(&self) -> String {
        format!("0x{:0width$X}", self.value, width = self.hex_digits())
    }
}
