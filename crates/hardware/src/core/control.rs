//! Control-unit status flags.
//!
//! Purely observational: the status strings describe what the ALU and the sequencing
//! control are doing at the current micro-step and never drive replay.

use std::fmt;

use serde::Serialize;

use crate::common::constants::INACTIVE;

/// Control units with a displayed status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ControlUnit {
    /// Arithmetic logic unit.
    Alu,
    /// Instruction sequencing / decode control.
    Control,
}

impl ControlUnit {
    /// All units, in display order.
    pub const ALL: [Self; 2] = [Self::Alu, Self::Control];

    /// Display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alu => "ALU",
            Self::Control => "Control",
        }
    }
}

impl fmt::Display for ControlUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current status of every control unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlUnits {
    alu: String,
    control: String,
}

impl Default for ControlUnits {
    fn default() -> Self {
        Self {
            alu: INACTIVE.to_owned(),
            control: INACTIVE.to_owned(),
        }
    }
}

impl ControlUnits {
    /// Creates the unit set with every unit `INACTIVE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `unit`.
    pub fn get(&self, unit: ControlUnit) -> &str {
        match unit {
            ControlUnit::Alu => &self.alu,
            ControlUnit::Control => &self.control,
        }
    }

    /// Overwrites the status of `unit`.
    pub fn set(&mut self, unit: ControlUnit, status: impl Into<String>) {
        let slot = match unit {
            ControlUnit::Alu => &mut self.alu,
            ControlUnit::Control => &mut self.control,
        };
        *slot = status.into();
    }

    /// Puts every unit back to `INACTIVE`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterates over `(unit, status)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ControlUnit, &str)> {
        ControlUnit::ALL.into_iter().map(|unit| (unit, self.get(unit)))
    }
}
