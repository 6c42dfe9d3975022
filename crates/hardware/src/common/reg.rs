//! Register names and the per-architecture register file.
//!
//! This module provides:
//! 1. **Naming:** The closed [`Reg`] set covering both architectures.
//! 2. **Storage:** [`RegisterFile`], one [`ComponentValue`] per register in profile order.
//! 3. **Validation:** Writes to registers outside the active profile are rejected.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::error::EngineError;
use crate::core::arch::component::ComponentValue;
use crate::isa::profile::{Architecture, ArchitectureProfile};

/// Every register named by either architecture.
///
/// The hypothetical machine uses the first five; the IAS adds the instruction buffer
/// and the multiplier-quotient register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Reg {
    /// Program counter.
    Pc,
    /// Memory address register.
    Mar,
    /// Memory buffer register.
    Mbr,
    /// Instruction register (full instruction on the hypothetical machine, opcode on IAS).
    Ir,
    /// Instruction buffer register (IAS only).
    Ibr,
    /// Accumulator.
    Ac,
    /// Multiplier-quotient register (IAS only).
    Mq,
}

impl Reg {
    /// Returns the display name used in tables and step messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Mar => "MAR",
            Self::Mbr => "MBR",
            Self::Ir => "IR",
            Self::Ibr => "IBR",
            Self::Ac => "AC",
            Self::Mq => "MQ",
        }
    }

    /// Looks up a register by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Pc,
            Self::Mar,
            Self::Mbr,
            Self::Ir,
            Self::Ibr,
            Self::Ac,
            Self::Mq,
        ]
        .into_iter()
        .find(|reg| reg.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Register file holding one component value per register of an architecture.
///
/// Registers are kept in the order the profile lists them, which is also the order
/// snapshots present them in.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    architecture: Architecture,
    cells: Vec<(Reg, ComponentValue)>,
    mask_writes: bool,
}

impl RegisterFile {
    /// Creates a register file for `profile` with every register at zero.
    ///
    /// # Arguments
    ///
    /// * `profile` - Architecture whose register set is instantiated.
    /// * `mask_writes` - When true, written values are truncated to the register width.
    pub fn new(profile: &ArchitectureProfile, mask_writes: bool) -> Self {
        let cells = profile
            .registers
            .iter()
            .map(|spec| (spec.reg, ComponentValue::new(spec.reg.name(), spec.bits)))
            .collect();
        Self {
            architecture: profile.architecture,
            cells,
            mask_writes,
        }
    }

    /// Returns the component value for `reg`, if the architecture has it.
    pub fn get(&self, reg: Reg) -> Option<&ComponentValue> {
        self.cells
            .iter()
            .find(|(name, _)| *name == reg)
            .map(|(_, cell)| cell)
    }

    /// Reads the raw value of `reg`, if the architecture has it.
    pub fn read(&self, reg: Reg) -> Option<u64> {
        self.get(reg).map(ComponentValue::value)
    }

    /// Writes `value` into `reg`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRegister`] if the architecture has no such register;
    /// the file is left untouched in that case.
    pub fn write(&mut self, reg: Reg, value: u64) -> Result<(), EngineError> {
        let architecture = self.architecture;
        let mask_writes = self.mask_writes;
        let Some((_, cell)) = self.cells.iter_mut().find(|(name, _)| *name == reg) else {
            warn!(register = %reg, %architecture, "write to register outside profile");
            return Err(EngineError::UnknownRegister {
                register: reg,
                architecture,
            });
        };
        if mask_writes {
            cell.update(value & cell.mask());
        } else {
            cell.update(value);
        }
        Ok(())
    }

    /// Iterates over the registers in profile order.
    pub fn iter(&self) -> impl Iterator<Item = (Reg, &ComponentValue)> {
        self.cells.iter().map(|(reg, cell)| (*reg, cell))
    }

    /// Number of registers in the file.
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the architecture has no registers (never the case for built-in profiles).
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
