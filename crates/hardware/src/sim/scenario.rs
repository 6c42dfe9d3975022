//! Scenario scripts.
//!
//! A [`ScenarioScript`] is immutable, compiled-in data: the initial memory image, the
//! initial program counter, and an ordered list of [`Step`]s. Each step carries exactly
//! one effect plus the message describing the micro-operation it stands for.

use serde::Serialize;

use crate::common::reg::Reg;
use crate::core::control::ControlUnit;

/// One scripted micro-step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Overwrite a register.
    RegisterWrite {
        /// Target register.
        register: Reg,
        /// New value.
        value: u64,
        /// Micro-operation description.
        message: &'static str,
    },
    /// Overwrite a control unit's status.
    ControlWrite {
        /// Target unit.
        unit: ControlUnit,
        /// New status string.
        value: &'static str,
        /// Micro-operation description.
        message: &'static str,
    },
    /// Overwrite a memory word.
    MemoryWrite {
        /// Target address.
        address: u16,
        /// New word.
        value: u64,
        /// Micro-operation description.
        message: &'static str,
    },
}

impl Step {
    /// Builds a [`Step::RegisterWrite`].
    pub const fn reg(register: Reg, value: u64, message: &'static str) -> Self {
        Self::RegisterWrite {
            register,
            value,
            message,
        }
    }

    /// Builds a [`Step::ControlWrite`].
    pub const fn ctl(unit: ControlUnit, value: &'static str, message: &'static str) -> Self {
        Self::ControlWrite {
            unit,
            value,
            message,
        }
    }

    /// Builds a [`Step::MemoryWrite`].
    pub const fn mem(address: u16, value: u64, message: &'static str) -> Self {
        Self::MemoryWrite {
            address,
            value,
            message,
        }
    }

    /// Micro-operation description.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RegisterWrite { message, .. }
            | Self::ControlWrite { message, .. }
            | Self::MemoryWrite { message, .. } => message,
        }
    }
}

/// A fixed program with its pre-authored execution trace.
#[derive(Debug)]
pub struct ScenarioScript {
    /// Menu id, unique per architecture, starting at 1.
    pub id: u32,
    /// Menu label.
    pub display_name: &'static str,
    /// `(address, word)` pairs loaded before the first step, ascending by address.
    pub initial_memory: &'static [(u16, u64)],
    /// Program counter after loading.
    pub initial_pc: u16,
    /// Trace to replay.
    pub steps: &'static [Step],
}

impl ScenarioScript {
    /// Number of steps in the trace.
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for a script with no steps.
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Menu entry for this script.
    pub const fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id,
            display_name: self.display_name,
        }
    }

    /// Addresses shown in the memory table: every initially loaded address plus every
    /// address a step writes, ascending and without duplicates.
    pub fn relevant_addresses(&self) -> Vec<u16> {
        let mut addresses: Vec<u16> = self
            .initial_memory
            .iter()
            .map(|(address, _)| *address)
            .chain(self.steps.iter().filter_map(|step| match step {
                Step::MemoryWrite { address, .. } => Some(*address),
                _ => None,
            }))
            .collect();
        addresses.sort_unstable();
        addresses.dedup();
        addresses
    }
}

/// Menu entry for a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    /// Scenario id.
    pub id: u32,
    /// Menu label.
    pub display_name: &'static str,
}
