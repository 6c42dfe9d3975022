//! Read-only views of engine state.
//!
//! Presentation layers never borrow engine internals; they receive these owned,
//! serializable views instead.

use serde::Serialize;

use crate::common::reg::RegisterFile;
use crate::core::control::ControlUnits;
pub use crate::isa::disasm::CellKind;

/// One register row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterView {
    /// Register name.
    pub name: &'static str,
    /// Architectural width.
    pub bits: u8,
    /// Raw value.
    pub value: u64,
    /// Rendered hex (see `ComponentValue::render_hex`).
    pub hex: String,
}

/// One control-unit row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ControlView {
    /// Unit name.
    pub unit: &'static str,
    /// Current status.
    pub status: String,
}

/// One memory-table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryRow {
    /// Address as `0x` plus three hex digits.
    pub address_hex: String,
    /// Disassembled instruction(s) or decimal data.
    pub rendered_value: String,
    /// Instruction or data.
    pub kind: CellKind,
}

/// Full view of the engine at one point in the trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Registers in profile order.
    pub registers: Vec<RegisterView>,
    /// Control units in display order.
    pub control: Vec<ControlView>,
    /// Memory table.
    pub memory: Vec<MemoryRow>,
}

/// Outcome of a `step()` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepResult {
    /// A step was applied.
    Applied {
        /// Cursor after the step (1-based index of the step just applied).
        cursor: usize,
        /// The step's message.
        message: &'static str,
        /// Registers after the step.
        registers: Vec<RegisterView>,
        /// Control units after the step.
        control: Vec<ControlView>,
    },
    /// No-op: nothing has been loaded yet.
    NoScenarioLoaded,
    /// No-op: every step of the loaded scenario has already been applied.
    Finished,
}

impl StepResult {
    /// True if a step was applied.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Message of the applied step, if any.
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Applied { message, .. } => Some(*message),
            Self::NoScenarioLoaded | Self::Finished => None,
        }
    }
}

/// Builds register rows from a register file.
pub fn register_views(registers: &RegisterFile) -> Vec<RegisterView> {
    registers
        .iter()
        .map(|(reg, cell)| RegisterView {
            name: reg.name(),
            bits: cell.bits(),
            value: cell.value(),
            hex: cell.render_hex(),
        })
        .collect()
}

/// Builds control rows from the control units.
pub fn control_views(control: &ControlUnits) -> Vec<ControlView> {
    control
        .iter()
        .map(|(unit, status)| ControlView {
            unit: unit.name(),
            status: status.to_owned(),
        })
        .collect()
}
