//! Built-in scenario registry.
//!
//! The single source of scenario data for every presentation layer. Each architecture
//! owns an ordered slice of scripts; ids start at 1 and follow menu order.

/// Hypothetical machine scenarios.
pub mod hypothetical;

/// IAS scenarios.
pub mod ias;

use super::scenario::{ScenarioScript, ScenarioSummary};
use crate::isa::profile::Architecture;

/// Control status while an instruction is being decoded.
pub const DECODING: &str = "DECODING";
/// ALU status during an addition.
pub const ADDING: &str = "ADDING";
/// ALU status during a subtraction.
pub const SUBTRACTING: &str = "SUBTRACTING";
/// ALU status during a multiplication.
pub const MULTIPLYING: &str = "MULTIPLYING";
/// ALU status during a division.
pub const DIVIDING: &str = "DIVIDING";

// Messages shared by every trace.
pub(crate) const FETCH_PC_TO_MAR: &str = "Fetch cycle - Copy PC to MAR";
pub(crate) const FETCH_INCREMENT_PC: &str = "Fetch cycle - Increment PC";
pub(crate) const EXEC_READ_DATA: &str = "Execute cycle - Read data from memory into MBR";
pub(crate) const EXEC_MBR_TO_AC: &str = "Execute cycle - Transfer data from MBR to AC";
pub(crate) const EXEC_ALU_ADD: &str = "Execute cycle - ALU performing addition";
pub(crate) const EXEC_ALU_SUB: &str = "Execute cycle - ALU performing subtraction";

/// All scripts registered for `architecture`, in menu order.
pub fn scenarios(architecture: Architecture) -> &'static [ScenarioScript] {
    match architecture {
        Architecture::Hypothetical => &hypothetical::SCENARIOS,
        Architecture::Ias => &ias::SCENARIOS,
    }
}

/// Looks up a script by id.
pub fn find(architecture: Architecture, id: u32) -> Option<&'static ScenarioScript> {
    scenarios(architecture).iter().find(|script| script.id == id)
}

/// Menu entries for `architecture`, in menu order.
pub fn list_scenarios(architecture: Architecture) -> Vec<ScenarioSummary> {
    scenarios(architecture)
        .iter()
        .map(ScenarioScript::summary)
        .collect()
}
