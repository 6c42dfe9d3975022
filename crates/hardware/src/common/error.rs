//! Engine error definitions.
//!
//! Every fallible engine operation reports one of these kinds. None of them leaves the
//! engine half-updated: an operation either applies completely or is rejected before
//! any state changes.
//! 1. **Caller errors:** Selecting a scenario that does not exist, or resetting an idle engine.
//! 2. **Authoring errors:** A scripted step names a register or address the architecture lacks.

use thiserror::Error;

use super::reg::Reg;
use crate::isa::profile::Architecture;

/// Errors reported by the step engine and its components.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested scenario id is not registered for the architecture.
    #[error("scenario {id} is not registered for the {architecture}")]
    UnknownScenario {
        /// Architecture the lookup was made against.
        architecture: Architecture,
        /// Requested scenario id.
        id: u32,
    },

    /// A step or reset was requested before any scenario was loaded.
    #[error("no scenario loaded")]
    NoScenarioLoaded,

    /// A memory access fell outside `[0, size)`.
    #[error("memory address {address:#05x} is outside the {size}-word memory")]
    OutOfRange {
        /// Offending address.
        address: usize,
        /// Number of words in the memory image.
        size: usize,
    },

    /// A scripted step named a register the architecture does not have.
    #[error("register {register} does not exist on the {architecture}")]
    UnknownRegister {
        /// Register named by the step.
        register: Reg,
        /// Architecture whose register set was searched.
        architecture: Architecture,
    },
}
