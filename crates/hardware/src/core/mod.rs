//! CPU components.
//!
//! This module contains the mutable pieces of machine state the engine replays
//! steps against: fixed-width register cells, the control-unit status flags, and
//! the word-addressed memory image.

/// Architectural cells (fixed-width component values).
pub mod arch;

/// Control-unit status flags (ALU and sequencing control).
pub mod control;

/// Word-addressed memory image.
pub mod memory;

pub use self::control::{ControlUnit, ControlUnits};
pub use self::memory::MemoryImage;
