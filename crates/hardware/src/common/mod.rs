//! Common utilities and types shared by every part of the simulator.
//!
//! This module provides the building blocks used across components:
//! 1. **Constants:** Word and address masks plus display-width rules.
//! 2. **Error Handling:** The [`EngineError`] type reported by the engine.
//! 3. **Register Management:** Register names and the per-architecture register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types reported by engine operations.
pub mod error;

/// Register names and register file implementation.
pub mod reg;

pub use error::EngineError;
pub use reg::{Reg, RegisterFile};
