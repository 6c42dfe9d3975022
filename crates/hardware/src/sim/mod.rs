//! Scenario replay.
//!
//! A scenario is a fixed program plus a hand-authored trace of the register, control and
//! memory writes its execution would perform. This module holds the scenario types, the
//! built-in registry, and the engine that replays a trace one micro-step at a time.

/// Step engine: load / step / reset over one architecture's state.
pub mod engine;

/// Built-in scenario registry for both architectures.
pub mod library;

/// Scenario scripts and their micro-steps.
pub mod scenario;

/// Read-only views handed to presentation layers.
pub mod snapshot;
