//! Fetch/decode/execute cycle visualizer core.
//!
//! This crate replays pre-authored micro-step traces for two teaching architectures,
//! the 16-bit "hypothetical machine" and the 40-bit IAS computer. It provides:
//! 1. **Components:** Fixed-width register cells, control-unit status flags, and word memory.
//! 2. **ISA:** Architecture profiles, opcode tables, and a display-only disassembler.
//! 3. **Simulation:** The scenario registry and the step engine that replays it.
//! 4. **Support:** JSON configuration and step statistics.
//!
//! Presentation layers drive a [`StepEngine`] through `load`/`step`/`reset` and render
//! its [`Snapshot`](sim::snapshot::Snapshot); the engine itself performs no I/O.

/// Common types (register names, register file, errors, constants).
pub mod common;
/// Engine configuration (tracing, register masking, display strings).
pub mod config;
/// CPU components (component values, control units, memory image).
pub mod core;
/// Architecture profiles, opcode tables, and the disassembler.
pub mod isa;
/// Scenario scripts, the scenario registry, and the step engine.
pub mod sim;
/// Step statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible engine operation.
pub use crate::common::EngineError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Closed set of supported architectures.
pub use crate::isa::profile::Architecture;
/// The replay engine; construct one per architecture with `StepEngine::new`.
pub use crate::sim::engine::StepEngine;
/// Scenario listing entry point for presentation layers.
pub use crate::sim::library::list_scenarios;
