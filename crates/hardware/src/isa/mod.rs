//! Instruction Set Architecture definitions.
//!
//! Contains the static description of each supported machine and the display-only
//! disassembler built on top of it.
//!
//! # Architectures
//!
//! * `hypothetical`: 16-bit words, one instruction per word, 4-bit opcode + 12-bit address.
//! * `ias`: 40-bit words, two packed 20-bit instructions, 8-bit opcode + 12-bit address.

/// Memory-table disassembler (display only; never consulted by the engine).
pub mod disasm;

/// IAS computer opcodes and field extraction.
pub mod ias;

/// Hypothetical machine opcodes and field extraction.
pub mod hypothetical;

/// Architecture profiles: register sets, memory sizes, opcode tables.
pub mod profile;
