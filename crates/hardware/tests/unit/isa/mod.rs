//! # ISA Tests

/// Memory-table disassembly for both architectures.
pub mod disasm;

/// Architecture profile tables and parsing.
pub mod profile;
