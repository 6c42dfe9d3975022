//! Hypothetical Machine Opcodes.
//!
//! Defines the 4-bit opcodes (bits 15-12) of the single-accumulator teaching machine.

/// Load AC from memory.
pub const LOAD: u8 = 0x1;

/// Store AC to memory.
pub const STOR: u8 = 0x2;

/// Load AC from an I/O port.
pub const LOADIO: u8 = 0x3;

/// Store AC to an I/O port.
pub const STORIO: u8 = 0x4;

/// Add memory to AC.
pub const ADD: u8 = 0x5;

/// Subtract memory from AC.
pub const SUB: u8 = 0x6;

/// Unconditional jump.
pub const JUMP: u8 = 0x7;

/// Jump if AC is negative.
pub const JNEG: u8 = 0x8;

/// Jump if AC is positive.
pub const JPOS: u8 = 0x9;

/// Jump if AC is zero.
pub const JZERO: u8 = 0xA;

/// Opcode-to-mnemonic table, ordered by opcode.
pub const TABLE: &[(u8, &str)] = &[
    (LOAD, "LOAD"),
    (STOR, "STOR"),
    (LOADIO, "LOADIO"),
    (STORIO, "STORIO"),
    (ADD, "ADD"),
    (SUB, "SUB"),
    (JUMP, "JUMP"),
    (JNEG, "JNEG"),
    (JPOS, "JPOS"),
    (JZERO, "JZERO"),
];
