//! IAS Opcodes.
//!
//! Defines the 8-bit opcodes used in each 20-bit half of an IAS word.

/// Load AC from memory.
pub const LOAD: u8 = 0x01;

/// Load the negated memory word into AC.
pub const LOAD_NEG: u8 = 0x02;

/// Load the absolute value of the memory word into AC.
pub const LOAD_ABS: u8 = 0x03;

/// Load the negated absolute value of the memory word into AC.
pub const LOAD_NEG_ABS: u8 = 0x04;

/// Store AC to memory.
pub const STOR: u8 = 0x05;

/// Store the negated AC to memory.
pub const STOR_NEG: u8 = 0x06;

/// Unconditional jump.
pub const JUMP: u8 = 0x07;

/// Jump if AC is non-negative.
pub const JUMP_POS: u8 = 0x08;

/// Jump if AC is negative.
pub const JUMP_NEG: u8 = 0x09;

/// Add memory to AC.
pub const ADD: u8 = 0x0A;

/// Add the absolute value of memory to AC.
pub const ADD_ABS: u8 = 0x0B;

/// Subtract memory from AC.
pub const SUB: u8 = 0x0C;

/// Subtract the absolute value of memory from AC.
pub const SUB_ABS: u8 = 0x0D;

/// Multiply.
pub const MUL: u8 = 0x0E;

/// Divide.
pub const DIV: u8 = 0x0F;

/// Shift AC left one bit.
pub const LSH: u8 = 0x10;

/// Shift AC right one bit.
pub const RSH: u8 = 0x11;

/// Replace the address field of a memory word with AC bits 28-39.
pub const STOR_ADDR: u8 = 0x12;

/// Opcode-to-mnemonic table, ordered by opcode.
pub const TABLE: &[(u8, &str)] = &[
    (LOAD, "LOAD"),
    (LOAD_NEG, "LOAD-"),
    (LOAD_ABS, "LOAD|"),
    (LOAD_NEG_ABS, "LOAD||"),
    (STOR, "STOR"),
    (STOR_NEG, "STOR-"),
    (JUMP, "JUMP"),
    (JUMP_POS, "JUMP+"),
    (JUMP_NEG, "JUMP-"),
    (ADD, "ADD"),
    (ADD_ABS, "ADD|"),
    (SUB, "SUB"),
    (SUB_ABS, "SUB|"),
    (MUL, "MUL"),
    (DIV, "DIV"),
    (LSH, "LSH"),
    (RSH, "RSH"),
    (STOR_ADDR, "STOR M(X[8:19])"),
];
