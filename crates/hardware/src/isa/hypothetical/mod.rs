//! Hypothetical Machine Instruction Set.
//!
//! One instruction per 16-bit word: a 4-bit opcode in bits 15-12 followed by a
//! 12-bit memory address.
//!
//! # Structure
//!
//! - `opcodes`: The ten opcodes and their mnemonic table.
//! - [`HypotheticalBits`]: Field extraction from a raw word.

/// Hypothetical machine opcodes.
pub mod opcodes;

use crate::common::constants::{
    ADDRESS_MASK, HYPOTHETICAL_OPCODE_MASK, HYPOTHETICAL_OPCODE_SHIFT,
};

/// Field extraction for hypothetical-machine instruction words.
pub trait HypotheticalBits {
    /// Extracts the opcode field (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the address field (bits 0-11).
    fn address(&self) -> u16;
}

impl HypotheticalBits for u64 {
    #[inline]
    fn opcode(&self) -> u8 {
        ((self >> HYPOTHETICAL_OPCODE_SHIFT) & HYPOTHETICAL_OPCODE_MASK) as u8
    }

    #[inline]
    fn address(&self) -> u16 {
        (self & ADDRESS_MASK) as u16
    }
}

/// Packs an opcode and address into an instruction word.
pub const fn encode(opcode: u8, address: u16) -> u64 {
    ((opcode as u64 & HYPOTHETICAL_OPCODE_MASK) << HYPOTHETICAL_OPCODE_SHIFT)
        | (address as u64 & ADDRESS_MASK)
}
