//! IAS Instruction Set.
//!
//! Each 40-bit word packs two 20-bit instructions, left (bits 39-20) and right
//! (bits 19-0). Each instruction is an 8-bit opcode followed by a 12-bit address.
//!
//! # Structure
//!
//! - `opcodes`: The eighteen opcodes and their mnemonic table.
//! - [`IasBits`]: Field extraction for both halves of a raw word.

/// IAS opcodes.
pub mod opcodes;

use crate::common::constants::{
    ADDRESS_MASK, IAS_LEFT_ADDRESS_SHIFT, IAS_LEFT_OPCODE_SHIFT, IAS_OPCODE_MASK,
    IAS_RIGHT_OPCODE_SHIFT,
};

/// Mask for one 20-bit instruction half.
pub const HALF_WORD_MASK: u64 = 0xF_FFFF;

/// Field extraction for IAS instruction words.
pub trait IasBits {
    /// Extracts the left opcode (bits 32-39).
    fn left_opcode(&self) -> u8;

    /// Extracts the left address (bits 20-31).
    fn left_address(&self) -> u16;

    /// Extracts the right opcode (bits 12-19).
    fn right_opcode(&self) -> u8;

    /// Extracts the right address (bits 0-11).
    fn right_address(&self) -> u16;

    /// Extracts the whole right instruction (bits 0-19), as loaded into IBR.
    fn right_instruction(&self) -> u64;
}

impl IasBits for u64 {
    #[inline]
    fn left_opcode(&self) -> u8 {
        ((self >> IAS_LEFT_OPCODE_SHIFT) & IAS_OPCODE_MASK) as u8
    }

    #[inline]
    fn left_address(&self) -> u16 {
        ((self >> IAS_LEFT_ADDRESS_SHIFT) & ADDRESS_MASK) as u16
    }

    #[inline]
    fn right_opcode(&self) -> u8 {
        ((self >> IAS_RIGHT_OPCODE_SHIFT) & IAS_OPCODE_MASK) as u8
    }

    #[inline]
    fn right_address(&self) -> u16 {
        (self & ADDRESS_MASK) as u16
    }

    #[inline]
    fn right_instruction(&self) -> u64 {
        self & HALF_WORD_MASK
    }
}

/// Packs two `(opcode, address)` instructions into one word.
pub const fn encode(left: (u8, u16), right: (u8, u16)) -> u64 {
    ((left.0 as u64) << IAS_LEFT_OPCODE_SHIFT)
        | ((left.1 as u64 & ADDRESS_MASK) << IAS_LEFT_ADDRESS_SHIFT)
        | ((right.0 as u64) << IAS_RIGHT_OPCODE_SHIFT)
        | (right.1 as u64 & ADDRESS_MASK)
}
