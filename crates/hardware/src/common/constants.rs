//! Global Simulator Constants.
//!
//! This module defines constants shared by both architectures. It includes:
//! 1. **Field Masks:** Address and opcode masks for decoding instruction fields.
//! 2. **Memory Sizes:** Word counts for each architecture's memory.
//! 3. **Display Rules:** Hex digit counts used when rendering register values.

/// Mask for a 12-bit address field (both architectures).
pub const ADDRESS_MASK: u64 = 0xFFF;

/// Mask for the 4-bit opcode of a hypothetical-machine instruction.
pub const HYPOTHETICAL_OPCODE_MASK: u64 = 0xF;

/// Bit position of the opcode within a hypothetical-machine word.
pub const HYPOTHETICAL_OPCODE_SHIFT: u32 = 12;

/// Mask for an 8-bit IAS opcode.
pub const IAS_OPCODE_MASK: u64 = 0xFF;

/// Bit position of the left instruction's opcode in an IAS word.
pub const IAS_LEFT_OPCODE_SHIFT: u32 = 32;

/// Bit position of the left instruction's address in an IAS word.
pub const IAS_LEFT_ADDRESS_SHIFT: u32 = 20;

/// Bit position of the right instruction's opcode in an IAS word.
pub const IAS_RIGHT_OPCODE_SHIFT: u32 = 12;

/// Number of words in the hypothetical machine's memory (12-bit address space).
pub const HYPOTHETICAL_MEMORY_WORDS: usize = 4096;

/// Number of words in the IAS memory.
pub const IAS_MEMORY_WORDS: usize = 1000;

/// Addresses below this are rendered as instructions on the hypothetical machine.
pub const HYPOTHETICAL_INSTRUCTION_REGION_END: u16 = 0x200;

/// Addresses below this are rendered as instructions on the IAS.
pub const IAS_INSTRUCTION_REGION_END: u16 = 0x100;

/// Hex digits used for 12-bit registers.
pub const HEX_DIGITS_12: usize = 3;

/// Hex digits used for 8-bit registers.
pub const HEX_DIGITS_8: usize = 2;

/// Hex digits used for every other width (16, 20 and 40 bits alike).
pub const HEX_DIGITS_WIDE: usize = 10;

/// Status string for a control unit that is not doing anything.
pub const INACTIVE: &str = "INACTIVE";
