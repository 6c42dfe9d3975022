//! Memory-table Disassembler.
//!
//! Converts a raw memory word into the string shown in the memory table. Whether a word
//! is an instruction or data is decided by address alone: anything below the profile's
//! instruction region end is decoded, everything else is printed in decimal.
//!
//! The step engine never consults this module; scripted steps carry their own effects.
//!
//! # Usage
//!
//! ```
//! use cyclesim_core::isa::disasm::decode_hypothetical;
//! assert_eq!(decode_hypothetical(0x1200), "LOAD M(0x200)");
//! ```

use serde::Serialize;

use super::hypothetical::HypotheticalBits;
use super::ias::IasBits;
use super::profile::{Architecture, ArchitectureProfile, HYPOTHETICAL, IAS};

/// Placeholder printed for an opcode missing from the table.
pub const UNKNOWN_MNEMONIC: &str = "???";

/// How a memory cell is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CellKind {
    /// Decoded as one or two instructions.
    Instruction,
    /// Printed as a decimal value.
    Data,
}

/// Rendered form of one memory word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    /// Display text (mnemonic form or decimal).
    pub text: String,
    /// Whether the word was treated as an instruction.
    pub kind: CellKind,
}

/// Renders `word` stored at `address` for `profile`.
pub fn disassemble(profile: &ArchitectureProfile, address: u16, word: u64) -> Disassembly {
    if !profile.is_instruction_address(address) {
        return Disassembly {
            text: word.to_string(),
            kind: CellKind::Data,
        };
    }

    let text = match profile.architecture {
        Architecture::Hypothetical => decode_hypothetical(word),
        Architecture::Ias => decode_ias(word),
    };
    Disassembly {
        text,
        kind: CellKind::Instruction,
    }
}

/// Decodes a hypothetical-machine word as `"<NAME> M(0x<addr>)"`.
pub fn decode_hypothetical(word: u64) -> String {
    let name = mnemonic_or_unknown(&HYPOTHETICAL, word.opcode());
    format!("{name} M(0x{:03X})", word.address())
}

/// Decodes an IAS word as `"<LEFT> M(0x<addr>), <RIGHT> M(0x<addr>)"`.
///
/// Each half falls back to `???` independently.
pub fn decode_ias(word: u64) -> String {
    let left = mnemonic_or_unknown(&IAS, word.left_opcode());
    let right = mnemonic_or_unknown(&IAS, word.right_opcode());
    format!(
        "{left} M(0x{:03X}), {right} M(0x{:03X})",
        word.left_address(),
        word.right_address()
    )
}

fn mnemonic_or_unknown(profile: &ArchitectureProfile, opcode: u8) -> &'static str {
    profile.mnemonic(opcode).unwrap_or(UNKNOWN_MNEMONIC)
}
