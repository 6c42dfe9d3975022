//! Architecture profiles.
//!
//! The two machines differ only in data (register widths, memory size, opcode table,
//! instruction region) and in how the disassembler slices a word. That data lives in
//! one static [`ArchitectureProfile`] per [`Architecture`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{hypothetical, ias};
use crate::common::constants::{
    HYPOTHETICAL_INSTRUCTION_REGION_END, HYPOTHETICAL_MEMORY_WORDS, IAS_INSTRUCTION_REGION_END,
    IAS_MEMORY_WORDS,
};
use crate::common::reg::Reg;

/// Supported architectures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// Generic single-accumulator teaching machine (16-bit words).
    Hypothetical,
    /// IAS computer (40-bit words, two instructions per word).
    Ias,
}

impl Architecture {
    /// Both architectures, in menu order.
    pub const ALL: [Self; 2] = [Self::Hypothetical, Self::Ias];

    /// Static profile describing this architecture.
    pub const fn profile(self) -> &'static ArchitectureProfile {
        match self {
            Self::Hypothetical => &HYPOTHETICAL,
            Self::Ias => &IAS,
        }
    }

    /// Human-readable machine name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hypothetical => "Hypothetical Machine",
            Self::Ias => "IAS Computer",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hypothetical" | "hyp" => Ok(Self::Hypothetical),
            "ias" => Ok(Self::Ias),
            other => Err(format!(
                "unknown architecture '{other}' (expected 'hypothetical' or 'ias')"
            )),
        }
    }
}

/// One register of a profile: its name and architectural width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterSpec {
    /// Register name.
    pub reg: Reg,
    /// Width in bits.
    pub bits: u8,
}

/// Static description of an architecture.
#[derive(Debug)]
pub struct ArchitectureProfile {
    /// Which architecture this describes.
    pub architecture: Architecture,
    /// Bits per memory word.
    pub word_bits: u32,
    /// Bits per address field.
    pub address_bits: u32,
    /// Number of words in memory.
    pub memory_size: usize,
    /// Register set in display order.
    pub registers: &'static [RegisterSpec],
    /// Instructions packed into one word.
    pub instructions_per_word: u8,
    /// Addresses below this are disassembled as instructions, the rest as data.
    pub instruction_region_end: u16,
    /// Opcode-to-mnemonic table.
    pub opcodes: &'static [(u8, &'static str)],
}

impl ArchitectureProfile {
    /// True if `reg` belongs to this architecture's register set.
    pub fn has_register(&self, reg: Reg) -> bool {
        self.registers.iter().any(|spec| spec.reg == reg)
    }

    /// Width of `reg`, if the architecture has it.
    pub fn register_bits(&self, reg: Reg) -> Option<u8> {
        self.registers
            .iter()
            .find(|spec| spec.reg == reg)
            .map(|spec| spec.bits)
    }

    /// Mnemonic for `opcode`, if the table has it.
    pub fn mnemonic(&self, opcode: u8) -> Option<&'static str> {
        self.opcodes
            .iter()
            .find(|(op, _)| *op == opcode)
            .map(|(_, name)| *name)
    }

    /// True if `address` lies in the instruction region.
    pub const fn is_instruction_address(&self, address: u16) -> bool {
        address < self.instruction_region_end
    }
}

/// Hypothetical machine: 16-bit words, 4096-word memory, five registers.
pub static HYPOTHETICAL: ArchitectureProfile = ArchitectureProfile {
    architecture: Architecture::Hypothetical,
    word_bits: 16,
    address_bits: 12,
    memory_size: HYPOTHETICAL_MEMORY_WORDS,
    registers: &[
        RegisterSpec {
            reg: Reg::Pc,
            bits: 12,
        },
        RegisterSpec {
            reg: Reg::Mar,
            bits: 12,
        },
        RegisterSpec {
            reg: Reg::Mbr,
            bits: 16,
        },
        RegisterSpec {
            reg: Reg::Ir,
            bits: 16,
        },
        RegisterSpec {
            reg: Reg::Ac,
            bits: 16,
        },
    ],
    instructions_per_word: 1,
    instruction_region_end: HYPOTHETICAL_INSTRUCTION_REGION_END,
    opcodes: hypothetical::opcodes::TABLE,
};

/// IAS computer: 40-bit words, 1000-word memory, seven registers.
pub static IAS: ArchitectureProfile = ArchitectureProfile {
    architecture: Architecture::Ias,
    word_bits: 40,
    address_bits: 12,
    memory_size: IAS_MEMORY_WORDS,
    registers: &[
        RegisterSpec {
            reg: Reg::Pc,
            bits: 12,
        },
        RegisterSpec {
            reg: Reg::Mar,
            bits: 12,
        },
        RegisterSpec {
            reg: Reg::Mbr,
            bits: 40,
        },
        RegisterSpec {
            reg: Reg::Ir,
            bits: 8,
        },
        RegisterSpec {
            reg: Reg::Ibr,
            bits: 20,
        },
        RegisterSpec {
            reg: Reg::Ac,
            bits: 40,
        },
        RegisterSpec {
            reg: Reg::Mq,
            bits: 40,
        },
    ],
    instructions_per_word: 2,
    instruction_region_end: IAS_INSTRUCTION_REGION_END,
    opcodes: ias::opcodes::TABLE,
};
