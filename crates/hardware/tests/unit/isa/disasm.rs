//! # Disassembler Tests
//!
//! Mnemonic rendering for both architectures, the instruction-region heuristic, and
//! per-field unknown-opcode fallback.

use cyclesim_core::isa::disasm::{
    CellKind, UNKNOWN_MNEMONIC, decode_hypothetical, decode_ias, disassemble,
};
use cyclesim_core::isa::profile::{HYPOTHETICAL, IAS};
use cyclesim_core::isa::{hypothetical, ias};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0x1200, "LOAD M(0x200)")]
#[case(0x5201, "ADD M(0x201)")]
#[case(0x2202, "STOR M(0x202)")]
#[case(0x6211, "SUB M(0x211)")]
#[case(0x3ABC, "LOADIO M(0xABC)")]
#[case(0x4001, "STORIO M(0x001)")]
#[case(0x7FFF, "JUMP M(0xFFF)")]
#[case(0x8010, "JNEG M(0x010)")]
#[case(0x9020, "JPOS M(0x020)")]
#[case(0xA030, "JZERO M(0x030)")]
fn test_hypothetical_decode(#[case] word: u64, #[case] expected: &str) {
    assert_eq!(decode_hypothetical(word), expected);
}

#[rstest]
#[case(0x0123)]
#[case(0xB000)]
#[case(0xF456)]
fn test_hypothetical_unknown_opcode(#[case] word: u64) {
    assert!(decode_hypothetical(word).starts_with("??? M(0x"));
}

#[test]
fn test_ias_decode_both_halves() {
    assert_eq!(decode_ias(0x010FA210FB), "LOAD M(0x0FA), ??? M(0x0FB)");
    assert_eq!(decode_ias(0x011000E101), "LOAD M(0x100), MUL M(0x101)");
    assert_eq!(decode_ias(0x0510201100), "STOR M(0x102), LOAD M(0x100)");
    assert_eq!(decode_ias(0x0F10105103), "DIV M(0x101), STOR M(0x103)");
}

#[test]
fn test_ias_unknown_halves_are_independent() {
    assert_eq!(decode_ias(5), "??? M(0x000), ??? M(0x005)");
    let word = ias::encode((0x01, 0x010), (0xEE, 0x020));
    assert_eq!(
        decode_ias(word),
        format!("LOAD M(0x010), {UNKNOWN_MNEMONIC} M(0x020)")
    );
}

#[test]
fn test_ias_long_mnemonic() {
    let word = ias::encode((0x12, 0x0AB), (0x08, 0x0CD));
    assert_eq!(decode_ias(word), "STOR M(X[8:19]) M(0x0AB), JUMP+ M(0x0CD)");
}

#[test]
fn test_data_region_renders_decimal() {
    let cell = disassemble(&HYPOTHETICAL, 0x200, 5);
    assert_eq!(cell.text, "5");
    assert_eq!(cell.kind, CellKind::Data);

    let cell = disassemble(&IAS, 0x102, 80);
    assert_eq!(cell.text, "80");
    assert_eq!(cell.kind, CellKind::Data);
}

#[test]
fn test_instruction_region_decodes() {
    let cell = disassemble(&HYPOTHETICAL, 0x100, 0x1200);
    assert_eq!(cell.text, "LOAD M(0x200)");
    assert_eq!(cell.kind, CellKind::Instruction);
}

#[test]
fn test_ias_low_data_is_decoded_as_instructions() {
    let cell = disassemble(&IAS, 0x0FB, 10);
    assert_eq!(cell.text, "??? M(0x000), ??? M(0x00A)");
    assert_eq!(cell.kind, CellKind::Instruction);
}

proptest! {
    #[test]
    fn prop_hypothetical_address_field(opcode in 1u8..=0xA, address in 0u16..0x1000) {
        let word = hypothetical::encode(opcode, address);
        let text = decode_hypothetical(word);
        let expected_name = HYPOTHETICAL.mnemonic(opcode).unwrap();
        prop_assert_eq!(text, format!("{expected_name} M(0x{address:03X})"));
    }

    #[test]
    fn prop_ias_fields_round_trip(
        left_op in 0u8..=0xFF,
        left_addr in 0u16..0x1000,
        right_op in 0u8..=0xFF,
        right_addr in 0u16..0x1000,
    ) {
        let text = decode_ias(ias::encode((left_op, left_addr), (right_op, right_addr)));
        let left = IAS.mnemonic(left_op).unwrap_or(UNKNOWN_MNEMONIC);
        let right = IAS.mnemonic(right_op).unwrap_or(UNKNOWN_MNEMONIC);
        prop_assert_eq!(
            text,
            format!("{left} M(0x{left_addr:03X}), {right} M(0x{right_addr:03X})")
        );
    }

    #[test]
    fn prop_data_region_is_decimal(address in 0x200u16..0x1000, word in 0u64..0x1_0000) {
        let cell = disassemble(&HYPOTHETICAL, address, word);
        prop_assert_eq!(cell.kind, CellKind::Data);
        prop_assert_eq!(cell.text, word.to_string());
    }
}

#[test]
fn test_ias_field_accessors() {
    use cyclesim_core::isa::ias::IasBits;

    let word: u64 = 0x011000E101;
    assert_eq!(word.left_opcode(), ias::opcodes::LOAD);
    assert_eq!(word.left_address(), 0x100);
    assert_eq!(word.right_opcode(), ias::opcodes::MUL);
    assert_eq!(word.right_address(), 0x101);
    assert_eq!(word.right_instruction(), 0x0E101);
}
