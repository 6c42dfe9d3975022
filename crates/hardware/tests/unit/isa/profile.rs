//! # Architecture Profile Tests

use cyclesim_core::Architecture;
use cyclesim_core::common::Reg;
use cyclesim_core::isa::profile::{HYPOTHETICAL, IAS};
use rstest::rstest;

#[test]
fn test_hypothetical_profile() {
    assert_eq!(HYPOTHETICAL.word_bits, 16);
    assert_eq!(HYPOTHETICAL.address_bits, 12);
    assert_eq!(HYPOTHETICAL.memory_size, 4096);
    assert_eq!(HYPOTHETICAL.instructions_per_word, 1);
    assert_eq!(HYPOTHETICAL.opcodes.len(), 10);
    assert!(!HYPOTHETICAL.has_register(Reg::Ibr));
    assert!(!HYPOTHETICAL.has_register(Reg::Mq));
}

#[test]
fn test_ias_profile() {
    assert_eq!(IAS.word_bits, 40);
    assert_eq!(IAS.address_bits, 12);
    assert_eq!(IAS.memory_size, 1000);
    assert_eq!(IAS.instructions_per_word, 2);
    assert_eq!(IAS.opcodes.len(), 18);
    assert!(IAS.has_register(Reg::Mq));
}

#[rstest]
#[case(Architecture::Hypothetical, Reg::Pc, Some(12))]
#[case(Architecture::Hypothetical, Reg::Mbr, Some(16))]
#[case(Architecture::Hypothetical, Reg::Ir, Some(16))]
#[case(Architecture::Hypothetical, Reg::Ibr, None)]
#[case(Architecture::Ias, Reg::Ir, Some(8))]
#[case(Architecture::Ias, Reg::Ibr, Some(20))]
#[case(Architecture::Ias, Reg::Ac, Some(40))]
#[case(Architecture::Ias, Reg::Mar, Some(12))]
fn test_register_widths(#[case] arch: Architecture, #[case] reg: Reg, #[case] bits: Option<u8>) {
    assert_eq!(arch.profile().register_bits(reg), bits);
}

#[rstest]
#[case(Architecture::Hypothetical, 0x5, Some("ADD"))]
#[case(Architecture::Hypothetical, 0xB, None)]
#[case(Architecture::Ias, 0x03, Some("LOAD|"))]
#[case(Architecture::Ias, 0x0D, Some("SUB|"))]
#[case(Architecture::Ias, 0x13, None)]
fn test_profile_mnemonic(
    #[case] arch: Architecture,
    #[case] opcode: u8,
    #[case] name: Option<&str>,
) {
    assert_eq!(arch.profile().mnemonic(opcode), name);
}

#[test]
fn test_instruction_region_boundaries() {
    assert!(HYPOTHETICAL.is_instruction_address(0x1FF));
    assert!(!HYPOTHETICAL.is_instruction_address(0x200));
    assert!(IAS.is_instruction_address(0x0FF));
    assert!(!IAS.is_instruction_address(0x100));
}

#[rstest]
#[case("hypothetical", Architecture::Hypothetical)]
#[case("HYP", Architecture::Hypothetical)]
#[case("ias", Architecture::Ias)]
#[case("IAS", Architecture::Ias)]
fn test_parse_architecture(#[case] text: &str, #[case] expected: Architecture) {
    assert_eq!(text.parse::<Architecture>(), Ok(expected));
}

#[test]
fn test_parse_unknown_architecture() {
    let err = "mips".parse::<Architecture>().unwrap_err();
    assert!(err.contains("mips"));
}

#[test]
fn test_display_names() {
    assert_eq!(
        Architecture::Hypothetical.to_string(),
        "Hypothetical Machine"
    );
    assert_eq!(Architecture::Ias.to_string(), "IAS Computer");
    assert_eq!(Architecture::ALL.len(), 2);
}

#[test]
fn test_profile_points_back_to_architecture() {
    for arch in Architecture::ALL {
        assert_eq!(arch.profile().architecture, arch);
    }
}
