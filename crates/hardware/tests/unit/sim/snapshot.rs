//! # Snapshot Tests
//!
//! Register/control views and the memory table as presentation layers receive them.

use crate::common::harness::TestContext;
use cyclesim_core::Architecture;
use cyclesim_core::sim::snapshot::{CellKind, MemoryRow, StepResult};
use pretty_assertions::assert_eq;

fn row(address_hex: &str, rendered_value: &str, kind: CellKind) -> MemoryRow {
    MemoryRow {
        address_hex: address_hex.to_owned(),
        rendered_value: rendered_value.to_owned(),
        kind,
    }
}

fn instr(address_hex: &str, rendered_value: &str) -> MemoryRow {
    row(address_hex, rendered_value, CellKind::Instruction)
}

fn data(address_hex: &str, rendered_value: &str) -> MemoryRow {
    row(address_hex, rendered_value, CellKind::Data)
}

#[test]
fn test_hypothetical_memory_table_after_load() {
    let ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    assert_eq!(
        ctx.engine.render_memory_table(),
        vec![
            instr("0x100", "LOAD M(0x200)"),
            instr("0x101", "ADD M(0x201)"),
            instr("0x102", "STOR M(0x202)"),
            data("0x200", "5"),
            data("0x201", "10"),
            data("0x202", "0"),
        ]
    );
}

#[test]
fn test_memory_table_tracks_written_result() {
    let mut ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    let _ = ctx.run_to_end();
    let table = ctx.engine.render_memory_table();
    assert_eq!(table.last(), Some(&data("0x202", "15")));
}

#[test]
fn test_ias_memory_table_decodes_low_data() {
    let mut ctx = TestContext::loaded(Architecture::Ias, 1);
    let _ = ctx.run_to_end();
    assert_eq!(
        ctx.engine.render_memory_table(),
        vec![
            instr("0x000", "LOAD M(0x0FA), ??? M(0x0FB)"),
            instr("0x001", "LOAD M(0x0FA), DIV M(0x08D)"),
            instr("0x002", "LOAD- M(0x0FA), ??? M(0x0FB)"),
            instr("0x0FA", "??? M(0x000), ??? M(0x005)"),
            instr("0x0FB", "??? M(0x000), ??? M(0x005)"),
        ]
    );
}

#[test]
fn test_ias_multiply_divide_table() {
    let mut ctx = TestContext::loaded(Architecture::Ias, 2);
    let _ = ctx.run_to_end();
    let table = ctx.engine.render_memory_table();
    assert_eq!(table.len(), 7);
    assert_eq!(table[0], instr("0x000", "LOAD M(0x100), MUL M(0x101)"));
    assert_eq!(table[5], data("0x102", "80"));
    assert_eq!(table[6], data("0x103", "5"));
}

#[test]
fn test_snapshot_register_views() {
    let ctx = TestContext::loaded(Architecture::Ias, 1);
    let snapshot = ctx.engine.snapshot();

    let names: Vec<&str> = snapshot.registers.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["PC", "MAR", "MBR", "IR", "IBR", "AC", "MQ"]);
    let hex: Vec<&str> = snapshot.registers.iter().map(|r| r.hex.as_str()).collect();
    assert_eq!(
        hex,
        vec![
            "0x000",
            "0x000",
            "0x0000000000",
            "0x00",
            "0x0000000000",
            "0x0000000000",
            "0x0000000000"
        ]
    );
    assert_eq!(snapshot.memory, ctx.engine.render_memory_table());
}

#[test]
fn test_snapshot_control_views() {
    let mut ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    let _ = ctx.step_n(5);
    let snapshot = ctx.engine.snapshot();
    let control: Vec<(&str, &str)> = snapshot
        .control
        .iter()
        .map(|c| (c.unit, c.status.as_str()))
        .collect();
    assert_eq!(control, vec![("ALU", "INACTIVE"), ("Control", "DECODING")]);
}

#[test]
fn test_step_result_helpers() {
    assert!(!StepResult::Finished.is_applied());
    assert_eq!(StepResult::NoScenarioLoaded.message(), None);

    let mut ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    let result = ctx.engine.step().unwrap();
    assert_eq!(result.message(), Some("Fetch cycle - Copy PC to MAR"));
}

#[test]
fn test_snapshot_serializes_to_json() {
    let ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    let json = serde_json::to_value(ctx.engine.snapshot()).unwrap();
    assert_eq!(json["registers"][0]["name"], "PC");
    assert_eq!(json["registers"][0]["hex"], "0x100");
    assert_eq!(json["memory"][3]["kind"], "Data");
    assert_eq!(json["control"][1]["status"], "INACTIVE");
}

#[test]
fn test_step_result_serializes_with_outcome_tag() {
    let json = serde_json::to_value(StepResult::Finished).unwrap();
    assert_eq!(json["outcome"], "finished");
}
