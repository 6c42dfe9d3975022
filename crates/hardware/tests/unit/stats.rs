//! # Statistics Tests
//!
//! Verifies that the engine's [`StepStats`](cyclesim_core::stats::StepStats) counts
//! each effect kind, session events, and rejected calls.

use crate::common::harness::TestContext;
use cyclesim_core::Architecture;
use cyclesim_core::stats::StepStats;

#[test]
fn test_new_engine_has_empty_stats() {
    let ctx = TestContext::new(Architecture::Ias);
    assert_eq!(ctx.engine.stats(), &StepStats::default());
}

#[test]
fn test_counts_effect_mix() {
    let mut ctx = TestContext::loaded(Architecture::Hypothetical, 1);
    let _ = ctx.run_to_end();
    let stats = ctx.engine.stats();

    assert_eq!(stats.register_writes, 20);
    assert_eq!(stats.control_writes, 4);
    assert_eq!(stats.memory_writes, 1);
    assert_eq!(stats.steps_applied(), 25);
    assert_eq!(stats.loads, 1);
    // run_to_end stops on the first rejected call
    assert_eq!(stats.rejected_steps, 1);
}

#[test]
fn test_idle_steps_are_rejected() {
    let mut ctx = TestContext::new(Architecture::Hypothetical);
    let _ = ctx.step_n(3);
    assert_eq!(ctx.engine.stats().rejected_steps, 1);
    let _ = ctx.engine.step().unwrap();
    assert_eq!(ctx.engine.stats().rejected_steps, 2);
    assert_eq!(ctx.engine.stats().steps_applied(), 0);
}

#[test]
fn test_stats_survive_reset() {
    let mut ctx = TestContext::loaded(Architecture::Ias, 2);
    let _ = ctx.step_n(10);
    ctx.engine.reset().unwrap();
    let stats = ctx.engine.stats();

    assert_eq!(stats.steps_applied(), 10);
    assert_eq!(stats.loads, 2);
    assert_eq!(stats.resets, 1);
}

#[test]
fn test_reset_stats_clears_counters() {
    let mut ctx = TestContext::loaded(Architecture::Ias, 1);
    let _ = ctx.run_to_end();
    ctx.engine.reset_stats();
    assert_eq!(ctx.engine.stats(), &StepStats::default());
    assert!(ctx.engine.is_finished());
}

#[test]
fn test_failed_load_is_not_counted() {
    let mut ctx = TestContext::new(Architecture::Hypothetical);
    assert!(ctx.engine.load(7).is_err());
    assert_eq!(ctx.engine.stats().loads, 0);
}

#[test]
fn test_print_does_not_panic_on_empty_stats() {
    StepStats::default().print();
}
