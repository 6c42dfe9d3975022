//! Step statistics collection and reporting.
//!
//! This module tracks what the engine has done over its lifetime. It provides:
//! 1. **Effect mix:** Counts of applied register, control, and memory writes.
//! 2. **Session events:** Scenario loads and resets.
//! 3. **Rejections:** `step()` calls that were no-ops (idle or finished engine).
//!
//! Counters survive `load` and `reset`; only [`StepStats::clear`] zeroes them.

use serde::Serialize;

use crate::sim::scenario::Step;

/// Lifetime counters for one engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepStats {
    /// Register writes applied.
    pub register_writes: u64,
    /// Control-unit writes applied.
    pub control_writes: u64,
    /// Memory writes applied.
    pub memory_writes: u64,
    /// Successful scenario loads (including those done by `reset`).
    pub loads: u64,
    /// Successful resets.
    pub resets: u64,
    /// `step()` calls that applied nothing.
    pub rejected_steps: u64,
}

impl StepStats {
    /// Total steps applied.
    pub const fn steps_applied(&self) -> u64 {
        self.register_writes + self.control_writes + self.memory_writes
    }

    /// Counts one applied step.
    pub const fn record(&mut self, step: &Step) {
        match step {
            Step::RegisterWrite { .. } => self.register_writes += 1,
            Step::ControlWrite { .. } => self.control_writes += 1,
            Step::MemoryWrite { .. } => self.memory_writes += 1,
        }
    }

    /// Zeroes every counter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Prints the counters to stdout.
    pub fn print(&self) {
        let applied = self.steps_applied().max(1) as f64;
        println!("\n==========================================================");
        println!("STEP ENGINE STATISTICS");
        println!("==========================================================");
        println!("steps_applied            {}", self.steps_applied());
        println!(
            "  register_writes        {} ({:.2}%)",
            self.register_writes,
            self.register_writes as f64 / applied * 100.0
        );
        println!(
            "  control_writes         {} ({:.2}%)",
            self.control_writes,
            self.control_writes as f64 / applied * 100.0
        );
        println!(
            "  memory_writes          {} ({:.2}%)",
            self.memory_writes,
            self.memory_writes as f64 / applied * 100.0
        );
        println!("----------------------------------------------------------");
        println!("loads                    {}", self.loads);
        println!("resets                   {}", self.resets);
        println!("rejected_steps           {}", self.rejected_steps);
        println!("==========================================================");
    }
}
