//! Engine harness.

use cyclesim_core::config::Config;
use cyclesim_core::sim::snapshot::StepResult;
use cyclesim_core::{Architecture, StepEngine};
use tracing_subscriber::EnvFilter;

/// Installs the test subscriber once per process; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Owns one engine and replays scenarios through it.
#[derive(Debug)]
pub struct TestContext {
    /// Engine under test.
    pub engine: StepEngine,
}

impl TestContext {
    /// Idle engine with the default configuration.
    pub fn new(architecture: Architecture) -> Self {
        Self::with_config(architecture, &Config::default())
    }

    /// Idle engine with `config`.
    pub fn with_config(architecture: Architecture, config: &Config) -> Self {
        init_tracing();
        Self {
            engine: StepEngine::with_config(architecture, config),
        }
    }

    /// Engine with scenario `id` already loaded.
    pub fn loaded(architecture: Architecture, id: u32) -> Self {
        let mut ctx = Self::new(architecture);
        ctx.engine.load(id).unwrap();
        ctx
    }

    /// Applies up to `n` steps and returns how many were applied.
    pub fn step_n(&mut self, n: usize) -> usize {
        let mut applied = 0;
        for _ in 0..n {
            if !self.engine.step().unwrap().is_applied() {
                break;
            }
            applied += 1;
        }
        applied
    }

    /// Steps until the engine stops applying and returns every applied result.
    pub fn run_to_end(&mut self) -> Vec<StepResult> {
        let mut results = Vec::new();
        loop {
            let result = self.engine.step().unwrap();
            if !result.is_applied() {
                break;
            }
            results.push(result);
        }
        results
    }

    /// Raw register value by display name.
    pub fn reg(&self, name: &str) -> u64 {
        let reg = cyclesim_core::common::Reg::from_name(name).unwrap();
        self.engine.registers().read(reg).unwrap()
    }

    /// Rendered register value by display name.
    pub fn reg_hex(&self, name: &str) -> String {
        let reg = cyclesim_core::common::Reg::from_name(name).unwrap();
        self.engine.registers().get(reg).unwrap().render_hex()
    }

    /// Memory word at `address`.
    pub fn mem(&self, address: usize) -> u64 {
        self.engine.memory().read(address).unwrap()
    }
}
