//! Step engine.
//!
//! The engine owns the complete mutable state of one architecture: the register file,
//! the control-unit statuses, the memory image, the loaded script and the replay cursor.
//! It performs the following:
//! 1. **Load:** Builds fresh state for a script, applies its initial memory and PC.
//! 2. **Step:** Applies exactly one scripted effect and advances the cursor.
//! 3. **Reset:** Reloads the current script.
//! 4. **Views:** Produces snapshots and the disassembled memory table.
//!
//! Every mutating operation validates before it changes anything, so a rejected call
//! leaves the engine exactly as it was.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::library;
use super::scenario::{ScenarioScript, ScenarioSummary, Step};
use super::snapshot::{MemoryRow, Snapshot, StepResult, control_views, register_views};
use crate::common::error::EngineError;
use crate::common::reg::{Reg, RegisterFile};
use crate::config::Config;
use crate::core::control::ControlUnits;
use crate::core::memory::MemoryImage;
use crate::isa::disasm;
use crate::isa::profile::{Architecture, ArchitectureProfile};
use crate::stats::StepStats;

/// Lifecycle state derived from the loaded script and the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EngineStatus {
    /// Nothing loaded.
    Idle,
    /// Script loaded, no step applied yet.
    Ready,
    /// Some but not all steps applied.
    Running,
    /// Every step applied.
    Finished,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Replays scenario scripts for one architecture.
///
/// # Examples
///
/// ```
/// use cyclesim_core::{Architecture, StepEngine};
///
/// let mut engine = StepEngine::new(Architecture::Hypothetical);
/// engine.load(1).unwrap();
/// while engine.step().unwrap().is_applied() {}
///
/// assert!(engine.is_finished());
/// assert_eq!(engine.memory().read(0x202).unwrap(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct StepEngine {
    profile: &'static ArchitectureProfile,
    config: Config,
    registers: RegisterFile,
    control: ControlUnits,
    memory: MemoryImage,
    scenario: Option<&'static ScenarioScript>,
    cursor: usize,
    stats: StepStats,
}

impl StepEngine {
    /// Creates an idle engine for `architecture` with the default configuration.
    pub fn new(architecture: Architecture) -> Self {
        Self::with_config(architecture, &Config::default())
    }

    /// Creates an idle engine for `architecture` using `config`.
    pub fn with_config(architecture: Architecture, config: &Config) -> Self {
        let profile = architecture.profile();
        Self {
            profile,
            config: config.clone(),
            registers: RegisterFile::new(profile, config.general.mask_register_writes),
            control: ControlUnits::new(),
            memory: MemoryImage::new(profile.memory_size),
            scenario: None,
            cursor: 0,
            stats: StepStats::default(),
        }
    }

    /// Creates an engine for `architecture` and loads scenario `id` into it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownScenario`] if `id` is not registered.
    pub fn for_scenario(
        architecture: Architecture,
        id: u32,
        config: &Config,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::with_config(architecture, config);
        engine.load(id)?;
        Ok(engine)
    }

    /// Architecture this engine was built for.
    pub const fn architecture(&self) -> Architecture {
        self.profile.architecture
    }

    /// Static profile of the architecture.
    pub const fn profile(&self) -> &'static ArchitectureProfile {
        self.profile
    }

    /// Scenarios available to [`load`](Self::load), in menu order.
    pub fn list_scenarios(&self) -> Vec<ScenarioSummary> {
        library::list_scenarios(self.architecture())
    }

    /// Loads scenario `id`, discarding all current state.
    ///
    /// Registers are zeroed, control units go `INACTIVE`, memory is zeroed and then
    /// receives the script's initial words, PC receives the initial PC, and the cursor
    /// returns to 0. Valid from any state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownScenario`] if `id` is not registered for this
    /// architecture. Authoring errors in the script's initial image surface as
    /// [`EngineError::OutOfRange`] or [`EngineError::UnknownRegister`]. The engine is
    /// unchanged on error.
    pub fn load(&mut self, id: u32) -> Result<(), EngineError> {
        let architecture = self.architecture();
        let script = library::find(architecture, id)
            .ok_or(EngineError::UnknownScenario { architecture, id })?;
        self.install(script)?;
        self.stats.loads += 1;
        debug!(
            %architecture,
            scenario = script.id,
            name = script.display_name,
            steps = script.len(),
            "scenario loaded"
        );
        Ok(())
    }

    /// Applies the next scripted step.
    ///
    /// Calling this while idle or finished is a no-op reported through
    /// [`StepResult::NoScenarioLoaded`] or [`StepResult::Finished`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRegister`] or [`EngineError::OutOfRange`] if the
    /// step targets something the architecture lacks. The cursor does not advance.
    pub fn step(&mut self) -> Result<StepResult, EngineError> {
        let Some(script) = self.scenario else {
            self.stats.rejected_steps += 1;
            return Ok(StepResult::NoScenarioLoaded);
        };
        let Some(step) = script.steps.get(self.cursor) else {
            self.stats.rejected_steps += 1;
            return Ok(StepResult::Finished);
        };

        self.apply(step)?;
        self.cursor += 1;
        self.stats.record(step);

        let message = step.message();
        if self.config.general.trace_steps {
            info!(cursor = self.cursor, total = script.len(), "{message}");
        } else {
            debug!(
                cursor = self.cursor,
                total = script.len(),
                step = message,
                "step applied"
            );
        }

        Ok(StepResult::Applied {
            cursor: self.cursor,
            message,
            registers: register_views(&self.registers),
            control: control_views(&self.control),
        })
    }

    /// Reloads the current scenario.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoScenarioLoaded`] while idle.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let script = self.scenario.ok_or(EngineError::NoScenarioLoaded)?;
        self.install(script)?;
        self.stats.loads += 1;
        self.stats.resets += 1;
        debug!(architecture = %self.architecture(), scenario = script.id, "scenario reset");
        Ok(())
    }

    /// Current lifecycle state.
    pub const fn status(&self) -> EngineStatus {
        match self.scenario {
            None => EngineStatus::Idle,
            Some(_) if self.cursor == 0 => EngineStatus::Ready,
            Some(script) if self.cursor >= script.len() => EngineStatus::Finished,
            Some(_) => EngineStatus::Running,
        }
    }

    /// True once every step of the loaded script has been applied.
    pub const fn is_finished(&self) -> bool {
        matches!(self.status(), EngineStatus::Finished)
    }

    /// Number of steps applied since the last load.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Status line for the presentation layer.
    ///
    /// The awaiting message before the first step (including while idle), the finished
    /// message after the last, and `"Step <n>: <message>"` in between.
    pub fn current_message(&self) -> String {
        match (self.status(), self.scenario) {
            (EngineStatus::Finished, _) => self.config.display.finished_message.clone(),
            (EngineStatus::Running, Some(script)) => {
                script.steps.get(self.cursor - 1).map_or_else(
                    || self.config.display.finished_message.clone(),
                    |step| format!("Step {}: {}", self.cursor, step.message()),
                )
            }
            _ => self.config.display.awaiting_message.clone(),
        }
    }

    /// Read-only view of registers, control units and the memory table.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: register_views(&self.registers),
            control: control_views(&self.control),
            memory: self.render_memory_table(),
        }
    }

    /// Memory rows relevant to the loaded scenario, ascending by address.
    ///
    /// Empty while idle.
    pub fn render_memory_table(&self) -> Vec<MemoryRow> {
        let Some(script) = self.scenario else {
            return Vec::new();
        };
        script
            .relevant_addresses()
            .into_iter()
            .filter_map(|address| {
                let word = self.memory.get(address as usize)?;
                let cell = disasm::disassemble(self.profile, address, word);
                Some(MemoryRow {
                    address_hex: format!("0x{address:03X}"),
                    rendered_value: cell.text,
                    kind: cell.kind,
                })
            })
            .collect()
    }

    /// Register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Control-unit statuses.
    pub const fn control(&self) -> &ControlUnits {
        &self.control
    }

    /// Memory image.
    pub const fn memory(&self) -> &MemoryImage {
        &self.memory
    }

    /// Loaded script, if any.
    pub const fn scenario(&self) -> Option<&'static ScenarioScript> {
        self.scenario
    }

    /// Lifetime statistics.
    pub const fn stats(&self) -> &StepStats {
        &self.stats
    }

    /// Zeroes the lifetime statistics.
    pub fn reset_stats(&mut self) {
        self.stats.clear();
    }

    /// Builds fresh state for `script` and commits it only if every initial write succeeds.
    fn install(&mut self, script: &'static ScenarioScript) -> Result<(), EngineError> {
        let mut registers =
            RegisterFile::new(self.profile, self.config.general.mask_register_writes);
        let mut memory = MemoryImage::new(self.profile.memory_size);
        for &(address, word) in script.initial_memory {
            memory.write(address as usize, word).inspect_err(|err| {
                warn!(scenario = script.id, %err, "initial memory rejected");
            })?;
        }
        registers.write(Reg::Pc, u64::from(script.initial_pc))?;

        self.registers = registers;
        self.memory = memory;
        self.control.reset();
        self.scenario = Some(script);
        self.cursor = 0;
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> Result<(), EngineError> {
        match *step {
            Step::RegisterWrite {
                register, value, ..
            } => self.registers.write(register, value),
            Step::ControlWrite { unit, value, .. } => {
                self.control.set(unit, value);
                Ok(())
            }
            Step::MemoryWrite { address, value, .. } => self
                .memory
                .write(address as usize, value)
                .inspect_err(|err| warn!(cursor = self.cursor, %err, "memory step rejected")),
        }
    }
}
