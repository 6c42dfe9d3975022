//! Cycle visualizer trace CLI.
//!
//! This binary inspects the built-in scenarios without any interactive loop. It performs:
//! 1. **List:** Print the scenario menu for one or both architectures.
//! 2. **Trace:** Replay a scenario to the end, printing every step (text or JSON).
//! 3. **Memory:** Print the disassembled memory table after N steps.

use std::error::Error;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cyclesim_core::config::Config;
use cyclesim_core::sim::snapshot::{MemoryRow, RegisterView, StepResult};
use cyclesim_core::{Architecture, StepEngine, list_scenarios};

#[derive(Parser, Debug)]
#[command(
    name = "cyclesim",
    author,
    version,
    about = "Fetch/decode/execute cycle visualizer",
    long_about = "Replay the built-in teaching scenarios for the hypothetical machine and the IAS computer.\n\nExamples:\n  cyclesim list\n  cyclesim trace --arch ias --scenario 1\n  cyclesim memory --arch hypothetical --scenario 2 --steps 10"
)]
struct Cli {
    /// Raise the default log level to debug.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON engine configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered scenarios.
    List {
        /// Restrict to one architecture (`hypothetical` or `ias`).
        #[arg(long)]
        arch: Option<Architecture>,
    },

    /// Replay a scenario to the end and print every step.
    Trace {
        /// Architecture (`hypothetical` or `ias`).
        #[arg(long, default_value = "hypothetical")]
        arch: Architecture,

        /// Scenario id from `cyclesim list`.
        #[arg(long, short)]
        scenario: u32,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Print step statistics after the trace.
        #[arg(long)]
        stats: bool,
    },

    /// Print the memory table after a number of steps.
    Memory {
        /// Architecture (`hypothetical` or `ias`).
        #[arg(long, default_value = "hypothetical")]
        arch: Architecture,

        /// Scenario id from `cyclesim list`.
        #[arg(long, short)]
        scenario: u32,

        /// Steps to apply first; all of them when omitted.
        #[arg(long)]
        steps: Option<usize>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref().map(Config::from_file).transpose() {
        Ok(Some(config)) => {
            debug!(path = cli.config.as_deref(), "configuration loaded");
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List { arch } => {
            cmd_list(arch);
            Ok(())
        }
        Commands::Trace {
            arch,
            scenario,
            json,
            stats,
        } => cmd_trace(arch, scenario, json, stats, &config),
        Commands::Memory {
            arch,
            scenario,
            steps,
            json,
        } => cmd_memory(arch, scenario, steps, json, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list(arch: Option<Architecture>) {
    let architectures = arch.map_or_else(|| Architecture::ALL.to_vec(), |a| vec![a]);
    for architecture in architectures {
        println!("{architecture}");
        for entry in list_scenarios(architecture) {
            println!("  {}. {}", entry.id, entry.display_name);
        }
    }
}

/// Replays the whole scenario, printing each applied step.
fn cmd_trace(
    arch: Architecture,
    scenario: u32,
    json: bool,
    stats: bool,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let mut engine = StepEngine::for_scenario(arch, scenario, config)?;
    let initial = engine.snapshot();

    let mut steps = Vec::new();
    loop {
        let result = engine.step()?;
        if !result.is_applied() {
            break;
        }
        steps.push(result);
    }

    if json {
        let doc = serde_json::json!({
            "architecture": arch,
            "scenario": engine.scenario().map(|s| s.summary()),
            "initial": initial,
            "steps": steps,
            "final": engine.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let name = engine.scenario().map_or("", |s| s.display_name);
        println!("{arch} / {scenario}. {name}");
        println!("{}", config.display.awaiting_message);
        print_registers(&initial.registers);
        for result in &steps {
            if let StepResult::Applied {
                cursor,
                message,
                registers,
                control,
            } = result
            {
                println!();
                println!("Step {cursor}: {message}");
                print_registers(registers);
                let units: Vec<String> = control
                    .iter()
                    .map(|c| format!("{}={}", c.unit, c.status))
                    .collect();
                println!("  {}", units.join("  "));
            }
        }
        println!();
        println!("{}", engine.current_message());
        print_memory(&engine.render_memory_table());
    }

    if stats {
        engine.stats().print();
    }
    Ok(())
}

/// Applies `steps` steps (or all of them) and prints the memory table.
fn cmd_memory(
    arch: Architecture,
    scenario: u32,
    steps: Option<usize>,
    json: bool,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let mut engine = StepEngine::for_scenario(arch, scenario, config)?;
    let limit = steps.unwrap_or(usize::MAX);
    while engine.cursor() < limit && engine.step()?.is_applied() {}

    let rows = engine.render_memory_table();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", engine.current_message());
        print_memory(&rows);
    }
    Ok(())
}

fn print_registers(registers: &[RegisterView]) {
    let cells: Vec<String> = registers
        .iter()
        .map(|r| format!("{}={}", r.name, r.hex))
        .collect();
    println!("  {}", cells.join("  "));
}

fn print_memory(rows: &[MemoryRow]) {
    println!("Address Value");
    for row in rows {
        println!("{:<8}{}", row.address_hex, row.rendered_value);
    }
}
