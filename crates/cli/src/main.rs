//! ASP pipeline simulator CLI.
//!
//! This binary loads an assembly program and runs it on one or both execution models:
//! 1. **Single-cycle (`-s`):** Reference interpreter, one instruction per cycle.
//! 2. **Pipelined (`-p`):** Five-stage pipeline with forwarding, stalls, and flushes.
//!
//! Each run prints a per-cycle trace, the final registers, and a cycle/CPI summary.
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to control them.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aspsim_core::Simulator;
use aspsim_core::common::Word;
use aspsim_core::config::Config;
use aspsim_core::isa::Instruction;
use aspsim_core::sim::loader;
use aspsim_core::sim::{CycleCap, ExecutionModel, RunReport};
use aspsim_core::trace::{CycleSnapshot, NullObserver, Observer};

#[derive(Parser, Debug)]
#[command(
    name = "aspsim",
    author,
    version,
    about = "ASP ISA simulator: single-cycle reference model and 5-stage pipeline",
    long_about = "Run an ASP assembly program on the single-cycle model, the pipelined model, or both.\n\nExamples:\n  aspsim -i prog.asm -p\n  aspsim -i prog.asm -s -p -c 1000\n  aspsim -i prog.asm -p --config machine.json --json",
    group(ArgGroup::new("model").required(true).multiple(true).args(["single", "pipelined"]))
)]
struct Cli {
    /// Assembly program to run.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Cycle cap per run; values below 1 run a single cycle. Overrides the config.
    #[arg(short = 'c', long = "max-cycles", allow_negative_numbers = true)]
    max_cycles: Option<i64>,

    /// Run the single-cycle reference model.
    #[arg(short = 's', long)]
    single: bool,

    /// Run the pipelined model.
    #[arg(short = 'p', long)]
    pipelined: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject programs whose branches or jumps name undefined labels.
    #[arg(long)]
    strict: bool,

    /// Suppress the per-cycle trace.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print the run reports as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print the statistics block after each run.
    #[arg(long)]
    stats: bool,
}

/// Renders observer callbacks in the classic trace layout.
#[derive(Debug)]
struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    // Trace output is best effort.
    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(line);
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_step(&mut self, _cycle: u64, pc: usize, inst: &Instruction) {
        self.emit(format_args!("PC={pc:02}: {inst}\n"));
    }

    fn on_cycle(&mut self, snapshot: &CycleSnapshot) {
        self.emit(format_args!("Cycle {}: {snapshot}\n", snapshot.cycle));
    }

    fn on_output(&mut self, port: usize, value: Word) {
        self.emit(format_args!("  OUT port {port} <= {value}\n"));
    }

    fn on_stall(&mut self, _cycle: u64) {
        self.emit(format_args!("  (stall inserted due to load-use)\n"));
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    program: String,
    runs: &'a [RunReport],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let program = loader::load_program(&cli.input)?;
    if cli.strict || config.general.strict_labels {
        program.validate_labels()?;
    }

    let cap = resolve_cap(cli.max_cycles, &config);
    let show_trace = config.general.trace_pipeline && !cli.quiet && !cli.json;

    let mut models = Vec::new();
    if cli.single {
        models.push(ExecutionModel::SingleCycle);
    }
    if cli.pipelined {
        models.push(ExecutionModel::Pipelined);
    }

    let mut sim = Simulator::new(program, &config);
    let mut reports = Vec::with_capacity(models.len());
    let stdout = io::stdout();

    for model in models {
        let report = if cli.json {
            sim.run(model, cap, &mut NullObserver)
        } else {
            let mut out = stdout.lock();
            writeln!(out, "{}", banner(model))?;
            let mut console = ConsoleObserver { out };
            let mut quiet = NullObserver;
            let observer: &mut dyn Observer = if show_trace { &mut console } else { &mut quiet };
            sim.run(model, cap, observer)
        };

        if !cli.json {
            let mut out = stdout.lock();
            print_summary(&mut out, &report, cap, &sim)?;
            if cli.stats {
                report.stats.write_sections(&mut out, &[])?;
            }
            writeln!(out)?;
        }
        reports.push(report);
    }

    if cli.json {
        let json = JsonOutput {
            program: cli.input.display().to_string(),
            runs: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    }
    Ok(())
}

/// `-c` wins over the config; negative and zero caps clamp to one cycle.
fn resolve_cap(arg: Option<i64>, config: &Config) -> CycleCap {
    CycleCap::new(match arg {
        Some(n) => u64::try_from(n).unwrap_or(0),
        None => config.general.max_cycles,
    })
}

const fn banner(model: ExecutionModel) -> &'static str {
    match model {
        ExecutionModel::SingleCycle => "--- Single-cycle execution trace ---",
        ExecutionModel::Pipelined => "--- Pipelined execution trace ---",
    }
}

fn print_summary(out: &mut impl Write, report: &RunReport, cap: CycleCap, sim: &Simulator) -> io::Result<()> {
    let (label, retired_label) = match report.model {
        ExecutionModel::SingleCycle => ("single-cycle", "Instructions"),
        ExecutionModel::Pipelined => ("pipeline", "Completed instructions"),
    };
    if report.hit_cap() {
        writeln!(out, "Reached {label} cap ({} cycles). Stopping early.", cap.get())?;
    }
    writeln!(out, "--- Final registers ---")?;
    writeln!(out, "{}", sim.state.regs)?;
    writeln!(
        out,
        "Cycles={}, {retired_label}={}, CPI={:.2}",
        report.stats.cycles, report.stats.instructions_retired, report.cpi
    )
}
