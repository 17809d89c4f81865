//! Simulator: owns the program and the architectural state and runs either model.
//!
//! Each run starts from zeroed registers, memory, and ports, and stops when the
//! program has finished or the cycle cap is reached. The final state stays in the
//! simulator for inspection; a [`RunReport`] summarizes it.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::constants::NUM_REGS;
use crate::common::reg::Word;
use crate::config::Config;
use crate::core::arch::ports::OutputEvent;
use crate::core::arch::state::ArchState;
use crate::core::interp::SingleCycle;
use crate::core::pipeline::engine::Pipeline;
use crate::isa::program::Program;
use crate::stats::SimStats;
use crate::trace::Observer;

/// Maximum number of cycles a run may take. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleCap(NonZeroU64);

impl CycleCap {
    /// Creates a cap of `cycles`, clamping 0 up to 1.
    pub fn new(cycles: u64) -> Self {
        Self(NonZeroU64::new(cycles).unwrap_or_else(|| {
            warn!("cycle cap of 0 raised to 1");
            NonZeroU64::MIN
        }))
    }

    /// The cap as a plain count.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for CycleCap {
    fn from(cycles: NonZeroU64) -> Self {
        Self(cycles)
    }
}

impl Default for CycleCap {
    fn default() -> Self {
        Self::new(crate::common::constants::DEFAULT_MAX_CYCLES)
    }
}

/// Which execution model produced a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionModel {
    /// One instruction per cycle, no overlap.
    SingleCycle,
    /// Five-stage pipeline with forwarding, stalls, and flushes.
    Pipelined,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The program ran off its end (and, pipelined, every latch drained).
    Completed,
    /// The cycle cap was reached first.
    CycleCap,
}

/// Summary of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    /// Model that ran.
    pub model: ExecutionModel,
    /// Why the run stopped.
    pub stop: StopReason,
    /// Counters for the run.
    pub stats: SimStats,
    /// Cycles per instruction (retired count treated as 1 when 0).
    pub cpi: f64,
    /// Final register values, `R0` first.
    pub registers: [Word; NUM_REGS],
    /// Every committed output write, in order.
    pub outputs: Vec<OutputEvent>,
}

impl RunReport {
    fn new(model: ExecutionModel, stop: StopReason, stats: SimStats, state: &ArchState) -> Self {
        Self {
            model,
            stop,
            cpi: stats.cpi(),
            stats,
            registers: state.regs.snapshot(),
            outputs: state.ports.history().to_vec(),
        }
    }

    /// Returns `true` if the run stopped at the cycle cap.
    pub fn hit_cap(&self) -> bool {
        self.stop == StopReason::CycleCap
    }
}

/// Top-level simulator: a program plus the architectural state it runs against.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Architectural state left by the most recent run.
    pub state: ArchState,
    program: Program,
}

impl Simulator {
    /// Creates a simulator for `program` with machine geometry from `config`.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            state: ArchState::from_config(config),
            program,
        }
    }

    /// The loaded program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Runs `model` to completion or `cap`.
    pub fn run(&mut self, model: ExecutionModel, cap: CycleCap, observer: &mut dyn Observer) -> RunReport {
        match model {
            ExecutionModel::SingleCycle => self.run_single(cap, observer),
            ExecutionModel::Pipelined => self.run_pipelined(cap, observer),
        }
    }

    /// Runs the single-cycle reference model.
    ///
    /// Resets the architectural state, then executes one instruction per cycle until
    /// the PC passes the end of the program or `cap` cycles have run.
    pub fn run_single(&mut self, cap: CycleCap, observer: &mut dyn Observer) -> RunReport {
        self.state.reset();
        let mut cpu = SingleCycle::new();
        info!(instructions = self.program.len(), cap = cap.get(), "single-cycle run");

        let stop = loop {
            if cpu.is_done(&self.program) {
                break StopReason::Completed;
            }
            if cpu.stats.cycles >= cap.get() {
                break StopReason::CycleCap;
            }
            let _ = cpu.step(&mut self.state, &self.program, observer);
        };

        self.finish(ExecutionModel::SingleCycle, stop, cpu.stats)
    }

    /// Runs the pipelined model.
    ///
    /// Resets the architectural state, then advances the pipeline one cycle at a time
    /// until it drains or `cap` cycles have run.
    pub fn run_pipelined(&mut self, cap: CycleCap, observer: &mut dyn Observer) -> RunReport {
        self.state.reset();
        let mut pipeline = Pipeline::new();
        info!(instructions = self.program.len(), cap = cap.get(), "pipelined run");

        let stop = loop {
            if pipeline.is_drained(&self.program) {
                break StopReason::Completed;
            }
            if pipeline.stats.cycles >= cap.get() {
                break StopReason::CycleCap;
            }
            let _ = pipeline.tick(&mut self.state, &self.program, observer);
        };

        self.finish(ExecutionModel::Pipelined, stop, pipeline.stats)
    }

    fn finish(&self, model: ExecutionModel, stop: StopReason, stats: SimStats) -> RunReport {
        if stop == StopReason::CycleCap {
            warn!(?model, cycles = stats.cycles, "cycle cap reached before completion");
        }
        info!(
            ?model,
            cycles = stats.cycles,
            retired = stats.instructions_retired,
            cpi = stats.cpi(),
            "run finished"
        );
        RunReport::new(model, stop, stats, &self.state)
    }
}
