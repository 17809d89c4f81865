//! Pipelined execution engine.
//!
//! The engine owns the program counter and the four latches and advances them one
//! cycle at a time. Each cycle:
//! 1. **Snapshot:** The observer sees the stage occupants left by the previous cycle.
//! 2. **Stages:** WB, MEM, EX, ID, IF run in that order, each reading only the
//!    previous cycle's latches and producing its next latch.
//! 3. **Squash:** A taken branch or jump flushes the next IF/ID and ID/EX.
//! 4. **Commit:** All four next latches and the next PC replace the current ones at once.
//!
//! Writeback is the only stage that touches the register file and it runs first, so
//! decode observes same-cycle writebacks. Memory is written only by the MEM stage.

use tracing::debug;

use crate::core::arch::state::ArchState;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{
    self, DecodeOutcome, ExecuteOutcome, FetchOutcome, Retirement,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::program::Program;
use crate::stats::SimStats;
use crate::trace::{CycleSnapshot, Observer};

/// What happened during one pipelined cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Instruction that left writeback, if any.
    pub retired: Option<Retirement>,
    /// `true` if a load-use stall was inserted.
    pub stalled: bool,
    /// Target of a taken branch or jump resolved in execute.
    pub redirect: Option<usize>,
}

/// Five-stage in-order pipeline.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    /// Program counter: index of the next instruction to fetch.
    pub pc: usize,
    /// Inter-stage latches.
    pub latches: Latches,
    /// Performance counters.
    pub stats: SimStats,
}

impl Pipeline {
    /// Creates a pipeline with PC 0, empty latches, and zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the PC has run off the end of `program` and every latch
    /// is empty.
    pub fn is_drained(&self, program: &Program) -> bool {
        self.pc >= program.len() && self.latches.all_empty()
    }

    /// Captures the stage occupants for the observer.
    pub fn snapshot(&self, program: &Program, cycle: u64) -> CycleSnapshot {
        let l = &self.latches;
        CycleSnapshot {
            cycle,
            fetch: program.get(self.pc).map(|i| i.text.clone()),
            decode: l.if_id.entry().map(|e| e.inst.text.clone()),
            execute: l.id_ex.entry().map(|e| e.inst.text.clone()),
            memory: l.ex_mem.entry().map(|e| e.inst.text.clone()),
            writeback: l.mem_wb.entry().map(|e| e.inst.text.clone()),
        }
    }

    /// Advances the pipeline by one cycle.
    ///
    /// # Arguments
    ///
    /// * `state` - Architectural state the program runs against.
    /// * `program` - The program being executed.
    /// * `observer` - Receives the cycle snapshot and any output, stall, or flush events.
    ///
    /// # Returns
    ///
    /// A summary of the cycle's retirement, stall, and redirect.
    pub fn tick(
        &mut self,
        state: &mut ArchState,
        program: &Program,
        observer: &mut dyn Observer,
    ) -> TickReport {
        self.stats.cycles += 1;
        let cycle = self.stats.cycles;
        observer.on_cycle(&self.snapshot(program, cycle));

        let cur = &self.latches;

        let retired = stages::wb_stage(&cur.mem_wb, state);
        if let Some(r) = &retired {
            self.stats.record_retirement(r.class);
            if let Some(event) = r.output {
                observer.on_output(event.port, event.value);
            }
        }

        let mem_wb = stages::mem_stage(&cur.ex_mem, &mut state.memory);

        let ExecuteOutcome { ex_mem, redirect } =
            stages::execute_stage(&cur.id_ex, &cur.ex_mem, &cur.mem_wb, program.labels());

        let DecodeOutcome { id_ex, stall } = stages::decode_stage(&cur.if_id, &cur.id_ex, &state.regs);

        let FetchOutcome { if_id, pc } =
            stages::fetch_stage(self.pc, &cur.if_id, program, redirect, stall);

        if stall {
            self.stats.stalls_data += 1;
            debug!(cycle, pc = self.pc, "load-use stall inserted");
            observer.on_stall(cycle);
        }
        let mut next = Latches {
            if_id,
            id_ex,
            ex_mem,
            mem_wb,
        };
        if let Some(target) = redirect {
            self.stats.flushes += 1;
            if !cur.if_id.is_empty() {
                self.stats.squashed += 1;
            }
            debug!(cycle, target, "flushing IF/ID and ID/EX");
            observer.on_flush(cycle, target);
            next.squash_wrong_path();
        }

        self.latches = next;
        self.pc = pc;

        TickReport {
            retired,
            stalled: stall,
            redirect,
        }
    }
}
