//! Execution observers.
//!
//! Both execution models report what happens each cycle through the [`Observer`]
//! trait instead of printing. The CLI renders these callbacks as a textual trace;
//! tests record or mock them. This module provides:
//! 1. **Observer:** Callback interface with no-op defaults.
//! 2. **Snapshots:** The five stage occupants at the start of a pipelined cycle.
//! 3. **Recorder:** An observer that collects every callback as a [`TraceEvent`].

use std::fmt;

use crate::common::reg::Word;
use crate::isa::instruction::Instruction;

/// Stage occupants at the start of a pipelined cycle, as instruction text.
///
/// `fetch` is the instruction at the program counter, i.e. the one fetch will
/// present this cycle unless a stall or redirect intervenes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleSnapshot {
    /// One-based cycle number.
    pub cycle: u64,
    /// Instruction at the program counter.
    pub fetch: Option<String>,
    /// IF/ID occupant.
    pub decode: Option<String>,
    /// ID/EX occupant.
    pub execute: Option<String>,
    /// EX/MEM occupant.
    pub memory: Option<String>,
    /// MEM/WB occupant.
    pub writeback: Option<String>,
}

impl fmt::Display for CycleSnapshot {
    /// Formats as `IF:[..] | ID:[..] | EX:[..] | MEM:[..] | WB:[..]`, `-` marking a bubble.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |s: &Option<String>| s.as_deref().unwrap_or("-").to_string();
        write!(
            f,
            "IF:[{}] | ID:[{}] | EX:[{}] | MEM:[{}] | WB:[{}]",
            slot(&self.fetch),
            slot(&self.decode),
            slot(&self.execute),
            slot(&self.memory),
            slot(&self.writeback)
        )
    }
}

/// Receives execution events from either model.
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Single-cycle model: `inst` at index `pc` is about to execute in `cycle`.
    fn on_step(&mut self, _cycle: u64, _pc: usize, _inst: &Instruction) {}

    /// Pipelined model: a cycle is about to execute with these stage occupants.
    fn on_cycle(&mut self, _snapshot: &CycleSnapshot) {}

    /// An `OUT` instruction committed `value` to `port`.
    fn on_output(&mut self, _port: usize, _value: Word) {}

    /// A load-use stall was inserted in `cycle`.
    fn on_stall(&mut self, _cycle: u64) {}

    /// A branch or jump taken in `cycle` redirected fetch to `target`.
    fn on_flush(&mut self, _cycle: u64, _target: usize) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// One recorded observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// See [`Observer::on_step`].
    Step {
        /// Cycle number.
        cycle: u64,
        /// Instruction index.
        pc: usize,
        /// Instruction text.
        text: String,
    },
    /// See [`Observer::on_cycle`].
    Cycle(CycleSnapshot),
    /// See [`Observer::on_output`].
    Output {
        /// Port index.
        port: usize,
        /// Value written.
        value: Word,
    },
    /// See [`Observer::on_stall`].
    Stall {
        /// Cycle number.
        cycle: u64,
    },
    /// See [`Observer::on_flush`].
    Flush {
        /// Cycle number.
        cycle: u64,
        /// Redirect target.
        target: usize,
    },
}

/// Observer that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    /// Recorded events, oldest first.
    pub events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded pipeline snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &CycleSnapshot> {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Cycle(s) => Some(s),
            _ => None,
        })
    }

    /// Cycles in which a load-use stall was inserted.
    pub fn stall_cycles(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Stall { cycle } => Some(*cycle),
                _ => None,
            })
            .collect()
    }
}

impl Observer for TraceRecorder {
    fn on_step(&mut self, cycle: u64, pc: usize, inst: &Instruction) {
        self.events.push(TraceEvent::Step {
            cycle,
            pc,
            text: inst.text.clone(),
        });
    }

    fn on_cycle(&mut self, snapshot: &CycleSnapshot) {
        self.events.push(TraceEvent::Cycle(snapshot.clone()));
    }

    fn on_output(&mut self, port: usize, value: Word) {
        self.events.push(TraceEvent::Output { port, value });
    }

    fn on_stall(&mut self, cycle: u64) {
        self.events.push(TraceEvent::Stall { cycle });
    }

    fn on_flush(&mut self, cycle: u64, target: usize) {
        self.events.push(TraceEvent::Flush { cycle, target });
    }
}
