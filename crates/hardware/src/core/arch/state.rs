//! Architectural state bundle.
//!
//! `ArchState` owns everything an instruction can observe or modify. It is passed
//! explicitly into each cycle of either execution model, so independent instances
//! can run side by side.

use crate::common::constants::{DEFAULT_MEMORY_WORDS, DEFAULT_OUTPUT_PORTS};
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::arch::memory::DataMemory;
use crate::core::arch::ports::OutputPorts;

/// Registers, data memory, and output ports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchState {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Data memory.
    pub memory: DataMemory,
    /// Output ports.
    pub ports: OutputPorts,
}

impl ArchState {
    /// Creates a zeroed state with the given geometry.
    pub fn new(memory_words: usize, output_ports: usize) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: DataMemory::new(memory_words),
            ports: OutputPorts::new(output_ports),
        }
    }

    /// Creates a zeroed state sized from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.machine.memory_words, config.machine.output_ports)
    }

    /// Zeroes registers, memory, and ports.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.memory.reset();
        self.ports.reset();
    }
}

impl Default for ArchState {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_WORDS, DEFAULT_OUTPUT_PORTS)
    }
}
