//! ASP architectural state.
//!
//! This module contains the programmer-visible machine state shared by both
//! execution models. It includes the following modules:
//! 1. **Memory:** Word-addressed data memory with the alignment rule.
//! 2. **Ports:** Output ports and their commit history.
//! 3. **State:** The bundle of registers, memory, and ports passed into every cycle.

/// Word-addressed data memory.
pub mod memory;

/// Output ports and output history.
pub mod ports;

/// Complete architectural state.
pub mod state;

pub use memory::DataMemory;
pub use ports::{OutputEvent, OutputPorts};
pub use state::ArchState;
