//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage is a function of the previous cycle's latches
//! that returns the value of its output latch for the next cycle. It includes:
//! 1. **Fetch:** Presents `program[pc]` or re-presents a stalled instruction.
//! 2. **Decode:** Reads operands and detects load-use hazards.
//! 3. **Execute:** Forwards operands, runs the ALU, and resolves branches.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file or an output port.
//!
//! The engine calls them in the order WB, MEM, EX, ID, IF.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{DecodeOutcome, decode_stage};
/// Execute stage entry point (EX stage).
pub use execute::{ExecuteOutcome, execute_stage};
/// Fetch stage entry point (IF stage).
pub use fetch::{FetchOutcome, fetch_stage};
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::{Retirement, wb_stage};
