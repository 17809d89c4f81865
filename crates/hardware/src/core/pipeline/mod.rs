//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** Owns the PC and latches and commits each cycle atomically.
//! 2. **Hazards:** Load-use stall detection and operand forwarding.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 5. **Traits:** Common interface for pipeline latches.

/// Cycle-by-cycle pipeline driver.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline components.
pub mod traits;

pub use engine::{Pipeline, TickReport};
