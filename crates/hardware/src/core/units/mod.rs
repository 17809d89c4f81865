//! Execution units.
//!
//! This module contains the functional units shared by the single-cycle
//! interpreter and the pipeline's execute stage, so both models compute
//! identical results.

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;
