//! Instruction Set Architecture (ISA) Definitions.
//!
//! The ASP instruction set is a closed set of nine operations over sixteen
//! registers. This module contains the instruction model and the program
//! container handed to both execution models.
//!
//! # Contents
//!
//! * `instruction`: Operation variants, operand shapes, and the shared
//!   write-back / source-register predicates.
//! * `labels`: Label name to instruction index mapping.
//! * `program`: Immutable instruction sequence plus label table.

/// Instruction variants and hazard predicates.
pub mod instruction;

/// Label table for branch and jump targets.
pub mod labels;

/// Loaded program container.
pub mod program;

pub use instruction::{InstClass, Instruction, Op, SourceRegs};
pub use labels::LabelTable;
pub use program::Program;
