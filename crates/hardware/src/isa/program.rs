//! Program container.
//!
//! A [`Program`] is the immutable input to both execution models: the ordered
//! instruction sequence and the label table its branches resolve against.

use crate::common::error::LoadError;
use crate::isa::instruction::Instruction;
use crate::isa::labels::LabelTable;

/// An ordered instruction sequence plus its labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: LabelTable,
}

impl Program {
    /// Creates a program from instructions and labels.
    pub const fn new(instructions: Vec<Instruction>, labels: LabelTable) -> Self {
        Self {
            instructions,
            labels,
        }
    }

    /// Creates a program without labels.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions, LabelTable::new())
    }

    /// Returns the instruction at `pc`, or `None` past the end of the program.
    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The label table.
    pub const fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Checks that every branch and jump target is a defined label.
    ///
    /// Unresolved labels are legal at run time (the transfer falls through), so this
    /// pass is opt-in for callers that want to reject such programs up front.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UndefinedLabel`] for the first instruction whose target
    /// is missing.
    pub fn validate_labels(&self) -> Result<(), LoadError> {
        for (index, inst) in self.instructions.iter().enumerate() {
            if let Some(label) = inst.op.branch_target() {
                if !self.labels.contains(label) {
                    return Err(LoadError::UndefinedLabel {
                        label: label.to_string(),
                        index,
                        text: inst.text.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
