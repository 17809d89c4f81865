//! Branch Resolution Unit (BRU).
//!
//! Branches and jumps resolve in a single place with no prediction: a `BEQ` is
//! taken when its operands are equal, a `J` always is, and either only transfers
//! control when its label exists.

use tracing::warn;

use crate::core::units::alu::OperandValues;
use crate::isa::instruction::Op;
use crate::isa::labels::LabelTable;

/// Resolves a control transfer.
///
/// # Arguments
///
/// * `op` - The operation being executed.
/// * `operands` - Operand slot values (possibly forwarded); `BEQ` compares slots 0 and 1.
/// * `labels` - The program's label table.
///
/// # Returns
///
/// The target instruction index if control transfers, `None` to fall through.
/// An unresolved label falls through.
pub fn resolve(op: &Op, operands: &OperandValues, labels: &LabelTable) -> Option<usize> {
    let target = match op {
        Op::BranchEq { target, .. } if operands[0] == operands[1] => target,
        Op::Jump { target } => target,
        _ => return None,
    };
    let resolved = labels.resolve(target);
    if resolved.is_none() {
        warn!(label = %target, "{} to undefined label ignored", op.mnemonic());
    }
    resolved
}
