use aspsim_core::common::Word;
use aspsim_core::isa::{Instruction, Op};

pub fn add(rd: usize, rs: usize, rt: usize) -> Instruction {
    Op::Add { rd, rs, rt }.into()
}

pub fn sub(rd: usize, rs: usize, rt: usize) -> Instruction {
    Op::Sub { rd, rs, rt }.into()
}

/// `LW Rd, offset(Rbase)`
pub fn lw(rd: usize, offset: Word, base: usize) -> Instruction {
    Op::Load { rd, base, offset }.into()
}

/// `SW Rsrc, offset(Rbase)`
pub fn sw(src: usize, offset: Word, base: usize) -> Instruction {
    Op::Store { src, base, offset }.into()
}

pub fn beq(rs: usize, rt: usize, target: &str) -> Instruction {
    Op::BranchEq {
        rs,
        rt,
        target: target.to_string(),
    }
    .into()
}

pub fn j(target: &str) -> Instruction {
    Op::Jump {
        target: target.to_string(),
    }
    .into()
}

pub fn out(port: usize, rs: usize) -> Instruction {
    Op::Output { port, rs }.into()
}

pub fn set(rd: usize, imm: Word) -> Instruction {
    Op::Set { rd, imm }.into()
}

pub fn nop() -> Instruction {
    Instruction::nop()
}
