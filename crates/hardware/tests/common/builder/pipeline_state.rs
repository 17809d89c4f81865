use aspsim_core::common::Word;
use aspsim_core::core::pipeline::latches::{
    ExMem, ExMemEntry, IdEx, IdExEntry, IfId, IfIdEntry, MemWb, MemWbEntry,
};
use aspsim_core::isa::Instruction;

pub struct IfIdBuilder(IfIdEntry);

impl IfIdBuilder {
    pub fn new() -> Self {
        Self(IfIdEntry {
            pc: 0,
            inst: Instruction::nop(),
        })
    }

    pub fn pc(mut self, pc: usize) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn inst(mut self, inst: Instruction) -> Self {
        self.0.inst = inst;
        self
    }

    pub fn build(self) -> IfIdEntry {
        self.0
    }

    pub fn latch(self) -> IfId {
        IfId::holding(self.0)
    }
}

pub struct IdExBuilder(IdExEntry);

impl IdExBuilder {
    pub fn new() -> Self {
        Self(IdExEntry {
            pc: 0,
            inst: Instruction::nop(),
            operands: [0; 3],
        })
    }

    pub fn pc(mut self, pc: usize) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn inst(mut self, inst: Instruction) -> Self {
        self.0.inst = inst;
        self
    }

    /// Operand slot values as read at decode.
    pub fn operands(mut self, a: Word, b: Word, c: Word) -> Self {
        self.0.operands = [a, b, c];
        self
    }

    pub fn build(self) -> IdExEntry {
        self.0
    }

    pub fn latch(self) -> IdEx {
        IdEx::holding(self.0)
    }
}

pub struct ExMemBuilder(ExMemEntry);

impl ExMemBuilder {
    pub fn new() -> Self {
        Self(ExMemEntry {
            pc: 0,
            inst: Instruction::nop(),
            alu: 0,
            store_data: 0,
        })
    }

    pub fn pc(mut self, pc: usize) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn inst(mut self, inst: Instruction) -> Self {
        self.0.inst = inst;
        self
    }

    pub fn alu(mut self, val: Word) -> Self {
        self.0.alu = val;
        self
    }

    pub fn store_data(mut self, val: Word) -> Self {
        self.0.store_data = val;
        self
    }

    pub fn build(self) -> ExMemEntry {
        self.0
    }

    pub fn latch(self) -> ExMem {
        ExMem::holding(self.0)
    }
}

pub struct MemWbBuilder(MemWbEntry);

impl MemWbBuilder {
    pub fn new() -> Self {
        Self(MemWbEntry {
            pc: 0,
            inst: Instruction::nop(),
            result: 0,
        })
    }

    pub fn pc(mut self, pc: usize) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn inst(mut self, inst: Instruction) -> Self {
        self.0.inst = inst;
        self
    }

    pub fn result(mut self, val: Word) -> Self {
        self.0.result = val;
        self
    }

    pub fn build(self) -> MemWbEntry {
        self.0
    }

    pub fn latch(self) -> MemWb {
        MemWb::holding(self.0)
    }
}
