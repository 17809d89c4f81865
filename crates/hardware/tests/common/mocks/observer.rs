use aspsim_core::common::Word;
use aspsim_core::isa::Instruction;
use aspsim_core::trace::{CycleSnapshot, Observer};
use mockall::mock;

mock! {
    pub Tracer {}
    impl Observer for Tracer {
        fn on_step(&mut self, cycle: u64, pc: usize, inst: &Instruction);
        fn on_cycle(&mut self, snapshot: &CycleSnapshot);
        fn on_output(&mut self, port: usize, value: Word);
        fn on_stall(&mut self, cycle: u64);
        fn on_flush(&mut self, cycle: u64, target: usize);
    }
}
