//! Load-Use Hazard Tests.
//!
//! A stall is required exactly when ID/EX holds an `LW` whose destination is a
//! source register of the instruction in IF/ID.

use aspsim_core::core::pipeline::hazards::need_stall_load_use;
use aspsim_core::core::pipeline::latches::{IdEx, IfId};
use rstest::rstest;

use crate::common::builder::instruction::{add, beq, j, lw, out, set, sw};
use crate::common::builder::pipeline_state::{IdExBuilder, IfIdBuilder};
use crate::common::harness::TestContext;

fn load_r1() -> IdEx {
    IdExBuilder::new().inst(lw(1, 0, 2)).latch()
}

#[rstest]
#[case::alu_rs(add(3, 1, 4), true)]
#[case::alu_rt(add(3, 4, 1), true)]
#[case::branch(beq(4, 1, "x"), true)]
#[case::store_value(sw(1, 0, 4), true)]
#[case::store_base(sw(4, 0, 1), true)]
#[case::output(out(0, 1), true)]
#[case::load_base(lw(5, 0, 1), true)]
#[case::unrelated(add(3, 4, 5), false)]
#[case::set(set(1, 9), false)]
#[case::jump(j("x"), false)]
fn stall_when_consumer_reads_load_dest(#[case] consumer: aspsim_core::isa::Instruction, #[case] stall: bool) {
    let if_id = IfIdBuilder::new().inst(consumer).latch();
    assert_eq!(need_stall_load_use(&load_r1(), &if_id), stall);
}

#[test]
fn no_stall_when_producer_is_not_a_load() {
    let id_ex = IdExBuilder::new().inst(set(1, 5)).latch();
    let if_id = IfIdBuilder::new().inst(add(2, 1, 1)).latch();
    assert!(!need_stall_load_use(&id_ex, &if_id));
}

#[test]
fn no_stall_with_empty_latches() {
    let if_id = IfIdBuilder::new().inst(add(2, 1, 1)).latch();
    assert!(!need_stall_load_use(&IdEx::empty(), &if_id));
    assert!(!need_stall_load_use(&load_r1(), &IfId::empty()));
}

#[test]
fn load_into_r0_still_stalls_a_reader_of_r0() {
    let id_ex = IdExBuilder::new().inst(lw(0, 0, 2)).latch();
    let if_id = IfIdBuilder::new().inst(add(3, 0, 4)).latch();
    assert!(need_stall_load_use(&id_ex, &if_id));
}

#[test]
fn dependent_add_stalls_once_and_sees_loaded_value() {
    let mut tc = TestContext::from_source(
        "SET R2, 8\nSET R5, 3\nSW R5, 0(R2)\nLW R1, 0(R2)\nADD R3, R1, R1\n",
    );
    let (report, trace) = tc.trace_pipelined(200);

    assert_eq!(trace.stall_cycles(), vec![6]);
    assert_eq!(report.stats.stalls_data, 1);
    assert_eq!(report.stats.cycles, 10);
    assert_eq!(report.stats.instructions_retired, 5);
    assert_eq!(tc.reg(1), 3);
    assert_eq!(tc.reg(3), 6);
    assert_eq!(tc.mem_word(2), 3);
}

#[test]
fn independent_instruction_after_load_does_not_stall() {
    let mut tc = TestContext::from_source("LW R1, 0(R0)\nADD R3, R4, R5\nADD R6, R1, R1\n");
    let report = tc.run_pipelined(200);
    assert_eq!(report.stats.stalls_data, 0);
    assert_eq!(report.stats.cycles, 7);
}
