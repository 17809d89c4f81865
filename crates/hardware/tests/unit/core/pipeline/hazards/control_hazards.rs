//! Control Hazard Tests.
//!
//! Taken branches and jumps resolve in EX, redirect the PC, and squash the
//! instructions in IF/ID and ID/EX.

use aspsim_core::core::pipeline::traits::PipelineLatch;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{beq, j, set};
use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::{PipelineRig, TestContext};

const BRANCH_PROGRAM: &str = "\
SET R1, 1
SET R2, 1
BEQ R1, R2, target
SET R3, 99
SET R4, 99
target: SET R5, 7
";

#[test]
fn taken_branch_skips_wrong_path() {
    let mut tc = TestContext::from_source(BRANCH_PROGRAM);
    let report = tc.run_pipelined(200);

    assert_eq!(tc.reg(3), 0, "R3 is on the squashed path");
    assert_eq!(tc.reg(4), 0, "R4 is never fetched");
    assert_eq!(tc.reg(5), 7);
    assert_eq!(report.stats.cycles, 10);
    assert_eq!(report.stats.instructions_retired, 4);
    assert_eq!(report.stats.flushes, 1);
    assert_eq!(report.stats.squashed, 1);
}

#[test]
fn redirect_cycle_empties_front_latches() {
    let program = ProgramBuilder::new()
        .inst(set(1, 1))
        .inst(set(2, 1))
        .inst(beq(1, 2, "target"))
        .inst(set(3, 99))
        .inst(set(4, 99))
        .label("target")
        .inst(set(5, 7))
        .build();
    let mut rig = PipelineRig::new(program);

    rig.ticks(4);
    let report = rig.tick();

    assert_eq!(report.redirect, Some(5));
    assert_eq!(rig.pipeline.pc, 5);
    assert!(rig.pipeline.latches.if_id.is_empty());
    assert!(rig.pipeline.latches.id_ex.is_empty());
    let ex_mem = rig.pipeline.latches.ex_mem.entry().map(|e| e.pc);
    assert_eq!(ex_mem, Some(2), "the branch itself continues down the pipe");
}

#[test]
fn not_taken_branch_continues_sequentially() {
    let mut tc = TestContext::from_source(
        "SET R1, 1\nSET R2, 2\nBEQ R1, R2, skip\nSET R3, 33\nskip: NOP\n",
    );
    let report = tc.run_pipelined(200);
    assert_eq!(tc.reg(3), 33);
    assert_eq!(report.stats.flushes, 0);
    assert_eq!(report.stats.cycles, 9);
}

#[test]
fn jump_to_undefined_label_falls_through() {
    let program = ProgramBuilder::new()
        .inst(j("nowhere"))
        .inst(set(1, 1))
        .build();
    let mut tc = TestContext::new(program);
    let report = tc.run_pipelined(200);
    assert_eq!(tc.reg(1), 1);
    assert_eq!(report.stats.flushes, 0);
}

#[test]
fn jump_past_the_end_drains_and_completes() {
    let mut tc = TestContext::from_source("J end\nSET R1, 1\nSET R2, 2\nend:\n");
    let report = tc.run_pipelined(200);
    assert!(!report.hit_cap());
    assert_eq!(tc.reg(1), 0);
    assert_eq!(tc.reg(2), 0);
    assert_eq!(report.stats.instructions_retired, 1);
}

#[test]
fn loop_counts_down() {
    let mut tc = TestContext::from_source(
        "SET R1, 3\nSET R2, 1\nSET R3, 0\nloop: SUB R1, R1, R2\nADD R3, R3, R2\nBEQ R1, R0, done\nJ loop\ndone: OUT 0, R3\n",
    );
    let report = tc.run_pipelined(500);
    assert!(!report.hit_cap());
    assert_eq!(tc.reg(3), 3);
    assert_eq!(tc.port(0), 3);
    assert_eq!(report.stats.flushes, 3, "two J loop plus the final BEQ");
}
