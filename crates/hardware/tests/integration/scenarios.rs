//! End-to-end scenarios.
//!
//! Complete programs run through both models with known cycle counts, hazard
//! counters, and final state.

use aspsim_core::sim::StopReason;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Straight-line code
// ══════════════════════════════════════════════════════════

#[test]
fn sum_and_output() {
    let mut tc = TestContext::from_source(
        "SET R1, 5\nSET R2, 7\nADD R3, R1, R2\nOUT 0, R3\n",
    );

    let single = tc.run_single(200);
    assert_eq!(single.stats.cycles, 4);
    assert_eq!(tc.reg(3), 12);

    let piped = tc.run_pipelined(200);
    assert_eq!(piped.stats.cycles, 8);
    assert_eq!(piped.stats.instructions_retired, 4);
    assert_eq!(piped.stats.stalls_data, 0);
    assert!((piped.cpi - 2.0).abs() < f64::EPSILON);
    assert_eq!(tc.reg(3), 12);
    assert_eq!(tc.port(0), 12);
}

#[test]
fn pipelined_cycles_are_length_plus_four_without_hazards() {
    let mut tc = TestContext::from_source("NOP\nNOP\nNOP\nNOP\nNOP\nNOP\n");
    let report = tc.run_pipelined(200);
    assert_eq!(report.stats.cycles, 10);
    assert_eq!(report.stats.instructions_retired, 6);
    assert_eq!(report.stats.inst_nop, 6);
}

#[test]
fn load_use_program() {
    let source = "\
SET R2, 8
SET R5, 3
SW R5, 0(R2)
LW R1, 0(R2)
ADD R3, R1, R1
";
    let mut tc = TestContext::from_source(source);
    let report = tc.run_pipelined(200);

    assert_eq!(report.stats.cycles, 10);
    assert_eq!(report.stats.instructions_retired, 5);
    assert_eq!(report.stats.stalls_data, 1);
    assert_eq!(tc.reg(3), 6);

    let single = tc.run_single(200);
    assert_eq!(single.registers, report.registers);
}

#[test]
fn invalid_memory_accesses_are_silent() {
    let mut tc = TestContext::from_source(
        "SET R1, 7\nSET R2, 2\nSW R1, 0(R2)\nLW R3, 1(R0)\nSET R4, 4096\nLW R5, 0(R4)\nSET R6, -4\nSW R1, 0(R6)\n",
    );
    let report = tc.run_pipelined(200);
    assert_eq!(report.stop, StopReason::Completed);
    assert_eq!(tc.reg(3), 0);
    assert_eq!(tc.reg(5), 0);
    assert!(tc.sim.state.memory.words().iter().all(|&w| w == 0));
}

// ══════════════════════════════════════════════════════════
// 2. Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn branch_program() {
    let source = "\
SET R1, 1
SET R2, 1
BEQ R1, R2, target
SET R3, 99
SET R4, 99
target: SET R5, 7
";
    let mut tc = TestContext::from_source(source);
    let report = tc.run_pipelined(200);

    assert_eq!(report.stats.cycles, 10);
    assert_eq!(report.stats.instructions_retired, 4);
    assert_eq!(report.stats.flushes, 1);
    assert_eq!(report.stats.squashed, 1);
    assert_eq!((tc.reg(3), tc.reg(4), tc.reg(5)), (0, 0, 7));
}

#[test]
fn countdown_loop_matches_on_both_models() {
    let source = "\
        SET R1, 3
        SET R2, 1
        SET R3, 0
loop:   SUB R1, R1, R2
        ADD R3, R3, R2
        BEQ R1, R0, done
        J loop
done:   OUT 0, R3
";
    let mut tc = TestContext::from_source(source);

    let single = tc.run_single(200);
    assert_eq!(tc.reg(3), 3);
    assert_eq!(single.outputs.len(), 1);

    let piped = tc.run_pipelined(200);
    assert_eq!(tc.reg(3), 3);
    assert_eq!(tc.port(0), 3);
    assert_eq!(piped.registers, single.registers);
    assert_eq!(piped.outputs, single.outputs);
    assert_eq!(piped.stats.instructions_retired, single.stats.instructions_retired);
}

#[test]
fn infinite_loop_hits_cap_on_both_models() {
    let mut tc = TestContext::from_source("SET R1, 1\nspin: ADD R2, R2, R1\nJ spin\n");

    let single = tc.run_single(50);
    assert!(single.hit_cap());
    assert_eq!(single.stats.cycles, 50);

    let piped = tc.run_pipelined(50);
    assert!(piped.hit_cap());
    assert_eq!(piped.stats.cycles, 50);
    assert!(tc.reg(2) > 0);
}

#[test]
fn multiple_outputs_keep_commit_order() {
    let mut tc = TestContext::from_source(
        "SET R1, 1\nOUT 1, R1\nSET R1, 2\nOUT 1, R1\nOUT 0, R1\n",
    );
    let report = tc.run_pipelined(200);
    let values: Vec<(usize, i32)> = report.outputs.iter().map(|e| (e.port, e.value)).collect();
    assert_eq!(values, vec![(1, 1), (1, 2), (0, 2)]);
    assert_eq!(tc.port(1), 2);
}
