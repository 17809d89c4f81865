//! Assembly loader tests.
//!
//! Covers mnemonic and operand parsing, labels, comments, and the error cases.

use std::io::Write;

use aspsim_core::common::LoadError;
use aspsim_core::isa::Op;
use aspsim_core::sim::loader::{load_program, parse_instruction, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Single instructions
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("ADD R1, R2, R3", Op::Add { rd: 1, rs: 2, rt: 3 })]
#[case("sub r4,r5,r6", Op::Sub { rd: 4, rs: 5, rt: 6 })]
#[case("LW R1, 8(R2)", Op::Load { rd: 1, base: 2, offset: 8 })]
#[case("LW R1, (R2)", Op::Load { rd: 1, base: 2, offset: 0 })]
#[case("SW R4, -4(R5)", Op::Store { src: 4, base: 5, offset: -4 })]
#[case("BEQ R1, R0, done", Op::BranchEq { rs: 1, rt: 0, target: "done".into() })]
#[case("J loop", Op::Jump { target: "loop".into() })]
#[case("OUT 2, R3", Op::Output { port: 2, rs: 3 })]
#[case("SET R1, -17", Op::Set { rd: 1, imm: -17 })]
#[case("nop", Op::Nop)]
fn parses_each_mnemonic(#[case] code: &str, #[case] op: Op) {
    let inst = parse_instruction(code, 1).unwrap();
    assert_eq!(inst.op, op);
    assert_eq!(inst.text, code);
}

#[test]
fn register_numbers_are_clamped() {
    let inst = parse_instruction("ADD R20, R-1, R3", 1).unwrap();
    assert_eq!(inst.op, Op::Add { rd: 15, rs: 0, rt: 3 });
}

#[test]
fn unknown_mnemonic_loads_as_nop() {
    let inst = parse_instruction("MUL R1, R2, R3", 4).unwrap();
    assert_eq!(inst.op, Op::Nop);
    assert_eq!(inst.text, "MUL R1, R2, R3");
}

#[rstest]
#[case::too_few("ADD R1, R2")]
#[case::too_many("SET R1, 2, 3")]
#[case::not_a_register("ADD R1, X2, R3")]
#[case::bad_immediate("SET R1, five")]
#[case::bad_memory_operand("LW R1, 8[R2]")]
#[case::negative_port("OUT -1, R2")]
#[case::missing_label("J")]
fn malformed_operands_are_errors(#[case] code: &str) {
    let err = parse_instruction(code, 7).unwrap_err();
    match err {
        LoadError::Operands { line, text, .. } => {
            assert_eq!(line, 7);
            assert_eq!(text, code);
        }
        other => panic!("expected Operands error, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 2. Whole programs
// ══════════════════════════════════════════════════════════

#[test]
fn labels_comments_and_blank_lines() {
    let source = "\
# header comment

start:
    SET R1, 3      # counter
loop: SUB R1, R1, R2
    BEQ R1, R0, done
    J loop
done:
";
    let program = parse_program(source).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.labels().resolve("start"), Some(0));
    assert_eq!(program.labels().resolve("loop"), Some(1));
    assert_eq!(program.labels().resolve("done"), Some(4));
    assert_eq!(program.get(0).unwrap().text, "SET R1, 3");
    assert_eq!(program.get(1).unwrap().text, "SUB R1, R1, R2");
}

#[test]
fn colon_inside_comment_is_not_a_label() {
    let program = parse_program("NOP # note: not a label\n").unwrap();
    assert_eq!(program.len(), 1);
    assert!(program.labels().is_empty());
}

#[test]
fn duplicate_label_keeps_first_definition() {
    let program = parse_program("a: NOP\na: NOP\n").unwrap();
    assert_eq!(program.labels().resolve("a"), Some(0));
}

#[rstest]
#[case::empty(": NOP")]
#[case::whitespace("my label: NOP")]
fn invalid_label_is_an_error(#[case] source: &str) {
    let err = parse_program(source).unwrap_err();
    assert!(matches!(err, LoadError::InvalidLabel { line: 1, .. }), "got {err:?}");
}

#[test]
fn error_reports_source_line() {
    let err = parse_program("NOP\n\nADD R1\n").unwrap_err();
    assert!(matches!(err, LoadError::Operands { line: 3, .. }));
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn undefined_label_loads_but_fails_validation() {
    let program = parse_program("J nowhere\n").unwrap();
    assert!(matches!(
        program.validate_labels(),
        Err(LoadError::UndefinedLabel { .. })
    ));
}

// ══════════════════════════════════════════════════════════
// 3. Files
// ══════════════════════════════════════════════════════════

#[test]
fn load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "SET R1, 5").unwrap();
    writeln!(file, "OUT 0, R1").unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_program(dir.path().join("missing.asm")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
