//! Core parser tests.
//!
//! Bytecode order is the whole contract here: left-associativity and
//! precedence are only observable through the order of emitted
//! instructions, so most tests assert the full program.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse, ParseError, Parser};
use calc_ir::{Instruction, Program, TokenKind, TraceSink};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = calc_lexer::lex(source).unwrap();
    parse(&tokens)
}

fn bytecode(source: &str) -> Vec<Instruction> {
    parse_source(source).unwrap().iter().copied().collect()
}

#[test]
fn test_single_number() {
    assert_eq!(bytecode("5"), vec![Instruction::Constant(5)]);
}

#[test]
fn test_left_associativity() {
    // Each `+` closes out its left operand before the next `+` of equal
    // rank is consumed: (1 + 2) + 3, not 1 + (2 + 3).
    assert_eq!(
        bytecode("1 + 2 + 3"),
        vec![
            Instruction::Constant(1),
            Instruction::Constant(2),
            Instruction::Add,
            Instruction::Constant(3),
            Instruction::Add,
        ]
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        bytecode("1 + 2 * 3"),
        vec![
            Instruction::Constant(1),
            Instruction::Constant(2),
            Instruction::Constant(3),
            Instruction::Multiply,
            Instruction::Add,
        ]
    );
}

#[test]
fn test_worked_scenario() {
    assert_eq!(
        bytecode("1 + 2 * 3 + 4"),
        vec![
            Instruction::Constant(1),
            Instruction::Constant(2),
            Instruction::Constant(3),
            Instruction::Multiply,
            Instruction::Add,
            Instruction::Constant(4),
            Instruction::Add,
        ]
    );
}

#[test]
fn test_multiplication_chain_is_left_associative() {
    assert_eq!(
        bytecode("2 * 3 * 4"),
        vec![
            Instruction::Constant(2),
            Instruction::Constant(3),
            Instruction::Multiply,
            Instruction::Constant(4),
            Instruction::Multiply,
        ]
    );
}

#[test]
fn test_empty_input_is_empty_program() {
    assert!(parse_source("").unwrap().is_empty());
}

#[test]
fn test_leading_operator_has_no_prefix_parselet() {
    let err = parse_source("+1").unwrap_err();
    match &err {
        ParseError::NoPrefixParselet { token } => {
            assert_eq!(token.kind, TokenKind::Plus);
            assert_eq!(token.span.start, 0);
        }
        other => panic!("expected NoPrefixParselet, got {other:?}"),
    }
}

#[test]
fn test_doubled_operator_has_no_prefix_parselet() {
    // The second `*` lands in prefix position inside binary's recursion.
    let err = parse_source("1 * * 2").unwrap_err();
    assert!(matches!(err, ParseError::NoPrefixParselet { ref token } if token.kind == TokenKind::Star));
}

#[test]
fn test_adjacent_numbers_have_no_infix_parselet() {
    let err = parse_source("1 2").unwrap_err();
    match &err {
        ParseError::NoInfixParselet { token } => {
            assert_eq!(token.kind, TokenKind::Number);
            assert_eq!(token.lexeme, "2");
        }
        other => panic!("expected NoInfixParselet, got {other:?}"),
    }
}

#[test]
fn test_nothing_emitted_before_prefix_error() {
    let tokens = calc_lexer::lex("+1").unwrap();
    let trace = TraceSink::buffer();
    let result = Parser::with_trace(&tokens, &trace).parse();

    assert!(result.is_err());
    assert_eq!(trace.captured(), "");
}

#[test]
fn test_emit_trace_lines_in_emission_order() {
    let tokens = calc_lexer::lex("1 + 2 * 3").unwrap();
    let trace = TraceSink::buffer();
    let program = Parser::with_trace(&tokens, &trace).parse().unwrap();

    assert_eq!(trace.captured(), "CONST 1\nCONST 2\nCONST 3\nMUL\nADD\n");
    assert_eq!(trace.captured(), program.to_string());
}

#[test]
fn test_trailing_operator_parses_left_operand_only() {
    // `binary` consumes the `+`, recurses into empty input (a permissive
    // no-op), and still emits ADD. The resulting program is malformed in a
    // way only the interpreter can observe (it underflows the stack).
    assert_eq!(
        bytecode("1 +"),
        vec![Instruction::Constant(1), Instruction::Add]
    );
}
