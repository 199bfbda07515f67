//! Algorithm sections and statements.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use modelica_syntax::{ErrorCode, NodeExt, SyntaxKind, SyntaxNode, parse};

use crate::helpers::shape::{child_kinds, first_of};

/// Wrap statements in a function and return the algorithm section.
fn section(statements: &str) -> SyntaxNode {
    let input = format!("function f algorithm {statements} end f;");
    let result = parse(&input);
    assert!(result.ok(), "Failed to parse: {:?}\nInput: {}", result.errors, input);
    first_of(&result.syntax(), SyntaxKind::ALGORITHM_SECTION)
}

#[rstest]
#[case("y := 1;", SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT)]
#[case("x[i].v := 2 * x[i - 1].v;", SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT)]
#[case("print(\"hello\");", SyntaxKind::FUNCTION_CALL_STATEMENT)]
#[case("Modelica.Utilities.Streams.print(\"x\", \"log.txt\");", SyntaxKind::FUNCTION_CALL_STATEMENT)]
#[case("(a, b) := f(x);", SyntaxKind::DESTRUCTURING_ASSIGNMENT_STATEMENT)]
#[case("(a, , c) := f(x);", SyntaxKind::DESTRUCTURING_ASSIGNMENT_STATEMENT)]
#[case("break;", SyntaxKind::BREAK_STATEMENT)]
#[case("return;", SyntaxKind::RETURN_STATEMENT)]
#[case("if a then y := 1; end if;", SyntaxKind::IF_STATEMENT)]
#[case("for i in 1:n loop s := s + i; end for;", SyntaxKind::FOR_STATEMENT)]
#[case("while x > 0 loop x := x - 1; end while;", SyntaxKind::WHILE_STATEMENT)]
#[case("when x > 0 then y := 1; elsewhen x < 0 then y := 2; end when;", SyntaxKind::WHEN_STATEMENT)]
fn test_statement_kinds(#[case] statement: &str, #[case] kind: SyntaxKind) {
    let section = section(statement);
    assert_eq!(child_kinds(&section), [kind], "{statement}");
}

#[test]
fn test_assignment_fields() {
    let section = section("x.y[2] := a + 1;");
    let assign = first_of(&section, SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
    assert_eq!(assign.child_by_field("target").unwrap().to_string(), "x.y[2]");
    let value = assign.child_by_field("expression").unwrap();
    assert_eq!(value.kind(), SyntaxKind::BINARY_EXPRESSION);
}

#[test]
fn test_destructuring_keeps_empty_positions() {
    let section = section("(a, , c) := f(x);");
    let targets = first_of(&section, SyntaxKind::PARENTHESIZED_EXPRESSION);
    assert_eq!(targets.children().count(), 2);
    assert_eq!(targets.to_string(), "(a, , c)");
}

#[test]
fn test_if_statement_with_elseif_and_else() {
    let section = section("if u < lo then y := lo; elseif u > hi then y := hi; else y := u; end if;");
    let if_stmt = first_of(&section, SyntaxKind::IF_STATEMENT);
    assert_eq!(
        child_kinds(&if_stmt),
        [
            SyntaxKind::BINARY_EXPRESSION,
            SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT,
            SyntaxKind::ELSE_IF_STATEMENT_CLAUSE,
            SyntaxKind::ELSE_STATEMENT_CLAUSE,
        ]
    );
}

#[test]
fn test_break_inside_while() {
    let section = section("while true loop if done then break; end if; end while;");
    let while_stmt = first_of(&section, SyntaxKind::WHILE_STATEMENT);
    first_of(&while_stmt, SyntaxKind::BREAK_STATEMENT);
    assert_eq!(while_stmt.field("statement").to_vec().len(), 1);
}

#[test]
fn test_protected_algorithm_and_initial_algorithm() {
    let input = "function f input Real u; output Real y; protected Real t; algorithm t := u; y := t; initial algorithm y := 0; end f;";
    let result = parse(input);
    assert!(result.ok(), "{:?}", result.errors);
    let sections: Vec<_> = result
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::ALGORITHM_SECTION)
        .collect();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].field("statement").to_vec().len(), 2);
    assert!(!sections[1].field("initial").is_absent());
}

#[test]
fn test_equals_in_algorithm_is_reported() {
    let result = parse("function f algorithm y = 1; end f;");
    assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::E0602);
    assert_eq!(error.expected, vec![SyntaxKind::COLON_EQ]);
    assert_eq!(error.found, Some(SyntaxKind::EQ));
    assert!(error.hint.is_some());
    first_of(&result.syntax(), SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
}

#[test]
fn test_bare_reference_is_reported() {
    let result = parse("function f algorithm y; end f;");
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0602));
}

#[test]
fn test_literal_statement_recovers_at_semicolon() {
    let result = parse("function f algorithm 1 + 2; y := 3; end f;");
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0602));
    first_of(&result.syntax(), SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
}
