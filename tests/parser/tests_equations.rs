//! Equation sections: simple, special, connect and block equations.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use modelica_syntax::{ErrorCode, NodeExt, SyntaxKind, SyntaxNode, parse};

use crate::helpers::shape::{child_kinds, first_of};

/// Wrap equations in a model and return the equation section.
fn section(equations: &str) -> SyntaxNode {
    let input = format!("model M equation {equations} end M;");
    let result = parse(&input);
    assert!(result.ok(), "Failed to parse: {:?}\nInput: {}", result.errors, input);
    first_of(&result.syntax(), SyntaxKind::EQUATION_SECTION)
}

#[rstest]
#[case("x = 1;", SyntaxKind::SIMPLE_EQUATION)]
#[case("der(x) = -x \"decay\";", SyntaxKind::SIMPLE_EQUATION)]
#[case("(a, b) = f(x);", SyntaxKind::SIMPLE_EQUATION)]
#[case("y = if u > 0 then u else 0;", SyntaxKind::SIMPLE_EQUATION)]
#[case("assert(x > 0, \"positive\");", SyntaxKind::SPECIAL_EQUATION)]
#[case("Modelica.Utilities.Streams.print(\"x\");", SyntaxKind::SPECIAL_EQUATION)]
#[case("reinit(x, 0);", SyntaxKind::SPECIAL_EQUATION)]
#[case("connect(a.p, b.n);", SyntaxKind::CONNECT_EQUATION)]
#[case("connect(a[1].p, b.n) annotation(Line(points = {{0, 0}, {1, 1}}));", SyntaxKind::CONNECT_EQUATION)]
#[case("if a then x = 1; end if;", SyntaxKind::IF_EQUATION)]
#[case("for i in 1:3 loop x[i] = i; end for;", SyntaxKind::FOR_EQUATION)]
#[case("for i, j in 1:2 loop x[i, j] = 0; end for;", SyntaxKind::FOR_EQUATION)]
#[case("when sample(0, 1) then y = pre(y) + 1; end when;", SyntaxKind::WHEN_EQUATION)]
fn test_equation_kinds(#[case] equation: &str, #[case] kind: SyntaxKind) {
    let section = section(equation);
    assert_eq!(child_kinds(&section), [kind], "{equation}");
}

#[test]
fn test_call_followed_by_operator_is_simple_equation() {
    let section = section("f(x) + 1 = y;");
    assert_eq!(child_kinds(&section), [SyntaxKind::SIMPLE_EQUATION]);
    let lhs = section.first_child().unwrap().child_by_field("expression1").unwrap();
    assert_eq!(lhs.kind(), SyntaxKind::BINARY_EXPRESSION);
}

#[test]
fn test_if_equation_clauses() {
    let section = section(
        "if a then x = 1; elseif b then x = 2; elseif c then x = 3; else x = 4; y = 0; end if;",
    );
    let if_eq = first_of(&section, SyntaxKind::IF_EQUATION);
    assert_eq!(if_eq.field("elseIfEquationClause").to_vec().len(), 2);
    let else_clause = if_eq.child_by_field("elseEquationClause").unwrap();
    assert_eq!(else_clause.field("equation").to_vec().len(), 2);
    assert_eq!(if_eq.field("equation").to_vec().len(), 1);
}

#[test]
fn test_dangling_else_attaches_to_innermost_if() {
    let section = section("if a then if b then x = 1; else x = 2; end if; end if;");
    let outer = first_of(&section, SyntaxKind::IF_EQUATION);
    assert!(outer.child_by_field("elseEquationClause").is_none());

    let inner = outer
        .children()
        .find(|n| n.kind() == SyntaxKind::IF_EQUATION)
        .unwrap();
    assert!(inner.child_by_field("elseEquationClause").is_some());
}

#[test]
fn test_when_with_elsewhen() {
    let section = section(
        "when x > 1 then y = 1; elsewhen x < 0 then y = 2; elsewhen initial() then y = 0; end when;",
    );
    let when = first_of(&section, SyntaxKind::WHEN_EQUATION);
    assert_eq!(
        child_kinds(&when)
            .iter()
            .filter(|k| **k == SyntaxKind::ELSE_WHEN_EQUATION_CLAUSE)
            .count(),
        2
    );
}

#[test]
fn test_nested_blocks_close_in_order() {
    let section = section(
        "for i in 1:n loop if i > 1 then when x then y = i; end when; end if; end for;",
    );
    let for_eq = first_of(&section, SyntaxKind::FOR_EQUATION);
    let if_eq = first_of(&for_eq, SyntaxKind::IF_EQUATION);
    first_of(&if_eq, SyntaxKind::WHEN_EQUATION);
}

#[test]
fn test_for_index_without_range() {
    let section = section("for i loop x[i] = 0; end for;");
    let index = first_of(&section, SyntaxKind::FOR_INDEX);
    assert!(index.child_by_field("expression").is_none());
}

#[test]
fn test_initial_equation_section() {
    let result = parse("model M equation x = 1; initial equation x = 0; end M;");
    assert!(result.ok(), "{:?}", result.errors);
    let sections: Vec<_> = result
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::EQUATION_SECTION)
        .collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].field("initial").is_absent());
    assert!(!sections[1].field("initial").is_absent());
}

#[test]
fn test_assignment_in_equation_is_reported() {
    let result = parse("model M equation x := 1; end M;");
    assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::E0604);
    assert_eq!(error.found, Some(SyntaxKind::COLON_EQ));
    // The equation is still built around the bad operator.
    let equation = first_of(&result.syntax(), SyntaxKind::SIMPLE_EQUATION);
    assert_eq!(equation.child_by_field("expression2").unwrap().to_string(), "1");
}

#[test]
fn test_missing_equals_is_reported() {
    let result = parse("model M equation x; end M;");
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0601));
    assert_eq!(result.syntax().to_string(), "model M equation x; end M;");
}

#[test]
fn test_mismatched_block_end() {
    let result = parse("model M equation for i in 1:2 loop x = i; end if; end M;");
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0207), "{:?}", result.errors);
}

#[test]
fn test_stray_else_is_reported() {
    let result = parse("model M equation else x = 1; end M;");
    assert!(!result.ok());
    assert_eq!(result.syntax().to_string(), "model M equation else x = 1; end M;");
}
