//! Expression parsing: precedence, associativity and primary forms.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use rstest::rstest;
use modelica_syntax::parser::rule_parser::{Rule, parse_rule};
use modelica_syntax::{ErrorCode, NodeExt, SyntaxKind, parse};

use crate::helpers::shape::{expr_shape, first_of, shape};

// ============================================================================
// Precedence and associativity
// ============================================================================

#[rstest]
#[case("a + b * c", "(+ a (* b c))")]
#[case("a * b + c", "(+ (* a b) c)")]
#[case("1 + 2 * 3 ^ 2", "(+ 1 (* 2 (^ 3 2)))")]
#[case("a - b - c", "(- (- a b) c)")]
#[case("a / b / c", "(/ (/ a b) c)")]
#[case("a ^ b ^ c", "(^ a (^ b c))")]
#[case("-a ^ b", "(- (^ a b))")]
#[case("-k * x", "(- (* k x))")]
#[case("a + -b", "(+ a (- b))")]
#[case("not a and b", "(and (not a) b)")]
#[case("a or b and c", "(or a (and b c))")]
#[case("not a < b", "(not (< a b))")]
#[case("a < b + 1", "(< a (+ b 1))")]
#[case("a .* b + c", "(+ (.* a b) c)")]
#[case("a .^ 2 ./ b", "(./ (.^ a 2) b)")]
#[case("(a + b) * c", "(* [(+ a b)] c)")]
fn test_operator_shape(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(expr_shape(input), expected);
}

#[rstest]
#[case("a + b * c", "(+ a (* b c))", "a", "+", "b * c")]
#[case("a - b - c", "(- (- a b) c)", "a - b", "-", "c")]
#[case("a ^ b ^ c", "(^ a (^ b c))", "a", "^", "b ^ c")]
fn test_operator_shape_in_equation(
    #[case] rhs: &str,
    #[case] expected: &str,
    #[case] left: &str,
    #[case] op: &str,
    #[case] right: &str,
) {
    let input = format!("model M
equation
  y = {rhs};
end M;
");
    let result = parse(&input);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.syntax().to_string(), input);

    let equation = first_of(&result.syntax(), SyntaxKind::SIMPLE_EQUATION);
    let binary = equation.child_by_field("expression2").unwrap();
    assert_eq!(binary.kind(), SyntaxKind::BINARY_EXPRESSION);
    assert_eq!(binary.text().to_string(), rhs);
    assert_eq!(shape(&binary), expected);

    let operand1 = binary.child_by_field("operand1").unwrap();
    let operand2 = binary.child_by_field("operand2").unwrap();
    assert_eq!(operand1.text().to_string(), left);
    assert_eq!(binary.field("operator").first().unwrap().to_string(), op);
    assert_eq!(operand2.text().to_string(), right);
}

#[rstest]
#[case("a < b < c")]
#[case("a == b <> c")]
#[case("x >= 0 <= 1")]
fn test_relational_chain_is_an_error(#[case] input: &str) {
    let result = parse_rule(Rule::Expression, input);
    assert!(!result.is_ok());
    assert_eq!(result.errors()[0].code, ErrorCode::E0407);
    // The chain still folds left so the tree stays usable.
    assert_eq!(result.syntax().kind(), SyntaxKind::BINARY_EXPRESSION);
    assert_eq!(result.syntax().to_string(), input);
}

#[test]
fn test_parenthesized_relational_chain_is_fine() {
    assert_eq!(expr_shape("(a < b) == c"), "(== [(< a b)] c)");
}

#[rstest]
#[case("2 * -x")]
#[case("x ^ -2")]
fn test_looser_prefix_inside_tighter_operand(#[case] input: &str) {
    let result = parse_rule(Rule::Expression, input);
    assert_eq!(result.errors()[0].code, ErrorCode::E0403);
    assert_eq!(result.syntax().to_string(), input);
}

// ============================================================================
// Primary and compound forms
// ============================================================================

#[rstest]
#[case("42", SyntaxKind::UNSIGNED_INTEGER_LITERAL)]
#[case("1.5e-3", SyntaxKind::UNSIGNED_REAL_LITERAL)]
#[case("true", SyntaxKind::LOGICAL_LITERAL)]
#[case("\"text\"", SyntaxKind::STRING_LITERAL)]
#[case("a.b[1].c", SyntaxKind::COMPONENT_REFERENCE)]
#[case(".Modelica.Constants.pi", SyntaxKind::COMPONENT_REFERENCE)]
#[case("'quoted name'", SyntaxKind::COMPONENT_REFERENCE)]
#[case("sin(x)", SyntaxKind::FUNCTION_CALL)]
#[case("der(x)", SyntaxKind::FUNCTION_CALL)]
#[case("initial()", SyntaxKind::FUNCTION_CALL)]
#[case("{1, 2, 3}", SyntaxKind::ARRAY_CONSTRUCTOR)]
#[case("{i for i in 1:n}", SyntaxKind::ARRAY_CONSTRUCTOR)]
#[case("[1, 2; 3, 4]", SyntaxKind::ARRAY_CONCATENATION)]
#[case("(a, b)", SyntaxKind::PARENTHESIZED_EXPRESSION)]
#[case("if a then b else c", SyntaxKind::IF_EXPRESSION)]
#[case("if a then b elseif c then d else e", SyntaxKind::IF_EXPRESSION)]
#[case("1:10", SyntaxKind::RANGE_EXPRESSION)]
#[case("1:2:10", SyntaxKind::RANGE_EXPRESSION)]
fn test_expression_kind(#[case] input: &str, #[case] kind: SyntaxKind) {
    let result = parse_rule(Rule::Expression, input);
    assert!(result.is_ok(), "{input:?}: {:?}", result.errors());
    assert_eq!(result.syntax().kind(), kind, "{input:?}");
}

#[test]
fn test_named_and_positional_arguments() {
    let result = parse_rule(Rule::Expression, "f(1, x, k = 2, m = {1, 2})");
    assert!(result.is_ok(), "{:?}", result.errors());
    let args = first_of(&result.syntax(), SyntaxKind::FUNCTION_ARGUMENTS);
    let positional = args
        .children()
        .filter(|n| n.kind() == SyntaxKind::FUNCTION_ARGUMENT)
        .count();
    let named = args
        .children()
        .filter(|n| n.kind() == SyntaxKind::NAMED_ARGUMENT)
        .count();
    assert_eq!((positional, named), (2, 2));
}

#[test]
fn test_positional_after_named_is_reported() {
    let result = parse_rule(Rule::Expression, "f(k = 2, 1)");
    assert!(result.errors().iter().any(|e| e.code == ErrorCode::E0405));
}

#[test]
fn test_function_partial_application() {
    let result = parse_rule(Rule::Expression, "integrate(function f(k = 2), 0, 1)");
    assert!(result.is_ok(), "{:?}", result.errors());
    first_of(&result.syntax(), SyntaxKind::FUNCTION_PARTIAL_APPLICATION);
}

#[test]
fn test_end_inside_subscript_is_an_expression() {
    let result = parse_rule(Rule::Expression, "x[end - 1]");
    assert!(result.is_ok(), "{:?}", result.errors());
    first_of(&result.syntax(), SyntaxKind::END_EXPRESSION);
}

#[test]
fn test_if_expression_nests_in_else_branch() {
    let result = parse_rule(Rule::Expression, "if a then 1 else if b then 2 else 3");
    assert!(result.is_ok(), "{:?}", result.errors());
    let outer = result.syntax();
    assert_eq!(outer.kind(), SyntaxKind::IF_EXPRESSION);
    let inner = outer.children().last().unwrap();
    assert_eq!(inner.kind(), SyntaxKind::IF_EXPRESSION);
}

#[test]
fn test_range_inside_subscript() {
    let result = parse_rule(Rule::Expression, "x[2:end, :]");
    assert!(result.is_ok(), "{:?}", result.errors());
    let subscripts = first_of(&result.syntax(), SyntaxKind::ARRAY_SUBSCRIPTS);
    assert_eq!(
        subscripts
            .children()
            .filter(|n| n.kind() == SyntaxKind::SUBSCRIPT)
            .count(),
        2
    );
}

#[test]
fn test_nesting_limit_is_reported_not_overflowed() {
    let input = format!("{}x{}", "(".repeat(2000), ")".repeat(2000));
    let result = parse_rule(Rule::Expression, &input);
    assert!(result.errors().iter().any(|e| e.code == ErrorCode::E0408));
    assert_eq!(result.syntax().to_string(), input);
}
