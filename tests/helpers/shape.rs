//! Compact renderings of parse trees for assertions.

use modelica_syntax::parser::rule_parser::{Rule, parse_rule};
use modelica_syntax::{NodeExt, SyntaxKind, SyntaxNode};

/// Render an expression as an s-expression: `(+ a (* b c))`.
///
/// Binary and unary nodes show their operator first; parentheses become
/// `[...]`; anything else is its trimmed source text.
pub fn shape(node: &SyntaxNode) -> String {
    match node.kind() {
        SyntaxKind::BINARY_EXPRESSION => format!(
            "({} {} {})",
            operator(node),
            operand(node, "operand1"),
            operand(node, "operand2")
        ),
        SyntaxKind::UNARY_EXPRESSION => {
            format!("({} {})", operator(node), operand(node, "operand"))
        }
        SyntaxKind::PARENTHESIZED_EXPRESSION => {
            let inner: Vec<_> = node.children().map(|child| shape(&child)).collect();
            format!("[{}]", inner.join(", "))
        }
        _ => node.text().to_string().trim().to_string(),
    }
}

fn operator(node: &SyntaxNode) -> String {
    node.field("operator")
        .first()
        .map(|element| element.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn operand(node: &SyntaxNode, name: &str) -> String {
    node.child_by_field(name)
        .map(|child| shape(&child))
        .unwrap_or_else(|| "_".to_string())
}

/// Parse `input` as an expression and render it. Panics on any error.
pub fn expr_shape(input: &str) -> String {
    let result = parse_rule(Rule::Expression, input);
    assert!(
        result.is_ok(),
        "Failed to parse expression {input:?}: {:?}",
        result.errors()
    );
    assert!(result.fully_consumed(), "trailing input in {input:?}");
    shape(&result.syntax())
}

/// Child node kinds, trivia and tokens skipped.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|child| child.kind()).collect()
}

/// The first descendant of `kind`, panicking with the kind name if absent.
pub fn first_of(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants()
        .find(|node| node.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in tree"))
}
