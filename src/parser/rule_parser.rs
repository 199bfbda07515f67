//! Rule-based parser for testing individual grammar rules
//!
//! Parses one named production in isolation, without a surrounding class or
//! section. Useful for testing specific rules and for tools that only hold a
//! fragment (an expression typed into a watch window, a single equation).
//!
//! # Example
//!
//! ```
//! use modelica_syntax::parser::rule_parser::{Rule, parse_rule};
//!
//! let result = parse_rule(Rule::Expression, "a + b * c");
//! assert!(result.is_ok());
//! assert!(result.fully_consumed());
//! ```

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::SyntaxNode;
use super::errors::{ErrorCode, ParseContext, SyntaxError};
use super::grammar::{self, ExpressionParser};
use super::options::ParseOptions;
use super::lexer::tokenize;
use super::parser::{Parse, Parser};
use super::syntax_kind::SyntaxKind;

/// Grammar rules that can be parsed individually
///
/// Each rule corresponds to a parsing function in the grammar modules and
/// produces a root node of the matching kind (or `ERROR`, see [`parse_rule`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A whole source unit.
    StoredDefinition,
    /// `model M ... end M` without the trailing `;`.
    ClassDefinition,
    /// One element of a class body, including its `;`.
    Element,
    /// One equation, including its `;`.
    Equation,
    /// One statement, including its `;`.
    Statement,
    Expression,
    /// An expression without the `if` and range forms.
    SimpleExpression,
    /// `= expr`, `:= expr` or `(args) [= expr]`.
    Modification,
    ClassModification,
    AnnotationClause,
    ComponentReference,
    Name,
    TypeSpecifier,
    ArraySubscripts,
}

impl Rule {
    pub const ALL: [Rule; 14] = [
        Self::StoredDefinition,
        Self::ClassDefinition,
        Self::Element,
        Self::Equation,
        Self::Statement,
        Self::Expression,
        Self::SimpleExpression,
        Self::Modification,
        Self::ClassModification,
        Self::AnnotationClause,
        Self::ComponentReference,
        Self::Name,
        Self::TypeSpecifier,
        Self::ArraySubscripts,
    ];

    fn parse(self, p: &mut Parser<'_>) {
        match self {
            Self::StoredDefinition => grammar::parse_stored_definition(p),
            Self::ClassDefinition => grammar::parse_class_definition(p),
            Self::Element => grammar::elements::parse_element(p),
            Self::Equation => {
                p.with_context(ParseContext::EquationSection, grammar::equations::parse_equation)
            }
            Self::Statement => {
                p.with_context(ParseContext::AlgorithmSection, grammar::statements::parse_statement)
            }
            Self::Expression => grammar::parse_expression(p),
            Self::SimpleExpression => grammar::precedence::parse_simple_expression(p),
            Self::Modification => {
                if p.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::EQ, SyntaxKind::COLON_EQ]) {
                    grammar::modifications::parse_modification(p);
                } else {
                    missing_start(p, &[SyntaxKind::EQ, SyntaxKind::COLON_EQ, SyntaxKind::L_PAREN]);
                }
            }
            Self::ClassModification => {
                if p.at(SyntaxKind::L_PAREN) {
                    grammar::modifications::parse_class_modification(p);
                } else {
                    missing_start(p, &[SyntaxKind::L_PAREN]);
                }
            }
            Self::AnnotationClause => grammar::parse_annotation_clause(p),
            Self::ComponentReference => grammar::expressions::parse_component_reference(p),
            Self::Name => grammar::expressions::parse_name(p),
            Self::TypeSpecifier => grammar::expressions::parse_type_specifier(p),
            Self::ArraySubscripts => {
                if p.at(SyntaxKind::L_BRACKET) {
                    grammar::expressions::parse_array_subscripts(p);
                } else {
                    missing_start(p, &[SyntaxKind::L_BRACKET]);
                }
            }
        }
    }
}

/// Parse result for a single rule
#[derive(Debug)]
pub struct RuleParseResult {
    /// The parse result with green tree and errors
    pub parse: Parse,
    /// The rule that was parsed
    pub rule: Rule,
    /// The parsed input text
    pub input: String,
    consumed: bool,
}

impl RuleParseResult {
    /// Check if parsing succeeded without errors
    pub fn is_ok(&self) -> bool {
        self.parse.ok()
    }

    /// Get the errors from parsing
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Get the syntax tree root
    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// Check if the rule matched the whole input
    pub fn fully_consumed(&self) -> bool {
        self.consumed
    }
}

/// Parse a specific grammar rule
///
/// The root of the result is the rule's node. When the rule stops before the
/// end of the input, or the input holds no complete match, the root is an
/// `ERROR` node wrapping everything and the leftover is reported as E0901.
///
/// # Example
///
/// ```
/// use modelica_syntax::parser::rule_parser::{Rule, parse_rule};
/// use modelica_syntax::SyntaxKind;
///
/// let result = parse_rule(Rule::Equation, "x = 2;");
/// assert_eq!(result.syntax().kind(), SyntaxKind::SIMPLE_EQUATION);
/// ```
pub fn parse_rule(rule: Rule, input: &str) -> RuleParseResult {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens, &ParseOptions::default());

    // The rule runs inside a scratch `ERROR` node, so nodes it builds at a
    // checkpoint and surrounding trivia all have a parent.
    parser.start_node(SyntaxKind::ERROR);
    rule.parse(&mut parser);
    if !parser.at_eof() {
        let message = format!(
            "unexpected {} after {rule:?}",
            parser.current_kind().display_name()
        );
        parser.error(ErrorCode::E0901, message);
        while !parser.at_eof() {
            parser.bump();
        }
    }
    parser.finish_node();

    let Parse { green, errors } = parser.finish();
    let (green, consumed) = match sole_node(&green) {
        Some(node) => (node, true),
        None => (green, false),
    };

    RuleParseResult {
        parse: Parse { green, errors },
        rule,
        input: input.to_string(),
        consumed,
    }
}

/// The only node under `wrapper`, with any trivia around it moved inside.
///
/// `None` when the wrapper holds anything but trivia besides that node, or
/// when the node is itself an `ERROR` placeholder.
fn sole_node(wrapper: &GreenNode) -> Option<GreenNode> {
    let mut node = None;
    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    for child in wrapper.children() {
        match child {
            NodeOrToken::Node(child) if node.is_none() => node = Some(child),
            NodeOrToken::Token(token) if SyntaxKind::from(token.kind()).is_trivia() => {
                if node.is_none() {
                    leading.push(token.to_owned());
                } else {
                    trailing.push(token.to_owned());
                }
            }
            _ => return None,
        }
    }

    let node = node?;
    if SyntaxKind::from(node.kind()) == SyntaxKind::ERROR {
        return None;
    }
    if leading.is_empty() && trailing.is_empty() {
        return Some(node.to_owned());
    }
    let children: Vec<NodeOrToken<GreenNode, GreenToken>> = leading
        .into_iter()
        .map(NodeOrToken::Token)
        .chain(node.children().map(|child| child.to_owned()))
        .chain(trailing.into_iter().map(NodeOrToken::Token))
        .collect();
    Some(GreenNode::new(node.kind(), children))
}

/// The rule's first token is absent: report it and leave an empty `ERROR` node.
fn missing_start(p: &mut Parser<'_>, expected: &[SyntaxKind]) {
    p.error_expected(ErrorCode::E0902, expected);
    p.start_node(SyntaxKind::ERROR);
    p.finish_node();
}
