//! Equation grammar
//!
//! EquationSection and every equation kind. The block forms (`if`, `for`,
//! `when`) are shared with statements and live in `blocks`.

use super::ambiguity::is_special_equation;
use super::blocks::{Family, parse_for_block, parse_if_block, parse_section_body, parse_when_block, stray_clause};
use super::classes::ModelicaParser;
use super::expressions::{ExpressionParser, parse_call_arguments, parse_component_reference, parse_expression, skip_nested};
use super::modifications::parse_connect_clause;
use super::precedence::{at_primary_start, parse_simple_expression, prefix_band};
use super::{parse_comment, recover_through_semicolon};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};

/// EquationSection = 'initial'? 'equation' Equation*
pub fn parse_equation_section<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::EQUATION_SECTION);
    p.eat(SyntaxKind::INITIAL_KW);
    p.expect(SyntaxKind::EQUATION_KW);
    p.with_context(ParseContext::EquationSection, |p| {
        parse_section_body(p, Family::Equation)
    });
    p.finish_node();
}

/// Equation = SimpleEquation | IfEquation | ForEquation | ConnectEquation
///     | WhenEquation | SpecialEquation
pub fn parse_equation<P: ModelicaParser>(p: &mut P) {
    if p.check_cancelled() {
        return;
    }
    if !p.enter_nesting() {
        skip_nested(p);
        p.exit_nesting();
        return;
    }

    match p.current_kind() {
        SyntaxKind::IF_KW => parse_if_block(p, Family::Equation),
        SyntaxKind::FOR_KW => parse_for_block(p, Family::Equation),
        SyntaxKind::WHEN_KW => parse_when_block(p, Family::Equation),
        SyntaxKind::CONNECT_KW => parse_connect_equation(p),
        SyntaxKind::ELSEIF_KW | SyntaxKind::ELSE_KW | SyntaxKind::ELSEWHEN_KW => {
            stray_clause(p, Family::Equation)
        }
        _ if is_special_equation(p) => parse_special_equation(p),
        _ if at_primary_start(p) || prefix_band(p.current_kind()).is_some() => {
            parse_simple_equation(p)
        }
        kind => {
            let message = format!(
                "expected an equation, found {} {}",
                kind.display_name(),
                p.context().description()
            );
            recover_through_semicolon(p, ErrorCode::E0901, message);
        }
    }

    p.exit_nesting();
}

/// SimpleEquation = SimpleExpression '=' Expression DescriptionString? AnnotationClause? ';'
fn parse_simple_equation<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::SIMPLE_EQUATION);
    parse_simple_expression(p);

    match p.current_kind() {
        SyntaxKind::EQ => {
            p.bump();
            parse_expression(p);
        }
        SyntaxKind::COLON_EQ => {
            p.push_error(
                SyntaxError::builder(ErrorCode::E0604)
                    .range(p.current_range())
                    .expected(&[SyntaxKind::EQ])
                    .found(Some(SyntaxKind::COLON_EQ))
                    .hint("equations use `=`; `:=` belongs in algorithm sections")
                    .build(),
            );
            p.bump();
            parse_expression(p);
        }
        _ => p.error_expected(ErrorCode::E0601, &[SyntaxKind::EQ]),
    }

    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// SpecialEquation = ComponentReference '(' FunctionArguments? ')'
///     DescriptionString? AnnotationClause? ';'
fn parse_special_equation<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::SPECIAL_EQUATION);
    parse_component_reference(p);
    parse_call_arguments(p);
    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ConnectEquation = ConnectClause DescriptionString? AnnotationClause? ';'
fn parse_connect_equation<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONNECT_EQUATION);
    parse_connect_clause(p);
    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}
