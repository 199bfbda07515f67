//! Statement grammar
//!
//! AlgorithmSection and every statement kind.

use super::blocks::{
    Family, parse_for_block, parse_if_block, parse_section_body, parse_when_block,
    parse_while_statement, stray_clause,
};
use super::classes::ModelicaParser;
use super::expressions::{
    ExpressionParser, parse_call_arguments, parse_component_reference, parse_expression,
    parse_parenthesized_expression, skip_nested,
};
use super::{parse_comment, recover_through_semicolon};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};

/// AlgorithmSection = 'initial'? 'algorithm' Statement*
pub fn parse_algorithm_section<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::ALGORITHM_SECTION);
    p.eat(SyntaxKind::INITIAL_KW);
    p.expect(SyntaxKind::ALGORITHM_KW);
    p.with_context(ParseContext::AlgorithmSection, |p| {
        parse_section_body(p, Family::Statement)
    });
    p.finish_node();
}

/// Statement = SimpleAssignmentStatement | FunctionCallStatement
///     | DestructuringAssignmentStatement | BreakStatement | ReturnStatement
///     | IfStatement | ForStatement | WhileStatement | WhenStatement
pub fn parse_statement<P: ModelicaParser>(p: &mut P) {
    if p.check_cancelled() {
        return;
    }
    if !p.enter_nesting() {
        skip_nested(p);
        p.exit_nesting();
        return;
    }

    match p.current_kind() {
        SyntaxKind::IF_KW => parse_if_block(p, Family::Statement),
        SyntaxKind::FOR_KW => parse_for_block(p, Family::Statement),
        SyntaxKind::WHEN_KW => parse_when_block(p, Family::Statement),
        SyntaxKind::WHILE_KW => parse_while_statement(p),
        SyntaxKind::BREAK_KW => parse_keyword_statement(p, SyntaxKind::BREAK_STATEMENT),
        SyntaxKind::RETURN_KW => parse_keyword_statement(p, SyntaxKind::RETURN_STATEMENT),
        SyntaxKind::L_PAREN => parse_destructuring_assignment(p),
        SyntaxKind::IDENT | SyntaxKind::DOT => parse_reference_statement(p),
        SyntaxKind::ELSEIF_KW | SyntaxKind::ELSE_KW | SyntaxKind::ELSEWHEN_KW => {
            stray_clause(p, Family::Statement)
        }
        kind => {
            let message = format!(
                "expected a statement, found {} {}",
                kind.display_name(),
                p.context().description()
            );
            recover_through_semicolon(p, ErrorCode::E0602, message);
        }
    }

    p.exit_nesting();
}

/// BreakStatement / ReturnStatement = keyword DescriptionString? AnnotationClause? ';'
fn parse_keyword_statement<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// SimpleAssignmentStatement = ComponentReference ':=' Expression ...
/// FunctionCallStatement = ComponentReference '(' FunctionArguments? ')' ...
///
/// Both start with a component reference; the token after it decides.
fn parse_reference_statement<P: ExpressionParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_component_reference(p);

    match p.current_kind() {
        SyntaxKind::COLON_EQ => {
            p.start_node_at(checkpoint, SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
            p.bump();
            parse_expression(p);
        }
        SyntaxKind::L_PAREN => {
            p.start_node_at(checkpoint, SyntaxKind::FUNCTION_CALL_STATEMENT);
            parse_call_arguments(p);
        }
        SyntaxKind::EQ => {
            p.start_node_at(checkpoint, SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
            p.push_error(
                SyntaxError::builder(ErrorCode::E0602)
                    .message("`=` is not an assignment in algorithm sections")
                    .range(p.current_range())
                    .expected(&[SyntaxKind::COLON_EQ])
                    .found(Some(SyntaxKind::EQ))
                    .hint("use `:=` to assign")
                    .build(),
            );
            p.bump();
            parse_expression(p);
        }
        _ => {
            p.start_node_at(checkpoint, SyntaxKind::SIMPLE_ASSIGNMENT_STATEMENT);
            p.error_expected(ErrorCode::E0602, &[SyntaxKind::COLON_EQ, SyntaxKind::L_PAREN]);
        }
    }

    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// DestructuringAssignmentStatement = ParenthesizedExpression ':='
///     ComponentReference '(' FunctionArguments? ')' DescriptionString? AnnotationClause? ';'
fn parse_destructuring_assignment<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::DESTRUCTURING_ASSIGNMENT_STATEMENT);
    parse_parenthesized_expression(p);
    p.expect(SyntaxKind::COLON_EQ);
    if p.at_any(&[SyntaxKind::IDENT, SyntaxKind::DOT]) {
        parse_component_reference(p);
        parse_call_arguments(p);
    } else {
        p.error_expected(ErrorCode::E0602, &[SyntaxKind::IDENT]);
    }
    parse_comment(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}
