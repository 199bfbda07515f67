//! Grammar modules for Modelica parsing
//!
//! This module contains the parsing logic organized by grammar area:
//! - `expressions` - Expressions, names, component references, arguments
//! - `precedence` - The operator table and the precedence-climbing routine
//! - `ambiguity` - Tie-break predicates for the grammar's conflict points
//! - `classes` - Stored definition, class definitions and specifiers
//! - `elements` - Element lists, imports, extends, component clauses
//! - `modifications` - Modifications and class modification arguments
//! - `equations` - Equation sections and every equation kind
//! - `statements` - Algorithm sections and every statement kind
//! - `blocks` - `if` / `when` / `for` / `while` shapes shared by the two above
//!
//! The parsing functions are generic over a trait (`ExpressionParser` / `ModelicaParser`)
//! so they can be used with any parser implementation.

pub mod ambiguity;
pub mod blocks;
pub mod classes;
pub mod elements;
pub mod equations;
pub mod expressions;
pub mod modifications;
pub mod precedence;
pub mod statements;

pub use ambiguity::{Category, Construct, OpenConstruct, Resolution};
pub use classes::{ModelicaParser, parse_class_definition, parse_stored_definition};
pub use expressions::{ExpressionParser, parse_expression};

use crate::parser::SyntaxKind;
use crate::parser::errors::ErrorCode;

use ambiguity::at_section_boundary;

/// `item (sep item)*`
pub fn comma_sep1<P, F>(p: &mut P, sep: SyntaxKind, mut item: F)
where
    P: ExpressionParser,
    F: FnMut(&mut P),
{
    item(p);
    while p.eat(sep) {
        item(p);
    }
}

/// Run `item` until `stop` holds or the input ends.
///
/// An item that consumes nothing has its current token skipped as an error,
/// so the loop always makes progress.
pub fn repeat_until<P, S, F>(p: &mut P, stop: S, mut item: F)
where
    P: ExpressionParser,
    S: Fn(&P) -> bool,
    F: FnMut(&mut P),
{
    while !p.at_eof() && !stop(p) {
        let before = p.get_pos();
        item(p);
        if p.get_pos() == before && !p.at_eof() {
            let message = format!("unexpected {} {}", p.current_kind().display_name(), p.context().description());
            p.error_recover(ErrorCode::E0901, message, &[]);
        }
    }
}

/// Report an error and skip through the next `;`, stopping early at a
/// section boundary. Always consumes at least one token.
pub fn recover_through_semicolon<P: ExpressionParser>(p: &mut P, code: ErrorCode, message: impl Into<String>) {
    p.error(code, message);
    if p.at_eof() {
        return;
    }
    p.start_node(SyntaxKind::ERROR);
    let start = p.get_pos();
    while !p.at_eof() {
        if p.eat(SyntaxKind::SEMICOLON) {
            break;
        }
        if p.get_pos() != start && at_section_boundary(p) {
            break;
        }
        p.bump();
    }
    p.finish_node();
}

/// DescriptionString = StringLiteral ('+' StringLiteral)*
pub fn parse_description_string<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::DESCRIPTION_STRING);
    comma_sep1(p, SyntaxKind::PLUS, |p| {
        if p.at(SyntaxKind::STRING) {
            expressions::parse_literal(p, SyntaxKind::STRING_LITERAL);
        } else {
            p.error_expected(ErrorCode::E0902, &[SyntaxKind::STRING]);
        }
    });
    p.finish_node();
}

/// AnnotationClause = 'annotation' ClassModification
pub fn parse_annotation_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ANNOTATION_CLAUSE);
    p.expect(SyntaxKind::ANNOTATION_KW);
    if p.at(SyntaxKind::L_PAREN) {
        modifications::parse_class_modification(p);
    } else {
        p.error_expected(ErrorCode::E0902, &[SyntaxKind::L_PAREN]);
    }
    p.finish_node();
}

/// DescriptionString? AnnotationClause?
///
/// The common tail of equations, statements and declarations.
pub fn parse_comment<P: ExpressionParser>(p: &mut P) {
    if p.at(SyntaxKind::STRING) {
        parse_description_string(p);
    }
    if p.at(SyntaxKind::ANNOTATION_KW) {
        parse_annotation_clause(p);
    }
}
