//! Modification grammar
//!
//! Modifications attach to declarations, extends clauses, short class
//! specifiers and annotations. Arguments are element modifications,
//! redeclarations or replaceable elements.

use super::ambiguity::{ChainKind, at_short_class_definition, classify_chain};
use super::classes::{parse_class_prefixes, parse_short_class_specifier};
use super::elements::{parse_constraining_clause, parse_declaration, parse_type_prefix};
use super::expressions::{ExpressionParser, parse_component_reference, parse_expression, parse_name, parse_type_specifier};
use super::{comma_sep1, parse_comment, parse_description_string};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext};

/// Modification = ClassModification ('=' ModificationExpression)?
///     | ('=' | ':=') ModificationExpression
pub fn parse_modification<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::MODIFICATION);
    if p.at(SyntaxKind::L_PAREN) {
        parse_class_modification(p);
        if p.eat(SyntaxKind::EQ) {
            parse_modification_expression(p);
        }
    } else {
        p.bump(); // = or :=
        parse_modification_expression(p);
    }
    p.finish_node();
}

/// ModificationExpression = 'break' | Expression
fn parse_modification_expression<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::MODIFICATION_EXPRESSION);
    if !p.eat(SyntaxKind::BREAK_KW) {
        parse_expression(p);
    }
    p.finish_node();
}

/// ClassModification = '(' (Argument (',' Argument)*)? ')'
pub fn parse_class_modification<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_MODIFICATION);
    p.bump(); // (
    p.with_context(ParseContext::Modification, |p| {
        if !p.at(SyntaxKind::R_PAREN) {
            comma_sep1(p, SyntaxKind::COMMA, parse_argument);
        }
        p.expect(SyntaxKind::R_PAREN);
    });
    p.finish_node();
}

/// ClassOrInheritanceModification = '(' ((Argument | InheritanceModification) (',' ...)*)? ')'
pub fn parse_class_or_inheritance_modification<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_OR_INHERITANCE_MODIFICATION);
    p.bump(); // (
    p.with_context(ParseContext::Modification, |p| {
        if !p.at(SyntaxKind::R_PAREN) {
            comma_sep1(p, SyntaxKind::COMMA, |p| {
                if p.at(SyntaxKind::BREAK_KW) {
                    parse_inheritance_modification(p);
                } else {
                    parse_argument(p);
                }
            });
        }
        p.expect(SyntaxKind::R_PAREN);
    });
    p.finish_node();
}

/// InheritanceModification = 'break' (ConnectClause | IDENT)
fn parse_inheritance_modification<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::INHERITANCE_MODIFICATION);
    p.bump(); // break
    if p.at(SyntaxKind::CONNECT_KW) {
        parse_connect_clause(p);
    } else {
        p.expect(SyntaxKind::IDENT);
    }
    p.finish_node();
}

/// ConnectClause = 'connect' '(' ComponentReference ',' ComponentReference ')'
pub fn parse_connect_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONNECT_CLAUSE);
    p.bump(); // connect
    if p.expect(SyntaxKind::L_PAREN) {
        parse_component_reference(p);
        p.expect(SyntaxKind::COMMA);
        parse_component_reference(p);
        p.expect(SyntaxKind::R_PAREN);
    }
    p.finish_node();
}

/// Argument = ElementModification | ElementRedeclaration | ElementReplaceable
fn parse_argument<P: ExpressionParser>(p: &mut P) {
    // `each` and `final` prefix both modifications and replaceables.
    let mut n = 0;
    while matches!(p.nth(n), SyntaxKind::EACH_KW | SyntaxKind::FINAL_KW) {
        n += 1;
    }

    match p.nth(n) {
        _ if p.at(SyntaxKind::REDECLARE_KW) => parse_element_redeclaration(p),
        SyntaxKind::REPLACEABLE_KW => parse_element_replaceable(p),
        SyntaxKind::IDENT => parse_element_modification(p),
        _ if p.at_any(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]) || p.at_eof() => {
            p.error(
                ErrorCode::E0902,
                format!(
                    "expected {}, found {} {}",
                    ParseContext::Modification.expected_description(),
                    p.current_kind().display_name(),
                    p.context().description()
                ),
            );
        }
        _ => {
            let message = format!(
                "expected {}, found {}",
                ParseContext::Modification.expected_description(),
                p.current_kind().display_name()
            );
            p.error_recover(ErrorCode::E0901, message, ParseContext::Modification.recovery_tokens());
        }
    }
}

/// ElementModification = 'each'? 'final'? Name Modification? DescriptionString?
///
/// A target whose segments carry subscripts is kept as a `ComponentReference`.
fn parse_element_modification<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ELEMENT_MODIFICATION);
    p.eat(SyntaxKind::EACH_KW);
    p.eat(SyntaxKind::FINAL_KW);
    match classify_chain(p) {
        ChainKind::Name => parse_name(p),
        ChainKind::ComponentReference => parse_component_reference(p),
    }
    if p.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::EQ, SyntaxKind::COLON_EQ]) {
        parse_modification(p);
    }
    if p.at(SyntaxKind::STRING) {
        parse_description_string(p);
    }
    p.finish_node();
}

/// ElementRedeclaration = 'redeclare' 'each'? 'final'? 'replaceable'?
///     (ShortClassDefinition | ComponentClause1) ConstrainingClause?
fn parse_element_redeclaration<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ELEMENT_REDECLARATION);
    p.bump(); // redeclare
    p.eat(SyntaxKind::EACH_KW);
    p.eat(SyntaxKind::FINAL_KW);
    p.eat(SyntaxKind::REPLACEABLE_KW);
    parse_redeclared_element(p);
    p.finish_node();
}

/// ElementReplaceable = 'each'? 'final'? 'replaceable'
///     (ShortClassDefinition | ComponentClause1) ConstrainingClause?
fn parse_element_replaceable<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ELEMENT_REPLACEABLE);
    p.eat(SyntaxKind::EACH_KW);
    p.eat(SyntaxKind::FINAL_KW);
    p.expect(SyntaxKind::REPLACEABLE_KW);
    parse_redeclared_element(p);
    p.finish_node();
}

fn parse_redeclared_element<P: ExpressionParser>(p: &mut P) {
    if at_short_class_definition(p) {
        // ShortClassDefinition = ClassPrefixes ShortClassSpecifier
        p.start_node(SyntaxKind::SHORT_CLASS_DEFINITION);
        parse_class_prefixes(p);
        parse_short_class_specifier(p);
        p.finish_node();
    } else {
        parse_component_clause1(p);
    }
    if p.at(SyntaxKind::CONSTRAINEDBY_KW) {
        parse_constraining_clause(p);
    }
}

/// ComponentClause1 = TypePrefix TypeSpecifier ComponentDeclaration1
fn parse_component_clause1<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPONENT_CLAUSE1);
    parse_type_prefix(p);
    parse_type_specifier(p);

    // ComponentDeclaration1 = Declaration DescriptionString? AnnotationClause?
    p.start_node(SyntaxKind::COMPONENT_DECLARATION1);
    parse_declaration(p);
    parse_comment(p);
    p.finish_node();

    p.finish_node();
}
