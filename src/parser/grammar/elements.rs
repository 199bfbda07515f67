//! Element grammar
//!
//! The contents of element lists: import clauses, extends clauses and named
//! elements (nested class definitions and component clauses).

use super::ambiguity::{CLASS_PREFIX_START, COMPONENT_CLAUSE_START, at_section_boundary, classify_import};
use super::classes::{ModelicaParser, parse_class_definition};
use super::expressions::{
    ExpressionParser, parse_array_subscripts, parse_expression, parse_name, parse_type_specifier,
};
use super::modifications::{parse_class_modification, parse_class_or_inheritance_modification, parse_modification};
use super::{comma_sep1, parse_annotation_clause, parse_comment, recover_through_semicolon, repeat_until};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext};

/// Element* up to the next section boundary.
pub fn parse_elements<P: ModelicaParser>(p: &mut P) {
    repeat_until(p, |p: &P| at_section_boundary(p), parse_element);
}

/// Element = ImportClause | ExtendsClause | NamedElementClause
pub fn parse_element<P: ModelicaParser>(p: &mut P) {
    if p.check_cancelled() {
        return;
    }

    match p.current_kind() {
        SyntaxKind::IMPORT_KW => parse_import_clause(p),
        SyntaxKind::EXTENDS_KW => parse_extends_clause(p),
        SyntaxKind::REDECLARE_KW
        | SyntaxKind::FINAL_KW
        | SyntaxKind::INNER_KW
        | SyntaxKind::OUTER_KW
        | SyntaxKind::REPLACEABLE_KW
        | SyntaxKind::ENCAPSULATED_KW => parse_named_element_clause(p),
        kind if CLASS_PREFIX_START.contains(&kind) || COMPONENT_CLAUSE_START.contains(&kind) => {
            parse_named_element_clause(p)
        }
        kind => {
            let message = format!(
                "unexpected {} {}; expected {}",
                kind.display_name(),
                p.context().description(),
                ParseContext::ClassBody.expected_description()
            );
            recover_through_semicolon(p, ErrorCode::E0304, message);
        }
    }
}

/// ImportClause = SimpleImportClause | CompoundImportClause | UnqualifiedImportClause
///
/// SimpleImportClause = 'import' (IDENT '=')? Name DescriptionString? AnnotationClause? ';'
/// CompoundImportClause = 'import' Name '.' '{' IDENT (',' IDENT)* '}' ...
/// UnqualifiedImportClause = 'import' Name '.' '*' ...
fn parse_import_clause<P: ExpressionParser>(p: &mut P) {
    let kind = classify_import(p);
    p.start_node(kind);
    p.bump(); // import

    p.with_context(ParseContext::Import, |p| {
        match kind {
            SyntaxKind::COMPOUND_IMPORT_CLAUSE => {
                parse_name(p);
                p.bump(); // .
                p.bump(); // {
                comma_sep1(p, SyntaxKind::COMMA, |p| {
                    p.expect(SyntaxKind::IDENT);
                });
                p.expect(SyntaxKind::R_BRACE);
            }
            SyntaxKind::UNQUALIFIED_IMPORT_CLAUSE => {
                parse_name(p);
                if !p.eat(SyntaxKind::DOT_STAR) {
                    p.bump(); // .
                    p.bump(); // *
                }
            }
            _ => {
                if p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::EQ {
                    p.bump();
                    p.bump();
                }
                if p.at(SyntaxKind::IDENT) {
                    parse_name(p);
                } else {
                    p.error_expected(ErrorCode::E0501, &[SyntaxKind::IDENT]);
                }
            }
        }
        parse_comment(p);
        p.expect(SyntaxKind::SEMICOLON);
    });

    p.finish_node();
}

/// ExtendsClause = 'extends' TypeSpecifier ClassOrInheritanceModification? AnnotationClause? ';'
fn parse_extends_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXTENDS_CLAUSE);
    p.bump(); // extends
    parse_type_specifier(p);
    if p.at(SyntaxKind::L_PAREN) {
        parse_class_or_inheritance_modification(p);
    }
    if p.at(SyntaxKind::ANNOTATION_KW) {
        parse_annotation_clause(p);
    }
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ConstrainingClause = 'constrainedby' TypeSpecifier ClassModification?
pub fn parse_constraining_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONSTRAINING_CLAUSE);
    p.bump(); // constrainedby
    parse_type_specifier(p);
    if p.at(SyntaxKind::L_PAREN) {
        parse_class_modification(p);
    }
    p.finish_node();
}

/// NamedElementClause = 'redeclare'? 'final'? 'inner'? 'outer'? 'replaceable'?
///     (ClassDefinition | ComponentClause)
///     (ConstrainingClause DescriptionString? AnnotationClause?)? ';'
fn parse_named_element_clause<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAMED_ELEMENT_CLAUSE);
    for modifier in [
        SyntaxKind::REDECLARE_KW,
        SyntaxKind::FINAL_KW,
        SyntaxKind::INNER_KW,
        SyntaxKind::OUTER_KW,
        SyntaxKind::REPLACEABLE_KW,
    ] {
        p.eat(modifier);
    }

    if p.at(SyntaxKind::ENCAPSULATED_KW) || p.at_any(CLASS_PREFIX_START) {
        parse_class_definition(p);
    } else {
        parse_component_clause(p);
    }

    if p.at(SyntaxKind::CONSTRAINEDBY_KW) {
        parse_constraining_clause(p);
        parse_comment(p);
    }
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ('flow' | 'stream')? ('discrete' | 'parameter' | 'constant')? ('input' | 'output')?
pub fn parse_type_prefix<P: ExpressionParser>(p: &mut P) {
    for group in [
        &[SyntaxKind::FLOW_KW, SyntaxKind::STREAM_KW][..],
        &[SyntaxKind::DISCRETE_KW, SyntaxKind::PARAMETER_KW, SyntaxKind::CONSTANT_KW],
        &[SyntaxKind::INPUT_KW, SyntaxKind::OUTPUT_KW],
    ] {
        if p.at_any(group) {
            p.bump();
        }
    }
}

/// ComponentClause = TypePrefix TypeSpecifier ArraySubscripts?
///     ComponentDeclaration (',' ComponentDeclaration)*
fn parse_component_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPONENT_CLAUSE);
    parse_type_prefix(p);
    parse_type_specifier(p);
    if p.at(SyntaxKind::L_BRACKET) {
        parse_array_subscripts(p);
    }
    comma_sep1(p, SyntaxKind::COMMA, parse_component_declaration);
    p.finish_node();
}

/// ComponentDeclaration = Declaration ConditionAttribute? DescriptionString? AnnotationClause?
fn parse_component_declaration<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPONENT_DECLARATION);
    parse_declaration(p);
    if p.at(SyntaxKind::IF_KW) {
        // ConditionAttribute = 'if' Expression
        p.start_node(SyntaxKind::CONDITION_ATTRIBUTE);
        p.bump();
        parse_expression(p);
        p.finish_node();
    }
    parse_comment(p);
    p.finish_node();
}

/// Declaration = IDENT ArraySubscripts? Modification?
pub fn parse_declaration<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::DECLARATION);
    p.expect(SyntaxKind::IDENT);
    if p.at(SyntaxKind::L_BRACKET) {
        parse_array_subscripts(p);
    }
    if p.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::EQ, SyntaxKind::COLON_EQ]) {
        parse_modification(p);
    }
    p.finish_node();
}
