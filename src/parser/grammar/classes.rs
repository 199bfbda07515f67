//! Class definition grammar
//!
//! Stored definitions, class definitions and the three class specifier
//! forms, plus the external function clause that may close a long one.

use rowan::TextRange;
use smol_str::SmolStr;

use super::ambiguity::{CLASS_PREFIX_START, classify_class_specifier, initial_opens_section};
use super::blocks::{at_stray_end, stray_end};
use super::elements::parse_elements;
use super::equations::parse_equation_section;
use super::expressions::{
    ExpressionParser, parse_array_subscripts, parse_component_reference, parse_expression_list,
    parse_literal, parse_name, parse_type_specifier, skip_nested,
};
use super::modifications::parse_class_modification;
use super::statements::parse_algorithm_section;
use super::{comma_sep1, parse_annotation_clause, parse_comment, parse_description_string};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext, Severity, SyntaxError, expected_message};

/// Parsers that drive whole source units.
///
/// Everything below the expression level only needs [`ExpressionParser`];
/// loops over classes, elements, equations and statements also poll for
/// cancellation.
pub trait ModelicaParser: ExpressionParser {
    /// Poll the cancellation token. Once this returns true the parser
    /// behaves as if the input had ended.
    fn check_cancelled(&mut self) -> bool;
}

const CLASS_KINDS: &[SyntaxKind] = &[
    SyntaxKind::CLASS_KW,
    SyntaxKind::MODEL_KW,
    SyntaxKind::RECORD_KW,
    SyntaxKind::BLOCK_KW,
    SyntaxKind::CONNECTOR_KW,
    SyntaxKind::TYPE_KW,
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::FUNCTION_KW,
    SyntaxKind::OPERATOR_KW,
];

/// StoredDefinition = WithinClause? ClassDefinitionClause*
pub fn parse_stored_definition<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::STORED_DEFINITION);

    if p.at(SyntaxKind::WITHIN_KW) {
        parse_within_clause(p);
    }

    while !p.at_eof() {
        if p.check_cancelled() {
            break;
        }
        if p.at_any(&[SyntaxKind::FINAL_KW, SyntaxKind::ENCAPSULATED_KW]) || p.at_any(CLASS_PREFIX_START) {
            parse_class_definition_clause(p);
        } else {
            let message = format!(
                "expected {}, found {}",
                ParseContext::TopLevel.expected_description(),
                p.current_kind().display_name()
            );
            p.error_recover(ErrorCode::E0901, message, ParseContext::TopLevel.recovery_tokens());
        }
    }

    p.finish_node();
}

/// WithinClause = 'within' Name? ';'
fn parse_within_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::WITHIN_CLAUSE);
    p.bump(); // within
    if p.at(SyntaxKind::IDENT) {
        parse_name(p);
    }
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ClassDefinitionClause = 'final'? ClassDefinition ';'
fn parse_class_definition_clause<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_DEFINITION_CLAUSE);
    p.eat(SyntaxKind::FINAL_KW);
    parse_class_definition(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ClassDefinition = 'encapsulated'? ClassPrefixes ClassSpecifier
pub fn parse_class_definition<P: ModelicaParser>(p: &mut P) {
    if !p.enter_nesting() {
        skip_nested(p);
        p.exit_nesting();
        return;
    }

    p.start_node(SyntaxKind::CLASS_DEFINITION);
    p.eat(SyntaxKind::ENCAPSULATED_KW);
    p.with_context(ParseContext::ClassDefinition, parse_class_prefixes);
    match classify_class_specifier(p) {
        SyntaxKind::SHORT_CLASS_SPECIFIER => parse_short_class_specifier(p),
        SyntaxKind::DER_CLASS_SPECIFIER => parse_der_class_specifier(p),
        _ => parse_long_class_specifier(p),
    }
    p.finish_node();

    p.exit_nesting();
}

/// ClassPrefixes = 'partial'? ( 'class' | 'model' | 'operator'? 'record' | 'block'
///     | 'expandable'? 'connector' | 'type' | 'package'
///     | ('pure' | 'impure')? 'operator'? 'function' | 'operator' )
pub fn parse_class_prefixes<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_PREFIXES);
    p.eat(SyntaxKind::PARTIAL_KW);

    match p.current_kind() {
        SyntaxKind::CLASS_KW
        | SyntaxKind::MODEL_KW
        | SyntaxKind::RECORD_KW
        | SyntaxKind::BLOCK_KW
        | SyntaxKind::CONNECTOR_KW
        | SyntaxKind::TYPE_KW
        | SyntaxKind::PACKAGE_KW
        | SyntaxKind::FUNCTION_KW => p.bump(),
        SyntaxKind::EXPANDABLE_KW => {
            p.bump();
            expect_class_kind(p, &[SyntaxKind::CONNECTOR_KW]);
        }
        SyntaxKind::OPERATOR_KW => {
            p.bump();
            // A bare `operator` is a class kind of its own.
            if p.at_any(&[SyntaxKind::RECORD_KW, SyntaxKind::FUNCTION_KW]) {
                p.bump();
            }
        }
        SyntaxKind::PURE_KW | SyntaxKind::IMPURE_KW => {
            p.bump();
            p.eat(SyntaxKind::OPERATOR_KW);
            expect_class_kind(p, &[SyntaxKind::FUNCTION_KW]);
        }
        _ => p.error_expected(ErrorCode::E0302, CLASS_KINDS),
    }

    p.finish_node();
}

fn expect_class_kind<P: ExpressionParser>(p: &mut P, kinds: &[SyntaxKind]) {
    if p.at_any(kinds) {
        p.bump();
    } else {
        p.error_expected(ErrorCode::E0302, kinds);
    }
}

/// LongClassSpecifier = (IDENT | 'extends' IDENT ClassModification?) DescriptionString?
///     InitialElementList? (ElementList | EquationSection | AlgorithmSection)*
///     ExternalFunctionClause? (AnnotationClause ';')? 'end' IDENT
fn parse_long_class_specifier<P: ModelicaParser>(p: &mut P) {
    p.start_node(SyntaxKind::LONG_CLASS_SPECIFIER);
    let opened = p.current_range();

    let extends = p.eat(SyntaxKind::EXTENDS_KW);
    let name = p.at(SyntaxKind::IDENT).then(|| SmolStr::new(p.current_text()));
    p.expect(SyntaxKind::IDENT);
    if extends && p.at(SyntaxKind::L_PAREN) {
        parse_class_modification(p);
    }
    if p.at(SyntaxKind::STRING) {
        parse_description_string(p);
    }

    p.with_context(ParseContext::ClassBody, parse_class_body);

    if p.at(SyntaxKind::EXTERNAL_KW) {
        parse_external_function_clause(p);
    }
    if p.at(SyntaxKind::ANNOTATION_KW) {
        parse_annotation_clause(p);
        p.expect(SyntaxKind::SEMICOLON);
    }

    parse_class_end(p, name.as_ref(), opened);
    p.finish_node();
}

/// The element lists and sections between the class head and its `end`.
fn parse_class_body<P: ModelicaParser>(p: &mut P) {
    if !super::ambiguity::at_section_boundary(p) {
        p.start_node(SyntaxKind::INITIAL_ELEMENT_LIST);
        parse_elements(p);
        p.finish_node();
    }

    loop {
        match p.current_kind() {
            SyntaxKind::PUBLIC_KW | SyntaxKind::PROTECTED_KW => {
                p.start_node(SyntaxKind::ELEMENT_LIST);
                p.bump();
                parse_elements(p);
                p.finish_node();
            }
            SyntaxKind::EQUATION_KW => parse_equation_section(p),
            SyntaxKind::ALGORITHM_KW => parse_algorithm_section(p),
            SyntaxKind::INITIAL_KW if initial_opens_section(p) => {
                if p.nth(1) == SyntaxKind::EQUATION_KW {
                    parse_equation_section(p);
                } else {
                    parse_algorithm_section(p);
                }
            }
            SyntaxKind::END_KW if at_stray_end(p) => stray_end(p),
            _ => break,
        }
    }
}

/// `'end' IDENT`, checking the identifier against the class name.
fn parse_class_end<P: ExpressionParser>(p: &mut P, name: Option<&SmolStr>, opened: TextRange) {
    if !p.eat(SyntaxKind::END_KW) {
        let found = p.found();
        let related = match name {
            Some(name) => format!("class `{name}` opened here"),
            None => "class opened here".to_string(),
        };
        p.push_error(
            SyntaxError::builder(ErrorCode::E0206)
                .message(expected_message(&[SyntaxKind::END_KW], found, p.context()))
                .range(p.current_range())
                .expected(&[SyntaxKind::END_KW])
                .found(found)
                .related(related, opened)
                .build(),
        );
        return;
    }

    if !p.at(SyntaxKind::IDENT) {
        p.error_expected(ErrorCode::E0301, &[SyntaxKind::IDENT]);
        return;
    }
    if let Some(name) = name {
        if p.current_text() != name.as_str() {
            let message = format!("`end {}` does not match class `{name}`", p.current_text());
            p.push_error(
                SyntaxError::builder(ErrorCode::E0303)
                    .message(message)
                    .range(p.current_range())
                    .severity(Severity::Warning)
                    .related("class name", opened)
                    .hint(format!("write `end {name}`"))
                    .build(),
            );
        }
    }
    p.bump();
}

/// ShortClassSpecifier = IDENT '=' ( ('input' | 'output')? TypeSpecifier ArraySubscripts? ClassModification?
///     | 'enumeration' '(' (EnumerationLiteral (',' EnumerationLiteral)* | ':')? ')' )
///     DescriptionString? AnnotationClause?
pub fn parse_short_class_specifier<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::SHORT_CLASS_SPECIFIER);
    p.expect(SyntaxKind::IDENT);
    p.expect(SyntaxKind::EQ);

    if p.eat(SyntaxKind::ENUMERATION_KW) {
        if p.expect(SyntaxKind::L_PAREN) {
            if p.at(SyntaxKind::COLON) {
                p.bump();
            } else if p.at(SyntaxKind::IDENT) {
                comma_sep1(p, SyntaxKind::COMMA, parse_enumeration_literal);
            }
            p.expect(SyntaxKind::R_PAREN);
        }
    } else {
        if p.at_any(&[SyntaxKind::INPUT_KW, SyntaxKind::OUTPUT_KW]) {
            p.bump();
        }
        parse_type_specifier(p);
        if p.at(SyntaxKind::L_BRACKET) {
            parse_array_subscripts(p);
        }
        if p.at(SyntaxKind::L_PAREN) {
            parse_class_modification(p);
        }
    }

    parse_comment(p);
    p.finish_node();
}

/// EnumerationLiteral = IDENT DescriptionString? AnnotationClause?
fn parse_enumeration_literal<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ENUMERATION_LITERAL);
    p.expect(SyntaxKind::IDENT);
    parse_comment(p);
    p.finish_node();
}

/// DerClassSpecifier = IDENT '=' 'der' '(' TypeSpecifier ',' IDENT (',' IDENT)* ')'
///     DescriptionString? AnnotationClause?
fn parse_der_class_specifier<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::DER_CLASS_SPECIFIER);
    p.bump(); // IDENT
    p.bump(); // =
    p.bump(); // der
    p.bump(); // (
    parse_type_specifier(p);
    p.expect(SyntaxKind::COMMA);
    comma_sep1(p, SyntaxKind::COMMA, |p| {
        p.expect(SyntaxKind::IDENT);
    });
    p.expect(SyntaxKind::R_PAREN);
    parse_comment(p);
    p.finish_node();
}

/// ExternalFunctionClause = 'external' LanguageSpecification? ExternalFunctionCall? AnnotationClause? ';'
fn parse_external_function_clause<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXTERNAL_FUNCTION_CLAUSE);
    p.bump(); // external

    p.with_context(ParseContext::ExternalClause, |p| {
        if p.at(SyntaxKind::STRING) {
            p.start_node(SyntaxKind::LANGUAGE_SPECIFICATION);
            parse_literal(p, SyntaxKind::STRING_LITERAL);
            p.finish_node();
        }
        if p.at_any(&[SyntaxKind::IDENT, SyntaxKind::DOT]) {
            parse_external_function_call(p);
        }
        if p.at(SyntaxKind::ANNOTATION_KW) {
            parse_annotation_clause(p);
        }
        p.expect(SyntaxKind::SEMICOLON);
    });

    p.finish_node();
}

/// ExternalFunctionCall = (ComponentReference '=')? IDENT '(' ExpressionList? ')'
fn parse_external_function_call<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXTERNAL_FUNCTION_CALL);
    if !(p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::L_PAREN) {
        parse_component_reference(p);
        p.expect(SyntaxKind::EQ);
    }
    p.expect(SyntaxKind::IDENT);
    if p.expect(SyntaxKind::L_PAREN) {
        if !p.at(SyntaxKind::R_PAREN) {
            parse_expression_list(p);
        }
        p.expect(SyntaxKind::R_PAREN);
    }
    p.finish_node();
}
