//! Diagnostics, recovery and cancellation.

#![allow(clippy::unwrap_used)]

use modelica_syntax::{
    Cancelled, ErrorCode, ParseOptions, Severity, SyntaxKind, parse, parse_batch, parse_with,
};
use tokio_util::sync::CancellationToken;

use modelica_syntax::parser::ast::{AstNode, StoredDefinition};

use crate::helpers::shape::first_of;
use crate::helpers::source_fixtures;

#[test]
fn test_missing_end_at_eof() {
    let input = "model M Real x;";
    let result = parse(input);
    let error = result
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::E0206)
        .unwrap();
    assert_eq!(error.expected, vec![SyntaxKind::END_KW]);
    assert_eq!(error.found, None);
    assert_eq!(u32::from(error.range.start()), input.len() as u32);
    assert!(error.has_related());
    assert_eq!(result.syntax().to_string(), input);
}

#[test]
fn test_unterminated_string_reported_once() {
    let input = "model M String s = \"abc; end M;\n";
    let result = parse(input);
    let lexical: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::E0102)
        .collect();
    assert_eq!(lexical.len(), 1, "{:?}", result.errors);
    assert_eq!(u32::from(lexical[0].range.start()), input.find('"').unwrap() as u32);
    assert_eq!(result.syntax().to_string(), input);
}

#[test]
fn test_unterminated_string_recovers_on_next_line() {
    let input = "model M\n  String s = \"abc;\n  Real y = ;\nend M;\nmodel N Real z; end N;\n";
    let result = parse(input);
    assert_eq!(result.syntax().to_string(), input);

    let lexical: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::E0102)
        .collect();
    assert_eq!(lexical.len(), 1, "{:?}", result.errors);
    assert_eq!(u32::from(lexical[0].range.start()), input.find('"').unwrap() as u32);

    // Only the rest of the opening line is lost.
    let error = first_of(&result.syntax(), SyntaxKind::ERROR);
    assert_eq!(error.to_string(), "\"abc;");

    let root = StoredDefinition::cast(result.syntax()).unwrap();
    let names: Vec<_> = root
        .class_definitions()
        .filter_map(|class| class.name())
        .collect();
    assert_eq!(names, ["M", "N"]);

    let second = input.find("model N").unwrap() as u32;
    assert!(
        result.errors.iter().all(|e| u32::from(e.range.start()) < second),
        "{:?}",
        result.errors
    );
}

#[test]
fn test_invalid_character_is_kept_in_an_error_node() {
    let input = "model M Real x = 1 ? 2; end M;";
    let result = parse(input);
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0101));
    let error = first_of(&result.syntax(), SyntaxKind::ERROR);
    assert!(error.to_string().contains('?'));
    assert_eq!(result.syntax().to_string(), input);
}

#[test]
fn test_errors_are_sorted_by_position() {
    let result = parse("model M Real x = ; Real y = ; equation z := 1; end M;");
    assert!(result.errors.len() >= 3, "{:?}", result.errors);
    let starts: Vec<_> = result.errors.iter().map(|e| e.range.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[test]
fn test_missing_expression() {
    let result = parse("model M Real x = ; end M;");
    assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
    assert_eq!(result.errors[0].code, ErrorCode::E0406);
    assert_eq!(result.errors[0].found, Some(SyntaxKind::SEMICOLON));
}

#[test]
fn test_recovery_keeps_later_elements() {
    let result = parse("model M Real x + ; Real y; equation y = 1; end M;");
    assert!(!result.ok());
    let root = result.syntax();
    let names: Vec<_> = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::DECLARATION)
        .map(|n| n.to_string())
        .collect();
    assert!(names.contains(&"y".to_string()), "{names:?}");
    first_of(&root, SyntaxKind::SIMPLE_EQUATION);
}

#[test]
fn test_end_name_mismatch_is_a_warning() {
    let result = parse("model M end N;");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E0303);
    assert_eq!(result.errors[0].severity, Severity::Warning);
    assert!(result.ok());
    assert!(result.into_result().is_ok());
}

#[test]
fn test_into_result_collects_errors() {
    let errors = parse("model M\n  Real x = ;\nend M;").into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    let (pos, err) = &errors.positioned()[0];
    assert_eq!(pos.line, 1);
    assert_eq!(err.code, ErrorCode::E0406);
    assert!(errors.to_string().contains("E0406"));
}

#[test]
fn test_quoted_identifier_is_one_token() {
    let result = parse("model M Real 'foo bar'; end M;");
    assert!(result.ok(), "{:?}", result.errors);
    let token = result
        .syntax()
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.text() == "'foo bar'")
        .unwrap();
    assert_eq!(token.kind(), SyntaxKind::IDENT);
}

#[test]
fn test_lossless_on_garbage() {
    for input in ["", ";;;", "end", "model", "}{)(", "model M equation if then end M;", "@#$%"] {
        let result = parse(input);
        assert_eq!(result.syntax().to_string(), input);
    }
}

#[test]
fn test_cancelled_parse_returns_no_tree() {
    let token = CancellationToken::new();
    token.cancel();
    let options = ParseOptions::new().with_cancellation(token);
    assert_eq!(parse_with(source_fixtures::CIRCUIT, &options), Err(Cancelled));
}

#[test]
fn test_uncancelled_parse_with_matches_parse() {
    let options = ParseOptions::new().with_cancellation(CancellationToken::new());
    let with = parse_with(source_fixtures::DECAY, &options).unwrap();
    assert_eq!(with, parse(source_fixtures::DECAY));
}

#[test]
fn test_shallow_depth_limit() {
    let options = ParseOptions::new().with_max_depth(4);
    let input = "model M equation x = ((((((1)))))); end M;";
    let result = parse_with(input, &options).unwrap();
    assert!(result.errors.iter().any(|e| e.code == ErrorCode::E0408));
    assert_eq!(result.syntax().to_string(), input);
}

#[test]
fn test_parse_batch_keeps_order() {
    let results = parse_batch(source_fixtures::ALL);
    assert_eq!(results.len(), source_fixtures::ALL.len());
    for (result, input) in results.iter().zip(source_fixtures::ALL) {
        assert!(result.ok());
        assert_eq!(result.syntax().to_string(), *input);
    }
}
