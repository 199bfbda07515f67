//! The `Tree` query surface.

#![allow(clippy::unwrap_used)]

use modelica_syntax::{LineCol, NodeExt, Supertype, SyntaxKind, TextRange, TextSize, Tree, parse};

use crate::helpers::source_fixtures;

fn tree(source: &str) -> Tree {
    parse(source).into_result().unwrap()
}

fn offset_of(source: &str, needle: &str) -> TextSize {
    TextSize::new(source.find(needle).unwrap() as u32)
}

#[test]
fn test_tree_is_lossless_for_every_fixture() {
    for source in source_fixtures::ALL {
        let tree = tree(source);
        assert_eq!(tree.text(), *source);
        assert_eq!(tree.root().to_string(), *source);
        let joined: String = tree.tokens().map(|t| t.text().to_string()).collect();
        assert_eq!(joined, *source);
    }
}

#[test]
fn test_comments_stay_in_the_tree() {
    let tree = tree(source_fixtures::WITH_COMMENTS);
    let comments = tree
        .tokens()
        .filter(|t| matches!(t.kind(), SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT))
        .count();
    assert_eq!(comments, 6);
}

#[test]
fn test_token_at_offset_prefers_the_token_starting_there() {
    let source = source_fixtures::DECAY;
    let tree = tree(source);
    let token = tree.token_at_offset(offset_of(source, "der")).unwrap();
    assert_eq!(token.kind(), SyntaxKind::DER_KW);
    let node = tree.node_at_offset(offset_of(source, "der")).unwrap();
    assert_eq!(node.kind(), SyntaxKind::FUNCTION_CALL);
}

#[test]
fn test_node_at_range_of_a_whole_equation() {
    let source = source_fixtures::DECAY;
    let tree = tree(source);
    let start = offset_of(source, "der(x)");
    let end = offset_of(source, "-k * x") + TextSize::new(6);
    let node = tree.node_at_range(TextRange::new(start, end)).unwrap();
    assert_eq!(node.kind(), SyntaxKind::SIMPLE_EQUATION);
    assert!(tree.node_at_range(TextRange::new(start, TextSize::new(10_000))).is_none());
}

#[test]
fn test_nodes_in_document_order() {
    let tree = tree(source_fixtures::PACKAGE);
    let names: Vec<_> = tree
        .nodes_of_kind(SyntaxKind::CLASS_DEFINITION)
        .filter_map(|class| {
            let spec = class.child_by_field("classSpecifier")?;
            Some(spec.field("identifier").first()?.to_string())
        })
        .collect();
    assert_eq!(names, ["P", "Voltage", "Color", "Pin", "TwoPin", "Resistor"]);
    assert_eq!(tree.nodes().next().unwrap().kind(), SyntaxKind::STORED_DEFINITION);
}

#[test]
fn test_nodes_of_supertype() {
    let tree = tree(source_fixtures::FUNCTION);
    assert_eq!(tree.nodes_of_supertype(Supertype::Statement).count(), 4);
    assert_eq!(tree.nodes_of_supertype(Supertype::Element).count(), 4);
    assert_eq!(tree.nodes_of_supertype(Supertype::Equation).count(), 0);
}

#[test]
fn test_line_col_and_back() {
    let source = source_fixtures::FUNCTION;
    let tree = tree(source);
    let offset = offset_of(source, "algorithm");
    let pos = tree.line_col(offset);
    assert_eq!(pos, LineCol::new(5, 0));
    assert_eq!(tree.line_index().offset(pos), Some(offset));
}

#[test]
fn test_trees_are_shareable_across_threads() {
    let tree = tree(source_fixtures::CIRCUIT);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = tree.clone();
            std::thread::spawn(move || tree.nodes_of_kind(SyntaxKind::CONNECT_CLAUSE).count())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_debug_dump_skips_trivia() {
    let tree = tree(source_fixtures::WITH_COMMENTS);
    let dump = tree.debug_dump();
    assert!(!dump.contains("LINE_COMMENT"), "{dump}");
    assert!(dump.contains("withinClause: WithinClause"), "{dump}");
}
