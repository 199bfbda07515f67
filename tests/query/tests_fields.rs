//! Field access across whole parsed files.

#![allow(clippy::unwrap_used)]

use modelica_syntax::parser::fields::{Cardinality, field_table};
use modelica_syntax::{Field, NodeExt, Supertype, SyntaxKind, parse};

use crate::helpers::shape::first_of;
use crate::helpers::source_fixtures;

#[test]
fn test_every_node_kind_has_slots() {
    let table = field_table();
    for kind in SyntaxKind::node_kinds() {
        assert!(table.contains(kind), "{kind:?} has no field schema");
    }
    assert!(!table.contains(SyntaxKind::IDENT));
}

#[test]
fn test_required_fields_are_filled_in_clean_trees() {
    let table = field_table();
    for source in source_fixtures::ALL {
        let root = parse(source).syntax();
        for node in root.descendants() {
            for slot in table.slots(node.kind()) {
                if slot.cardinality == Cardinality::Required {
                    assert!(
                        !node.field(slot.name).is_absent(),
                        "{:?}.{} is empty in {:?}",
                        node.kind(),
                        slot.name,
                        node.to_string()
                    );
                }
            }
        }
    }
}

#[test]
fn test_fields_cover_every_significant_child_of_an_equation() {
    let root = parse(source_fixtures::DECAY).syntax();
    let equation = first_of(&root, SyntaxKind::SIMPLE_EQUATION);
    let names: Vec<_> = equation.fields().keys().copied().collect();
    assert_eq!(names, ["expression1", "expression2"]);
    for child in equation.children() {
        assert!(equation.field_name_of(&child.into()).is_some());
    }
}

#[test]
fn test_description_and_modification_fields() {
    let root = parse(source_fixtures::DECAY).syntax();
    let component = first_of(&root, SyntaxKind::COMPONENT_DECLARATION);
    let description = component.child_by_field("descriptionString").unwrap();
    assert_eq!(description.to_string(), "\"rate\"");
    let declaration = component.child_by_field("declaration").unwrap();
    let modification = declaration.child_by_field("modification").unwrap();
    assert_eq!(modification.to_string(), "= 0.5");
}

#[test]
fn test_connect_fields() {
    let root = parse(source_fixtures::CIRCUIT).syntax();
    let clause = first_of(&root, SyntaxKind::CONNECT_CLAUSE);
    assert_eq!(clause.child_by_field("componentReference1").unwrap().to_string(), "r1.n");
    assert_eq!(clause.child_by_field("componentReference2").unwrap().to_string(), "r2.p");
}

#[test]
fn test_many_field_keeps_document_order() {
    let root = parse(source_fixtures::CIRCUIT).syntax();
    let clause = first_of(&root, SyntaxKind::COMPONENT_CLAUSE);
    let Field::Many(declarations) = clause.field("componentDeclaration") else {
        panic!("expected many declarations");
    };
    let names: Vec<_> = declarations.iter().map(|d| d.to_string()).collect();
    assert_eq!(names, ["r1(R = 10)", "r2(R = 20)"]);
}

#[test]
fn test_operator_tokens_are_fields() {
    let root = parse(source_fixtures::PACKAGE).syntax();
    let binary = first_of(&root, SyntaxKind::BINARY_EXPRESSION);
    let operator = binary.field("operator");
    let token = operator.first().unwrap().as_token().unwrap();
    assert_eq!(token.kind(), SyntaxKind::MINUS);
}

#[test]
fn test_supertypes_of_nodes() {
    let root = parse(source_fixtures::FUNCTION).syntax();
    let if_stmt = first_of(&root, SyntaxKind::IF_STATEMENT);
    assert_eq!(if_stmt.supertypes(), [Supertype::Statement]);
    let cref = first_of(&root, SyntaxKind::COMPONENT_REFERENCE);
    assert!(cref.supertypes().contains(&Supertype::Expression));
    assert!(cref.supertypes().contains(&Supertype::PrimaryExpression));
}
