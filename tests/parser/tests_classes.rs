//! Class definitions, class bodies and elements.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use rstest::rstest;
use modelica_syntax::parser::ast::{AstNode, ClassSpecifier, Element, StoredDefinition};
use modelica_syntax::{NodeExt, SyntaxKind, parse};

use crate::helpers::shape::{child_kinds, first_of};
use crate::helpers::source_fixtures;

/// Parse source and assert it succeeds
fn assert_parses(input: &str) -> StoredDefinition {
    let result = parse(input);
    assert!(
        result.ok(),
        "Failed to parse: {:?}\nInput: {}",
        result.errors,
        input
    );
    StoredDefinition::cast(result.syntax()).unwrap()
}

#[test]
fn test_scenario_model_with_equation() {
    let root = assert_parses("model M Real x = 1.0; equation x = 2; end M;").syntax().clone();
    assert_eq!(root.kind(), SyntaxKind::STORED_DEFINITION);
    assert_eq!(child_kinds(&root), [SyntaxKind::CLASS_DEFINITION_CLAUSE]);

    let class = first_of(&root, SyntaxKind::CLASS_DEFINITION);
    let prefixes = class.child_by_field("classPrefixes").unwrap();
    assert_eq!(prefixes.to_string().trim(), "model");

    let spec = class.child_by_field("classSpecifier").unwrap();
    assert_eq!(spec.kind(), SyntaxKind::LONG_CLASS_SPECIFIER);
    assert_eq!(spec.field("identifier").first().unwrap().to_string(), "M");
    assert_eq!(spec.field("endIdentifier").first().unwrap().to_string(), "M");

    let elements = spec.child_by_field("initialElementList").unwrap();
    let component = first_of(&elements, SyntaxKind::COMPONENT_CLAUSE);
    assert_eq!(component.child_by_field("typeSpecifier").unwrap().to_string(), "Real");
    let declaration = first_of(&component, SyntaxKind::DECLARATION);
    assert_eq!(declaration.field("identifier").first().unwrap().to_string(), "x");
    let binding = first_of(&declaration, SyntaxKind::MODIFICATION_EXPRESSION);
    assert_eq!(binding.child_by_field("expression").unwrap().to_string(), "1.0");

    let sections = spec.field("equationSection").to_vec();
    assert_eq!(sections.len(), 1);
    let equation = first_of(sections[0].as_node().unwrap(), SyntaxKind::SIMPLE_EQUATION);
    assert_eq!(equation.child_by_field("expression1").unwrap().to_string(), "x");
    assert_eq!(equation.child_by_field("expression2").unwrap().to_string(), "2");
}

#[rstest]
#[case("class C end C;", SyntaxKind::CLASS_KW)]
#[case("model M end M;", SyntaxKind::MODEL_KW)]
#[case("record R end R;", SyntaxKind::RECORD_KW)]
#[case("operator record R end R;", SyntaxKind::RECORD_KW)]
#[case("block B end B;", SyntaxKind::BLOCK_KW)]
#[case("connector C end C;", SyntaxKind::CONNECTOR_KW)]
#[case("expandable connector C end C;", SyntaxKind::CONNECTOR_KW)]
#[case("type T = Real;", SyntaxKind::TYPE_KW)]
#[case("package P end P;", SyntaxKind::PACKAGE_KW)]
#[case("function f end f;", SyntaxKind::FUNCTION_KW)]
#[case("pure function f end f;", SyntaxKind::FUNCTION_KW)]
#[case("impure function f end f;", SyntaxKind::FUNCTION_KW)]
#[case("operator function f end f;", SyntaxKind::FUNCTION_KW)]
#[case("operator O end O;", SyntaxKind::OPERATOR_KW)]
#[case("partial model M end M;", SyntaxKind::MODEL_KW)]
fn test_class_restrictions(#[case] input: &str, #[case] restriction: SyntaxKind) {
    let root = assert_parses(input);
    let class = root.class_definitions().next().unwrap();
    assert_eq!(class.class_prefixes().unwrap().restriction(), Some(restriction));
}

#[rstest]
#[case("model M end M;", SyntaxKind::LONG_CLASS_SPECIFIER)]
#[case("model M \"doc\" Real x; end M;", SyntaxKind::LONG_CLASS_SPECIFIER)]
#[case("model extends Base(k = 1) Real y; end Base;", SyntaxKind::LONG_CLASS_SPECIFIER)]
#[case("type V = Real(unit = \"V\");", SyntaxKind::SHORT_CLASS_SPECIFIER)]
#[case("type A = input Real[3] \"vector\";", SyntaxKind::SHORT_CLASS_SPECIFIER)]
#[case("type E = enumeration(a, b \"second\", c);", SyntaxKind::SHORT_CLASS_SPECIFIER)]
#[case("type E = enumeration(:);", SyntaxKind::SHORT_CLASS_SPECIFIER)]
#[case("function df = der(f, x, y);", SyntaxKind::DER_CLASS_SPECIFIER)]
fn test_class_specifier_forms(#[case] input: &str, #[case] kind: SyntaxKind) {
    let root = assert_parses(input);
    let spec = root
        .class_definitions()
        .next()
        .unwrap()
        .class_specifier()
        .unwrap();
    assert_eq!(spec.syntax().kind(), kind, "{input}");
}

#[test]
fn test_der_class_specifier_inputs() {
    let root = assert_parses("function df = der(f, x, y);");
    let Some(ClassSpecifier::Der(der)) = root.class_definitions().next().unwrap().class_specifier() else {
        panic!("expected der specifier");
    };
    assert_eq!(der.inputs(), vec!["x", "y"]);
    assert_eq!(der.type_specifier().unwrap().name().unwrap().parts(), vec!["f"]);
}

#[test]
fn test_public_and_protected_sections() {
    let root = assert_parses(source_fixtures::CIRCUIT);
    let Some(ClassSpecifier::Long(spec)) = root.class_definitions().next().unwrap().class_specifier()
    else {
        panic!("expected long specifier");
    };
    assert_eq!(spec.initial_element_list().unwrap().elements().count(), 3);
    let lists: Vec<_> = spec.element_lists().collect();
    assert_eq!(lists.len(), 1);
    assert!(lists[0].is_protected());
    assert_eq!(spec.elements().count(), 4);
    assert_eq!(spec.equations().count(), 3);
}

#[test]
fn test_nested_classes() {
    let root = assert_parses(source_fixtures::PACKAGE);
    let package = root.syntax().clone();
    // P itself plus five nested definitions.
    assert_eq!(package.descendants().filter(|n| n.kind() == SyntaxKind::CLASS_DEFINITION).count(), 6);
    let extends = first_of(&package, SyntaxKind::EXTENDS_CLAUSE);
    assert_eq!(extends.child_by_field("typeSpecifier").unwrap().to_string(), "TwoPin");
}

#[test]
fn test_within_and_final_clauses() {
    let root = assert_parses("within A.B; final model M end M; model N end N;");
    assert_eq!(
        root.within_clause().unwrap().package_name().unwrap().parts(),
        vec!["A", "B"]
    );
    let clauses: Vec<_> = root.class_definition_clauses().collect();
    assert_eq!(clauses.len(), 2);
    assert!(clauses[0].is_final());
    assert!(!clauses[1].is_final());
}

#[test]
fn test_empty_within() {
    let root = assert_parses("within; model M end M;");
    assert!(root.within_clause().unwrap().package_name().is_none());
}

#[rstest]
#[case("import A.B.C;", SyntaxKind::SIMPLE_IMPORT_CLAUSE)]
#[case("import X = A.B.C;", SyntaxKind::SIMPLE_IMPORT_CLAUSE)]
#[case("import A.B.*;", SyntaxKind::UNQUALIFIED_IMPORT_CLAUSE)]
#[case("import A.B.{c, d};", SyntaxKind::COMPOUND_IMPORT_CLAUSE)]
#[case("extends Base;", SyntaxKind::EXTENDS_CLAUSE)]
#[case("extends Base(k = 2, break x, break connect(a, b));", SyntaxKind::EXTENDS_CLAUSE)]
#[case("parameter Real k = 1;", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("replaceable model Sub = Base constrainedby Iface;", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("inner outer Real x;", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("Real x if useX \"conditional\";", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("Real x[3](each start = 0);", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("Real[2, :] m;", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
#[case("Real x(start = 1, fixed = true) = 2 annotation(Evaluate = true);", SyntaxKind::NAMED_ELEMENT_CLAUSE)]
fn test_element_forms(#[case] element: &str, #[case] kind: SyntaxKind) {
    let input = format!("model M {element} end M;");
    let root = assert_parses(&input);
    let Some(ClassSpecifier::Long(spec)) = root.class_definitions().next().unwrap().class_specifier()
    else {
        panic!("expected long specifier");
    };
    let elements: Vec<Element> = spec.elements().collect();
    assert_eq!(elements.len(), 1, "{input}");
    assert_eq!(elements[0].syntax().kind(), kind, "{input}");
}

#[rstest]
#[case("Real x(redeclare Real y = 1);", SyntaxKind::ELEMENT_REDECLARATION)]
#[case("M m(redeclare model Sub = Impl);", SyntaxKind::ELEMENT_REDECLARATION)]
#[case("M m(replaceable Real y);", SyntaxKind::ELEMENT_REPLACEABLE)]
#[case("M m(final k = 1);", SyntaxKind::ELEMENT_MODIFICATION)]
#[case("M m(a.b = 1);", SyntaxKind::ELEMENT_MODIFICATION)]
fn test_modification_arguments(#[case] element: &str, #[case] kind: SyntaxKind) {
    let input = format!("model M {element} end M;");
    let root = assert_parses(&input);
    let modification = first_of(root.syntax(), SyntaxKind::CLASS_MODIFICATION);
    assert_eq!(child_kinds(&modification), [kind], "{input}");
}

#[test]
fn test_subscripted_modification_target_is_a_component_reference() {
    let root = assert_parses("model M M m(a[1].b = 1); end M;");
    let modification = first_of(root.syntax(), SyntaxKind::ELEMENT_MODIFICATION);
    assert_eq!(
        modification.child_by_field("name").unwrap().kind(),
        SyntaxKind::COMPONENT_REFERENCE
    );
}

#[test]
fn test_external_function() {
    let input = "function f input Real x; output Real y; external \"C\" y = f_impl(x) annotation(Library = \"m\"); end f;";
    let root = assert_parses(input);
    let external = first_of(root.syntax(), SyntaxKind::EXTERNAL_FUNCTION_CLAUSE);
    let call = external.child_by_field("externalFunctionCall").unwrap();
    assert_eq!(call.field("functionName").first().unwrap().to_string(), "f_impl");
    assert!(call.child_by_field("output").is_some());
    assert!(external.child_by_field("languageSpecification").is_some());
    assert!(external.child_by_field("annotationClause").is_some());
}

#[test]
fn test_class_annotation_before_end() {
    let root = assert_parses("model M Real x; annotation(Icon(graphics = {})); end M;");
    let spec = first_of(root.syntax(), SyntaxKind::LONG_CLASS_SPECIFIER);
    assert!(spec.child_by_field("annotationClause").is_some());
}

#[test]
fn test_quoted_identifier_class() {
    let root = assert_parses("model 'foo bar' end 'foo bar';");
    let class = root.class_definitions().next().unwrap();
    assert_eq!(class.name().as_deref(), Some("'foo bar'"));
}

#[test]
fn test_fixtures_parse_cleanly() {
    for source in source_fixtures::ALL {
        assert_parses(source);
    }
}
