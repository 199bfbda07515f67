use super::*;

// ============================================================================
// Stored definition
// ============================================================================

ast_node!(
    /// The root of every parse of a whole source unit.
    StoredDefinition,
    STORED_DEFINITION
);

impl StoredDefinition {
    has_token_method!(has_bom, BOM);
    first_child_method!(within_clause, WithinClause);
    children_method!(class_definition_clauses, ClassDefinitionClause);

    /// Every top-level class definition, `final` or not.
    pub fn class_definitions(&self) -> impl Iterator<Item = ClassDefinition> + '_ {
        self.class_definition_clauses()
            .filter_map(|clause| clause.class_definition())
    }
}

ast_node!(WithinClause, WITHIN_CLAUSE);

impl WithinClause {
    first_child_method!(package_name, Name);
}

ast_node!(ClassDefinitionClause, CLASS_DEFINITION_CLAUSE);

impl ClassDefinitionClause {
    has_token_method!(is_final, FINAL_KW);
    first_child_method!(class_definition, ClassDefinition);
}

// ============================================================================
// Class definitions
// ============================================================================

ast_node!(ClassDefinition, CLASS_DEFINITION);

impl ClassDefinition {
    has_token_method!(is_encapsulated, ENCAPSULATED_KW);
    first_child_method!(class_prefixes, ClassPrefixes);
    first_child_method!(class_specifier, ClassSpecifier);

    /// The declared name, whichever specifier form was used.
    pub fn name(&self) -> Option<SmolStr> {
        self.class_specifier()?.name()
    }
}

ast_node!(ClassPrefixes, CLASS_PREFIXES);

impl ClassPrefixes {
    has_token_method!(is_partial, PARTIAL_KW);
    has_token_method!(is_expandable, EXPANDABLE_KW);
    has_token_method!(is_pure, PURE_KW);
    has_token_method!(is_impure, IMPURE_KW);
    has_token_method!(is_operator, OPERATOR_KW);

    /// The restriction keyword: `model`, `connector`, `function`, ...
    ///
    /// `operator record` and `operator function` report the second keyword;
    /// a bare `operator` reports itself.
    pub fn restriction(&self) -> Option<SyntaxKind> {
        const RESTRICTIONS: &[SyntaxKind] = &[
            SyntaxKind::CLASS_KW,
            SyntaxKind::MODEL_KW,
            SyntaxKind::RECORD_KW,
            SyntaxKind::BLOCK_KW,
            SyntaxKind::CONNECTOR_KW,
            SyntaxKind::TYPE_KW,
            SyntaxKind::PACKAGE_KW,
            SyntaxKind::FUNCTION_KW,
        ];
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .map(|t| t.kind())
            .find(|kind| RESTRICTIONS.contains(kind))
            .or_else(|| self.is_operator().then_some(SyntaxKind::OPERATOR_KW))
    }
}

ast_enum!(
    /// `_ClassSpecifier`
    ClassSpecifier {
        Long(LongClassSpecifier),
        Short(ShortClassSpecifier),
        Der(DerClassSpecifier),
    }
);

impl ClassSpecifier {
    pub fn name(&self) -> Option<SmolStr> {
        let ident = match self {
            Self::Long(it) => it.identifier(),
            Self::Short(it) => it.identifier(),
            Self::Der(it) => it.identifier(),
        };
        ident.as_ref().map(ident_text)
    }
}

ast_node!(
    /// `model M ... end M`, including `extends M(...) ... end M`.
    LongClassSpecifier,
    LONG_CLASS_SPECIFIER
);

impl LongClassSpecifier {
    has_token_method!(is_extends, EXTENDS_KW);
    first_child_method!(class_modification, ClassModification);
    first_child_method!(description, DescriptionString);
    first_child_method!(initial_element_list, InitialElementList);
    children_method!(element_lists, ElementList);
    children_method!(equation_sections, EquationSection);
    children_method!(algorithm_sections, AlgorithmSection);
    first_child_method!(external_function_clause, ExternalFunctionClause);
    first_child_method!(annotation, AnnotationClause);

    pub fn identifier(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "identifier")
    }

    /// The identifier after `end`.
    pub fn end_identifier(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "endIdentifier")
    }

    /// Every element of the class body, public and protected, in order.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.0
            .children()
            .filter(|n| {
                matches!(
                    n.kind(),
                    SyntaxKind::INITIAL_ELEMENT_LIST | SyntaxKind::ELEMENT_LIST
                )
            })
            .flat_map(|list| list.children().filter_map(Element::cast))
    }

    /// Every equation of every equation section, initial ones included.
    pub fn equations(&self) -> impl Iterator<Item = Equation> + '_ {
        self.equation_sections()
            .flat_map(|section| section.equations().collect::<Vec<_>>())
    }
}

ast_node!(
    /// `type T = ...` and `type E = enumeration(...)`.
    ShortClassSpecifier,
    SHORT_CLASS_SPECIFIER
);

impl ShortClassSpecifier {
    has_token_method!(is_enumeration, ENUMERATION_KW);
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(array_subscripts, ArraySubscripts);
    first_child_method!(class_modification, ClassModification);
    children_method!(enumeration_literals, EnumerationLiteral);
    first_child_method!(description, DescriptionString);
    first_child_method!(annotation, AnnotationClause);

    pub fn identifier(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "identifier")
    }

    /// `enumeration(:)`, an enumeration left open.
    pub fn is_unspecified(&self) -> bool {
        !fields::field(&self.0, "unspecified").is_absent()
    }
}

ast_node!(
    /// `type T = der(f, x, y)`
    DerClassSpecifier,
    DER_CLASS_SPECIFIER
);

impl DerClassSpecifier {
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(description, DescriptionString);
    first_child_method!(annotation, AnnotationClause);

    pub fn identifier(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "identifier")
    }

    /// The variables the derivative is taken with respect to.
    pub fn inputs(&self) -> Vec<SmolStr> {
        fields::field(&self.0, "input")
            .to_vec()
            .iter()
            .filter_map(|e| e.as_token())
            .map(ident_text)
            .collect()
    }
}

ast_node!(EnumerationLiteral, ENUMERATION_LITERAL);

impl EnumerationLiteral {
    first_child_method!(description, DescriptionString);
    first_child_method!(annotation, AnnotationClause);

    pub fn name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

// ============================================================================
// Class body
// ============================================================================

ast_node!(
    /// Elements before the first `public` / `protected` marker.
    InitialElementList,
    INITIAL_ELEMENT_LIST
);

impl InitialElementList {
    children_method!(elements, Element);
}

ast_node!(ElementList, ELEMENT_LIST);

impl ElementList {
    has_token_method!(is_public, PUBLIC_KW);
    has_token_method!(is_protected, PROTECTED_KW);
    children_method!(elements, Element);
}

ast_node!(ExternalFunctionClause, EXTERNAL_FUNCTION_CLAUSE);

impl ExternalFunctionClause {
    first_child_method!(language_specification, LanguageSpecification);
    first_child_method!(external_function_call, ExternalFunctionCall);
    first_child_method!(annotation, AnnotationClause);
}

ast_node!(
    /// `"C"` in `external "C" ...`
    LanguageSpecification,
    LANGUAGE_SPECIFICATION
);

impl LanguageSpecification {
    first_child_method!(language, StringLiteral);
}

ast_node!(ExternalFunctionCall, EXTERNAL_FUNCTION_CALL);

impl ExternalFunctionCall {
    first_child_method!(output, ComponentReference);
    first_child_method!(arguments, ExpressionList);

    pub fn function_name(&self) -> Option<SmolStr> {
        field_token(&self.0, "functionName").map(|t| ident_text(&t))
    }
}
