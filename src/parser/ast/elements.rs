use super::*;

// ============================================================================
// Elements
// ============================================================================

ast_enum!(
    /// `_Element`: anything that can appear in an element list.
    Element {
        Import(ImportClause),
        Extends(ExtendsClause),
        Named(NamedElementClause),
    }
);

ast_enum!(
    /// `_ImportClause`
    ImportClause {
        Simple(SimpleImportClause),
        Compound(CompoundImportClause),
        Unqualified(UnqualifiedImportClause),
    }
);

impl ImportClause {
    /// The imported package path, without the alias, `.*` or `.{...}` part.
    pub fn package_name(&self) -> Option<Name> {
        match self {
            Self::Simple(it) => it.package_name(),
            Self::Compound(it) => it.package_name(),
            Self::Unqualified(it) => it.package_name(),
        }
    }
}

ast_node!(
    /// `import A = P.Q;` or `import P.Q;`
    SimpleImportClause,
    SIMPLE_IMPORT_CLAUSE
);

impl SimpleImportClause {
    first_child_method!(package_name, Name);
    first_child_method!(description, DescriptionString);

    /// The alias in `import A = P.Q;`.
    pub fn short_name(&self) -> Option<SmolStr> {
        field_token(&self.0, "shortName").map(|t| ident_text(&t))
    }
}

ast_node!(
    /// `import P.{a, b};`
    CompoundImportClause,
    COMPOUND_IMPORT_CLAUSE
);

impl CompoundImportClause {
    first_child_method!(package_name, Name);

    pub fn import_names(&self) -> Vec<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT)
            .map(|t| ident_text(&t))
            .collect()
    }
}

ast_node!(
    /// `import P.*;`
    UnqualifiedImportClause,
    UNQUALIFIED_IMPORT_CLAUSE
);

impl UnqualifiedImportClause {
    first_child_method!(package_name, Name);
}

ast_node!(ExtendsClause, EXTENDS_CLAUSE);

impl ExtendsClause {
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(modification, ClassOrInheritanceModification);
    first_child_method!(annotation, AnnotationClause);
}

ast_node!(
    /// A nested class definition or a component clause, with its prefixes.
    NamedElementClause,
    NAMED_ELEMENT_CLAUSE
);

impl NamedElementClause {
    has_token_method!(is_redeclare, REDECLARE_KW);
    has_token_method!(is_final, FINAL_KW);
    has_token_method!(is_inner, INNER_KW);
    has_token_method!(is_outer, OUTER_KW);
    has_token_method!(is_replaceable, REPLACEABLE_KW);
    first_child_method!(class_definition, ClassDefinition);
    first_child_method!(component_clause, ComponentClause);
    first_child_method!(constraining_clause, ConstrainingClause);
}

ast_node!(ConstrainingClause, CONSTRAINING_CLAUSE);

impl ConstrainingClause {
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(class_modification, ClassModification);
}

// ============================================================================
// Components
// ============================================================================

ast_node!(
    /// `parameter Real k = 1, j = 2`
    ComponentClause,
    COMPONENT_CLAUSE
);

impl ComponentClause {
    has_token_method!(is_flow, FLOW_KW);
    has_token_method!(is_stream, STREAM_KW);
    has_token_method!(is_discrete, DISCRETE_KW);
    has_token_method!(is_parameter, PARAMETER_KW);
    has_token_method!(is_constant, CONSTANT_KW);
    has_token_method!(is_input, INPUT_KW);
    has_token_method!(is_output, OUTPUT_KW);
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(array_subscripts, ArraySubscripts);
    children_method!(component_declarations, ComponentDeclaration);
}

ast_node!(ComponentDeclaration, COMPONENT_DECLARATION);

impl ComponentDeclaration {
    first_child_method!(declaration, Declaration);
    first_child_method!(condition_attribute, ConditionAttribute);
    first_child_method!(description, DescriptionString);
    first_child_method!(annotation, AnnotationClause);
}

ast_node!(ConditionAttribute, CONDITION_ATTRIBUTE);

impl ConditionAttribute {
    first_child_method!(condition, Expression);
}

ast_node!(Declaration, DECLARATION);

impl Declaration {
    first_child_method!(array_subscripts, ArraySubscripts);
    first_child_method!(modification, Modification);

    pub fn name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

ast_node!(ComponentClause1, COMPONENT_CLAUSE1);

impl ComponentClause1 {
    first_child_method!(type_specifier, TypeSpecifier);
    first_child_method!(component_declaration, ComponentDeclaration1);
}

ast_node!(ComponentDeclaration1, COMPONENT_DECLARATION1);

impl ComponentDeclaration1 {
    first_child_method!(declaration, Declaration);
    first_child_method!(description, DescriptionString);
}

ast_node!(ShortClassDefinition, SHORT_CLASS_DEFINITION);

impl ShortClassDefinition {
    first_child_method!(class_prefixes, ClassPrefixes);
    first_child_method!(specifier, ShortClassSpecifier);
}

// ============================================================================
// Modifications
// ============================================================================

ast_node!(
    /// `(k = 1) = 2`, `= 2` or `:= 2`
    Modification,
    MODIFICATION
);

impl Modification {
    first_child_method!(class_modification, ClassModification);
    first_child_method!(modification_expression, ModificationExpression);

    /// The bound value, if the modification has one.
    pub fn expression(&self) -> Option<Expression> {
        self.modification_expression()?.expression()
    }
}

ast_node!(ModificationExpression, MODIFICATION_EXPRESSION);

impl ModificationExpression {
    has_token_method!(is_break, BREAK_KW);
    first_child_method!(expression, Expression);
}

ast_node!(ClassModification, CLASS_MODIFICATION);

impl ClassModification {
    children_method!(arguments, Argument);
}

ast_node!(ClassOrInheritanceModification, CLASS_OR_INHERITANCE_MODIFICATION);

impl ClassOrInheritanceModification {
    children_method!(arguments, Argument);
    children_method!(inheritance_modifications, InheritanceModification);
}

ast_node!(
    /// `break x` or `break connect(a, b)` in an extends modification.
    InheritanceModification,
    INHERITANCE_MODIFICATION
);

impl InheritanceModification {
    first_child_method!(connect_clause, ConnectClause);

    pub fn identifier(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

ast_enum!(
    /// `_Argument`: one entry of a class modification.
    Argument {
        Modification(ElementModification),
        Redeclaration(ElementRedeclaration),
        Replaceable(ElementReplaceable),
    }
);

ast_node!(ElementModification, ELEMENT_MODIFICATION);

impl ElementModification {
    has_token_method!(is_each, EACH_KW);
    has_token_method!(is_final, FINAL_KW);
    first_child_method!(modification, Modification);
    first_child_method!(description, DescriptionString);

    /// The modified name as written, `a.b` or `a[1].b`.
    pub fn target(&self) -> Option<String> {
        fields::field(&self.0, "name")
            .node()
            .map(|node| node.text().to_string())
    }
}

ast_node!(ElementRedeclaration, ELEMENT_REDECLARATION);

impl ElementRedeclaration {
    has_token_method!(is_each, EACH_KW);
    has_token_method!(is_final, FINAL_KW);
    has_token_method!(is_replaceable, REPLACEABLE_KW);
    first_child_method!(short_class_definition, ShortClassDefinition);
    first_child_method!(component_clause, ComponentClause1);
    first_child_method!(constraining_clause, ConstrainingClause);
}

ast_node!(ElementReplaceable, ELEMENT_REPLACEABLE);

impl ElementReplaceable {
    has_token_method!(is_each, EACH_KW);
    has_token_method!(is_final, FINAL_KW);
    first_child_method!(short_class_definition, ShortClassDefinition);
    first_child_method!(component_clause, ComponentClause1);
    first_child_method!(constraining_clause, ConstrainingClause);
}

// ============================================================================
// Comments
// ============================================================================

ast_node!(
    /// `"a" + "b"`, the description string after a declaration.
    DescriptionString,
    DESCRIPTION_STRING
);

impl DescriptionString {
    children_method!(parts, StringLiteral);

    /// The concatenated text, quotes removed and escapes left as written.
    pub fn value(&self) -> String {
        let mut out = String::new();
        for part in self.parts().filter_map(|part| part.value()) {
            out.push_str(&part);
        }
        out
    }
}

ast_node!(AnnotationClause, ANNOTATION_CLAUSE);

impl AnnotationClause {
    first_child_method!(class_modification, ClassModification);
}
