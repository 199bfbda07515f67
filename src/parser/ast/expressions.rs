use super::*;

// ============================================================================
// Supertypes
// ============================================================================

ast_enum!(
    /// `_Expression`
    Expression {
        If(IfExpression),
        Range(RangeExpression),
        Simple(SimpleExpression),
    }
);

ast_enum!(
    /// `_SimpleExpression`: an expression without the `if` and range forms.
    SimpleExpression {
        Unary(UnaryExpression),
        Binary(BinaryExpression),
        Primary(PrimaryExpression),
    }
);

ast_enum!(
    /// `_PrimaryExpression`
    PrimaryExpression {
        Literal(Literal),
        FunctionCall(FunctionCall),
        ComponentReference(ComponentReference),
        Parenthesized(ParenthesizedExpression),
        ArrayConcatenation(ArrayConcatenation),
        ArrayConstructor(ArrayConstructor),
        End(EndExpression),
    }
);

ast_enum!(
    /// `_Literal`
    Literal {
        Number(UnsignedNumberLiteral),
        String(StringLiteral),
        Logical(LogicalLiteral),
    }
);

ast_enum!(
    /// `_UnsignedNumberLiteral`
    UnsignedNumberLiteral {
        Integer(UnsignedIntegerLiteral),
        Real(UnsignedRealLiteral),
    }
);

// ============================================================================
// Compound expressions
// ============================================================================

ast_node!(
    /// `if c then a elseif d then b else e`
    IfExpression,
    IF_EXPRESSION
);

impl IfExpression {
    field_method!(condition, "condition", Expression);
    field_method!(then_branch, "thenExpression", Expression);
    children_method!(else_if_clauses, ElseIfExpressionClause);
    field_method!(else_branch, "elseExpression", Expression);
}

ast_node!(ElseIfExpressionClause, ELSE_IF_EXPRESSION_CLAUSE);

impl ElseIfExpressionClause {
    field_method!(condition, "condition", Expression);
    field_method!(then_branch, "thenExpression", Expression);
}

ast_node!(
    /// `start:stop` or `start:step:stop`
    RangeExpression,
    RANGE_EXPRESSION
);

impl RangeExpression {
    field_method!(start, "startExpression", SimpleExpression);
    field_method!(step, "stepExpression", SimpleExpression);
    field_method!(stop, "stopExpression", SimpleExpression);
}

ast_node!(UnaryExpression, UNARY_EXPRESSION);

impl UnaryExpression {
    field_method!(operand, "operand", SimpleExpression);

    pub fn operator(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "operator")
    }
}

ast_node!(BinaryExpression, BINARY_EXPRESSION);

impl BinaryExpression {
    field_method!(lhs, "operand1", SimpleExpression);
    field_method!(rhs, "operand2", SimpleExpression);

    pub fn operator(&self) -> Option<SyntaxToken> {
        field_token(&self.0, "operator")
    }

    pub fn operator_kind(&self) -> Option<SyntaxKind> {
        self.operator().map(|t| t.kind())
    }
}

ast_node!(
    /// `end` used inside a subscript.
    EndExpression,
    END_EXPRESSION
);

// ============================================================================
// Literals
// ============================================================================

ast_node!(UnsignedIntegerLiteral, UNSIGNED_INTEGER_LITERAL);

impl UnsignedIntegerLiteral {
    /// The value, or `None` when it does not fit in a `u64`.
    pub fn value(&self) -> Option<u64> {
        self.0.text().to_string().parse().ok()
    }
}

ast_node!(UnsignedRealLiteral, UNSIGNED_REAL_LITERAL);

impl UnsignedRealLiteral {
    pub fn value(&self) -> Option<f64> {
        self.0.text().to_string().parse().ok()
    }
}

ast_node!(LogicalLiteral, LOGICAL_LITERAL);

impl LogicalLiteral {
    pub fn value(&self) -> bool {
        has_token(&self.0, SyntaxKind::TRUE_KW)
    }
}

ast_node!(StringLiteral, STRING_LITERAL);

impl StringLiteral {
    /// The text between the quotes, escapes left as written.
    pub fn value(&self) -> Option<SmolStr> {
        let token = tokens_of(&self.0, SyntaxKind::STRING).next()?;
        let text = token.text();
        let inner = text.strip_prefix('"')?;
        Some(SmolStr::new(inner.strip_suffix('"').unwrap_or(inner)))
    }
}

// ============================================================================
// Names and references
// ============================================================================

ast_node!(
    /// `.A.B`: a type name, optionally anchored at the global scope.
    TypeSpecifier,
    TYPE_SPECIFIER
);

impl TypeSpecifier {
    first_child_method!(name, Name);

    pub fn is_global(&self) -> bool {
        !fields::field(&self.0, "global").is_absent()
    }
}

ast_node!(
    /// `A.B.C`
    Name,
    NAME
);

impl Name {
    pub fn parts(&self) -> Vec<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT)
            .map(|t| ident_text(&t))
            .collect()
    }
}

ast_node!(
    /// `a[1].b`
    ComponentReference,
    COMPONENT_REFERENCE
);

impl ComponentReference {
    children_method!(parts, ComponentReferencePart);

    pub fn is_global(&self) -> bool {
        !fields::field(&self.0, "global").is_absent()
    }

    /// The identifiers of every part, subscripts dropped.
    pub fn names(&self) -> Vec<SmolStr> {
        self.parts().filter_map(|part| part.name()).collect()
    }
}

ast_node!(ComponentReferencePart, COMPONENT_REFERENCE_PART);

impl ComponentReferencePart {
    first_child_method!(array_subscripts, ArraySubscripts);

    pub fn name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

// ============================================================================
// Calls and arrays
// ============================================================================

ast_node!(
    /// `f(x)`, `der(x)`, `initial()` or `pure(f(x))`
    FunctionCall,
    FUNCTION_CALL
);

impl FunctionCall {
    first_child_method!(arguments, FunctionArguments);

    /// The called name as written: `Modelica.Math.sin`, `der`, `initial`, `pure`.
    pub fn callee(&self) -> Option<String> {
        fields::field(&self.0, "functionReference")
            .first()
            .map(|element| match element {
                rowan::NodeOrToken::Node(node) => node.text().to_string(),
                rowan::NodeOrToken::Token(token) => token.text().to_string(),
            })
    }
}

ast_node!(FunctionArguments, FUNCTION_ARGUMENTS);

impl FunctionArguments {
    first_child_method!(comprehension, ComprehensionClause);
    children_method!(positional, FunctionArgument);
    children_method!(named, NamedArgument);
}

ast_node!(FunctionArgument, FUNCTION_ARGUMENT);

impl FunctionArgument {
    first_child_method!(partial_application, FunctionPartialApplication);
    first_child_method!(expression, Expression);
}

ast_node!(
    /// `name = value` in a call.
    NamedArgument,
    NAMED_ARGUMENT
);

impl NamedArgument {
    first_child_method!(value, FunctionArgument);

    pub fn name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

ast_node!(
    /// `function f(k = 2)` passed as an argument.
    FunctionPartialApplication,
    FUNCTION_PARTIAL_APPLICATION
);

impl FunctionPartialApplication {
    first_child_method!(type_specifier, TypeSpecifier);
    children_method!(named_arguments, NamedArgument);
}

ast_node!(
    /// `[a, b; c, d]`
    ArrayConcatenation,
    ARRAY_CONCATENATION
);

impl ArrayConcatenation {
    children_method!(rows, ExpressionList);
}

ast_node!(
    /// `{a, b}` or `{f(i) for i in 1:n}`
    ArrayConstructor,
    ARRAY_CONSTRUCTOR
);

impl ArrayConstructor {
    first_child_method!(elements, ExpressionList);
    first_child_method!(comprehension, ComprehensionClause);
}

ast_node!(ComprehensionClause, COMPREHENSION_CLAUSE);

impl ComprehensionClause {
    first_child_method!(expression, Expression);
    children_method!(indices, ForIndex);
}

ast_node!(
    /// `(a, b)`, also the target list of a destructuring assignment.
    /// Positions may be empty: `(a, , c)`.
    ParenthesizedExpression,
    PARENTHESIZED_EXPRESSION
);

impl ParenthesizedExpression {
    children_method!(expressions, Expression);
}

ast_node!(ExpressionList, EXPRESSION_LIST);

impl ExpressionList {
    children_method!(expressions, Expression);
}

ast_node!(ArraySubscripts, ARRAY_SUBSCRIPTS);

impl ArraySubscripts {
    children_method!(subscripts, Subscript);
}

ast_node!(Subscript, SUBSCRIPT);

impl Subscript {
    first_child_method!(expression, Expression);

    /// `:`, the whole dimension.
    pub fn is_flexible(&self) -> bool {
        has_token(&self.0, SyntaxKind::COLON)
    }
}
