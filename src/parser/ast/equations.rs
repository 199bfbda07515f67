use super::*;

// ============================================================================
// Sections
// ============================================================================

ast_node!(EquationSection, EQUATION_SECTION);

impl EquationSection {
    has_token_method!(is_initial, INITIAL_KW);
    children_method!(equations, Equation);
}

ast_node!(AlgorithmSection, ALGORITHM_SECTION);

impl AlgorithmSection {
    has_token_method!(is_initial, INITIAL_KW);
    children_method!(statements, Statement);
}

// ============================================================================
// Equations
// ============================================================================

ast_enum!(
    /// `_Equation`
    Equation {
        Simple(SimpleEquation),
        Special(SpecialEquation),
        If(IfEquation),
        For(ForEquation),
        Connect(ConnectEquation),
        When(WhenEquation),
    }
);

ast_node!(
    /// `lhs = rhs`
    SimpleEquation,
    SIMPLE_EQUATION
);

impl SimpleEquation {
    field_method!(lhs, "expression1", SimpleExpression);
    field_method!(rhs, "expression2", Expression);
    first_child_method!(description, DescriptionString);
    first_child_method!(annotation, AnnotationClause);
}

ast_node!(
    /// `assert(cond, "msg");`, a call used as an equation.
    SpecialEquation,
    SPECIAL_EQUATION
);

impl SpecialEquation {
    first_child_method!(function_reference, ComponentReference);
    first_child_method!(arguments, FunctionArguments);
    first_child_method!(description, DescriptionString);
}

ast_node!(IfEquation, IF_EQUATION);

impl IfEquation {
    first_child_method!(condition, Expression);
    children_method!(then_equations, Equation);
    children_method!(else_if_clauses, ElseIfEquationClause);
    first_child_method!(else_clause, ElseEquationClause);
}

ast_node!(ElseIfEquationClause, ELSE_IF_EQUATION_CLAUSE);

impl ElseIfEquationClause {
    first_child_method!(condition, Expression);
    children_method!(equations, Equation);
}

ast_node!(ElseEquationClause, ELSE_EQUATION_CLAUSE);

impl ElseEquationClause {
    children_method!(equations, Equation);
}

ast_node!(ForEquation, FOR_EQUATION);

impl ForEquation {
    children_method!(indices, ForIndex);
    children_method!(equations, Equation);
}

ast_node!(ConnectEquation, CONNECT_EQUATION);

impl ConnectEquation {
    first_child_method!(connect_clause, ConnectClause);
}

ast_node!(
    /// `connect(a, b)`
    ConnectClause,
    CONNECT_CLAUSE
);

impl ConnectClause {
    field_method!(from, "componentReference1", ComponentReference);
    field_method!(to, "componentReference2", ComponentReference);
}

ast_node!(WhenEquation, WHEN_EQUATION);

impl WhenEquation {
    first_child_method!(condition, Expression);
    children_method!(equations, Equation);
    children_method!(else_when_clauses, ElseWhenEquationClause);
}

ast_node!(ElseWhenEquationClause, ELSE_WHEN_EQUATION_CLAUSE);

impl ElseWhenEquationClause {
    first_child_method!(condition, Expression);
    children_method!(equations, Equation);
}

// ============================================================================
// Statements
// ============================================================================

ast_enum!(
    /// `_Statement`
    Statement {
        Assignment(SimpleAssignmentStatement),
        Call(FunctionCallStatement),
        Destructuring(DestructuringAssignmentStatement),
        Break(BreakStatement),
        Return(ReturnStatement),
        If(IfStatement),
        For(ForStatement),
        While(WhileStatement),
        When(WhenStatement),
    }
);

ast_node!(
    /// `x := expr;`
    SimpleAssignmentStatement,
    SIMPLE_ASSIGNMENT_STATEMENT
);

impl SimpleAssignmentStatement {
    field_method!(target, "target", ComponentReference);
    field_method!(value, "expression", Expression);
}

ast_node!(FunctionCallStatement, FUNCTION_CALL_STATEMENT);

impl FunctionCallStatement {
    first_child_method!(function_reference, ComponentReference);
    first_child_method!(arguments, FunctionArguments);
}

ast_node!(
    /// `(a, , b) := f(x);`
    DestructuringAssignmentStatement,
    DESTRUCTURING_ASSIGNMENT_STATEMENT
);

impl DestructuringAssignmentStatement {
    first_child_method!(targets, ParenthesizedExpression);
    first_child_method!(function_reference, ComponentReference);
    first_child_method!(arguments, FunctionArguments);
}

ast_node!(BreakStatement, BREAK_STATEMENT);
ast_node!(ReturnStatement, RETURN_STATEMENT);

ast_node!(IfStatement, IF_STATEMENT);

impl IfStatement {
    first_child_method!(condition, Expression);
    children_method!(then_statements, Statement);
    children_method!(else_if_clauses, ElseIfStatementClause);
    first_child_method!(else_clause, ElseStatementClause);
}

ast_node!(ElseIfStatementClause, ELSE_IF_STATEMENT_CLAUSE);

impl ElseIfStatementClause {
    first_child_method!(condition, Expression);
    children_method!(statements, Statement);
}

ast_node!(ElseStatementClause, ELSE_STATEMENT_CLAUSE);

impl ElseStatementClause {
    children_method!(statements, Statement);
}

ast_node!(ForStatement, FOR_STATEMENT);

impl ForStatement {
    children_method!(indices, ForIndex);
    children_method!(statements, Statement);
}

ast_node!(
    /// `i in 1:n`, or a bare `i` whose range is inferred.
    ForIndex,
    FOR_INDEX
);

impl ForIndex {
    first_child_method!(range, Expression);

    pub fn name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT).next().map(|t| ident_text(&t))
    }
}

ast_node!(WhileStatement, WHILE_STATEMENT);

impl WhileStatement {
    first_child_method!(condition, Expression);

    pub fn statements(&self) -> Vec<Statement> {
        field_nodes(&self.0, "statement")
    }
}

ast_node!(WhenStatement, WHEN_STATEMENT);

impl WhenStatement {
    first_child_method!(condition, Expression);
    children_method!(statements, Statement);
    children_method!(else_when_clauses, ElseWhenStatementClause);
}

ast_node!(ElseWhenStatementClause, ELSE_WHEN_STATEMENT_CLAUSE);

impl ElseWhenStatementClause {
    first_child_method!(condition, Expression);
    children_method!(statements, Statement);
}
