//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Node kinds follow the productions of the Modelica grammar one to one.

/// All syntax kinds (tokens and nodes) in Modelica
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation, trivia).
/// Nodes are composite (class definitions, equations, expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    BOM, // U+FEFF at offset 0

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,            // x, 'quoted name'
    UNSIGNED_INTEGER, // 42
    UNSIGNED_REAL,    // 3.14, 1e-3, .5
    STRING,           // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,    // (
    R_PAREN,    // )
    L_BRACKET,  // [
    R_BRACKET,  // ]
    L_BRACE,    // {
    R_BRACE,    // }
    SEMICOLON,  // ;
    COMMA,      // ,
    DOT,        // .
    COLON,      // :
    EQ,         // =
    COLON_EQ,   // :=
    PLUS,       // +
    MINUS,      // -
    STAR,       // *
    SLASH,      // /
    CARET,      // ^
    DOT_PLUS,   // .+
    DOT_MINUS,  // .-
    DOT_STAR,   // .*
    DOT_SLASH,  // ./
    DOT_CARET,  // .^
    LT,         // <
    LT_EQ,      // <=
    GT,         // >
    GT_EQ,      // >=
    EQ_EQ,      // ==
    LT_GT,      // <>

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ALGORITHM_KW,
    AND_KW,
    ANNOTATION_KW,
    BLOCK_KW,
    BREAK_KW,
    CLASS_KW,
    CONNECT_KW,
    CONNECTOR_KW,
    CONSTANT_KW,
    CONSTRAINEDBY_KW,
    DER_KW,
    DISCRETE_KW,
    EACH_KW,
    ELSE_KW,
    ELSEIF_KW,
    ELSEWHEN_KW,
    ENCAPSULATED_KW,
    END_KW,
    ENUMERATION_KW,
    EQUATION_KW,
    EXPANDABLE_KW,
    EXTENDS_KW,
    EXTERNAL_KW,
    FALSE_KW,
    FINAL_KW,
    FLOW_KW,
    FOR_KW,
    FUNCTION_KW,
    IF_KW,
    IMPORT_KW,
    IMPURE_KW,
    IN_KW,
    INITIAL_KW,
    INNER_KW,
    INPUT_KW,
    LOOP_KW,
    MODEL_KW,
    NOT_KW,
    OPERATOR_KW,
    OR_KW,
    OUTER_KW,
    OUTPUT_KW,
    PACKAGE_KW,
    PARAMETER_KW,
    PARTIAL_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    PURE_KW,
    RECORD_KW,
    REDECLARE_KW,
    REPLACEABLE_KW,
    RETURN_KW,
    STREAM_KW,
    THEN_KW,
    TRUE_KW,
    TYPE_KW,
    WHEN_KW,
    WHILE_KW,
    WITHIN_KW,

    // =========================================================================
    // NODES - Stored definition and classes
    // =========================================================================
    STORED_DEFINITION,
    WITHIN_CLAUSE,
    CLASS_DEFINITION_CLAUSE,
    CLASS_DEFINITION,
    CLASS_PREFIXES,
    LONG_CLASS_SPECIFIER,
    SHORT_CLASS_SPECIFIER,
    DER_CLASS_SPECIFIER,
    EXTERNAL_FUNCTION_CLAUSE,
    ENUMERATION_LITERAL,
    LANGUAGE_SPECIFICATION,
    EXTERNAL_FUNCTION_CALL,
    INITIAL_ELEMENT_LIST,
    ELEMENT_LIST,

    // =========================================================================
    // NODES - Elements
    // =========================================================================
    NAMED_ELEMENT_CLAUSE,
    SIMPLE_IMPORT_CLAUSE,
    COMPOUND_IMPORT_CLAUSE,
    UNQUALIFIED_IMPORT_CLAUSE,
    EXTENDS_CLAUSE,
    CONSTRAINING_CLAUSE,
    CLASS_OR_INHERITANCE_MODIFICATION,
    INHERITANCE_MODIFICATION,
    COMPONENT_CLAUSE,
    COMPONENT_DECLARATION,
    CONDITION_ATTRIBUTE,
    DECLARATION,

    // =========================================================================
    // NODES - Modifications
    // =========================================================================
    MODIFICATION,
    MODIFICATION_EXPRESSION,
    CLASS_MODIFICATION,
    ELEMENT_MODIFICATION,
    ELEMENT_REDECLARATION,
    ELEMENT_REPLACEABLE,
    COMPONENT_CLAUSE1,
    COMPONENT_DECLARATION1,
    SHORT_CLASS_DEFINITION,

    // =========================================================================
    // NODES - Equations and statements
    // =========================================================================
    EQUATION_SECTION,
    ALGORITHM_SECTION,
    SIMPLE_EQUATION,
    SPECIAL_EQUATION,
    IF_EQUATION,
    ELSE_IF_EQUATION_CLAUSE,
    ELSE_EQUATION_CLAUSE,
    FOR_EQUATION,
    CONNECT_EQUATION,
    CONNECT_CLAUSE,
    WHEN_EQUATION,
    ELSE_WHEN_EQUATION_CLAUSE,
    SIMPLE_ASSIGNMENT_STATEMENT,
    FUNCTION_CALL_STATEMENT,
    DESTRUCTURING_ASSIGNMENT_STATEMENT,
    BREAK_STATEMENT,
    RETURN_STATEMENT,
    IF_STATEMENT,
    ELSE_IF_STATEMENT_CLAUSE,
    ELSE_STATEMENT_CLAUSE,
    FOR_STATEMENT,
    FOR_INDEX,
    WHILE_STATEMENT,
    WHEN_STATEMENT,
    ELSE_WHEN_STATEMENT_CLAUSE,

    // =========================================================================
    // NODES - Expressions
    // =========================================================================
    IF_EXPRESSION,
    ELSE_IF_EXPRESSION_CLAUSE,
    RANGE_EXPRESSION,
    UNARY_EXPRESSION,
    BINARY_EXPRESSION,
    END_EXPRESSION,
    UNSIGNED_INTEGER_LITERAL,
    UNSIGNED_REAL_LITERAL,
    LOGICAL_LITERAL,
    STRING_LITERAL,
    TYPE_SPECIFIER,
    NAME,
    COMPONENT_REFERENCE,
    COMPONENT_REFERENCE_PART,
    FUNCTION_CALL,
    FUNCTION_ARGUMENTS,
    ARRAY_CONCATENATION,
    ARRAY_CONSTRUCTOR,
    COMPREHENSION_CLAUSE,
    NAMED_ARGUMENT,
    FUNCTION_ARGUMENT,
    FUNCTION_PARTIAL_APPLICATION,
    PARENTHESIZED_EXPRESSION,
    EXPRESSION_LIST,
    ARRAY_SUBSCRIPTS,
    SUBSCRIPT,
    DESCRIPTION_STRING,
    ANNOTATION_CLAUSE,

    // Special
    ERROR,
    EOF, // never stored in a tree; returned by lookahead past the last token

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, comment or byte-order mark)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::BOM
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ALGORITHM_KW as u16) && (self as u16) <= (Self::WITHIN_KW as u16)
    }

    /// Check if this is a punctuation or operator token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::LT_GT as u16)
    }

    /// Check if this is a literal token
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::UNSIGNED_INTEGER | Self::UNSIGNED_REAL | Self::STRING
        )
    }

    /// Check if this is a composite (node) kind
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::STORED_DEFINITION as u16) && (self as u16) <= (Self::ERROR as u16)
    }

    /// Every node kind, in declaration order.
    pub fn node_kinds() -> impl Iterator<Item = SyntaxKind> {
        (Self::STORED_DEFINITION as u16..Self::ERROR as u16).map(|raw| rowan::SyntaxKind(raw).into())
    }

    /// Look up the keyword kind for an identifier-shaped word.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "algorithm" => Self::ALGORITHM_KW,
            "and" => Self::AND_KW,
            "annotation" => Self::ANNOTATION_KW,
            "block" => Self::BLOCK_KW,
            "break" => Self::BREAK_KW,
            "class" => Self::CLASS_KW,
            "connect" => Self::CONNECT_KW,
            "connector" => Self::CONNECTOR_KW,
            "constant" => Self::CONSTANT_KW,
            "constrainedby" => Self::CONSTRAINEDBY_KW,
            "der" => Self::DER_KW,
            "discrete" => Self::DISCRETE_KW,
            "each" => Self::EACH_KW,
            "else" => Self::ELSE_KW,
            "elseif" => Self::ELSEIF_KW,
            "elsewhen" => Self::ELSEWHEN_KW,
            "encapsulated" => Self::ENCAPSULATED_KW,
            "end" => Self::END_KW,
            "enumeration" => Self::ENUMERATION_KW,
            "equation" => Self::EQUATION_KW,
            "expandable" => Self::EXPANDABLE_KW,
            "extends" => Self::EXTENDS_KW,
            "external" => Self::EXTERNAL_KW,
            "false" => Self::FALSE_KW,
            "final" => Self::FINAL_KW,
            "flow" => Self::FLOW_KW,
            "for" => Self::FOR_KW,
            "function" => Self::FUNCTION_KW,
            "if" => Self::IF_KW,
            "import" => Self::IMPORT_KW,
            "impure" => Self::IMPURE_KW,
            "in" => Self::IN_KW,
            "initial" => Self::INITIAL_KW,
            "inner" => Self::INNER_KW,
            "input" => Self::INPUT_KW,
            "loop" => Self::LOOP_KW,
            "model" => Self::MODEL_KW,
            "not" => Self::NOT_KW,
            "operator" => Self::OPERATOR_KW,
            "or" => Self::OR_KW,
            "outer" => Self::OUTER_KW,
            "output" => Self::OUTPUT_KW,
            "package" => Self::PACKAGE_KW,
            "parameter" => Self::PARAMETER_KW,
            "partial" => Self::PARTIAL_KW,
            "protected" => Self::PROTECTED_KW,
            "public" => Self::PUBLIC_KW,
            "pure" => Self::PURE_KW,
            "record" => Self::RECORD_KW,
            "redeclare" => Self::REDECLARE_KW,
            "replaceable" => Self::REPLACEABLE_KW,
            "return" => Self::RETURN_KW,
            "stream" => Self::STREAM_KW,
            "then" => Self::THEN_KW,
            "true" => Self::TRUE_KW,
            "type" => Self::TYPE_KW,
            "when" => Self::WHEN_KW,
            "while" => Self::WHILE_KW,
            "within" => Self::WITHIN_KW,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable form of a token kind, used in diagnostics (`` `;` ``, `` `end` ``).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::BOM => "byte-order mark",
            Self::IDENT => "identifier",
            Self::UNSIGNED_INTEGER => "integer literal",
            Self::UNSIGNED_REAL => "real literal",
            Self::STRING => "string literal",
            Self::L_PAREN => "`(`",
            Self::R_PAREN => "`)`",
            Self::L_BRACKET => "`[`",
            Self::R_BRACKET => "`]`",
            Self::L_BRACE => "`{`",
            Self::R_BRACE => "`}`",
            Self::SEMICOLON => "`;`",
            Self::COMMA => "`,`",
            Self::DOT => "`.`",
            Self::COLON => "`:`",
            Self::EQ => "`=`",
            Self::COLON_EQ => "`:=`",
            Self::PLUS => "`+`",
            Self::MINUS => "`-`",
            Self::STAR => "`*`",
            Self::SLASH => "`/`",
            Self::CARET => "`^`",
            Self::DOT_PLUS => "`.+`",
            Self::DOT_MINUS => "`.-`",
            Self::DOT_STAR => "`.*`",
            Self::DOT_SLASH => "`./`",
            Self::DOT_CARET => "`.^`",
            Self::LT => "`<`",
            Self::LT_EQ => "`<=`",
            Self::GT => "`>`",
            Self::GT_EQ => "`>=`",
            Self::EQ_EQ => "`==`",
            Self::LT_GT => "`<>`",
            Self::ALGORITHM_KW => "`algorithm`",
            Self::AND_KW => "`and`",
            Self::ANNOTATION_KW => "`annotation`",
            Self::BLOCK_KW => "`block`",
            Self::BREAK_KW => "`break`",
            Self::CLASS_KW => "`class`",
            Self::CONNECT_KW => "`connect`",
            Self::CONNECTOR_KW => "`connector`",
            Self::CONSTANT_KW => "`constant`",
            Self::CONSTRAINEDBY_KW => "`constrainedby`",
            Self::DER_KW => "`der`",
            Self::DISCRETE_KW => "`discrete`",
            Self::EACH_KW => "`each`",
            Self::ELSE_KW => "`else`",
            Self::ELSEIF_KW => "`elseif`",
            Self::ELSEWHEN_KW => "`elsewhen`",
            Self::ENCAPSULATED_KW => "`encapsulated`",
            Self::END_KW => "`end`",
            Self::ENUMERATION_KW => "`enumeration`",
            Self::EQUATION_KW => "`equation`",
            Self::EXPANDABLE_KW => "`expandable`",
            Self::EXTENDS_KW => "`extends`",
            Self::EXTERNAL_KW => "`external`",
            Self::FALSE_KW => "`false`",
            Self::FINAL_KW => "`final`",
            Self::FLOW_KW => "`flow`",
            Self::FOR_KW => "`for`",
            Self::FUNCTION_KW => "`function`",
            Self::IF_KW => "`if`",
            Self::IMPORT_KW => "`import`",
            Self::IMPURE_KW => "`impure`",
            Self::IN_KW => "`in`",
            Self::INITIAL_KW => "`initial`",
            Self::INNER_KW => "`inner`",
            Self::INPUT_KW => "`input`",
            Self::LOOP_KW => "`loop`",
            Self::MODEL_KW => "`model`",
            Self::NOT_KW => "`not`",
            Self::OPERATOR_KW => "`operator`",
            Self::OR_KW => "`or`",
            Self::OUTER_KW => "`outer`",
            Self::OUTPUT_KW => "`output`",
            Self::PACKAGE_KW => "`package`",
            Self::PARAMETER_KW => "`parameter`",
            Self::PARTIAL_KW => "`partial`",
            Self::PROTECTED_KW => "`protected`",
            Self::PUBLIC_KW => "`public`",
            Self::PURE_KW => "`pure`",
            Self::RECORD_KW => "`record`",
            Self::REDECLARE_KW => "`redeclare`",
            Self::REPLACEABLE_KW => "`replaceable`",
            Self::RETURN_KW => "`return`",
            Self::STREAM_KW => "`stream`",
            Self::THEN_KW => "`then`",
            Self::TRUE_KW => "`true`",
            Self::TYPE_KW => "`type`",
            Self::WHEN_KW => "`when`",
            Self::WHILE_KW => "`while`",
            Self::WITHIN_KW => "`within`",
            Self::EOF => "end of input",
            other => other.grammar_name(),
        }
    }

    /// The production name of a node kind as written in the Modelica grammar
    /// (`StoredDefinition`, `BinaryExpression`, ...). Tokens map to their
    /// SCREAMING_CASE name.
    pub fn grammar_name(self) -> &'static str {
        match self {
            Self::STORED_DEFINITION => "StoredDefinition",
            Self::WITHIN_CLAUSE => "WithinClause",
            Self::CLASS_DEFINITION_CLAUSE => "ClassDefinitionClause",
            Self::CLASS_DEFINITION => "ClassDefinition",
            Self::CLASS_PREFIXES => "ClassPrefixes",
            Self::LONG_CLASS_SPECIFIER => "LongClassSpecifier",
            Self::SHORT_CLASS_SPECIFIER => "ShortClassSpecifier",
            Self::DER_CLASS_SPECIFIER => "DerClassSpecifier",
            Self::EXTERNAL_FUNCTION_CLAUSE => "ExternalFunctionClause",
            Self::ENUMERATION_LITERAL => "EnumerationLiteral",
            Self::LANGUAGE_SPECIFICATION => "LanguageSpecification",
            Self::EXTERNAL_FUNCTION_CALL => "ExternalFunctionCall",
            Self::INITIAL_ELEMENT_LIST => "InitialElementList",
            Self::ELEMENT_LIST => "ElementList",
            Self::NAMED_ELEMENT_CLAUSE => "NamedElementClause",
            Self::SIMPLE_IMPORT_CLAUSE => "SimpleImportClause",
            Self::COMPOUND_IMPORT_CLAUSE => "CompoundImportClause",
            Self::UNQUALIFIED_IMPORT_CLAUSE => "UnqualifiedImportClause",
            Self::EXTENDS_CLAUSE => "ExtendsClause",
            Self::CONSTRAINING_CLAUSE => "ConstrainingClause",
            Self::CLASS_OR_INHERITANCE_MODIFICATION => "ClassOrInheritanceModification",
            Self::INHERITANCE_MODIFICATION => "InheritanceModification",
            Self::COMPONENT_CLAUSE => "ComponentClause",
            Self::COMPONENT_DECLARATION => "ComponentDeclaration",
            Self::CONDITION_ATTRIBUTE => "ConditionAttribute",
            Self::DECLARATION => "Declaration",
            Self::MODIFICATION => "Modification",
            Self::MODIFICATION_EXPRESSION => "ModificationExpression",
            Self::CLASS_MODIFICATION => "ClassModification",
            Self::ELEMENT_MODIFICATION => "ElementModification",
            Self::ELEMENT_REDECLARATION => "ElementRedeclaration",
            Self::ELEMENT_REPLACEABLE => "ElementReplaceable",
            Self::COMPONENT_CLAUSE1 => "ComponentClause1",
            Self::COMPONENT_DECLARATION1 => "ComponentDeclaration1",
            Self::SHORT_CLASS_DEFINITION => "ShortClassDefinition",
            Self::EQUATION_SECTION => "EquationSection",
            Self::ALGORITHM_SECTION => "AlgorithmSection",
            Self::SIMPLE_EQUATION => "SimpleEquation",
            Self::SPECIAL_EQUATION => "SpecialEquation",
            Self::IF_EQUATION => "IfEquation",
            Self::ELSE_IF_EQUATION_CLAUSE => "ElseIfEquationClause",
            Self::ELSE_EQUATION_CLAUSE => "ElseEquationClause",
            Self::FOR_EQUATION => "ForEquation",
            Self::CONNECT_EQUATION => "ConnectEquation",
            Self::CONNECT_CLAUSE => "ConnectClause",
            Self::WHEN_EQUATION => "WhenEquation",
            Self::ELSE_WHEN_EQUATION_CLAUSE => "ElseWhenEquationClause",
            Self::SIMPLE_ASSIGNMENT_STATEMENT => "SimpleAssignmentStatement",
            Self::FUNCTION_CALL_STATEMENT => "FunctionCallStatement",
            Self::DESTRUCTURING_ASSIGNMENT_STATEMENT => "DestructuringAssignmentStatement",
            Self::BREAK_STATEMENT => "BreakStatement",
            Self::RETURN_STATEMENT => "ReturnStatement",
            Self::IF_STATEMENT => "IfStatement",
            Self::ELSE_IF_STATEMENT_CLAUSE => "ElseIfStatementClause",
            Self::ELSE_STATEMENT_CLAUSE => "ElseStatementClause",
            Self::FOR_STATEMENT => "ForStatement",
            Self::FOR_INDEX => "ForIndex",
            Self::WHILE_STATEMENT => "WhileStatement",
            Self::WHEN_STATEMENT => "WhenStatement",
            Self::ELSE_WHEN_STATEMENT_CLAUSE => "ElseWhenStatementClause",
            Self::IF_EXPRESSION => "IfExpression",
            Self::ELSE_IF_EXPRESSION_CLAUSE => "ElseIfExpressionClause",
            Self::RANGE_EXPRESSION => "RangeExpression",
            Self::UNARY_EXPRESSION => "UnaryExpression",
            Self::BINARY_EXPRESSION => "BinaryExpression",
            Self::END_EXPRESSION => "EndExpression",
            Self::UNSIGNED_INTEGER_LITERAL => "UnsignedIntegerLiteral",
            Self::UNSIGNED_REAL_LITERAL => "UnsignedRealLiteral",
            Self::LOGICAL_LITERAL => "LogicalLiteral",
            Self::STRING_LITERAL => "StringLiteral",
            Self::TYPE_SPECIFIER => "TypeSpecifier",
            Self::NAME => "Name",
            Self::COMPONENT_REFERENCE => "ComponentReference",
            Self::COMPONENT_REFERENCE_PART => "ComponentReferencePart",
            Self::FUNCTION_CALL => "FunctionCall",
            Self::FUNCTION_ARGUMENTS => "FunctionArguments",
            Self::ARRAY_CONCATENATION => "ArrayConcatenation",
            Self::ARRAY_CONSTRUCTOR => "ArrayConstructor",
            Self::COMPREHENSION_CLAUSE => "ComprehensionClause",
            Self::NAMED_ARGUMENT => "NamedArgument",
            Self::FUNCTION_ARGUMENT => "FunctionArgument",
            Self::FUNCTION_PARTIAL_APPLICATION => "FunctionPartialApplication",
            Self::PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
            Self::EXPRESSION_LIST => "ExpressionList",
            Self::ARRAY_SUBSCRIPTS => "ArraySubscripts",
            Self::SUBSCRIPT => "Subscript",
            Self::DESCRIPTION_STRING => "DescriptionString",
            Self::ANNOTATION_CLAUSE => "AnnotationClause",
            Self::ERROR => "ERROR",
            Self::EOF => "EOF",
            _ => self.token_name(),
        }
    }

    fn token_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "WHITESPACE",
            Self::LINE_COMMENT => "LINE_COMMENT",
            Self::BLOCK_COMMENT => "BLOCK_COMMENT",
            Self::BOM => "BOM",
            Self::IDENT => "IDENT",
            Self::UNSIGNED_INTEGER => "UNSIGNED_INTEGER",
            Self::UNSIGNED_REAL => "UNSIGNED_REAL",
            Self::STRING => "STRING",
            _ if self.is_punct() => "PUNCT",
            _ if self.is_keyword() => "KEYWORD",
            _ => "UNKNOWN",
        }
    }

    /// The supertypes a concrete kind belongs to, innermost first.
    pub fn supertypes(self) -> &'static [Supertype] {
        use Supertype as S;
        match self {
            Self::UNSIGNED_INTEGER_LITERAL | Self::UNSIGNED_REAL_LITERAL => &[
                S::UnsignedNumberLiteral,
                S::Literal,
                S::PrimaryExpression,
                S::SimpleExpression,
                S::Expression,
            ],
            Self::STRING_LITERAL | Self::LOGICAL_LITERAL => &[
                S::Literal,
                S::PrimaryExpression,
                S::SimpleExpression,
                S::Expression,
            ],
            Self::FUNCTION_CALL
            | Self::COMPONENT_REFERENCE
            | Self::PARENTHESIZED_EXPRESSION
            | Self::ARRAY_CONCATENATION
            | Self::ARRAY_CONSTRUCTOR
            | Self::END_EXPRESSION => &[S::PrimaryExpression, S::SimpleExpression, S::Expression],
            Self::UNARY_EXPRESSION | Self::BINARY_EXPRESSION => {
                &[S::SimpleExpression, S::Expression]
            }
            Self::IF_EXPRESSION | Self::RANGE_EXPRESSION => &[S::Expression],
            Self::SIMPLE_EQUATION
            | Self::SPECIAL_EQUATION
            | Self::IF_EQUATION
            | Self::FOR_EQUATION
            | Self::CONNECT_EQUATION
            | Self::WHEN_EQUATION => &[S::Equation],
            Self::SIMPLE_ASSIGNMENT_STATEMENT
            | Self::FUNCTION_CALL_STATEMENT
            | Self::DESTRUCTURING_ASSIGNMENT_STATEMENT
            | Self::BREAK_STATEMENT
            | Self::RETURN_STATEMENT
            | Self::IF_STATEMENT
            | Self::FOR_STATEMENT
            | Self::WHILE_STATEMENT
            | Self::WHEN_STATEMENT => &[S::Statement],
            Self::SIMPLE_IMPORT_CLAUSE
            | Self::COMPOUND_IMPORT_CLAUSE
            | Self::UNQUALIFIED_IMPORT_CLAUSE => &[S::ImportClause, S::Element],
            Self::EXTENDS_CLAUSE | Self::NAMED_ELEMENT_CLAUSE => &[S::Element],
            Self::LONG_CLASS_SPECIFIER | Self::SHORT_CLASS_SPECIFIER | Self::DER_CLASS_SPECIFIER => {
                &[S::ClassSpecifier]
            }
            Self::ELEMENT_MODIFICATION | Self::ELEMENT_REPLACEABLE | Self::ELEMENT_REDECLARATION => {
                &[S::Argument]
            }
            _ => &[],
        }
    }

    /// Check whether this concrete kind is one of the alternatives of `supertype`.
    pub fn is_a(self, supertype: Supertype) -> bool {
        self.supertypes().contains(&supertype)
    }
}

/// Abstract kinds: each names a closed set of concrete node kinds.
///
/// Supertypes never appear in the tree themselves; a slot typed as a
/// supertype holds the concrete node that was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Supertype {
    Argument,
    ClassSpecifier,
    Element,
    Equation,
    Expression,
    ImportClause,
    Literal,
    PrimaryExpression,
    SimpleExpression,
    Statement,
    UnsignedNumberLiteral,
}

impl Supertype {
    pub const ALL: [Supertype; 11] = [
        Self::Argument,
        Self::ClassSpecifier,
        Self::Element,
        Self::Equation,
        Self::Expression,
        Self::ImportClause,
        Self::Literal,
        Self::PrimaryExpression,
        Self::SimpleExpression,
        Self::Statement,
        Self::UnsignedNumberLiteral,
    ];

    /// Grammar name with the conventional leading underscore (`_Expression`).
    pub fn grammar_name(self) -> &'static str {
        match self {
            Self::Argument => "_Argument",
            Self::ClassSpecifier => "_ClassSpecifier",
            Self::Element => "_Element",
            Self::Equation => "_Equation",
            Self::Expression => "_Expression",
            Self::ImportClause => "_ImportClause",
            Self::Literal => "_Literal",
            Self::PrimaryExpression => "_PrimaryExpression",
            Self::SimpleExpression => "_SimpleExpression",
            Self::Statement => "_Statement",
            Self::UnsignedNumberLiteral => "_UnsignedNumberLiteral",
        }
    }

    /// Every concrete kind this supertype accepts.
    pub fn members(self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::node_kinds().filter(move |kind| kind.is_a(self))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelicaLanguage {}

impl rowan::Language for ModelicaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ModelicaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ModelicaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ModelicaLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ModelicaLanguage>;
