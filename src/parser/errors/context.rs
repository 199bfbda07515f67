//! Parse context tracking for context-aware error messages
//!
//! The parser maintains a stack of contexts to generate more helpful
//! error messages that indicate where in the source structure the error occurred.

use crate::parser::SyntaxKind;

/// Represents the current parsing context
///
/// Used to generate context-aware error messages and determine
/// appropriate recovery strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a file
    #[default]
    TopLevel,
    /// Parsing class prefixes and the class specifier head
    ClassDefinition,
    /// Inside the element lists of a class
    ClassBody,
    /// Inside an `equation` section
    EquationSection,
    /// Inside an `algorithm` section
    AlgorithmSection,
    /// Inside an `external` clause
    ExternalClause,
    /// Parsing an import clause
    Import,
    /// Inside a `( ... )` modification
    Modification,
    /// Parsing an expression
    Expression,
    /// Parsing function call arguments
    ArgumentList,
    /// Parsing `[ ... ]` array subscripts
    ArraySubscripts,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::ClassDefinition => "in class definition",
            Self::ClassBody => "in class body",
            Self::EquationSection => "in equation section",
            Self::AlgorithmSection => "in algorithm section",
            Self::ExternalClause => "in external clause",
            Self::Import => "in import clause",
            Self::Modification => "in modification",
            Self::Expression => "in expression",
            Self::ArgumentList => "in argument list",
            Self::ArraySubscripts => "in array subscripts",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a class definition or `within` clause",
            Self::ClassDefinition => "class prefixes followed by a class name",
            Self::ClassBody => "a component, class, import or extends clause",
            Self::EquationSection => "an equation (`=`, if, for, when, connect)",
            Self::AlgorithmSection => "a statement (`:=`, call, if, for, while, when)",
            Self::ExternalClause => "a language string or external function call",
            Self::Import => "a package name",
            Self::Modification => "a modification argument",
            Self::Expression => "an expression (literal, reference, call or operator)",
            Self::ArgumentList => "an argument",
            Self::ArraySubscripts => "a subscript expression or `:`",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::TopLevel => &[
                SyntaxKind::WITHIN_KW,
                SyntaxKind::FINAL_KW,
                SyntaxKind::ENCAPSULATED_KW,
                SyntaxKind::PARTIAL_KW,
                SyntaxKind::CLASS_KW,
                SyntaxKind::MODEL_KW,
                SyntaxKind::RECORD_KW,
                SyntaxKind::BLOCK_KW,
                SyntaxKind::CONNECTOR_KW,
                SyntaxKind::EXPANDABLE_KW,
                SyntaxKind::TYPE_KW,
                SyntaxKind::PACKAGE_KW,
                SyntaxKind::FUNCTION_KW,
                SyntaxKind::OPERATOR_KW,
                SyntaxKind::PURE_KW,
                SyntaxKind::IMPURE_KW,
            ],
            Self::ClassDefinition | Self::ClassBody => &[
                SyntaxKind::SEMICOLON,
                SyntaxKind::PUBLIC_KW,
                SyntaxKind::PROTECTED_KW,
                SyntaxKind::EQUATION_KW,
                SyntaxKind::ALGORITHM_KW,
                SyntaxKind::INITIAL_KW,
                SyntaxKind::EXTERNAL_KW,
                SyntaxKind::ANNOTATION_KW,
                SyntaxKind::END_KW,
            ],
            Self::EquationSection | Self::AlgorithmSection => &[
                SyntaxKind::SEMICOLON,
                SyntaxKind::END_KW,
                SyntaxKind::EQUATION_KW,
                SyntaxKind::ALGORITHM_KW,
                SyntaxKind::PUBLIC_KW,
                SyntaxKind::PROTECTED_KW,
            ],
            Self::ExternalClause | Self::Import => &[SyntaxKind::SEMICOLON, SyntaxKind::END_KW],
            Self::Modification | Self::ArgumentList => &[
                SyntaxKind::COMMA,
                SyntaxKind::R_PAREN,
                SyntaxKind::SEMICOLON,
            ],
            Self::Expression => &[
                SyntaxKind::SEMICOLON,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACE,
                SyntaxKind::R_BRACKET,
                SyntaxKind::COMMA,
            ],
            Self::ArraySubscripts => &[
                SyntaxKind::R_BRACKET,
                SyntaxKind::COMMA,
                SyntaxKind::SEMICOLON,
            ],
        }
    }

    /// Check if this context is inside an equation or algorithm section
    pub fn is_in_section(&self) -> bool {
        matches!(self, Self::EquationSection | Self::AlgorithmSection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_description() {
        assert_eq!(ParseContext::TopLevel.description(), "at top level");
        assert_eq!(
            ParseContext::EquationSection.description(),
            "in equation section"
        );
    }

    #[test]
    fn test_context_expected_description() {
        assert!(ParseContext::AlgorithmSection
            .expected_description()
            .contains(":="));
        assert!(ParseContext::ClassBody
            .expected_description()
            .contains("component"));
    }

    #[test]
    fn test_recovery_tokens() {
        assert!(ParseContext::TopLevel
            .recovery_tokens()
            .contains(&SyntaxKind::MODEL_KW));
        assert!(ParseContext::EquationSection
            .recovery_tokens()
            .contains(&SyntaxKind::END_KW));
    }

    #[test]
    fn test_is_in_section() {
        assert!(ParseContext::EquationSection.is_in_section());
        assert!(!ParseContext::ClassBody.is_in_section());
    }

    #[test]
    fn test_default_context() {
        assert_eq!(ParseContext::default(), ParseContext::TopLevel);
    }
}
