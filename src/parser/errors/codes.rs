//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters, semicolons, `end`)
//! - E03xx: Declaration errors (classes, components)
//! - E04xx: Expression errors
//! - E05xx: Import errors
//! - E06xx: Equation and statement errors
//! - E09xx: Generic/fallback errors, ambiguity and internal errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Byte-order mark after the start of the file
    E0104,
    /// Unterminated quoted identifier
    E0105,

    // =========================================================================
    // E02xx: Structural errors (delimiters, semicolons, `end`)
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Missing `end`
    E0206,
    /// `end` closes a different construct (`end for` for an `if`)
    E0207,

    // =========================================================================
    // E03xx: Declaration errors (classes, components)
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Missing class kind after prefixes
    E0302,
    /// `end` name differs from the class name
    E0303,
    /// Unexpected token in class body
    E0304,
    /// Missing type specifier
    E0305,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Unary operator where only a primary expression is allowed
    E0403,
    /// Positional argument after a named argument
    E0405,
    /// Missing expression where expected
    E0406,
    /// Chained relational operators
    E0407,
    /// Expression nesting exceeds the configured limit
    E0408,

    // =========================================================================
    // E05xx: Import errors
    // =========================================================================
    /// Invalid import path
    E0501,

    // =========================================================================
    // E06xx: Equation and statement errors
    // =========================================================================
    /// Equation is missing its `=`
    E0601,
    /// Statement is neither an assignment nor a call
    E0602,
    /// `else`/`elseif`/`elsewhen` with no construct to attach to
    E0603,
    /// `:=` used in an equation section
    E0604,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Ambiguity policies produced no unique match
    E0950,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            // Structural
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            // Declaration
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            // Expression
            Self::E0403 => "E0403",
            Self::E0405 => "E0405",
            Self::E0406 => "E0406",
            Self::E0407 => "E0407",
            Self::E0408 => "E0408",
            // Import
            Self::E0501 => "E0501",
            // Equation/statement
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            // Generic
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0950 => "E0950",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0206 | Self::E0207 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 => {
                "declaration error"
            }
            Self::E0403 | Self::E0405 | Self::E0406 | Self::E0407 | Self::E0408 => {
                "expression error"
            }
            Self::E0501 => "import error",
            Self::E0601 | Self::E0602 | Self::E0603 | Self::E0604 => "equation error",
            Self::E0950 => "ambiguity error",
            Self::E0901 | Self::E0902 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "byte-order mark is only allowed at the start of the file",
            Self::E0105 => "unterminated quoted identifier",
            // Structural
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0206 => "missing 'end'",
            Self::E0207 => "mismatched 'end'",
            // Declaration
            Self::E0301 => "missing identifier",
            Self::E0302 => "missing class kind",
            Self::E0303 => "end name does not match class name",
            Self::E0304 => "unexpected token in class body",
            Self::E0305 => "missing type specifier",
            // Expression
            Self::E0403 => "unary operator not allowed here",
            Self::E0405 => "positional argument after named argument",
            Self::E0406 => "expected expression",
            Self::E0407 => "relational operators are non-associative",
            Self::E0408 => "expression nested too deeply",
            // Import
            Self::E0501 => "invalid import path",
            // Equation/statement
            Self::E0601 => "expected '=' in equation",
            Self::E0602 => "expected assignment or function call",
            Self::E0603 => "clause has no enclosing construct",
            Self::E0604 => "':=' is not allowed in equations",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0950 => "ambiguous clause attachment",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a lexical error (malformed token)
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105
        )
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0206 | Self::E0207
        )
    }

    /// Check if this error comes from the ambiguity policies
    pub fn is_ambiguity(&self) -> bool {
        matches!(self, Self::E0950)
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0999)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
