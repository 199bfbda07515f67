//! Diagnostics produced by the lexer and the parser.
//!
//! Every diagnostic carries the `(position, expected, found)` triple editors
//! need, plus a code, a severity and optional pointers back to the construct
//! that caused it ("`if` opened here").

use std::fmt;

use rowan::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::parser::SyntaxKind;

/// Whether a diagnostic fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    /// Reported, but the tree is still considered clean (`end B` closing class `A`).
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three failure classes a parse can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token: unterminated string, comment or quoted identifier
    Lexical,
    /// Expected-token mismatch, recovered with an error placeholder
    Syntax,
    /// The clause attachment rules found no unique owner
    Ambiguity,
}

impl From<ErrorCode> for ErrorKind {
    fn from(code: ErrorCode) -> Self {
        if code.is_lexical() {
            Self::Lexical
        } else if code.is_ambiguity() {
            Self::Ambiguity
        } else {
            Self::Syntax
        }
    }
}

/// A second location that explains a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// One diagnostic.
///
/// `found` is `None` when the parser ran out of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// How to fix it, when there is an obvious fix
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
    /// Token kinds that would have been accepted at `range`
    pub expected: Vec<SyntaxKind>,
    pub found: Option<SyntaxKind>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self::builder(code).message(message).range(range).build()
    }

    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.into()
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }
}

/// `E0206 error: expected `end`, found end of input in class body`
impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.code, self.severity, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Incremental construction of a [`SyntaxError`].
///
/// Unset fields fall back to the code's default message, an empty range at
/// offset 0 and error severity.
#[derive(Debug, Clone)]
pub struct SyntaxErrorBuilder {
    error: SyntaxError,
}

impl SyntaxErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            error: SyntaxError {
                message: code.default_message().to_string(),
                range: TextRange::empty(TextSize::new(0)),
                code,
                severity: Severity::Error,
                hint: None,
                related: Vec::new(),
                expected: Vec::new(),
                found: None,
            },
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.error.message = message.into();
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.error.range = range;
        self
    }

    /// A zero-width range at `offset`.
    pub fn at_offset(self, offset: TextSize) -> Self {
        self.range(TextRange::empty(offset))
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.error.severity = severity;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.error.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.error.related.push(RelatedInfo::new(message, range));
        self
    }

    pub fn expected(mut self, kinds: &[SyntaxKind]) -> Self {
        self.error.expected = kinds.to_vec();
        self
    }

    pub fn found(mut self, kind: Option<SyntaxKind>) -> Self {
        self.error.found = kind;
        self
    }

    pub fn build(self) -> SyntaxError {
        self.error
    }
}

/// Render an expected-token message: "expected `;` or `,`, found `end` in equation section".
pub fn expected_message(
    expected: &[SyntaxKind],
    found: Option<SyntaxKind>,
    context: ParseContext,
) -> String {
    let wanted = match expected {
        [] => "more input".to_string(),
        [only] => only.display_name().to_string(),
        [init @ .., last] => {
            let head: Vec<_> = init.iter().map(|k| k.display_name()).collect();
            format!("{} or {}", head.join(", "), last.display_name())
        }
    };
    let found = found.unwrap_or(SyntaxKind::EOF).display_name();
    format!("expected {wanted}, found {found} {}", context.description())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error_defaults() {
        let range = TextRange::new(TextSize::new(10), TextSize::new(11));
        let err = SyntaxError::new("expected `;`", range, ErrorCode::E0201);

        assert_eq!(err.message, "expected `;`");
        assert_eq!(err.range, range);
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.hint.is_none());
        assert!(!err.has_related());
        assert!(err.expected.is_empty());
        assert_eq!(err.found, None);
    }

    #[test]
    fn test_error_kind_from_code() {
        assert_eq!(ErrorKind::from(ErrorCode::E0102), ErrorKind::Lexical);
        assert_eq!(ErrorKind::from(ErrorCode::E0950), ErrorKind::Ambiguity);
        assert_eq!(ErrorKind::from(ErrorCode::E0407), ErrorKind::Syntax);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let opened = TextRange::new(TextSize::new(10), TextSize::new(12));
        let err = SyntaxError::builder(ErrorCode::E0206)
            .message("expected `end if`")
            .at_offset(TextSize::new(42))
            .expected(&[SyntaxKind::END_KW])
            .found(None)
            .related("`if` opened here", opened)
            .hint("close the block with `end if;`")
            .build();

        assert_eq!(err.range, TextRange::empty(TextSize::new(42)));
        assert_eq!(err.expected, vec![SyntaxKind::END_KW]);
        assert_eq!(err.found, None);
        assert_eq!(err.related, vec![RelatedInfo::new("`if` opened here", opened)]);
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_builder_defaults() {
        let err = SyntaxError::builder(ErrorCode::E0201).build();
        assert_eq!(err.message, "missing semicolon");
        assert_eq!(err.range, TextRange::empty(TextSize::new(0)));
        assert_eq!(err.severity, Severity::Error);
    }

    #[test]
    fn test_severity() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_expected_message() {
        let message = expected_message(
            &[SyntaxKind::SEMICOLON, SyntaxKind::COMMA],
            Some(SyntaxKind::END_KW),
            ParseContext::EquationSection,
        );
        assert_eq!(message, "expected `;` or `,`, found `end` in equation section");

        let at_eof = expected_message(&[SyntaxKind::END_KW], None, ParseContext::ClassBody);
        assert_eq!(at_eof, "expected `end`, found end of input in class body");
    }

    #[test]
    fn test_display() {
        let err = SyntaxError::builder(ErrorCode::E0602)
            .message("`=` is not an assignment in algorithm sections")
            .hint("use `:=` to assign")
            .build();
        assert_eq!(
            err.to_string(),
            "E0602 error: `=` is not an assignment in algorithm sections (hint: use `:=` to assign)"
        );
    }
}
