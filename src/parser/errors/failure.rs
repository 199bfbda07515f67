//! Crate-level failure types.

use thiserror::Error;

use super::error::{Severity, SyntaxError};
use crate::base::LineCol;

/// A failed parse: every error-severity diagnostic, sorted by position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.entries))]
pub struct ParseErrors {
    entries: Vec<(LineCol, SyntaxError)>,
}

fn render(entries: &[(LineCol, SyntaxError)]) -> String {
    entries
        .iter()
        .map(|(pos, err)| format!("{pos}: {} {}", err.code, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ParseErrors {
    /// Collect the error-severity diagnostics; `None` when there are none.
    pub(crate) fn from_errors(
        errors: impl IntoIterator<Item = (LineCol, SyntaxError)>,
    ) -> Option<Self> {
        let entries: Vec<_> = errors
            .into_iter()
            .filter(|(_, err)| err.severity == Severity::Error)
            .collect();
        (!entries.is_empty()).then_some(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &SyntaxError> {
        self.entries.iter().map(|(_, err)| err)
    }

    /// Each error with its 0-indexed line/column start position.
    pub fn positioned(&self) -> &[(LineCol, SyntaxError)] {
        &self.entries
    }
}

/// The parse was aborted through its cancellation token; no tree is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("parse cancelled")]
pub struct Cancelled;

/// A malformed field table. Raised once, when the table is first built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    /// The same kind has two schema entries.
    #[error("duplicate schema for {kind}")]
    DuplicateKind { kind: &'static str },

    /// A kind declares the same slot name twice.
    #[error("duplicate field `{slot}` on {kind}")]
    DuplicateSlot { kind: &'static str, slot: &'static str },

    /// A schema entry is keyed by a token kind.
    #[error("{kind} is not a node kind")]
    NotANode { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::ErrorCode;
    use rowan::{TextRange, TextSize};

    fn error_at(offset: u32, code: ErrorCode) -> SyntaxError {
        SyntaxError::new(
            code.default_message(),
            TextRange::empty(TextSize::new(offset)),
            code,
        )
    }

    #[test]
    fn test_display_lists_every_error() {
        let errors = ParseErrors::from_errors([
            (LineCol::new(0, 4), error_at(4, ErrorCode::E0201)),
            (LineCol::new(2, 0), error_at(30, ErrorCode::E0206)),
        ]);
        let errors = errors.expect("two errors");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "1:5: E0201 missing semicolon\n3:1: E0206 missing 'end'"
        );
    }

    #[test]
    fn test_warnings_are_not_failures() {
        let warning = error_at(0, ErrorCode::E0303).with_severity(Severity::Warning);
        assert!(ParseErrors::from_errors([(LineCol::default(), warning)]).is_none());
    }

    #[test]
    fn test_rule_table_error_display() {
        let err = RuleTableError::DuplicateSlot {
            kind: "Declaration",
            slot: "identifier",
        };
        assert_eq!(err.to_string(), "duplicate field `identifier` on Declaration");
    }
}
