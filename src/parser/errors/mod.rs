//! Parser error handling module
//!
//! This module provides enhanced error handling for the Modelica parser:
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Suggestions/hints for common mistakes
//! - Related span tracking (e.g., "`if` opened here" for an unterminated `if`)
//! - `thiserror` failure types for callers that want a `Result`

mod codes;
mod context;
mod error;
mod failure;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ErrorKind, RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder, expected_message};
pub use failure::{Cancelled, ParseErrors, RuleTableError};
