//! Lossless parser for Modelica
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! Every byte of the input, whitespace and comments included, ends up in the
//! tree, so `tree.text() == input` for any input.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! Field table + AST layer → named slots and typed wrappers over SyntaxNode
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod fields;
pub mod grammar;
mod lexer;
mod options;
pub mod rule_parser;
mod syntax_kind;

pub use errors::{Cancelled, ErrorCode, ParseErrors, Severity, SyntaxError};
pub use fields::{Field, field_table};
pub use lexer::{Lexer, Token, tokenize};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use parser::{Parse, parse, parse_batch, parse_with};
pub use syntax_kind::{
    ModelicaLanguage, Supertype, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren,
    SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
