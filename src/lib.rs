//! # modelica-syntax
//!
//! Lossless concrete-syntax-tree parser for the Modelica modeling language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! query     → Tree, NodeExt: field access, spatial and kind lookup
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, field table, typed AST
//!   ↓
//! base      → Primitives (LineCol, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use modelica_syntax::{NodeExt, SyntaxKind, parse};
//!
//! let tree = parse("model M Real x; equation der(x) = -x; end M;").into_tree();
//! assert!(tree.errors().is_empty());
//!
//! let equation = tree.nodes_of_kind(SyntaxKind::SIMPLE_EQUATION).next().unwrap();
//! let rhs = equation.child_by_field("expression2").unwrap();
//! assert_eq!(rhs.kind(), SyntaxKind::UNARY_EXPRESSION);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → query)
// ============================================================================

/// Foundation types: LineCol, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, field table, typed AST
pub mod parser;

/// Queries over a finished tree
pub mod query;

// Re-export the parse entry points and the types they return
pub use parser::errors;
pub use parser::{
    Cancelled, ErrorCode, Field, Parse, ParseErrors, ParseOptions, Severity, Supertype,
    SyntaxElement, SyntaxError, SyntaxKind, SyntaxNode, SyntaxToken, parse, parse_batch,
    parse_with,
};
pub use query::{NodeExt, Tree};

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
