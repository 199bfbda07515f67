//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Modelica syntax nodes.
//! Each struct wraps a SyntaxNode of one concrete kind; each enum covers one
//! supertype and holds the concrete alternative that was parsed.
//!
//! Accessors never fail on malformed trees: a missing part is `None` or an
//! empty iterator.

use smol_str::SmolStr;

use super::fields::{self, Field};
use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Source text of the node, trivia inside it included.
    fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

// ============================================================================
// Helper utilities
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Direct child tokens of one kind.
#[inline]
fn tokens_of(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| t.kind() == kind)
}

/// Identifier text. Quoted identifiers keep their quotes: `'a b'` and `a`
/// are different names.
#[inline]
fn ident_text(token: &SyntaxToken) -> SmolStr {
    SmolStr::new(token.text())
}

/// A single-valued field as a token.
fn field_token(node: &SyntaxNode, name: &str) -> Option<SyntaxToken> {
    fields::field(node, name)
        .first()
        .and_then(|element| element.as_token().cloned())
}

/// A single-valued field cast to its typed wrapper.
fn field_node<N: AstNode>(node: &SyntaxNode, name: &str) -> Option<N> {
    fields::field(node, name).node().and_then(N::cast)
}

/// Every node of a repeated field, cast to its typed wrapper.
fn field_nodes<N: AstNode>(node: &SyntaxNode, name: &str) -> Vec<N> {
    match fields::field(node, name) {
        Field::Absent => Vec::new(),
        field => field
            .to_vec()
            .into_iter()
            .filter_map(|element| element.into_node())
            .filter_map(N::cast)
            .collect(),
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// One enum per supertype. Alternatives may themselves be supertype enums.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty),)*
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $(<$ty as AstNode>::can_cast(kind))||*
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                let kind = node.kind();
                $(
                    if <$ty as AstNode>::can_cast(kind) {
                        return <$ty as AstNode>::cast(node).map(Self::$variant);
                    }
                )*
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(it) => it.syntax(),)*
                }
            }
        }
    };
}

/// Boolean accessor for a flag keyword that is a direct child.
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Accessor for the first child of one AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ty) => {
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map(<$type as AstNode>::cast)
        }
    };
}

/// Accessor for every child of one AST type.
macro_rules! children_method {
    ($name:ident, $type:ty) => {
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map(<$type as AstNode>::cast)
        }
    };
}

/// Accessor for a named slot of the field table.
macro_rules! field_method {
    ($name:ident, $field:literal, $type:ty) => {
        #[doc = concat!("The `", $field, "` field.")]
        pub fn $name(&self) -> Option<$type> {
            field_node(&self.0, $field)
        }
    };
}

// Wrappers are declared after the macros so the macros are in scope.

mod classes;
mod elements;
mod equations;
mod expressions;


pub use classes::*;
pub use elements::*;
pub use equations::*;
pub use expressions::*;
