//! The finished parse: a read-only tree plus its diagnostics.

use std::fmt::Write as _;

use rowan::{GreenNode, WalkEvent};

use crate::base::{LineCol, LineIndex, TextRange, TextSize};
use crate::parser::{Supertype, SyntaxError, SyntaxKind, SyntaxNode, SyntaxToken};

use super::NodeExt;

/// A parsed source unit.
///
/// Holds the green tree, so it is `Send + Sync` and cheap to clone; red
/// nodes are created on demand by [`Tree::root`]. `text()` always equals the
/// input the tree was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    green: GreenNode,
    text: String,
    line_index: LineIndex,
    errors: Vec<SyntaxError>,
}

impl Tree {
    pub fn new(green: GreenNode, errors: Vec<SyntaxError>) -> Self {
        let text = SyntaxNode::new_root(green.clone()).text().to_string();
        let line_index = LineIndex::new(&text);
        Self {
            green,
            text,
            line_index,
            errors,
        }
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// The full source text, trivia included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The source text of `range`, or `None` if it is out of bounds or splits
    /// a UTF-8 sequence.
    pub fn text_at(&self, range: TextRange) -> Option<&str> {
        self.text.get(usize::from(range.start())..usize::from(range.end()))
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.line_index.line_col(offset)
    }

    /// Every diagnostic, sorted by position.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|err| err.severity.is_error())
    }

    /// The smallest node whose range contains `range`.
    pub fn node_at_range(&self, range: TextRange) -> Option<SyntaxNode> {
        let root = self.root();
        if !root.text_range().contains_range(range) {
            return None;
        }
        match root.covering_element(range) {
            rowan::NodeOrToken::Node(node) => Some(node),
            rowan::NodeOrToken::Token(token) => token.parent(),
        }
    }

    /// The innermost node holding the token at `offset`. At a boundary
    /// between two tokens the one starting at `offset` wins.
    pub fn node_at_offset(&self, offset: TextSize) -> Option<SyntaxNode> {
        self.token_at_offset(offset)?.parent()
    }

    pub fn token_at_offset(&self, offset: TextSize) -> Option<SyntaxToken> {
        let root = self.root();
        if offset > root.text_range().end() {
            return None;
        }
        root.token_at_offset(offset).right_biased()
    }

    /// Every node of `kind`, in document order.
    pub fn nodes_of_kind(&self, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.nodes().filter(move |node| node.kind() == kind)
    }

    /// Every node whose kind is an alternative of `supertype`.
    pub fn nodes_of_supertype(&self, supertype: Supertype) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.nodes().filter(move |node| node.kind().is_a(supertype))
    }

    /// Every node, root first, in document order.
    pub fn nodes(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.root().preorder().filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }

    /// Every leaf, trivia included. Concatenated they reproduce `text()`.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<> {
        self.root().preorder_with_tokens().filter_map(|event| match event {
            WalkEvent::Enter(rowan::NodeOrToken::Token(token)) => Some(token),
            _ => None,
        })
    }

    /// An indented outline of the tree, one line per node and per
    /// significant token, each prefixed by its field name when it fills one.
    ///
    /// ```text
    /// StoredDefinition 0..15
    ///   classDefinitionClause: ClassDefinitionClause 0..15
    /// ```
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        dump_node(&self.root(), None, 0, &mut out);
        out
    }
}

fn dump_node(node: &SyntaxNode, field: Option<&str>, depth: usize, out: &mut String) {
    let range = node.text_range();
    let _ = writeln!(
        out,
        "{:indent$}{}{} {}..{}",
        "",
        field.map(|f| format!("{f}: ")).unwrap_or_default(),
        node.kind().grammar_name(),
        u32::from(range.start()),
        u32::from(range.end()),
        indent = depth * 2
    );
    for child in node.children_with_tokens() {
        let child_field = node.field_name_of(&child);
        match child {
            rowan::NodeOrToken::Node(child) => dump_node(&child, child_field, depth + 1, out),
            rowan::NodeOrToken::Token(token) if !token.kind().is_trivia() => {
                let _ = writeln!(
                    out,
                    "{:indent$}{}{} {:?}",
                    "",
                    child_field.map(|f| format!("{f}: ")).unwrap_or_default(),
                    token.kind().grammar_name(),
                    token.text(),
                    indent = (depth + 1) * 2
                );
            }
            rowan::NodeOrToken::Token(_) => {}
        }
    }
}
