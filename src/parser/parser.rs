//! Recursive descent parser for Modelica
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! All parsing logic lives in the grammar modules; this file owns the parser
//! state: the token cursor, trivia attachment, error accumulation, the
//! context and open-construct stacks, the nesting bound and cancellation.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::errors::{Cancelled, ParseContext, ParseErrors, SyntaxError};
use super::fields;
use super::grammar::{self, ExpressionParser, ModelicaParser, OpenConstruct};
use super::lexer::{Token, tokenize};
use super::options::ParseOptions;
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use crate::query::Tree;

/// Parse result containing the green tree and any errors
///
/// A tree is always produced, even for malformed input; `errors` is sorted
/// by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without error-severity diagnostics
    pub fn ok(&self) -> bool {
        self.errors.iter().all(|err| !err.severity.is_error())
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Wrap the result in a queryable [`Tree`], keeping every diagnostic.
    pub fn into_tree(self) -> Tree {
        Tree::new(self.green, self.errors)
    }

    /// The tree when there are no error-severity diagnostics, otherwise every error.
    pub fn into_result(self) -> Result<Tree, ParseErrors> {
        let tree = self.into_tree();
        let positioned = tree
            .errors()
            .iter()
            .map(|err| (tree.line_col(err.range.start()), err.clone()));
        match ParseErrors::from_errors(positioned) {
            Some(errors) => Err(errors),
            None => Ok(tree),
        }
    }
}

/// Parse Modelica source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens, &ParseOptions::default());
    grammar::parse_stored_definition(&mut parser);
    parser.finish()
}

/// Parse with explicit options. A cancelled parse returns no tree.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Parse, Cancelled> {
    parse_entry(input, options, |p: &mut Parser<'_>| {
        grammar::parse_stored_definition(p)
    })
}

/// Parse independent inputs in parallel. Results keep the input order.
pub fn parse_batch(inputs: &[&str]) -> Vec<Parse> {
    use rayon::prelude::*;

    inputs.par_iter().map(|input| parse(input)).collect()
}

/// Run `entry` over the tokens of `input` and collect the result.
pub(crate) fn parse_entry<F>(input: &str, options: &ParseOptions, entry: F) -> Result<Parse, Cancelled>
where
    F: FnOnce(&mut Parser<'_>),
{
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens, options);
    entry(&mut parser);
    if parser.cancelled {
        debug!(offset = ?parser.current_range().start(), "parse cancelled, discarding partial tree");
        return Err(Cancelled);
    }
    Ok(parser.finish())
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    /// Indices into `tokens` of everything the grammar sees: not trivia, not lexical errors.
    significant: Vec<usize>,
    /// Position in `significant`.
    cursor: usize,
    /// Every token before this index is already in the tree.
    emitted: usize,
    builder: GreenNodeBuilder<'static>,
    open_nodes: usize,
    errors: Vec<SyntaxError>,
    lexical_errors: Vec<SyntaxError>,
    contexts: Vec<ParseContext>,
    constructs: Vec<OpenConstruct>,
    nesting: usize,
    max_depth: usize,
    cancellation: Option<CancellationToken>,
    cancelled: bool,
    end: TextSize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token<'a>], options: &ParseOptions) -> Self {
        // A malformed field table must stop the first parse, not a later lookup.
        fields::field_table();
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia() && t.kind != SyntaxKind::ERROR)
            .map(|(idx, _)| idx)
            .collect();
        let lexical_errors = tokens
            .iter()
            .filter_map(|t| {
                t.lex_error()
                    .map(|code| SyntaxError::new(code.default_message(), t.range, code))
            })
            .collect();
        Self {
            tokens,
            significant,
            cursor: 0,
            emitted: 0,
            builder: GreenNodeBuilder::new(),
            open_nodes: 0,
            errors: Vec::new(),
            lexical_errors,
            contexts: Vec::new(),
            constructs: Vec::new(),
            nesting: 0,
            max_depth: options.max_depth,
            cancellation: options.cancellation.clone(),
            cancelled: false,
            end: tokens.last().map_or(TextSize::new(0), |t| t.range.end()),
        }
    }

    pub(crate) fn finish(self) -> Parse {
        let mut errors = self.lexical_errors;
        errors.extend(self.errors);
        errors.sort_by_key(|err| err.range.start());
        Parse {
            green: self.builder.finish(),
            errors,
        }
    }

    // === Token inspection ===

    fn current(&self) -> Option<&Token<'a>> {
        if self.cancelled {
            return None;
        }
        self.significant
            .get(self.cursor)
            .map(|&idx| &self.tokens[idx])
    }

    /// Index of the next significant token, or the token count at the end.
    fn next_significant(&self) -> usize {
        self.significant
            .get(self.cursor)
            .copied()
            .unwrap_or(self.tokens.len())
    }

    // === Trivia ===

    /// Emit trivia and lexical error tokens up to `upto`.
    fn flush(&mut self, upto: usize) {
        while self.emitted < upto {
            let token = &self.tokens[self.emitted];
            if token.kind == SyntaxKind::ERROR {
                self.builder.start_node(SyntaxKind::ERROR.into());
                self.builder.token(token.kind.into(), token.text);
                self.builder.finish_node();
            } else {
                self.builder.token(token.kind.into(), token.text);
            }
            self.emitted += 1;
        }
    }

    /// Trivia before a node stays in the enclosing node, so every node
    /// starts at its first token. Trivia after the last token waits for the root.
    fn flush_leading(&mut self) {
        if self.open_nodes > 0 && self.cursor < self.significant.len() {
            let upto = self.next_significant();
            self.flush(upto);
        }
    }
}

// =============================================================================
// Trait implementations - the grammar modules drive the parser through these
// =============================================================================

impl ExpressionParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map_or(SyntaxKind::EOF, |t| t.kind)
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        if self.cancelled {
            return SyntaxKind::EOF;
        }
        self.significant
            .get(self.cursor + n)
            .map_or(SyntaxKind::EOF, |&idx| self.tokens[idx].kind)
    }

    fn current_text(&self) -> &str {
        self.current().map_or("", |t| t.text)
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map_or(TextRange::empty(self.end), |t| t.range)
    }

    fn get_pos(&self) -> usize {
        self.cursor
    }

    fn bump(&mut self) {
        if self.current().is_none() {
            return;
        }
        let idx = self.significant[self.cursor];
        self.flush(idx);
        let token = &self.tokens[idx];
        self.builder.token(token.kind.into(), token.text);
        self.emitted = idx + 1;
        self.cursor += 1;
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_leading();
        self.builder.start_node(kind.into());
        self.open_nodes += 1;
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_leading();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
        self.open_nodes += 1;
    }

    fn finish_node(&mut self) {
        if self.open_nodes == 1 {
            // Closing the root: trailing trivia goes inside it.
            let upto = self.next_significant();
            self.flush(upto);
        }
        self.builder.finish_node();
        self.open_nodes = self.open_nodes.saturating_sub(1);
    }

    fn push_error(&mut self, error: SyntaxError) {
        // One fault, one diagnostic: recovery often re-reports at the same spot.
        if let Some(last) = self.errors.last() {
            if last.range.start() == error.range.start() && last.severity == error.severity {
                return;
            }
        }
        debug!(code = %error.code, offset = ?error.range.start(), message = %error.message, "syntax error");
        self.errors.push(error);
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn enter_nesting(&mut self) -> bool {
        self.nesting += 1;
        self.nesting <= self.max_depth
    }

    fn exit_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    fn open_constructs(&self) -> &[OpenConstruct] {
        &self.constructs
    }

    fn open_construct(&mut self, construct: OpenConstruct) {
        self.constructs.push(construct);
    }

    fn close_construct(&mut self) {
        self.constructs.pop();
    }
}

impl ModelicaParser for Parser<'_> {
    fn check_cancelled(&mut self) -> bool {
        if !self.cancelled && self.cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
            debug!(offset = ?self.current_range().start(), "cancellation requested");
            self.cancelled = true;
        }
        self.cancelled
    }
}
